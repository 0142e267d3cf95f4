use rust_decimal_macros::dec;

use super::*;
use crate::format::NO_DATA;
use crate::products::PriceInfo;

fn names(entries: &[(Marketplace, &str)]) -> PerMarketplace<String> {
    entries
        .iter()
        .fold(PerMarketplace::default(), |acc, (m, v)| acc.with(*m, (*v).to_string()))
}

fn widget_record() -> ProductRecord {
    ProductRecord {
        code: Some("X".to_string()),
        name: names(&[(Marketplace::Yahoo, "Widget")]),
        price: PerMarketplace::default().with(
            Marketplace::Yahoo,
            PriceInfo::new(Some(dec!(100)), Some(dec!(100)), Some(dec!(100))),
        ),
        url: names(&[(Marketplace::Yahoo, "http://a/x")]),
        image: names(&[(Marketplace::Yahoo, "http://a/x.png")]),
    }
}

// -----------------------------------------------------------------------
// resolve_display_name
// -----------------------------------------------------------------------

#[test]
fn name_prefers_yahoo() {
    let n = names(&[
        (Marketplace::Ebay, "C"),
        (Marketplace::Rakuten, "B"),
        (Marketplace::Yahoo, "A"),
    ]);
    assert_eq!(resolve_display_name(&n), "A");
}

#[test]
fn name_falls_back_to_rakuten_then_ebay() {
    assert_eq!(
        resolve_display_name(&names(&[(Marketplace::Rakuten, "B"), (Marketplace::Ebay, "C")])),
        "B"
    );
    assert_eq!(resolve_display_name(&names(&[(Marketplace::Ebay, "C")])), "C");
}

#[test]
fn name_placeholder_when_all_absent() {
    assert_eq!(resolve_display_name(&PerMarketplace::default()), NO_PRODUCT_NAME);
}

#[test]
fn blank_name_is_skipped() {
    let n = names(&[(Marketplace::Yahoo, "  "), (Marketplace::Ebay, "C")]);
    assert_eq!(resolve_display_name(&n), "C");
}

#[test]
fn every_subset_of_names_resolves() {
    for mask in 0u8..8 {
        let mut n = PerMarketplace::default();
        for (bit, m) in Marketplace::ALL.into_iter().enumerate() {
            if mask & (1 << bit) != 0 {
                n = n.with(m, m.key().to_string());
            }
        }
        let expected = Marketplace::ALL
            .into_iter()
            .enumerate()
            .find(|(bit, _)| mask & (1 << bit) != 0)
            .map_or(NO_PRODUCT_NAME, |(_, m)| m.key());
        assert_eq!(resolve_display_name(&n), expected, "mask {mask:03b}");
    }
}

// -----------------------------------------------------------------------
// compose_listing
// -----------------------------------------------------------------------

#[test]
fn link_without_image_wraps_placeholder() {
    let record = ProductRecord {
        url: names(&[(Marketplace::Ebay, "https://ebay.example/itm/1")]),
        ..ProductRecord::default()
    };

    let listing = compose_listing(&record, Marketplace::Ebay);
    let link = listing.link.expect("expected an outbound link");
    assert_eq!(link.href, "https://ebay.example/itm/1");
    assert_eq!(link.thumbnail, Thumbnail::Placeholder);
    assert_eq!(link.size_px, THUMBNAIL_SIZE_PX);
}

#[test]
fn link_with_image_wraps_image() {
    let listing = compose_listing(&widget_record(), Marketplace::Yahoo);
    let link = listing.link.unwrap();
    assert_eq!(
        link.thumbnail,
        Thumbnail::Image {
            src: "http://a/x.png".to_string(),
            alt: "Yahoo image".to_string(),
        }
    );
}

#[test]
fn missing_target_with_url_renders_link_without_price() {
    let record = ProductRecord {
        price: PerMarketplace::default().with(
            Marketplace::Yahoo,
            PriceInfo::new(Some(dec!(100)), Some(dec!(200)), None),
        ),
        url: names(&[(Marketplace::Yahoo, "http://a/x")]),
        ..ProductRecord::default()
    };

    let listing = compose_listing(&record, Marketplace::Yahoo);
    assert!(listing.target_price.is_none());
    assert!(listing.link.is_some());
}

#[test]
fn target_without_url_renders_price_only() {
    let record = ProductRecord {
        price: PerMarketplace::default()
            .with(Marketplace::Ebay, PriceInfo::new(None, None, Some(dec!(49.5)))),
        ..ProductRecord::default()
    };

    let listing = compose_listing(&record, Marketplace::Ebay);
    assert_eq!(listing.target_price.as_deref(), Some("$49.5"));
    assert!(listing.link.is_none());
}

#[test]
fn image_without_url_renders_nothing() {
    let record = ProductRecord {
        image: names(&[(Marketplace::Rakuten, "https://r/x.jpg")]),
        ..ProductRecord::default()
    };
    assert_eq!(compose_listing(&record, Marketplace::Rakuten), ListingDisplay::default());
}

#[test]
fn blank_url_is_not_a_link() {
    let record = ProductRecord {
        url: names(&[(Marketplace::Rakuten, "")]),
        ..ProductRecord::default()
    };
    assert!(compose_listing(&record, Marketplace::Rakuten).link.is_none());
}

// -----------------------------------------------------------------------
// assemble_row
// -----------------------------------------------------------------------

#[test]
fn widget_scenario_renders_yahoo_only() {
    let row = assemble_row(&widget_record());

    assert_eq!(row.code.as_deref(), Some("X"));
    assert_eq!(row.name, "Widget");

    let yahoo = row.slot(Marketplace::Yahoo).unwrap();
    assert!(yahoo.present);
    assert_eq!(yahoo.price_range.as_str(), "¥100");
    assert_eq!(yahoo.listing.target_price.as_deref(), Some("¥100"));
    let link = yahoo.listing.link.as_ref().unwrap();
    assert_eq!(link.href, "http://a/x");
    assert!(matches!(link.thumbnail, Thumbnail::Image { ref src, .. } if src == "http://a/x.png"));

    for m in [Marketplace::Rakuten, Marketplace::Ebay] {
        let slot = row.slot(m).unwrap();
        assert!(!slot.present);
        assert_eq!(slot.price_range.as_str(), NO_DATA);
        assert!(slot.listing.link.is_none());
        assert!(slot.listing.target_price.is_none());
    }
}

#[test]
fn slots_follow_fixed_order() {
    let row = assemble_row(&ProductRecord::default());
    let order: Vec<Marketplace> = row.slots.iter().map(|s| s.marketplace).collect();
    assert_eq!(order, Marketplace::ALL);
}

#[test]
fn empty_record_assembles() {
    let row = assemble_row(&ProductRecord::default());
    assert!(row.code.is_none());
    assert_eq!(row.name, NO_PRODUCT_NAME);
    assert!(row.slots.iter().all(|s| s.price_range.is_no_data() && !s.present));
}

#[test]
fn assemble_rows_preserves_order_and_count() {
    let mut second = widget_record();
    second.code = Some("Y".to_string());
    second.name = names(&[(Marketplace::Ebay, "Gadget")]);

    let rows = assemble_rows(&[widget_record(), second]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Widget");
    assert_eq!(rows[1].name, "Gadget");
    assert_eq!(rows[1].code.as_deref(), Some("Y"));
}

#[test]
fn assemble_rows_is_stable_across_calls() {
    let records = vec![widget_record()];
    assert_eq!(assemble_rows(&records), assemble_rows(&records));
}
