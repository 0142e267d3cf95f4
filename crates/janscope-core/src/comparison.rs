//! Per-product comparison rows built from aggregated search records.
//!
//! Every function here is total: any combination of missing names, prices,
//! links, or images produces a row with explicit fallbacks instead of an
//! error.

use crate::format::{format_amount, format_price_range, PriceRangeDisplay};
use crate::marketplace::Marketplace;
use crate::products::{PerMarketplace, ProductRecord};

/// Display name used when no marketplace supplied one.
pub const NO_PRODUCT_NAME: &str = "No product name";

/// Text of the thumbnail placeholder shown for links without an image.
pub const NO_IMAGE: &str = "No Image";

/// Edge length shared by thumbnails and their placeholder.
pub const THUMBNAIL_SIZE_PX: u32 = 96;

/// What sits inside an outbound link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Image { src: String, alt: String },
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLink {
    pub href: String,
    pub thumbnail: Thumbnail,
    pub size_px: u32,
}

/// Target price and link for one marketplace. Both are independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDisplay {
    pub target_price: Option<String>,
    pub link: Option<OutboundLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceSlot {
    pub marketplace: Marketplace,
    /// Whether the marketplace supplied a name or a price entry.
    pub present: bool,
    pub price_range: PriceRangeDisplay,
    pub listing: ListingDisplay,
}

/// Fully normalized display unit for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub code: Option<String>,
    pub name: String,
    /// One slot per marketplace, always in [`Marketplace::ALL`] order.
    pub slots: Vec<MarketplaceSlot>,
}

impl ComparisonRow {
    #[must_use]
    pub fn slot(&self, marketplace: Marketplace) -> Option<&MarketplaceSlot> {
        self.slots.iter().find(|s| s.marketplace == marketplace)
    }
}

/// Returns the first non-blank name in priority order, or [`NO_PRODUCT_NAME`].
#[must_use]
pub fn resolve_display_name(names: &PerMarketplace<String>) -> &str {
    names
        .first_where(|name| !name.trim().is_empty())
        .map_or(NO_PRODUCT_NAME, |(_, name)| name.as_str())
}

/// Builds the target-price line and outbound link for one marketplace.
///
/// No link is produced without a URL; a URL without an image links the
/// placeholder thumbnail.
#[must_use]
pub fn compose_listing(record: &ProductRecord, marketplace: Marketplace) -> ListingDisplay {
    let target_price = record
        .price
        .get(marketplace)
        .and_then(|p| p.target)
        .map(|target| format_amount(target, marketplace));

    let link = record.url.non_blank(marketplace).map(|href| {
        let thumbnail = match record.image.non_blank(marketplace) {
            Some(src) => Thumbnail::Image {
                src: src.to_owned(),
                alt: format!("{} image", marketplace.label()),
            },
            None => Thumbnail::Placeholder,
        };
        OutboundLink {
            href: href.to_owned(),
            thumbnail,
            size_px: THUMBNAIL_SIZE_PX,
        }
    });

    ListingDisplay { target_price, link }
}

#[must_use]
pub fn assemble_row(record: &ProductRecord) -> ComparisonRow {
    let slots = Marketplace::ALL
        .into_iter()
        .map(|m| MarketplaceSlot {
            marketplace: m,
            present: record.is_present(m),
            price_range: format_price_range(record.price.get(m), m),
            listing: compose_listing(record, m),
        })
        .collect();

    ComparisonRow {
        code: record.code.clone(),
        name: resolve_display_name(&record.name).to_owned(),
        slots,
    }
}

/// Builds rows for a complete result set, preserving the service's order.
#[must_use]
pub fn assemble_rows(records: &[ProductRecord]) -> Vec<ComparisonRow> {
    records.iter().map(assemble_row).collect()
}

#[cfg(test)]
#[path = "comparison_test.rs"]
mod tests;
