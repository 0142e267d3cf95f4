//! Plain-text rendering of comparison rows.

use janscope_core::{ComparisonRow, MarketplaceSlot, Thumbnail, NO_IMAGE};

const LABEL_WIDTH: usize = 10;

/// Renders a full result set: hit count line, then one block per product.
pub(crate) fn render_results(rows: &[ComparisonRow]) -> String {
    if rows.is_empty() {
        return "no products found\n".to_string();
    }

    let mut out = format!("{} hits\n", rows.len());
    for row in rows {
        out.push('\n');
        out.push_str(&render_row(row));
    }
    out
}

pub(crate) fn render_row(row: &ComparisonRow) -> String {
    let mut out = format!("{}\n", row.name);
    for slot in &row.slots {
        render_slot(&mut out, slot);
    }
    out
}

fn render_slot(out: &mut String, slot: &MarketplaceSlot) {
    let indent = " ".repeat(LABEL_WIDTH + 2);
    out.push_str(&format!(
        "  {:<width$}{}\n",
        slot.marketplace.label(),
        slot.price_range,
        width = LABEL_WIDTH
    ));

    if let Some(target) = &slot.listing.target_price {
        out.push_str(&format!("{indent}target {target}\n"));
    }

    if let Some(link) = &slot.listing.link {
        let thumb = match &link.thumbnail {
            Thumbnail::Image { src, .. } => format!("[image {src}]"),
            Thumbnail::Placeholder => format!("[{NO_IMAGE}]"),
        };
        out.push_str(&format!("{indent}{thumb} -> {}\n", link.href));
    }
}
