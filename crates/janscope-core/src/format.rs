//! Currency formatting for marketplace prices.
//!
//! Grouping follows the marketplace's locale profile, never the locale of
//! the machine running the front end.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::marketplace::{Marketplace, NumberLocale};
use crate::products::PriceInfo;

/// Shown in place of a price range when either bound is missing.
pub const NO_DATA: &str = "No Data.";

/// Rendered price range for one marketplace slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceRangeDisplay {
    /// At least one bound was absent. Distinct from a zero price.
    NoData,
    /// `¥100` for a single price or `¥100 ～ ¥120` for a spread.
    Range(String),
}

impl PriceRangeDisplay {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            PriceRangeDisplay::NoData => NO_DATA,
            PriceRangeDisplay::Range(s) => s,
        }
    }

    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, PriceRangeDisplay::NoData)
    }
}

impl fmt::Display for PriceRangeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a price range with the marketplace's currency symbol.
///
/// Bounds are shown as given, so an inverted range (`min > max`) renders
/// in the order the service sent it.
#[must_use]
pub fn format_price_range(price: Option<&PriceInfo>, marketplace: Marketplace) -> PriceRangeDisplay {
    let Some((min, max)) = price.and_then(PriceInfo::range) else {
        return PriceRangeDisplay::NoData;
    };

    if min == max {
        PriceRangeDisplay::Range(format_amount(min, marketplace))
    } else {
        PriceRangeDisplay::Range(format!(
            "{} ～ {}",
            format_amount(min, marketplace),
            format_amount(max, marketplace)
        ))
    }
}

/// Formats a single amount as `SYMBOL` followed by the locale-grouped number,
/// e.g. `¥29,800` or `$1,234.5`.
#[must_use]
pub fn format_amount(amount: Decimal, marketplace: Marketplace) -> String {
    let profile = marketplace.profile();
    format!(
        "{}{}",
        profile.currency_symbol,
        group_number(amount, &profile.locale)
    )
}

fn group_number(amount: Decimal, locale: &NumberLocale) -> String {
    let rounded = amount
        .round_dp_with_strategy(
            locale.max_fraction_digits,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(locale.group_separator);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
