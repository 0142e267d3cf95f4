//! Marketplace identifiers and their fixed display conventions.
//!
//! Currency symbol and number grouping are a pure function of the
//! marketplace and live in [`PROFILES`]; nothing in the product data can
//! override them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the listing sources that contribute data for a product code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    Yahoo,
    Rakuten,
    Ebay,
}

impl Marketplace {
    /// All marketplaces in display and name-priority order.
    pub const ALL: [Marketplace; 3] = [Marketplace::Yahoo, Marketplace::Rakuten, Marketplace::Ebay];

    /// Returns the static display profile for this marketplace.
    #[must_use]
    pub fn profile(self) -> &'static MarketplaceProfile {
        let index = match self {
            Marketplace::Yahoo => 0,
            Marketplace::Rakuten => 1,
            Marketplace::Ebay => 2,
        };
        &PROFILES[index]
    }

    /// Wire key used by the search service, e.g. `"rakuten"`.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.profile().key
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.profile().label
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Digit grouping rules for rendering amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    /// BCP 47 tag, kept for diagnostics.
    pub tag: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
    /// Fractional digits kept after rounding; trailing zeros are dropped.
    pub max_fraction_digits: u32,
}

pub const JA_JP: NumberLocale = NumberLocale {
    tag: "ja-JP",
    group_separator: ',',
    decimal_separator: '.',
    max_fraction_digits: 3,
};

pub const EN_US: NumberLocale = NumberLocale {
    tag: "en-US",
    group_separator: ',',
    decimal_separator: '.',
    max_fraction_digits: 3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketplaceProfile {
    pub marketplace: Marketplace,
    pub key: &'static str,
    pub label: &'static str,
    pub currency_symbol: &'static str,
    pub locale: NumberLocale,
}

pub const PROFILES: [MarketplaceProfile; 3] = [
    MarketplaceProfile {
        marketplace: Marketplace::Yahoo,
        key: "yahoo",
        label: "Yahoo",
        currency_symbol: "¥",
        locale: JA_JP,
    },
    MarketplaceProfile {
        marketplace: Marketplace::Rakuten,
        key: "rakuten",
        label: "Rakuten",
        currency_symbol: "¥",
        locale: JA_JP,
    },
    MarketplaceProfile {
        marketplace: Marketplace::Ebay,
        key: "ebay",
        label: "eBay",
        currency_symbol: "$",
        locale: EN_US,
    },
];
