use std::fmt;
use std::str::FromStr;

use rust_decimal::serde::float_option;
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::marketplace::Marketplace;

/// A value that each marketplace may or may not supply for a product.
///
/// Missing keys and explicit `null` both deserialize to `None`, so a record
/// carrying only Rakuten data is as valid as one carrying all three.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PerMarketplace<T> {
    #[serde(default)]
    pub yahoo: Option<T>,
    #[serde(default)]
    pub rakuten: Option<T>,
    #[serde(default)]
    pub ebay: Option<T>,
}

impl<T> Default for PerMarketplace<T> {
    fn default() -> Self {
        Self {
            yahoo: None,
            rakuten: None,
            ebay: None,
        }
    }
}

impl<T> PerMarketplace<T> {
    #[must_use]
    pub fn get(&self, marketplace: Marketplace) -> Option<&T> {
        match marketplace {
            Marketplace::Yahoo => self.yahoo.as_ref(),
            Marketplace::Rakuten => self.rakuten.as_ref(),
            Marketplace::Ebay => self.ebay.as_ref(),
        }
    }

    fn slot_mut(&mut self, marketplace: Marketplace) -> &mut Option<T> {
        match marketplace {
            Marketplace::Yahoo => &mut self.yahoo,
            Marketplace::Rakuten => &mut self.rakuten,
            Marketplace::Ebay => &mut self.ebay,
        }
    }

    /// Sets the value for `marketplace`, returning the updated mapping.
    #[must_use]
    pub fn with(mut self, marketplace: Marketplace, value: T) -> Self {
        *self.slot_mut(marketplace) = Some(value);
        self
    }

    /// Iterates every marketplace in [`Marketplace::ALL`] order, including
    /// the ones with no value.
    pub fn iter(&self) -> impl Iterator<Item = (Marketplace, Option<&T>)> + '_ {
        Marketplace::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Returns the first marketplace (in priority order) holding a value
    /// accepted by `keep`.
    pub fn first_where<F>(&self, mut keep: F) -> Option<(Marketplace, &T)>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .find_map(|(m, value)| value.filter(|v| keep(*v)).map(|v| (m, v)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, value)| value.is_none())
    }
}

impl PerMarketplace<String> {
    /// Like [`PerMarketplace::get`], but treats blank strings as absent.
    #[must_use]
    pub fn non_blank(&self, marketplace: Marketplace) -> Option<&str> {
        self.get(marketplace)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// Observed listing range plus one representative price for a marketplace.
///
/// All three bounds are independently optional. `min <= max` is expected
/// but not guaranteed by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInfo {
    #[serde(default, deserialize_with = "lenient_price", serialize_with = "float_option::serialize")]
    pub min: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_price", serialize_with = "float_option::serialize")]
    pub max: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_price", serialize_with = "float_option::serialize")]
    pub target: Option<Decimal>,
}

impl PriceInfo {
    #[must_use]
    pub fn new(min: Option<Decimal>, max: Option<Decimal>, target: Option<Decimal>) -> Self {
        Self { min, max, target }
    }

    /// Returns both bounds when the range is complete.
    #[must_use]
    pub fn range(&self) -> Option<(Decimal, Decimal)> {
        Some((self.min?, self.max?))
    }
}

/// One aggregated search hit: every marketplace's view of a single product code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Cross-marketplace product code (JAN). Never rendered.
    #[serde(rename = "jan_code", default)]
    pub code: Option<String>,
    #[serde(rename = "product_name", default, deserialize_with = "null_as_default")]
    pub name: PerMarketplace<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: PerMarketplace<PriceInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: PerMarketplace<String>,
    #[serde(rename = "image_url", default, deserialize_with = "null_as_default")]
    pub image: PerMarketplace<String>,
}

impl ProductRecord {
    /// A marketplace is present when it contributed a name or a price entry.
    #[must_use]
    pub fn is_present(&self, marketplace: Marketplace) -> bool {
        self.name.non_blank(marketplace).is_some() || self.price.get(marketplace).is_some()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads one price bound. Numbers and numeric strings become a `Decimal`;
/// `null` and values a `Decimal` cannot hold (e.g. `1e30`) become `None`, so
/// a single bad bound blanks its own slot instead of failing the response.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientPrice)
}

struct LenientPrice;

impl<'de> Visitor<'de> for LenientPrice {
    type Value = Option<Decimal>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a price number, numeric string, or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(parse_price(&v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(parse_price(v.trim()))
    }
}

fn parse_price(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_full_service_payload() {
        let value = json!({
            "jan_code": "4902370548495",
            "product_name": {"yahoo": "Switch", "rakuten": "Nintendo Switch", "ebay": null},
            "price": {
                "yahoo": {"min": 29800, "max": 32978, "target": 29800},
                "rakuten": {"min": 30000.5, "max": 30000.5},
                "ebay": {}
            },
            "url": {"yahoo": "https://shopping.yahoo.co.jp/x"},
            "image_url": {"rakuten": "https://image.rakuten.co.jp/x.jpg"}
        });

        let record: ProductRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.code.as_deref(), Some("4902370548495"));
        assert_eq!(record.name.get(Marketplace::Yahoo).map(String::as_str), Some("Switch"));
        assert!(record.name.get(Marketplace::Ebay).is_none());

        let yahoo = record.price.get(Marketplace::Yahoo).unwrap();
        assert_eq!(yahoo.min, Some(dec!(29800)));
        assert_eq!(yahoo.max, Some(dec!(32978)));
        assert_eq!(yahoo.target, Some(dec!(29800)));

        let rakuten = record.price.get(Marketplace::Rakuten).unwrap();
        assert_eq!(rakuten.min, Some(dec!(30000.5)));
        assert!(rakuten.target.is_none());

        let ebay = record.price.get(Marketplace::Ebay).unwrap();
        assert_eq!(ebay, &PriceInfo::default());

        assert!(record.url.get(Marketplace::Rakuten).is_none());
        assert!(record.image.get(Marketplace::Yahoo).is_none());
    }

    #[test]
    fn tolerates_missing_and_null_maps() {
        let value = json!({
            "jan_code": null,
            "product_name": {"rakuten": "Widget"},
            "url": null
        });

        let record: ProductRecord = serde_json::from_value(value).unwrap();
        assert!(record.code.is_none());
        assert!(record.price.is_empty());
        assert!(record.url.is_empty());
        assert!(record.image.is_empty());
    }

    #[test]
    fn presence_requires_name_or_price() {
        let record = ProductRecord {
            name: PerMarketplace::default().with(Marketplace::Yahoo, "Widget".to_string()),
            price: PerMarketplace::default().with(Marketplace::Ebay, PriceInfo::default()),
            url: PerMarketplace::default().with(Marketplace::Rakuten, "https://r/x".to_string()),
            ..ProductRecord::default()
        };

        assert!(record.is_present(Marketplace::Yahoo));
        assert!(!record.is_present(Marketplace::Rakuten), "url alone is not presence");
        assert!(record.is_present(Marketplace::Ebay));
    }

    #[test]
    fn blank_name_is_not_presence() {
        let record = ProductRecord {
            name: PerMarketplace::default().with(Marketplace::Rakuten, "   ".to_string()),
            ..ProductRecord::default()
        };
        assert!(!record.is_present(Marketplace::Rakuten));
    }

    #[test]
    fn range_requires_both_bounds() {
        assert_eq!(
            PriceInfo::new(Some(dec!(1)), Some(dec!(2)), None).range(),
            Some((dec!(1), dec!(2)))
        );
        assert!(PriceInfo::new(Some(dec!(1)), None, Some(dec!(1))).range().is_none());
        assert!(PriceInfo::new(None, Some(dec!(2)), None).range().is_none());
    }

    #[test]
    fn first_where_respects_priority_order() {
        let names = PerMarketplace::default()
            .with(Marketplace::Ebay, "C".to_string())
            .with(Marketplace::Rakuten, "B".to_string());
        let (m, v) = names.first_where(|_| true).unwrap();
        assert_eq!(m, Marketplace::Rakuten);
        assert_eq!(v, "B");
    }

    #[test]
    fn out_of_range_price_blanks_only_that_bound() {
        let value = json!([
            {"product_name": {"yahoo": "Widget"}, "price": {"yahoo": {"min": 100, "max": 200}}},
            {"product_name": {"ebay": "Gadget"}, "price": {"ebay": {"min": 1e30, "max": 25.5}}}
        ]);

        let records: Vec<ProductRecord> = serde_json::from_value(value).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].price.get(Marketplace::Yahoo).and_then(|p| p.max), Some(dec!(200)));
        let ebay = records[1].price.get(Marketplace::Ebay).unwrap();
        assert!(ebay.min.is_none());
        assert_eq!(ebay.max, Some(dec!(25.5)));
        assert!(ebay.range().is_none());
    }

    #[test]
    fn numeric_strings_are_prices_and_junk_is_absent() {
        let value = json!({"min": "100", "max": " 1999.5 ", "target": "n/a"});
        let price: PriceInfo = serde_json::from_value(value).unwrap();
        assert_eq!(price.min, Some(dec!(100)));
        assert_eq!(price.max, Some(dec!(1999.5)));
        assert!(price.target.is_none());
    }

    #[test]
    fn prices_serialize_as_numbers() {
        let price = PriceInfo::new(Some(dec!(12.5)), None, Some(dec!(100)));
        let value = serde_json::to_value(&price).unwrap();
        assert_eq!(value["min"], json!(12.5));
        assert!(value["max"].is_null());
    }
}
