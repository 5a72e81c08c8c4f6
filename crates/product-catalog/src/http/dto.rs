//! Request and response bodies for the HTTP surface.

use crate::model::lenient::{integer_value, parse_float_prefix};
use crate::model::{Product, ProductFilter};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query string of `GET /products`.
///
/// Values are kept as raw strings and read leniently: an empty value counts as absent and a
/// value without a numeric prefix becomes `NaN`, which filters every record out. A repeated
/// key keeps its first value; an English alias is read only when the Portuguese key is absent.
#[derive(Debug, Default, PartialEq)]
pub struct ListQuery {
    pub name: Option<String>,
    pub max_price: Option<String>,
    pub min_rating: Option<String>,
}

impl ListQuery {
    /// Builds the query from raw `key=value` pairs in request order.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str, alias: &str| {
            let lookup = |wanted: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| k == wanted)
                    .map(|(_, v)| v.clone())
            };
            lookup(key).or_else(|| lookup(alias))
        };
        ListQuery {
            name: first("nome", "name"),
            max_price: first("precoMax", "maxPrice"),
            min_rating: first("mediaAvaliacao", "minRating"),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<ListQuery> for ProductFilter {
    fn from(query: ListQuery) -> Self {
        ProductFilter {
            name: non_empty(query.name),
            max_price: non_empty(query.max_price).map(|v| parse_float_prefix(&v)),
            min_rating: non_empty(query.min_rating).map(|v| parse_float_prefix(&v)),
        }
    }
}

/// Body of `PATCH /products/{id}/preco`.
#[derive(Debug, Deserialize)]
pub struct PriceBody {
    #[serde(rename = "preco", alias = "price")]
    pub price: f64,
}

/// Body of `PATCH /products/{id}/estoque`. The quantity is a delta and may be written as a
/// whole float (`2.0`).
#[derive(Debug, Deserialize)]
pub struct StockBody {
    #[serde(
        rename = "quantidade",
        alias = "quantity",
        deserialize_with = "whole_number"
    )]
    pub quantity: i64,
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    integer_value(&value)
        .ok_or_else(|| de::Error::custom(format!("expected a whole number, found {value}")))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A confirmation message together with the affected product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub message: String,
    pub product: Product,
}

impl ProductResponse {
    pub fn new(message: impl Into<String>, product: Product) -> Self {
        Self {
            message: message.into(),
            product,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: Option<&str>, max_price: Option<&str>, min_rating: Option<&str>) -> ListQuery {
        ListQuery {
            name: name.map(String::from),
            max_price: max_price.map(String::from),
            min_rating: min_rating.map(String::from),
        }
    }

    #[test]
    fn test_empty_values_are_absent() {
        let filter = ProductFilter::from(query(Some(""), Some(""), Some("")));
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_numbers_are_read_leniently() {
        let filter = ProductFilter::from(query(Some("Mou"), Some("60reais"), Some("4")));
        assert_eq!(filter.name.as_deref(), Some("Mou"));
        assert_eq!(filter.max_price, Some(60.0));
        assert_eq!(filter.min_rating, Some(4.0));
    }

    #[test]
    fn test_garbage_threshold_becomes_nan() {
        let filter = ProductFilter::from(query(None, Some("cheap"), None));
        assert!(filter.max_price.is_some_and(f64::is_nan));
    }

    #[test]
    fn test_patch_bodies_accept_both_names() {
        let price: PriceBody = serde_json::from_str(r#"{"preco": 12.5}"#).unwrap();
        assert_eq!(price.price, 12.5);
        let price: PriceBody = serde_json::from_str(r#"{"price": 3}"#).unwrap();
        assert_eq!(price.price, 3.0);

        let stock: StockBody = serde_json::from_str(r#"{"quantidade": -2}"#).unwrap();
        assert_eq!(stock.quantity, -2);
        let stock: StockBody = serde_json::from_str(r#"{"quantity": 2.0}"#).unwrap();
        assert_eq!(stock.quantity, 2);
        assert!(serde_json::from_str::<StockBody>(r#"{"quantidade": 1.5}"#).is_err());
        assert!(serde_json::from_str::<StockBody>("{}").is_err());
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let query = ListQuery::from_pairs(&pairs(&[("precoMax", "10"), ("precoMax", "20")]));
        assert_eq!(query.max_price.as_deref(), Some("10"));
    }

    #[test]
    fn test_wire_name_wins_over_alias() {
        let query = ListQuery::from_pairs(&pairs(&[("name", "b"), ("nome", "a")]));
        assert_eq!(query.name.as_deref(), Some("a"));

        let query = ListQuery::from_pairs(&pairs(&[("minRating", "4"), ("other", "x")]));
        assert_eq!(query.min_rating.as_deref(), Some("4"));
        assert_eq!(query.name, None);
    }
}
