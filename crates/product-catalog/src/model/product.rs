//! Represents a product record in the catalog.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be kept by a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Replacement parameters ([`ProductReplace`](crate::model::ProductReplace))
//! - Listing filters ([`ProductFilter`](crate::model::ProductFilter))
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use std::fmt::Display;

use super::lenient::{integer_value, parse_int_prefix};

/// Identifier taken from a request path.
///
/// Parsed leniently from the leading digits of the path segment. A segment without leading
/// digits is "not a number" and addresses no record at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(Option<i64>);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(Some(id))
    }

    /// Parses a raw path segment (`"7"`, `"7abc"` → 7; `"abc"` → not a number).
    pub fn parse(raw: &str) -> Self {
        Self(parse_int_prefix(raw))
    }

    pub fn value(&self) -> Option<i64> {
        self.0
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("NaN"),
        }
    }
}

/// A product as stored and returned by the catalog.
///
/// Inserts never fail: any JSON object becomes a product. Recognized keys whose value has the
/// expected shape land in the typed fields. Everything else, including a recognized key with
/// an unexpected value (`"id": "4"`, `"preco": "50"`), stays in `extra` untouched. Such a
/// record is stored and returned as posted, but it never matches an id or a numeric filter.
///
/// On the wire the recognized fields use their Portuguese names (`nome`, `preco`, ...). An
/// English name (`name`, `price`, ...) is read only when the Portuguese key is absent;
/// otherwise it is kept in `extra` under its own name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "marca", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "preco", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "quantidade", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "avaliacao", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wire names of the recognized fields other than `id`, with their English aliases.
pub const FIELD_NAMES: [(&str, &str); 6] = [
    ("nome", "name"),
    ("marca", "brand"),
    ("preco", "price"),
    ("quantidade", "quantity"),
    ("categoria", "category"),
    ("avaliacao", "rating"),
];

fn text(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

/// Removes and reads `key` (or `alias` when `key` is absent) if its value has the right shape.
fn take<T>(
    body: &mut Map<String, Value>,
    key: &str,
    alias: Option<&str>,
    read: fn(&Value) -> Option<T>,
) -> Option<T> {
    let found = if body.contains_key(key) {
        key
    } else {
        alias.filter(|alias| body.contains_key(*alias))?
    };
    let value = body.get(found).and_then(read)?;
    body.remove(found);
    Some(value)
}

impl From<Map<String, Value>> for Product {
    fn from(mut body: Map<String, Value>) -> Self {
        let [name, brand, price, quantity, category, rating] = FIELD_NAMES;
        Product {
            id: take(&mut body, "id", None, integer_value),
            name: take(&mut body, name.0, Some(name.1), text),
            brand: take(&mut body, brand.0, Some(brand.1), text),
            price: take(&mut body, price.0, Some(price.1), Value::as_f64),
            quantity: take(&mut body, quantity.0, Some(quantity.1), integer_value),
            category: take(&mut body, category.0, Some(category.1), text),
            rating: take(&mut body, rating.0, Some(rating.1), Value::as_f64),
            extra: body,
        }
    }
}

impl Product {
    /// Returns `true` when this record carries `id`. A "not a number" id matches nothing.
    pub fn has_id(&self, id: &ProductId) -> bool {
        matches!((self.id, id.value()), (Some(own), Some(wanted)) if own == wanted)
    }

    pub fn set_price(&mut self, price: f64) {
        self.extra.remove("preco");
        self.price = Some(price);
    }

    /// Adds `delta` to the stock. A missing or non-integer quantity counts as zero; the sum
    /// saturates at the `i64` bounds and may go negative.
    pub fn adjust_stock(&mut self, delta: i64) {
        self.extra.remove("quantidade");
        let current = self.quantity.unwrap_or(0);
        self.quantity = Some(current.saturating_add(delta));
    }
}

/// Payload for a full replacement (`PUT /products/{id}`).
///
/// Only the six recognized fields survive a replacement, read the same way as on insert. A
/// recognized key with an unexpected value is carried over as posted in `unrecognized`. Any
/// `id` in the body is ignored; the id comes from the path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ProductReplace {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub unrecognized: Map<String, Value>,
}

impl From<Map<String, Value>> for ProductReplace {
    fn from(body: Map<String, Value>) -> Self {
        let mut parsed = Product::from(body);
        parsed
            .extra
            .retain(|key, _| FIELD_NAMES.iter().any(|(wire, _)| *wire == key.as_str()));
        ProductReplace {
            name: parsed.name,
            brand: parsed.brand,
            price: parsed.price,
            quantity: parsed.quantity,
            category: parsed.category,
            rating: parsed.rating,
            unrecognized: parsed.extra,
        }
    }
}

impl ProductReplace {
    /// Builds the replacement record for `id`.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id: id.value(),
            name: self.name,
            brand: self.brand,
            price: self.price,
            quantity: self.quantity,
            category: self.category,
            rating: self.rating,
            extra: self.unrecognized,
        }
    }
}

/// Optional predicates for listing products. All present predicates must hold.
///
/// Comparisons follow IEEE rules: a `NaN` threshold, or a record without the compared field,
/// never passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-sensitive substring of the product name.
    pub name: Option<String>,
    /// Inclusive upper bound on price.
    pub max_price: Option<f64>,
    /// Inclusive lower bound on rating.
    pub min_rating: Option<f64>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.name.as_deref().map_or(true, |needle| {
            product
                .name
                .as_deref()
                .is_some_and(|name| name.contains(needle))
        });
        let price_ok = self
            .max_price
            .map_or(true, |max| product.price.is_some_and(|price| price <= max));
        let rating_ok = self
            .min_rating
            .map_or(true, |min| product.rating.is_some_and(|rating| rating >= min));
        name_ok && price_ok && rating_ok
    }
}
