//! Core types for itemserve

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Error, Result};

/// A catalogue item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned on creation
    pub id: u64,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Unit price
    pub price: f64,
}

impl Item {
    pub fn new(id: u64, new: NewItem) -> Self {
        Self {
            id,
            name: new.name.unwrap_or_default(),
            description: new.description.unwrap_or_default(),
            price: new.price.unwrap_or(0.0),
        }
    }
}

/// Fields accepted when creating an item.
///
/// Every field is optional; missing or `null` values fall back to an empty
/// string or `0.0`. Unknown keys are ignored, but `price` must be a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewItem {
    /// Display name (defaults to "")
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description (defaults to "")
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price (defaults to 0.0)
    #[serde(default)]
    pub price: Option<f64>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            price: Some(price),
        }
    }
}

impl TryFrom<serde_json::Value> for NewItem {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidPayload("expected a JSON object".into()));
        }
        serde_json::from_value(value).map_err(|e| Error::InvalidPayload(e.to_string()))
    }
}

/// Parse an item id taken from a request path.
///
/// Anything that is not an optionally signed run of ASCII digits is an
/// invalid id. Integers outside the `u64` range are well-formed but can
/// never have been assigned, so they report as not found.
pub fn parse_item_id(raw: &str) -> Result<u64> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidItemId(raw.to_string()));
    }

    raw.parse::<u64>().map_err(|_| Error::ItemNotFound(raw.to_string()))
}

/// Records every fresh store starts with
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, NewItem::new("Laptop", "Gaming laptop", 999.99)),
        Item::new(2, NewItem::new("Mouse", "Wireless mouse", 29.99)),
        Item::new(3, NewItem::new("Keyboard", "Mechanical keyboard", 79.99)),
    ]
}
