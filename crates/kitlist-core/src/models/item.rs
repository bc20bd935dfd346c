//! Item model and kind enumeration.

use std::collections::BTreeMap;
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Mapping from item slug to its definition, as loaded from `items.yaml`.
/// Keys are expected to equal the item's own `slug`.
pub type ItemCatalog = BTreeMap<String, Item>;

/// Type-safe enumeration of item kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Durable gear that is owned, not used up
    Equipment,

    /// Consumables that need restocking
    Product,
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equipment" => Ok(ItemKind::Equipment),
            "product" => Ok(ItemKind::Product),
            _ => Err(format!("Invalid item kind: {s}")),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ItemKind {
    /// Convert to the catalog string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Equipment => "equipment",
            ItemKind::Product => "product",
        }
    }
}

/// A piece of equipment or a consumable product referenced by tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Identifier, kebab-case, equal to the item's catalog key
    pub slug: String,

    /// Display name
    pub title: String,

    /// Whether this is durable equipment or a consumable product
    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Free-form usage notes
    #[serde(default)]
    pub notes: String,

    /// Shops known to stock this item
    #[serde(default)]
    pub shops: Vec<String>,
}
