//! Remote store contract and wire types.

use crate::sync::SyncResult;
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// One list record as the remote store serves it.
///
/// `active = false` marks rows hidden by a soft clear; loaders skip them.
/// `category` outside the local enumeration is legal on the wire and coerced
/// to the fallback on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub crossed: bool,
    #[serde(default)]
    pub amount: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Partial update for one item; only set fields go on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

impl ItemPatch {
    pub fn checked(value: bool) -> Self {
        Self {
            checked: Some(value),
            ..Self::default()
        }
    }

    pub fn crossed(value: bool) -> Self {
        Self {
            crossed: Some(value),
            ..Self::default()
        }
    }

    pub fn amount(value: impl Into<String>) -> Self {
        Self {
            amount: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_none() && self.crossed.is_none() && self.amount.is_none()
    }
}

/// One externally-selected recipe with its ingredient lines.
#[derive(Debug, Clone, Deserialize)]
pub struct Meal {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    pub ingredients: IngredientLines,
}

/// Ingredients arrive either as one text block or as a line array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IngredientLines {
    Many(Vec<String>),
    Block(String),
}

impl IngredientLines {
    /// Splits the payload into raw lines on newlines, dropping blank ones.
    /// Comma handling stays with the normalizer, which truncates each line
    /// at its first comma.
    pub fn lines(&self) -> Vec<String> {
        let split = |text: &str| -> Vec<String> {
            text.lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty())
                .collect()
        };
        match self {
            Self::Many(entries) => entries.iter().flat_map(|entry| split(entry)).collect(),
            Self::Block(text) => split(text),
        }
    }
}

/// Transport-agnostic remote list store.
///
/// The HTTP implementation lives in [`crate::sync::HttpRemoteStore`]; tests
/// substitute an in-memory fake.
pub trait RemoteStore {
    /// Fetches the full remote item collection.
    fn fetch_items(&self) -> SyncResult<Vec<RemoteItem>>;
    /// Creates one item; the returned id is its durable identity.
    fn create_item(&self, name: &str, category: &str) -> SyncResult<i64>;
    /// Partial update for exactly the changed fields of one item.
    fn patch_item(&self, id: i64, patch: &ItemPatch) -> SyncResult<()>;
    fn delete_item(&self, id: i64) -> SyncResult<()>;
    /// Soft clear: hides the active list, preserves server-side history.
    fn clear_items(&self) -> SyncResult<()>;
    /// Overwrites the remote representation with the full serialized list.
    fn replace_items(&self, items: &[RemoteItem]) -> SyncResult<()>;
    /// Fetches selected recipes for bulk ingredient import.
    fn fetch_selected_meals(&self, ids: &[i64]) -> SyncResult<Vec<Meal>>;
}

#[cfg(test)]
mod tests {
    use super::{ItemPatch, Meal, RemoteItem};

    #[test]
    fn meal_ingredients_accept_block_and_array_payloads() {
        let block: Meal =
            serde_json::from_str(r#"{"id": 1, "name": "Salad", "ingredients": "tomato\ncucumber"}"#)
                .unwrap();
        assert_eq!(block.ingredients.lines(), ["tomato", "cucumber"]);

        let array: Meal =
            serde_json::from_str(r#"{"id": 2, "name": "Pasta", "ingredients": ["pasta", " basil "]}"#)
                .unwrap();
        assert_eq!(array.ingredients.lines(), ["pasta", "basil"]);
    }

    #[test]
    fn item_patch_serializes_only_the_set_field() {
        let value = serde_json::to_value(ItemPatch::checked(false)).unwrap();
        assert_eq!(value, serde_json::json!({"checked": false}));

        let value = serde_json::to_value(ItemPatch::amount("2 pints")).unwrap();
        assert_eq!(value, serde_json::json!({"amount": "2 pints"}));
    }

    #[test]
    fn remote_item_fills_missing_wire_fields_with_defaults() {
        let item: RemoteItem =
            serde_json::from_str(r#"{"name": "rice", "category": "Pantry"}"#).unwrap();
        assert_eq!(item.id, None);
        assert!(item.active);
        assert!(!item.checked);
        assert_eq!(item.amount, "");
    }
}
