//! Shopping list item record.

use serde::{Deserialize, Serialize};

/// One shopping list entry.
///
/// `name` is stored normalized (lowercased, cleaned) and is the
/// de-duplication key within a category. `id` is the server-assigned
/// identity; it is `None` for items that have not reached the remote store
/// yet and is authoritative once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Option<i64>,
    pub name: String,
    pub category: String,
    pub checked: bool,
    pub crossed: bool,
    pub amount: String,
}

impl Item {
    /// Creates a fresh local item with default state (`checked = true`).
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            checked: true,
            crossed: false,
            amount: String::new(),
        }
    }
}
