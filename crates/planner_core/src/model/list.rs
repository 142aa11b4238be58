//! Category-keyed shopping list structure.
//!
//! # Responsibility
//! - Hold the ordered item sequences per category.
//! - Enforce the fixed-category-set and unique-name-per-category invariants.
//!
//! # Invariants
//! - The key set never changes after construction; `clear_all` empties the
//!   sequences but keeps every category key.
//! - Items carrying an unknown category are coerced to the fallback category
//!   on insert, never rejected for that reason.
//! - No two items in the same category share the same name.

use crate::model::item::Item;
use std::collections::HashMap;

/// Result of a [`ShoppingList::insert`] attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Item was stored under `category`; `coerced` is set when the item's
    /// original category was unknown and replaced by the fallback.
    Inserted { category: String, coerced: bool },
    /// An item with the same name already exists in `category`.
    Duplicate { category: String },
}

/// Result of a [`ShoppingList::move_item`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    SameCategory,
    NotFound,
    /// Destination already holds an item with this name; source unchanged.
    Duplicate,
}

/// In-memory list model: ordered categories, each with an ordered item
/// sequence. Single source of truth for the view projector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingList {
    order: Vec<String>,
    fallback: String,
    items: HashMap<String, Vec<Item>>,
}

impl ShoppingList {
    /// Builds an empty list over the configured category enumeration.
    ///
    /// The fallback category is appended when `categories` omits it, so the
    /// fallback key always exists.
    pub fn new(categories: Vec<String>, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        let mut order = categories;
        if !order.iter().any(|category| *category == fallback) {
            order.push(fallback.clone());
        }
        let items = order
            .iter()
            .map(|category| (category.clone(), Vec::new()))
            .collect();
        Self {
            order,
            fallback,
            items,
        }
    }

    /// Configured category names in display order.
    pub fn categories(&self) -> &[String] {
        &self.order
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Maps an arbitrary category name onto the configured set.
    pub fn resolve_category(&self, category: &str) -> &str {
        self.order
            .iter()
            .find(|known| known.as_str() == category)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Items currently held under `category` (empty for unknown categories).
    pub fn items_in(&self, category: &str) -> &[Item] {
        self.items
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains(&self, category: &str, name: &str) -> bool {
        self.items_in(category).iter().any(|item| item.name == name)
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&Item> {
        self.items_in(category).iter().find(|item| item.name == name)
    }

    pub fn get_mut(&mut self, category: &str, name: &str) -> Option<&mut Item> {
        self.items
            .get_mut(category)?
            .iter_mut()
            .find(|item| item.name == name)
    }

    /// Appends an item to its category's sequence.
    ///
    /// Unknown categories coerce to the fallback; a name collision within the
    /// resolved category rejects the insert.
    pub fn insert(&mut self, mut item: Item) -> InsertOutcome {
        let coerced = !self.items.contains_key(&item.category);
        if coerced {
            item.category = self.fallback.clone();
        }
        let category = item.category.clone();
        if self.contains(&category, &item.name) {
            return InsertOutcome::Duplicate { category };
        }
        if let Some(sequence) = self.items.get_mut(&category) {
            sequence.push(item);
        }
        InsertOutcome::Inserted { category, coerced }
    }

    /// Removes and returns the named item from `category`.
    pub fn remove(&mut self, category: &str, name: &str) -> Option<Item> {
        let sequence = self.items.get_mut(category)?;
        let position = sequence.iter().position(|item| item.name == name)?;
        Some(sequence.remove(position))
    }

    /// Moves an item between categories, appending it to the destination
    /// sequence. Same-category moves are no-ops.
    pub fn move_item(&mut self, name: &str, from: &str, to: &str) -> MoveOutcome {
        let to = self.resolve_category(to).to_string();
        if from == to {
            return MoveOutcome::SameCategory;
        }
        if !self.contains(from, name) {
            return MoveOutcome::NotFound;
        }
        if self.contains(&to, name) {
            return MoveOutcome::Duplicate;
        }
        if let Some(mut item) = self.remove(from, name) {
            item.category = to.clone();
            if let Some(sequence) = self.items.get_mut(&to) {
                sequence.push(item);
            }
            MoveOutcome::Moved
        } else {
            MoveOutcome::NotFound
        }
    }

    /// Empties every category's sequence; category keys are preserved.
    pub fn clear_all(&mut self) {
        for sequence in self.items.values_mut() {
            sequence.clear();
        }
    }

    /// Total item count across all categories.
    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(category, items)` in configured display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.order.iter().map(|category| {
            (
                category.as_str(),
                self.items
                    .get(category)
                    .map(Vec::as_slice)
                    .unwrap_or_default(),
            )
        })
    }

    /// All items across all categories, in display order.
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.iter().flat_map(|(_, items)| items.iter())
    }

    /// Cloned view-state for the projector: `{category -> ordered items}` in
    /// configured order, including empty categories.
    pub fn snapshot(&self) -> Vec<(String, Vec<Item>)> {
        self.iter()
            .map(|(category, items)| (category.to_string(), items.to_vec()))
            .collect()
    }
}
