//! Keyword-based category detection.
//!
//! # Responsibility
//! - Map a normalized ingredient name to a category.
//! - Keep the learned-override / keyword precedence rule in one place.
//!
//! # Invariants
//! - `classify` is pure; the same `(name, overrides, table)` snapshot always
//!   yields the same category.
//! - Keyword iteration follows the table's declared order, so the first
//!   matching category wins when a name hits keywords in several categories.

use std::collections::BTreeMap;

/// Ordered `(category, keywords)` pairs plus a designated fallback.
///
/// The pair order is a visible contract: it decides the tie-break when a
/// name contains keywords from more than one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    rules: Vec<(String, Vec<String>)>,
    fallback: String,
}

impl KeywordTable {
    /// Builds a table from ordered category rules.
    ///
    /// Keywords are lowercased on entry. The fallback category is appended
    /// (with no keywords) when the rules do not already carry it, so the
    /// fallback always exists as a category.
    pub fn new(rules: Vec<(String, Vec<String>)>, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        let mut rules: Vec<(String, Vec<String>)> = rules
            .into_iter()
            .map(|(category, keywords)| {
                let keywords = keywords
                    .into_iter()
                    .map(|keyword| keyword.to_lowercase())
                    .collect();
                (category, keywords)
            })
            .collect();
        if !rules.iter().any(|(category, _)| *category == fallback) {
            rules.push((fallback.clone(), Vec::new()));
        }
        Self { rules, fallback }
    }

    /// Category names in declared order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(category, _)| category.as_str())
    }

    /// Category names in declared order, owned.
    pub fn category_names(&self) -> Vec<String> {
        self.rules.iter().map(|(category, _)| category.clone()).collect()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.rules.iter().any(|(name, _)| name == category)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    fn rules(&self) -> &[(String, Vec<String>)] {
        &self.rules
    }
}

/// Resolves a category for `name`.
///
/// Lookup order:
/// 1. exact match of the lowercased name in `overrides`;
/// 2. first table category with a substring keyword hit;
/// 3. the table's fallback.
pub fn classify(
    name: &str,
    overrides: &BTreeMap<String, String>,
    table: &KeywordTable,
) -> String {
    let lower = name.to_lowercase();
    if let Some(learned) = overrides.get(lower.trim()) {
        return learned.clone();
    }
    for (category, keywords) in table.rules() {
        if keywords.iter().any(|keyword| lower.contains(keyword.as_str())) {
            return category.clone();
        }
    }
    table.fallback().to_string()
}

#[cfg(test)]
mod tests {
    use super::{classify, KeywordTable};
    use std::collections::BTreeMap;

    #[test]
    fn fallback_category_is_always_present() {
        let table = KeywordTable::new(vec![("Pantry".to_string(), vec!["rice".to_string()])], "Other");
        assert!(table.contains("Other"));
        assert_eq!(classify("mystery", &BTreeMap::new(), &table), "Other");
    }
}
