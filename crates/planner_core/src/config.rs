//! Planner configuration.
//!
//! # Responsibility
//! - Define the category enumeration and keyword rules as configuration, not
//!   logic.
//! - Carry remote store settings for the sync client.
//!
//! # Invariants
//! - The fallback category is always part of the configured category set.
//! - Category order in the file is the classifier's tie-break order.

use crate::classify::KeywordTable;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config file: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// One ordered category with its detection keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Remote list store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Top-level planner configuration, deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default = "default_category_rules")]
    pub categories: Vec<CategoryRule>,
    #[serde(default = "default_fallback_category")]
    pub fallback_category: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            categories: default_category_rules(),
            fallback_category: default_fallback_category(),
        }
    }
}

impl PlannerConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Builds the ordered keyword table used by the classifier.
    ///
    /// The fallback category is appended when the configured rules omit it.
    pub fn keyword_table(&self) -> KeywordTable {
        let rules = self
            .categories
            .iter()
            .map(|rule| (rule.name.clone(), rule.keywords.clone()))
            .collect();
        KeywordTable::new(rules, self.fallback_category.clone())
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

fn default_fallback_category() -> String {
    "Other".to_string()
}

/// Standard grocery categories with their detection keywords.
fn default_category_rules() -> Vec<CategoryRule> {
    fn rule(name: &str, keywords: &[&str]) -> CategoryRule {
        CategoryRule {
            name: name.to_string(),
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        }
    }

    vec![
        rule(
            "Produce",
            &[
                "apple", "banana", "tomato", "onion", "pepper", "carrot", "potato", "garlic",
                "lettuce", "spinach", "herb", "lemon", "lime", "mushroom", "broccoli",
            ],
        ),
        rule(
            "Dairy & Eggs",
            &["milk", "cheese", "cream", "butter", "yog", "egg"],
        ),
        rule(
            "Meat & Fish",
            &[
                "chicken", "beef", "lamb", "ham", "bacon", "pork", "turkey", "fish", "salmon",
                "tuna", "sausage", "mince",
            ],
        ),
        rule(
            "Pantry",
            &[
                "bread", "rice", "pasta", "oil", "salt", "flour", "spice", "sugar", "sauce",
                "tin", "jar", "stock", "broth", "cereal",
            ],
        ),
        rule(
            "Frozen",
            &["frozen", "peas", "ice", "chips", "sweetcorn", "berries", "pizza"],
        ),
        rule(
            "Snacks",
            &["crisps", "bar", "chocolate", "sweet", "biscuit", "snack"],
        ),
        rule(
            "Toiletries",
            &[
                "soap", "toothpaste", "tooth", "colgate", "aquafresh", "shampoo", "roll",
                "tissue",
            ],
        ),
        rule("Other", &[]),
    ]
}
