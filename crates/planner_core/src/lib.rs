//! Core domain logic for the grocery planner.
//! This crate is the single source of truth for list invariants,
//! classification rules and remote reconciliation.

pub mod classify;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod repo;
pub mod service;
pub mod sync;

pub use classify::{classify, KeywordTable};
pub use config::{CategoryRule, ConfigError, ConfigResult, PlannerConfig, RemoteConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::Item;
pub use model::list::{InsertOutcome, MoveOutcome, ShoppingList};
pub use normalize::normalize;
pub use repo::override_repo::{
    LearnOutcome, OverrideRepository, RepoError, RepoResult, SqliteOverrideRepository,
};
pub use service::list_service::{
    AddOutcome, ImportSummary, ListService, ServiceError, ServiceResult,
};
pub use sync::{
    HttpRemoteStore, IngredientLines, ItemPatch, Meal, RemoteItem, RemoteStore, SyncError,
    SyncResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
