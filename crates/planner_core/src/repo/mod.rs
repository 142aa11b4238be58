//! Persistence layer for learned category overrides.
//!
//! # Responsibility
//! - Define the learning-store contract consumed by the service layer.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every write is atomic from the caller's perspective; a concurrent read
//!   sees either the pre- or post-state, never a partial table.

pub mod override_repo;
