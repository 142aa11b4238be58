//! In-memory shopping list domain model.
//!
//! # Responsibility
//! - Define the canonical item record and the category-keyed list structure.
//! - Enforce list invariants (unique names per category, fixed category set)
//!   without touching persistence or transport.
//!
//! # Invariants
//! - Every item belongs to exactly one category at a time.
//! - The model's category set always equals the configured enumeration.

pub mod item;
pub mod list;
