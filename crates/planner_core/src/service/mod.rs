//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the list model, learning store and remote store into the
//!   operations the view projector calls.
//! - Keep UI layers decoupled from classification, persistence and transport
//!   details.

pub mod list_service;
