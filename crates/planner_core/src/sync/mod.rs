//! Remote list store client.
//!
//! # Responsibility
//! - Define the transport-agnostic remote store contract and wire types.
//! - Provide the HTTP implementation against the REST list endpoints.
//!
//! # Invariants
//! - No retries, no request coalescing: calls are issued blocking, in the
//!   order the caller performs them.
//! - Transport failures are surfaced as `SyncError`; recovery policy belongs
//!   to the service layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod http;
mod remote;

pub use http::HttpRemoteStore;
pub use remote::{IngredientLines, ItemPatch, Meal, RemoteItem, RemoteStore};

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Debug)]
pub enum SyncError {
    /// Network or serialization failure reported by the HTTP client.
    Transport(reqwest::Error),
    /// Server answered with a non-success status.
    Status { status: u16, url: String },
}

impl Display for SyncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "remote store request failed: {err}"),
            Self::Status { status, url } => {
                write!(f, "remote store returned status {status} for {url}")
            }
        }
    }
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}
