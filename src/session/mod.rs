//! Pseudonymization sessions
//!
//! A session walks one dataset through load, drop selection, validation,
//! identifier choice, tokenization and persistence. Sessions are plain
//! values owned by the caller; the [`DatasetCache`] scopes loaded datasets
//! to the session key that read them.

pub mod cache;
pub mod context;
pub mod state;

pub use cache::DatasetCache;
pub use context::SessionContext;
pub use state::SessionState;
