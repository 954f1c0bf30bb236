//! Audit logging module
//!
//! Provides an append-only record of persisted pseudonymization runs.

pub mod logger;

pub use logger::AuditLogger;
