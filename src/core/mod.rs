//! In-memory authoritative store.

/// Guest registry and its invariant-checked operations.
pub mod registry;
