//! Unified error types for paraprops.
//!
//! This module provides the error type returned by the public extraction entry
//! points. Only conditions that abort a whole document are represented here;
//! per-attribute failures are degraded to fallbacks inside the resolver.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
