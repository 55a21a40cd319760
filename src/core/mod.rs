//! Core types for cache-buster.
//!
//! Provides the error foundation used throughout the crate: strongly-typed
//! failure modes ([`BusterError`]), the user-facing wrapper
//! ([`ErrorContext`]), and the [`user_friendly_error`] adapter that the CLI
//! entry point runs every fatal error through before exiting.

pub mod error;

pub use error::{BusterError, ErrorContext, user_friendly_error};
