//! ECCU invalidation document pipeline.
//!
//! Converts an application's asset paths and per-release prefixes into the
//! nested markup Akamai's Edge Control Cache Utility consumes, then wraps it
//! in the JSON submission payload:
//!
//! - [`path`] - reduces slash-delimited paths to ordered non-empty segments
//! - [`metadata`] - compiles segment sequences into nested
//!   `match:recursive-dirs` chains and assembles the `<eccu>` document
//! - [`request`] - wraps the document with the static submission fields

pub mod metadata;
pub mod path;
pub mod request;

pub use metadata::build_metadata;
pub use path::path_segments;
pub use request::InvalidationRequest;
