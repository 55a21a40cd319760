//! Local configuration for cache-buster.
//!
//! The only local configuration is the EdgeGrid credential file; everything
//! else the tool needs (application paths, release prefixes) is fetched
//! remotely at run time.

pub mod edgerc;

pub use edgerc::EdgeRc;
