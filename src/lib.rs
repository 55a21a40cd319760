//! cache-buster - Akamai ECCU cache invalidation for frontend deployments.
//!
//! After a frontend application deploys, its static assets must be purged
//! from the Akamai edge so clients pick up the new build. This crate
//! compiles an application's asset paths - fetched from the platform's
//! remote configuration - into the nested ECCU markup Akamai consumes, and
//! submits it over an EdgeGrid-authenticated session. Submission is
//! fire-and-forget: no retries, no request lifecycle tracking.
//!
//! # Pipeline
//!
//! 1. [`config`] resolves EdgeGrid credentials from `~/.edgerc`
//! 2. [`client`] builds the HTTP session shared by every request
//! 3. [`remote`] fetches the frontend-paths and release documents
//! 4. [`eccu`] compiles paths into the invalidation document and payload
//! 5. [`cli`] orchestrates the sequence and submits
//!
//! # Core Modules
//!
//! - [`cli`] - command-line surface and orchestration
//! - [`eccu`] - path normalization, metadata tree construction, request
//!   assembly (the algorithmic heart of the tool)
//! - [`remote`] - typed models of the remote YAML config documents
//!
//! # Supporting Modules
//!
//! - [`client`] - authenticated HTTP session
//! - [`config`] - EdgeGrid credential file loading
//! - [`edgegrid`] - EG1-HMAC-SHA256 request signing
//! - [`core`] - error types and user-friendly error reporting
//! - [`constants`] - fixed endpoints and static request fields

// Core functionality
pub mod cli;
pub mod constants;
pub mod core;
pub mod eccu;

// External interfaces
pub mod client;
pub mod config;
pub mod edgegrid;
pub mod remote;
