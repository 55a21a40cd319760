//! Error handling for cache-buster.
//!
//! The error system is built around two types, mirrored across the whole
//! crate:
//! 1. [`BusterError`] - strongly-typed failure modes for precise handling
//!    in code
//! 2. [`ErrorContext`] - a wrapper that adds user-friendly details and
//!    actionable suggestions for CLI users
//!
//! # Error Categories
//!
//! - **Credentials**: [`BusterError::EdgercNotFound`],
//!   [`BusterError::EdgercParse`], [`BusterError::EdgercKeyMissing`] -
//!   always fatal; the tool cannot authenticate without them.
//! - **Remote configuration**: [`BusterError::ConfigFetch`],
//!   [`BusterError::ConfigParse`] - fatal. The one recoverable condition
//!   (an application absent from the frontend document) never surfaces as
//!   an error; the orchestrator substitutes an empty path list instead.
//! - **Submission**: [`BusterError::SubmissionFailed`] - transport-level
//!   POST failures. The response body itself is never inspected.
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into a
//! displayable context with suggestions before exiting.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for cache-buster operations.
///
/// Each variant carries the context needed to explain the failure to the
/// user: file paths, URLs, and the underlying reason. There are no retryable
/// conditions; every variant terminates the run.
#[derive(Error, Debug)]
pub enum BusterError {
    /// The credential file does not exist or could not be read.
    #[error("credential file not found: {path}")]
    EdgercNotFound {
        /// The (expanded) path that was tried
        path: String,
    },

    /// The credential file exists but is not valid INI.
    #[error("failed to parse credential file: {path}")]
    EdgercParse {
        /// The (expanded) path that was read
        path: String,
        /// The underlying INI parser error
        reason: String,
    },

    /// A required key is absent from the credential file.
    #[error("credential file is missing key '{key}' in section [{section}]")]
    EdgercKeyMissing {
        /// Section that was searched
        section: String,
        /// The missing key
        key: String,
    },

    /// A remote configuration document could not be fetched.
    #[error("failed to fetch remote config: {url}")]
    ConfigFetch {
        /// The document URL
        url: String,
        /// The underlying transport error
        reason: String,
    },

    /// A remote configuration document was fetched but is not valid YAML of
    /// the expected shape.
    #[error("failed to parse remote config: {url}")]
    ConfigParse {
        /// The document URL
        url: String,
        /// The underlying YAML error
        reason: String,
    },

    /// The ECCU request could not be delivered.
    ///
    /// This covers connect, TLS, and write failures only. A delivered
    /// request is treated as submitted regardless of what Akamai answers.
    #[error("failed to submit invalidation request to {url}")]
    SubmissionFailed {
        /// The submission endpoint
        url: String,
        /// The underlying transport error
        reason: String,
    },

    /// IO error from file operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// User-friendly error wrapper with actionable context.
///
/// Pairs a [`BusterError`] with an optional suggestion (displayed green) and
/// optional details (displayed yellow). This is the shape every fatal error
/// takes on its way out of the CLI.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: BusterError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a basic context with no suggestion or details.
    #[must_use]
    pub const fn new(error: BusterError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion, displayed in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining why the error occurred, displayed in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    ///
    /// Error message red and bold, details yellow, suggestion green. This is
    /// the primary way the CLI presents fatal errors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// Known [`BusterError`] variants get tailored suggestions; everything else
/// falls through to a generic context that includes the full error chain for
/// diagnostics.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<BusterError>() {
        Ok(buster_error) => return create_error_context(buster_error),
        Err(other) => other,
    };

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(BusterError::IoError(std::io::Error::other(message)))
}

fn create_error_context(error: BusterError) -> ErrorContext {
    match error {
        BusterError::EdgercNotFound { .. } => ErrorContext::new(error)
            .with_suggestion(
                "Create an ~/.edgerc file with a [default] section containing client_token, \
                 client_secret, access_token, and host, or pass an alternate path as the second \
                 argument",
            )
            .with_details("EdgeGrid credentials are required to submit ECCU requests"),

        BusterError::EdgercParse { ref reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check the INI syntax of the credential file")
                .with_details(details)
        }

        BusterError::EdgercKeyMissing {
            ref section,
            ref key,
        } => {
            let suggestion =
                format!("Add '{key}' to the [{section}] section of your credential file");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        BusterError::ConfigFetch { ref reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion(
                    "Check your network connection and that the config service is reachable",
                )
                .with_details(details)
        }

        BusterError::ConfigParse { ref reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error).with_details(details)
        }

        BusterError::SubmissionFailed { ref reason, .. } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check connectivity to the Akamai host from your credential file")
                .with_details(details)
        }

        BusterError::IoError(_) => ErrorContext::new(error),
    }
}
