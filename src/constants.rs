//! Global constants used throughout the cache-buster codebase.
//!
//! This module contains the fixed endpoints, credential-file defaults, and
//! static ECCU request fields that are used across multiple modules.
//! Defining them centrally improves maintainability and makes magic strings
//! more discoverable.

/// Default location of the Akamai credential file.
///
/// Expanded with the user's home directory at load time. Deploy pipelines
/// may override this with the optional positional argument.
pub const DEFAULT_EDGERC_PATH: &str = "~/.edgerc";

/// Section of the credential file holding the EdgeGrid keys.
pub const EDGERC_SECTION: &str = "default";

/// Remote document mapping application names to their frontend asset paths.
pub const FRONTEND_CONFIG_URL: &str = "https://console.redhat.com/config/main.yml";

/// Remote document mapping release environments to their content path prefixes.
pub const RELEASES_CONFIG_URL: &str = "https://console.redhat.com/config/releases.yml";

/// ECCU submission endpoint, relative to the host resolved from the
/// credential file.
pub const ECCU_API_PATH: &str = "/eccu-api/v1/requests";

/// Property the invalidation request targets.
pub const PROPERTY_NAME: &str = "cloud.redhat.com";

/// How the property name is matched on the Akamai side.
pub const PROPERTY_TYPE: &str = "HOST_HEADER";

/// Static notes attached to every submitted request.
pub const REQUEST_NOTES: &str = "purging cache for new deployment";

/// Recipients notified by Akamai as the request progresses.
pub const STATUS_UPDATE_EMAILS: [&str; 2] = ["rfelton@redhat.com", "fms-alerts@redhat.com"];
