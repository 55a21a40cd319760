//! Remote configuration documents.
//!
//! Two YAML documents drive every invalidation:
//!
//! - the frontend config, mapping application names to their deployed asset
//!   paths (`<app>.frontend.paths`);
//! - the release config, mapping release environments to their optional
//!   `content_path_prefix`.
//!
//! Both are modeled as explicit typed structures with defined absent-field
//! semantics rather than dynamic document traversal. The release map is an
//! [`IndexMap`] so iteration order - and therefore the byte layout of the
//! assembled markup - follows document order.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::client::AkamaiClient;
use crate::core::BusterError;

/// One application's entry in the frontend config document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppEntry {
    /// The `frontend` block; absent for backend-only applications.
    #[serde(default)]
    pub frontend: Option<FrontendEntry>,
}

/// The `frontend` block of an application entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontendEntry {
    /// Deployed asset paths; absent when the app declares none.
    #[serde(default)]
    pub paths: Option<Vec<String>>,
}

/// One release environment's entry in the release config document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseEntry {
    /// Path prefix content for this release is served under.
    #[serde(default)]
    pub content_path_prefix: Option<String>,
}

/// Release environments in document order.
pub type ReleaseMap = IndexMap<String, ReleaseEntry>;

/// Look up an application's frontend paths in the remote frontend config.
///
/// Returns `Ok(None)` when the application, its `frontend` block, or its
/// `paths` list is absent - the one recoverable condition in the system;
/// callers substitute an empty list. Fetch and parse failures are real
/// errors and propagate.
pub async fn fetch_frontend_paths(
    client: &AkamaiClient,
    url: &str,
    app_name: &str,
) -> Result<Option<Vec<String>>, BusterError> {
    let apps: HashMap<String, AppEntry> = client.get_yaml(url).await?;
    debug!(apps = apps.len(), "loaded frontend config");

    Ok(apps
        .get(app_name)
        .and_then(|app| app.frontend.as_ref())
        .and_then(|frontend| frontend.paths.clone()))
}

/// Fetch the release environment map. Any failure is fatal.
pub async fn fetch_releases(client: &AkamaiClient, url: &str) -> Result<ReleaseMap, BusterError> {
    let releases: ReleaseMap = client.get_yaml(url).await?;
    debug!(releases = releases.len(), "loaded release config");
    Ok(releases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_entry_prefix_is_optional() {
        let releases: ReleaseMap = serde_yaml::from_str(
            "prod:\n  content_path_prefix: /stable\nstage: {}\n",
        )
        .unwrap();
        assert_eq!(
            releases["prod"].content_path_prefix.as_deref(),
            Some("/stable")
        );
        assert_eq!(releases["stage"].content_path_prefix, None);
    }

    #[test]
    fn test_release_map_preserves_document_order() {
        let releases: ReleaseMap = serde_yaml::from_str(
            "zebra: {}\nalpha: {}\nmiddle: {}\n",
        )
        .unwrap();
        let names: Vec<&String> = releases.keys().collect();
        assert_eq!(names, ["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_app_entry_tolerates_unrelated_fields() {
        let apps: HashMap<String, AppEntry> = serde_yaml::from_str(
            "insights:\n  title: Insights\n  frontend:\n    paths:\n      - /insights\n      - /apps/insights\nrbac:\n  title: RBAC\n",
        )
        .unwrap();

        let paths = apps["insights"].frontend.as_ref().unwrap().paths.as_ref().unwrap();
        assert_eq!(paths, &["/insights", "/apps/insights"]);
        assert!(apps["rbac"].frontend.is_none());
    }
}
