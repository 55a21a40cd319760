//! ECCU request payload construction.
//!
//! Wraps the assembled invalidation markup together with the static
//! submission fields (target property, notes, notification recipients) into
//! the JSON body the ECCU API expects.

use serde::Serialize;

use crate::constants::{PROPERTY_NAME, PROPERTY_TYPE, REQUEST_NOTES, STATUS_UPDATE_EMAILS};
use crate::remote::ReleaseMap;

use super::metadata::build_metadata;

/// The full ECCU submission payload.
///
/// Built once per invocation and never mutated afterwards. Field names
/// serialize in the camelCase form the API requires.
///
/// `property_name_exact_match` is the literal string `"true"` rather than a
/// JSON boolean; that is what the API has always been sent and accepts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidationRequest {
    property_name: String,
    property_name_exact_match: String,
    property_type: String,
    metadata: String,
    notes: String,
    request_name: String,
    status_update_emails: Vec<String>,
}

impl InvalidationRequest {
    /// Build the payload for one application deployment.
    ///
    /// Pure: the output depends only on the arguments. The request name
    /// interpolates the application name so operators can tell submissions
    /// apart in the Akamai control center.
    #[must_use]
    pub fn new(app_name: &str, html_paths: &[String], releases: &ReleaseMap) -> Self {
        Self {
            property_name: PROPERTY_NAME.to_owned(),
            property_name_exact_match: "true".to_owned(),
            property_type: PROPERTY_TYPE.to_owned(),
            metadata: build_metadata(app_name, html_paths, releases),
            notes: REQUEST_NOTES.to_owned(),
            request_name: format!("Invalidate cache for {app_name}"),
            status_update_emails: STATUS_UPDATE_EMAILS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// The human-readable request name shown in the control center.
    #[must_use]
    pub fn request_name(&self) -> &str {
        &self.request_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_name_interpolates_app_name() {
        let request = InvalidationRequest::new("insights", &[], &ReleaseMap::new());
        assert_eq!(request.request_name(), "Invalidate cache for insights");

        let request = InvalidationRequest::new("rbac & friends/v2", &[], &ReleaseMap::new());
        assert_eq!(
            request.request_name(),
            "Invalidate cache for rbac & friends/v2"
        );
    }

    #[test]
    fn test_serializes_camel_case_wire_fields() {
        let request = InvalidationRequest::new("insights", &[], &ReleaseMap::new());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["propertyName"], "cloud.redhat.com");
        assert_eq!(json["propertyNameExactMatch"], "true");
        assert_eq!(json["propertyType"], "HOST_HEADER");
        assert_eq!(json["notes"], "purging cache for new deployment");
        assert_eq!(
            json["statusUpdateEmails"],
            serde_json::json!(["rfelton@redhat.com", "fms-alerts@redhat.com"])
        );
        assert!(json["metadata"].as_str().unwrap().starts_with("<?xml"));
    }

    #[test]
    fn test_exact_match_flag_is_a_string_on_the_wire() {
        let request = InvalidationRequest::new("insights", &[], &ReleaseMap::new());
        let body = serde_json::to_string(&request).unwrap();
        assert!(body.contains("\"propertyNameExactMatch\":\"true\""));
    }
}
