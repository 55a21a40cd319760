//! Akamai credential file loading.
//!
//! EdgeGrid credentials live in an INI file, conventionally `~/.edgerc`,
//! with one section per credential set. This tool reads the `default`
//! section and requires all four keys; there is no partial-credential mode.
//! The file is user-specific and never committed to version control.
//!
//! ```ini
//! [default]
//! client_token = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx
//! client_secret = xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx=
//! access_token = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx
//! host = akaa-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx.luna.akamaiapis.net
//! ```

use anyhow::{Context, Result};
use reqwest::Url;
use std::path::Path;
use tracing::debug;

use crate::constants::EDGERC_SECTION;
use crate::core::BusterError;

/// Resolved EdgeGrid credentials and target host.
///
/// Read once per invocation and immutable afterwards.
#[derive(Debug, Clone)]
pub struct EdgeRc {
    /// EdgeGrid client token
    pub client_token: String,
    /// EdgeGrid client secret (signing key material)
    pub client_secret: String,
    /// EdgeGrid access token
    pub access_token: String,
    /// API host the ECCU request is submitted to
    pub host: String,
}

impl EdgeRc {
    /// Load credentials from an INI file at `path`, tilde-expanded.
    ///
    /// A missing file, unparseable INI, missing `[default]` section, or
    /// missing key is fatal; the tool cannot do anything useful without a
    /// complete credential set.
    pub fn load(path: &str) -> Result<Self, BusterError> {
        let expanded = shellexpand::tilde(path).into_owned();
        debug!(path = %expanded, "loading EdgeGrid credentials");

        if !Path::new(&expanded).is_file() {
            return Err(BusterError::EdgercNotFound { path: expanded });
        }

        let ini = ini::Ini::load_from_file(&expanded).map_err(|e| BusterError::EdgercParse {
            path: expanded.clone(),
            reason: e.to_string(),
        })?;

        let section =
            ini.section(Some(EDGERC_SECTION))
                .ok_or_else(|| BusterError::EdgercParse {
                    path: expanded.clone(),
                    reason: format!("missing [{EDGERC_SECTION}] section"),
                })?;

        let require = |key: &str| {
            section
                .get(key)
                .map(str::to_owned)
                .ok_or_else(|| BusterError::EdgercKeyMissing {
                    section: EDGERC_SECTION.to_owned(),
                    key: key.to_owned(),
                })
        };

        Ok(Self {
            client_token: require("client_token")?,
            client_secret: require("client_secret")?,
            access_token: require("access_token")?,
            host: require("host")?,
        })
    }

    /// Base URL for API submission, derived from the configured host.
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&format!("https://{}/", self.host))
            .with_context(|| format!("invalid host in credential file: {}", self.host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_edgerc(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const COMPLETE: &str = "[default]\n\
                            client_token = akab-client\n\
                            client_secret = s3cr3t=\n\
                            access_token = akab-access\n\
                            host = akaa-host.luna.akamaiapis.net\n";

    #[test]
    fn test_load_complete_credential_file() {
        let file = write_edgerc(COMPLETE);
        let edgerc = EdgeRc::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(edgerc.client_token, "akab-client");
        assert_eq!(edgerc.client_secret, "s3cr3t=");
        assert_eq!(edgerc.access_token, "akab-access");
        assert_eq!(edgerc.host, "akaa-host.luna.akamaiapis.net");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = EdgeRc::load("/definitely/not/here/.edgerc").unwrap_err();
        assert!(matches!(err, BusterError::EdgercNotFound { .. }));
    }

    #[test]
    fn test_missing_key_is_reported_by_name() {
        let file = write_edgerc(
            "[default]\nclient_token = a\naccess_token = b\nhost = c\n", // no client_secret
        );
        let err = EdgeRc::load(file.path().to_str().unwrap()).unwrap_err();
        match err {
            BusterError::EdgercKeyMissing { section, key } => {
                assert_eq!(section, "default");
                assert_eq!(key, "client_secret");
            }
            other => panic!("expected EdgercKeyMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_section_is_a_parse_error() {
        let file = write_edgerc("[production]\nclient_token = a\n");
        let err = EdgeRc::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, BusterError::EdgercParse { .. }));
    }

    #[test]
    fn test_base_url_prepends_https() {
        let file = write_edgerc(COMPLETE);
        let edgerc = EdgeRc::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            edgerc.base_url().unwrap().as_str(),
            "https://akaa-host.luna.akamaiapis.net/"
        );
    }
}
