//! Authenticated HTTP session for config fetches and ECCU submission.
//!
//! One [`AkamaiClient`] is constructed per invocation and passed by
//! reference everywhere a request is made; there is no ambient or global
//! session state. The same underlying connection pool serves the two remote
//! config fetches and the final submission.
//!
//! The public console config endpoints are fetched unauthenticated; only
//! the ECCU POST carries an EdgeGrid `Authorization` header.

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::EdgeRc;
use crate::core::BusterError;
use crate::edgegrid::EdgeGridAuth;

/// HTTP session bound to the host resolved from the credential file.
#[derive(Debug, Clone)]
pub struct AkamaiClient {
    http: reqwest::Client,
    base_url: Url,
    auth: EdgeGridAuth,
}

impl AkamaiClient {
    /// Build a client targeting `https://<host>/` from the credentials.
    pub fn new(edgerc: &EdgeRc) -> anyhow::Result<Self> {
        Ok(Self::with_base_url(edgerc, edgerc.base_url()?))
    }

    /// Build a client targeting an explicit base URL.
    ///
    /// Used by tests to point submissions at a local server; production code
    /// goes through [`AkamaiClient::new`].
    #[must_use]
    pub fn with_base_url(edgerc: &EdgeRc, base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            auth: EdgeGridAuth::from(edgerc),
        }
    }

    /// Fetch an absolute URL and parse the response body as YAML.
    pub async fn get_yaml<T: DeserializeOwned>(&self, url: &str) -> Result<T, BusterError> {
        debug!(url, "fetching remote config");

        let fetch_err = |reason: String| BusterError::ConfigFetch {
            url: url.to_owned(),
            reason,
        };

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;
        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        serde_yaml::from_slice(&body).map_err(|e| BusterError::ConfigParse {
            url: url.to_owned(),
            reason: e.to_string(),
        })
    }

    /// POST a JSON body to an API path under the base URL, EdgeGrid-signed.
    ///
    /// Fire-and-forget: the response status and body are not inspected.
    /// Only transport-level failures (connect, TLS, write) surface as
    /// errors.
    pub async fn post_json<B: Serialize>(
        &self,
        api_path: &str,
        body: &B,
    ) -> Result<(), BusterError> {
        let submit_err = |url: &Url, reason: String| BusterError::SubmissionFailed {
            url: url.to_string(),
            reason,
        };

        let url = self
            .base_url
            .join(api_path)
            .map_err(|e| submit_err(&self.base_url, e.to_string()))?;
        let payload =
            serde_json::to_vec(body).map_err(|e| submit_err(&url, e.to_string()))?;
        let authorization = self.auth.auth_header("POST", &url, &payload);

        debug!(%url, bytes = payload.len(), "submitting request");
        let response = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, authorization)
            .body(payload)
            .send()
            .await
            .map_err(|e| submit_err(&url, e.to_string()))?;

        // Delivered is success; the response is deliberately left unread.
        debug!(status = %response.status(), "request delivered");
        Ok(())
    }
}
