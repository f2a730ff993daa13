//! Main upstream client.

use crate::connections::ConnectionClient;
use crate::error::{Result, UpstreamError};
use crate::goals::GoalClient;
use crate::playlists::PlaylistClient;
use crate::profiles::ProfileClient;
use crate::registration::RegistrationClient;
use crate::social::SocialClient;
use crate::terms::TermsClient;
use crate::types::{Forwarded, UpstreamConfig};
use portal_core::identity::WID_HEADER;
use portal_core::tenant::{ORG_HEADER, ROOT_ORG_HEADER};
use portal_core::{TenantContext, UpstreamBases, UserId};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Language header understood by the TNC and extension services
pub const LANG_HEADER: &str = "langcode";

/// Client for every service behind the gateway.
///
/// Cheap to clone; clones share one connection pool. Per-service
/// operations live on the sub-clients returned by [`playlists`],
/// [`connections`] and friends.
///
/// [`playlists`]: PortalClient::playlists
/// [`connections`]: PortalClient::connections
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: Client,
    config: Arc<UpstreamConfig>,
}

impl PortalClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        for (name, base) in config.bases.entries() {
            if base.is_empty() {
                return Err(UpstreamError::InvalidUrl(format!("{} base URL is empty", name)));
            }
            if !base.starts_with("http://") && !base.starts_with("https://") {
                return Err(UpstreamError::InvalidUrl(format!(
                    "{} base URL must start with http:// or https://",
                    name
                )));
            }
        }

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .user_agent(format!("PortalGateway/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(UpstreamError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Configured upstream base URLs
    pub fn bases(&self) -> &UpstreamBases {
        &self.config.bases
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    pub fn playlists(&self) -> PlaylistClient<'_> {
        PlaylistClient::new(self)
    }

    pub fn connections(&self) -> ConnectionClient<'_> {
        ConnectionClient::new(self)
    }

    pub fn terms(&self) -> TermsClient<'_> {
        TermsClient::new(self)
    }

    pub fn goals(&self) -> GoalClient<'_> {
        GoalClient::new(self)
    }

    pub fn profiles(&self) -> ProfileClient<'_> {
        ProfileClient::new(self)
    }

    pub fn social(&self) -> SocialClient<'_> {
        SocialClient::new(self)
    }

    pub fn registration(&self) -> RegistrationClient<'_> {
        RegistrationClient::new(self)
    }

    /// Request carrying the tenant headers and the default timeout
    pub(crate) fn request(&self, method: Method, url: &str, tenant: &TenantContext) -> RequestBuilder {
        debug!(method = %method, url = %url, org = %tenant.org, "Calling upstream");
        self.http
            .request(method, url)
            .timeout(self.config.timeout)
            .header(ORG_HEADER, &tenant.org)
            .header(ROOT_ORG_HEADER, &tenant.root_org)
    }

    /// Same as [`request`](Self::request), also naming the caller
    pub(crate) fn request_as(
        &self,
        method: Method,
        url: &str,
        tenant: &TenantContext,
        user: &UserId,
    ) -> RequestBuilder {
        self.request(method, url, tenant).header(WID_HEADER, user.as_str())
    }
}

/// Send a request; transport failures and non-success statuses become errors
pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await.map_err(UpstreamError::from_transport)?;
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        let body = read_body(response).await?;
        warn!(status = status.as_u16(), "Upstream returned an error");
        Err(UpstreamError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// Send a request and decode a JSON answer
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder, what: &str) -> Result<T> {
    let response = send(request).await?;
    let bytes = response.bytes().await.map_err(UpstreamError::from_transport)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| UpstreamError::ParseError(format!("Failed to parse {}: {}", what, e)))
}

/// Send a request and keep status and body untouched
pub(crate) async fn forward(request: RequestBuilder) -> Result<Forwarded> {
    let response = send(request).await?;
    let status = response.status().as_u16();
    Ok(Forwarded {
        status,
        body: read_body(response).await?,
    })
}

/// Body as JSON, falling back to a JSON string; `None` when empty
async fn read_body(response: Response) -> Result<Option<Value>> {
    let text = response.text().await.map_err(UpstreamError::from_transport)?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(
        serde_json::from_str(&text).unwrap_or(Value::String(text)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_validation() {
        let config = UpstreamConfig::new(UpstreamBases::single_host("http://localhost:8080"));
        assert!(PortalClient::new(config).is_ok());

        let config = UpstreamConfig::new(UpstreamBases::default());
        assert!(matches!(
            PortalClient::new(config),
            Err(UpstreamError::InvalidUrl(msg)) if msg.contains("empty")
        ));

        let mut bases = UpstreamBases::single_host("https://example.com");
        bases.goals = "ftp://example.com".to_string();
        assert!(PortalClient::new(UpstreamConfig::new(bases)).is_err());
    }
}
