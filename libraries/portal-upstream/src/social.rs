//! Social service forwarding and artifact upload.

use crate::client::{forward, PortalClient};
use crate::error::{Result, UpstreamError};
use crate::types::{Artifact, Forwarded};
use portal_core::social::SocialRoute;
use portal_core::{TenantContext, UserId};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::Value;
use tracing::info;

/// Social client.
pub struct SocialClient<'a> {
    client: &'a PortalClient,
}

impl<'a> SocialClient<'a> {
    pub(crate) fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    /// Forward a client body along `route`, tenant and caller merged in.
    pub async fn forward(
        &self,
        route: &SocialRoute,
        body: Value,
        tenant: &TenantContext,
        caller: Option<&UserId>,
    ) -> Result<Forwarded> {
        let method = Method::from_bytes(route.outbound.as_str().as_bytes())
            .map_err(|e| UpstreamError::ParseError(e.to_string()))?;
        let url = self.client.bases().social(route.upstream);
        let body = route.enrich(body, tenant, caller);

        let mut request = self.client.request(method, &url, tenant).json(&body);
        if route.long_running {
            request = request.timeout(self.client.config().social_timeout);
        }
        forward(request).await
    }

    /// Store a file under the content's public artifacts.
    pub async fn upload_artifact(
        &self,
        tenant: &TenantContext,
        content_id: &str,
        artifact: Artifact,
    ) -> Result<Forwarded> {
        let url = self
            .client
            .bases()
            .artifact_upload(&tenant.root_org, &tenant.org, content_id);
        let size = artifact.data.len();

        let mut part = Part::bytes(artifact.data).file_name(artifact.file_name.clone());
        if let Some(mime) = artifact.mime_type.as_deref() {
            part = part.mime_str(mime)?;
        }
        let form = Form::new().part("content", part);

        let forwarded = forward(self.client.request(Method::POST, &url, tenant).multipart(form)).await?;
        info!(
            content_id = %content_id,
            file = %artifact.file_name,
            size = size,
            "Artifact uploaded"
        );
        Ok(forwarded)
    }
}
