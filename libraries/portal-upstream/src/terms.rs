//! Terms-and-conditions operations.

use crate::client::{forward, send_json, PortalClient, LANG_HEADER};
use crate::error::{Result, UpstreamError};
use crate::types::Forwarded;
use async_trait::async_trait;
use portal_core::types::{UpstreamAcceptTnc, UpstreamAcceptTncResponse, UpstreamTnc};
use portal_core::{TenantContext, TermsSource, UserId};
use reqwest::Method;
use serde_json::json;

/// Terms client.
pub struct TermsClient<'a> {
    client: &'a PortalClient,
}

impl<'a> TermsClient<'a> {
    pub(crate) fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    /// Latest terms with the user's acceptance state.
    pub async fn for_user(&self, user: &UserId, tenant: &TenantContext, locale: &str) -> Result<UpstreamTnc> {
        let url = self.client.bases().latest_terms(Some(user));
        send_json(
            self.client
                .request(Method::GET, &url, tenant)
                .header(LANG_HEADER, locale),
            "user terms",
        )
        .await
    }

    /// Latest terms of the tenant.
    pub async fn common(&self, tenant: &TenantContext) -> Result<UpstreamTnc> {
        let url = self.client.bases().latest_terms(None);
        send_json(self.client.request(Method::GET, &url, tenant), "common terms").await
    }

    pub async fn accept(
        &self,
        tenant: &TenantContext,
        lang: &str,
        body: &UpstreamAcceptTnc,
    ) -> Result<UpstreamAcceptTncResponse> {
        let url = self.client.bases().accept_terms();
        send_json(
            self.client
                .request(Method::POST, &url, tenant)
                .header(LANG_HEADER, lang)
                .json(body),
            "accept response",
        )
        .await
    }

    /// Trigger the extension service's work after a user accepted.
    pub async fn postprocess(&self, user: &UserId, tenant: &TenantContext, lang: &str) -> Result<Forwarded> {
        let url = self.client.bases().tnc_postprocessing(user);
        forward(
            self.client
                .request(Method::POST, &url, tenant)
                .header(LANG_HEADER, lang)
                .json(&json!({})),
        )
        .await
    }
}

#[async_trait]
impl TermsSource for TermsClient<'_> {
    type Error = UpstreamError;

    async fn user_terms(&self, user: &UserId, tenant: &TenantContext, locale: &str) -> Result<UpstreamTnc> {
        self.for_user(user, tenant, locale).await
    }

    async fn common_terms(&self, tenant: &TenantContext) -> Result<UpstreamTnc> {
        self.common(tenant).await
    }
}
