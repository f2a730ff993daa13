//! Content-source user registration operations.

use crate::client::{send_json, PortalClient};
use crate::error::Result;
use portal_core::{TenantContext, UserId};
use reqwest::Method;
use serde_json::Value;

/// Registration client.
pub struct RegistrationClient<'a> {
    client: &'a PortalClient,
}

impl<'a> RegistrationClient<'a> {
    pub(crate) fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    /// Sources users can register with; sources whose registration URL is `null` are dropped.
    pub async fn sources(&self, tenant: &TenantContext) -> Result<Vec<Value>> {
        let url = self.client.bases().content_sources();
        let sources: Vec<Value> = send_json(
            self.client
                .request(Method::GET, &url, tenant)
                .query(&[("registrationProvided", "false")]),
            "content sources",
        )
        .await?;
        Ok(sources
            .into_iter()
            .filter(|s| !matches!(s.get("registrationUrl"), Some(Value::Null)))
            .collect())
    }

    pub async fn source(&self, tenant: &TenantContext, source: &str) -> Result<Value> {
        let url = self.client.bases().content_source(source);
        send_json(self.client.request(Method::GET, &url, tenant), "content source").await
    }

    pub async fn users(&self, tenant: &TenantContext, source: &str) -> Result<Value> {
        let url = self.client.bases().content_source_users(source);
        send_json(self.client.request(Method::GET, &url, tenant), "registered users").await
    }

    pub async fn register(&self, tenant: &TenantContext, source: &str, items: &Value) -> Result<Value> {
        let url = self.client.bases().content_source_users(source);
        send_json(
            self.client.request(Method::POST, &url, tenant).json(items),
            "registration result",
        )
        .await
    }

    pub async fn deregister(&self, tenant: &TenantContext, source: &str, body: &Value) -> Result<Value> {
        let url = self.client.bases().content_source_deregistered(source);
        send_json(
            self.client.request(Method::POST, &url, tenant).json(body),
            "deregistration result",
        )
        .await
    }

    /// Registration state of one user with a source.
    pub async fn user_status(&self, tenant: &TenantContext, source: &str, user: &UserId) -> Result<Value> {
        let url = self.client.bases().content_source_user(source, user);
        send_json(self.client.request(Method::GET, &url, tenant), "registration status").await
    }
}
