//! Social connection operations.

use crate::client::{forward, send_json, PortalClient};
use crate::error::{Result, UpstreamError};
use crate::types::Forwarded;
use async_trait::async_trait;
use portal_core::types::{
    ActiveConnection, ConnectionPage, ConnectionStatusChange, PendingConnection, SendConnectionRequest,
};
use portal_core::{ConnectionSource, TenantContext, UserId};
use reqwest::Method;

/// Page size asking the social service for every row at once
const COMBINED_SEARCH_SIZE: u32 = 10_000;

/// Connections client.
pub struct ConnectionClient<'a> {
    client: &'a PortalClient,
}

impl<'a> ConnectionClient<'a> {
    pub(crate) fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    pub async fn active(&self, user: &UserId, tenant: &TenantContext) -> Result<Vec<ActiveConnection>> {
        let url = self.client.bases().active_connections(user);
        let page: ConnectionPage<ActiveConnection> = send_json(
            self.client
                .request_as(Method::GET, &url, tenant, user)
                .query(&[("size", COMBINED_SEARCH_SIZE)]),
            "active connections",
        )
        .await?;
        Ok(page.content)
    }

    pub async fn pending(&self, user: &UserId, tenant: &TenantContext) -> Result<Vec<PendingConnection>> {
        let url = self.client.bases().pending_connections(user);
        let page: ConnectionPage<PendingConnection> = send_json(
            self.client
                .request_as(Method::GET, &url, tenant, user)
                .query(&[("size", COMBINED_SEARCH_SIZE)]),
            "pending connections",
        )
        .await?;
        Ok(page.content)
    }

    /// Ask another user to connect.
    pub async fn send_request(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        body: &SendConnectionRequest,
    ) -> Result<Forwarded> {
        let url = self.client.bases().connection_requests();
        forward(self.client.request_as(Method::POST, &url, tenant, user).json(body)).await
    }

    /// Accept, reject or withdraw a request.
    pub async fn change_status(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        body: &ConnectionStatusChange,
    ) -> Result<Forwarded> {
        let url = self.client.bases().connection_requests();
        forward(self.client.request_as(Method::PATCH, &url, tenant, user).json(body)).await
    }
}

#[async_trait]
impl ConnectionSource for ConnectionClient<'_> {
    type Error = UpstreamError;

    async fn active_connections(&self, user: &UserId, tenant: &TenantContext) -> Result<Vec<ActiveConnection>> {
        self.active(user, tenant).await
    }

    async fn pending_connections(
        &self,
        user: &UserId,
        tenant: &TenantContext,
    ) -> Result<Vec<PendingConnection>> {
        self.pending(user, tenant).await
    }
}
