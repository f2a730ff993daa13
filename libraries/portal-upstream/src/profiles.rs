//! User-profile service operations.

use crate::client::{send_json, PortalClient};
use crate::error::Result;
use portal_core::types::{AutocompleteParams, ProfileQuery, UserRoles};
use portal_core::{TenantContext, UserId};
use reqwest::Method;
use serde_json::Value;

/// Profile client.
pub struct ProfileClient<'a> {
    client: &'a PortalClient,
}

impl<'a> ProfileClient<'a> {
    pub(crate) fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    /// Multi-fetch users by email.
    pub async fn by_email(&self, tenant: &TenantContext, query: &ProfileQuery) -> Result<Value> {
        let url = self.client.bases().profiles_by_email();
        send_json(self.client.request(Method::POST, &url, tenant).json(query), "profiles").await
    }

    /// Multi-fetch users by id.
    pub async fn by_wid(&self, tenant: &TenantContext, query: &ProfileQuery) -> Result<Value> {
        let url = self.client.bases().profiles_by_wid();
        send_json(self.client.request(Method::POST, &url, tenant).json(query), "profiles").await
    }

    pub async fn roles(&self, user: &UserId, tenant: &TenantContext) -> Result<UserRoles> {
        let url = self.client.bases().user_roles(user);
        send_json(self.client.request_as(Method::GET, &url, tenant, user), "roles").await
    }

    /// Users of the root org matching `query`.
    pub async fn autocomplete(
        &self,
        tenant: &TenantContext,
        query: &str,
        params: &AutocompleteParams,
    ) -> Result<Value> {
        let url = self.client.bases().user_autocomplete(&tenant.root_org, query);
        send_json(
            self.client
                .request(Method::GET, &url, tenant)
                .query(&params.to_query()),
            "autocomplete results",
        )
        .await
    }
}
