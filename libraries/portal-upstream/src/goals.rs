//! Goals service operations.

use crate::client::{send_json, PortalClient};
use crate::error::Result;
use portal_core::types::{
    UpstreamGoalGroup, UpstreamGoalUpsert, UpstreamGoalUpsertResponse, UpstreamTrackStatus,
    UpstreamUserGoals,
};
use portal_core::{TenantContext, UserId};
use reqwest::Method;

/// Goals client.
pub struct GoalClient<'a> {
    client: &'a PortalClient,
}

impl<'a> GoalClient<'a> {
    pub(crate) fn new(client: &'a PortalClient) -> Self {
        Self { client }
    }

    pub async fn user_goals(&self, user: &UserId, tenant: &TenantContext) -> Result<UpstreamUserGoals> {
        let url = self.client.bases().user_goals(user);
        send_json(self.client.request_as(Method::GET, &url, tenant, user), "user goals").await
    }

    pub async fn common_goals(&self, user: &UserId, tenant: &TenantContext) -> Result<Vec<UpstreamGoalGroup>> {
        let url = self.client.bases().common_goals(user);
        send_json(self.client.request_as(Method::GET, &url, tenant, user), "common goals").await
    }

    /// Create or update a goal; per-goal failures come back in the body.
    pub async fn upsert(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        body: &UpstreamGoalUpsert,
    ) -> Result<UpstreamGoalUpsertResponse> {
        let url = self.client.bases().user_goals(user);
        send_json(
            self.client.request_as(Method::POST, &url, tenant, user).json(body),
            "goal upsert response",
        )
        .await
    }

    pub async fn track_status(
        &self,
        user: &UserId,
        tenant: &TenantContext,
        goal_id: &str,
    ) -> Result<UpstreamTrackStatus> {
        let url = self.client.bases().goal_track_status(user, goal_id);
        send_json(self.client.request_as(Method::GET, &url, tenant, user), "track status").await
    }
}
