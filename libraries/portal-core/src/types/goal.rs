/// Goal types: public DTOs and the goals service's wire shapes
use super::{null_as_empty, ContentItem};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who a goal was set for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalFor {
    /// The caller set it for themselves
    Me,
    /// The caller set it for someone else
    Others,
}

/// Client-facing goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Identifiers of the goal's contents
    pub content_ids: Vec<String>,
    /// Per-resource progress, for the caller's own goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_progress: Option<Vec<ResourceProgress>>,
    /// Content details
    pub contents: Vec<ContentItem>,
    /// Shared-goal template flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_for_others: Option<Value>,
    /// Own-goal template flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_for_self: Option<Value>,
    /// Description
    pub description: Option<String>,
    /// Total duration in seconds
    pub duration: Option<f64>,
    /// End date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Value>,
    /// Who the goal was set for
    pub goal_for: GoalFor,
    /// Goal id
    pub id: Option<String>,
    /// Whether the goal type is a shared one
    pub is_shared: bool,
    /// Title
    pub name: Option<String>,
    /// Overall progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Sharer of a shared goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_by: Option<Value>,
    /// When it was shared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_on: Option<Value>,
    /// Recipients of a goal set for others
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with: Option<Value>,
    /// Start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Value>,
    /// Goal type as the goals service names it
    #[serde(rename = "type")]
    pub goal_type: String,
    /// Owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
}

/// Named group of common goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsGroup {
    /// Goals in the group
    pub goals: Vec<Goal>,
    /// Group id
    pub id: Option<String>,
    /// Group name
    pub name: Option<String>,
}

/// A caller's goals split by completion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGoals {
    /// Goals marked complete
    pub completed_goals: Vec<Goal>,
    /// Goals still running
    pub goals_in_progress: Vec<Goal>,
}

/// Progress of one resource inside a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceProgress {
    /// Platform content type
    pub content_type: Option<String>,
    /// Label derived from content and resource type
    pub display_content_type: Option<String>,
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Resource id
    pub id: Option<String>,
    /// MIME type
    pub mime_type: Option<String>,
    /// Resource name
    pub name: Option<String>,
    /// Progress fraction
    pub progress: Option<f64>,
    /// Time left in seconds
    pub time_left: Option<f64>,
}

/// Public upsert body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpsertRequest {
    /// Contents of the goal
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content_ids: Vec<String>,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Goal id; absent on create
    #[serde(default)]
    pub id: Option<String>,
    /// Title
    pub name: String,
    /// Goal type
    #[serde(rename = "type")]
    pub goal_type: String,
}

/// Outcome of an upsert as reported to the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalUpsertResponse {
    /// Fixed message for a failed upsert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Share-tracking state of a goal the caller set for others
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackStatus {
    /// Recipients who accepted
    pub accepted: Vec<AcceptedGoalStatus>,
    /// Recipients yet to answer
    pub pending: Vec<PendingGoalStatus>,
    /// Recipients who declined
    pub rejected: Vec<RejectedGoalStatus>,
}

/// A recipient who accepted a shared goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedGoalStatus {
    /// End date
    pub end_date: Option<Value>,
    /// Last change
    pub last_updated_on: Option<Value>,
    /// Recipient's progress
    pub progress: Option<Value>,
    /// Per-resource progress of the recipient
    pub resource_progress_tracker: Option<Value>,
    /// Recipient
    pub shared_with: Option<Value>,
    /// Start date
    pub start_date: Option<Value>,
    /// Share status
    pub status: Option<String>,
}

/// A recipient yet to answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingGoalStatus {
    /// Last change
    pub last_updated_on: Option<Value>,
    /// Recipient
    pub shared_with: Option<Value>,
    /// Share status
    pub status: Option<String>,
}

/// A recipient who declined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedGoalStatus {
    /// Last change
    pub last_updated_on: Option<Value>,
    /// Reason given
    pub message: Option<String>,
    /// Recipient
    pub shared_with: Option<Value>,
    /// Share status
    pub status: Option<String>,
}

// =============================================================================
// Upstream shapes
// =============================================================================

/// Goal as the goals service returns it for user and for-others listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamGoal {
    /// Content identifiers
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goal_content_id: Vec<String>,
    /// Per-resource progress
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resource_progress: Vec<UpstreamResourceProgress>,
    /// Content details of a for-others goal
    #[serde(default)]
    pub content_data: Option<Vec<ContentItem>>,
    /// Content details of an own goal
    #[serde(default)]
    pub goal_content_details: Option<Vec<ContentItem>>,
    /// Description
    #[serde(default)]
    pub goal_desc: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub goal_duration: Option<f64>,
    /// End date
    #[serde(default)]
    pub goal_end_date: Option<Value>,
    /// Goal type
    #[serde(default)]
    pub goal_type: String,
    /// Goal id
    #[serde(default)]
    pub goal_id: Option<String>,
    /// Title
    #[serde(default)]
    pub goal_title: Option<String>,
    /// Misspelt upstream
    #[serde(rename = "goalProgess", default)]
    pub goal_progress: Option<f64>,
    /// Sharer
    #[serde(default)]
    pub shared_by: Option<Value>,
    /// When it was shared
    #[serde(default)]
    pub shared_on: Option<Value>,
    /// Recipients
    #[serde(default)]
    pub recipient_list: Option<Value>,
    /// Start date
    #[serde(default)]
    pub goal_start_date: Option<Value>,
    /// Owner
    #[serde(default)]
    pub user: Option<Value>,
}

/// Common (catalogue) goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamCommonGoal {
    /// Goal id
    #[serde(default)]
    pub id: Option<String>,
    /// Title
    #[serde(default)]
    pub goal_title: Option<String>,
    /// Description
    #[serde(default)]
    pub goal_description: Option<String>,
    /// Content identifiers
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goal_content_id: Vec<String>,
    /// Content details
    #[serde(default, deserialize_with = "null_as_empty")]
    pub resources: Vec<ContentItem>,
    /// Own-goal template flag
    #[serde(default)]
    pub created_for_self: Option<Value>,
    /// Shared-goal template flag
    #[serde(default)]
    pub created_for_others: Option<Value>,
}

/// Group of common goals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamGoalGroup {
    /// Group id
    #[serde(default)]
    pub group_id: Option<String>,
    /// Group name
    #[serde(default)]
    pub group_name: Option<String>,
    /// Goals in the group
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goals: Vec<UpstreamCommonGoal>,
}

/// A user's goals by completion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamUserGoals {
    /// Goals still running
    #[serde(default, deserialize_with = "null_as_empty")]
    pub goals_in_progress: Vec<UpstreamGoal>,
    /// Goals marked complete
    #[serde(default, deserialize_with = "null_as_empty")]
    pub completed_goals: Vec<UpstreamGoal>,
}

/// Progress of one resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamResourceProgress {
    /// Platform content type
    #[serde(default)]
    pub content_type: Option<String>,
    /// Resource type
    #[serde(rename = "resourceType", default)]
    pub resource_type: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub resource_duration: Option<f64>,
    /// Resource id
    #[serde(default)]
    pub resource_id: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Resource name
    #[serde(default)]
    pub resource_name: Option<String>,
    /// Progress fraction
    #[serde(default)]
    pub resource_progress: Option<f64>,
    /// Time left in seconds
    #[serde(default)]
    pub time_left: Option<f64>,
}

/// Upsert body sent to the goals service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamGoalUpsert {
    /// Content identifiers
    pub goal_content_id: Vec<String>,
    /// Description
    pub goal_desc: Option<String>,
    /// Duration in seconds
    pub goal_duration: Option<f64>,
    /// Goal id; absent on create
    pub goal_id: Option<String>,
    /// Title
    pub goal_title: String,
    /// Goal type
    pub goal_type: String,
}

/// One upsert failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamGoalError {
    /// Error code
    pub code: String,
}

/// Upsert reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamGoalUpsertResponse {
    /// Failures, empty on success
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<UpstreamGoalError>,
}

/// Share tracking of a goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamTrackStatus {
    /// Recipients who accepted
    #[serde(default, deserialize_with = "null_as_empty")]
    pub accepted: Vec<UpstreamAcceptedGoal>,
    /// Recipients yet to answer
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pending: Vec<UpstreamPendingGoal>,
    /// Recipients who declined
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rejected: Vec<UpstreamRejectedGoal>,
}

/// Accepted recipient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamAcceptedGoal {
    /// End date
    #[serde(default)]
    pub goal_end_date: Option<Value>,
    /// Last change
    #[serde(default)]
    pub last_updated_on: Option<Value>,
    /// Recipient's progress
    #[serde(default)]
    pub goal_progress: Option<Value>,
    /// Per-resource progress
    #[serde(default)]
    pub resource_progress_tracker: Option<Value>,
    /// Recipient
    #[serde(default)]
    pub shared_with: Option<Value>,
    /// Start date
    #[serde(default)]
    pub goal_start_date: Option<Value>,
    /// Share status
    #[serde(default)]
    pub status: Option<String>,
}

/// Pending recipient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamPendingGoal {
    /// Last change
    #[serde(default)]
    pub last_updated_on: Option<Value>,
    /// Recipient
    #[serde(default)]
    pub shared_with: Option<Value>,
    /// Share status
    #[serde(default)]
    pub status: Option<String>,
}

/// Declined recipient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamRejectedGoal {
    /// Last change
    #[serde(default)]
    pub last_updated_on: Option<Value>,
    /// Reason given
    #[serde(default)]
    pub status_message: Option<String>,
    /// Recipient
    #[serde(default)]
    pub shared_with: Option<Value>,
    /// Share status
    #[serde(default)]
    pub status: Option<String>,
}
