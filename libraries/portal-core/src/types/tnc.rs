/// Terms-and-conditions types
use super::{is_truthy, null_as_empty, present};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single terms document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// Version the caller accepted, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_version: Option<Value>,

    /// Remaining upstream fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Term {
    /// True when the caller has accepted some version of this term
    pub fn has_accepted_version(&self) -> bool {
        self.accepted_version.as_ref().is_some_and(is_truthy)
    }
}

/// Terms payload from the TNC service (user-specific or tenant-common)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamTnc {
    /// Whether the current terms are accepted
    #[serde(default)]
    pub is_accepted: Option<bool>,

    /// Terms documents
    #[serde(default, deserialize_with = "null_as_empty")]
    pub terms_and_conditions: Vec<Term>,

    /// Remaining upstream fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Client-facing TNC record; unknown upstream fields pass through
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TncRecord {
    /// Whether the current terms are accepted
    pub is_accepted: bool,
    /// Whether the caller has never accepted any terms
    pub is_new_user: bool,
    /// Terms documents
    pub terms_and_conditions: Vec<Term>,

    /// Remaining upstream fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public body for accepting terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptTncRequest {
    /// Accepted documents, passed through
    #[serde(default)]
    pub terms_accepted: Value,
    /// Forwarded whenever the client sent it, `null` included
    #[serde(default, deserialize_with = "present")]
    pub new_user: Option<Value>,
}

/// Upstream body for accepting terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamAcceptTnc {
    /// Accepted documents
    pub terms_accepted: Value,
    /// Accepting user
    pub user_id: String,
    /// Client's `newUser`, when sent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_user: Option<Value>,
}

/// Upstream reply to an accept call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamAcceptTncResponse {
    /// `success` when recorded
    #[serde(default)]
    pub result: Option<String>,

    /// Remaining upstream fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpstreamAcceptTncResponse {
    /// Whether the service reported success (`result` is "success", any case)
    pub fn is_success(&self) -> bool {
        self.result
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("success"))
    }
}
