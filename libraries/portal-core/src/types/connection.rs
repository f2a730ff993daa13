/// Social connection types
use super::null_as_empty;
use serde::{Deserialize, Serialize};

/// Status given to every active connection in a merged listing
pub const STATUS_CONNECTED: &str = "Connected";

/// Action recorded when a requester withdraws a pending request
pub const ACTION_WITHDRAW: &str = "Withdraw";

/// One row of the merged connections list.
///
/// Keys stay snake_case on the public side, as the social service uses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEntry {
    /// Connection id for active rows, request id for pending ones
    pub id: String,
    /// The other party
    pub user_id: String,
    /// Who asked for the connection
    pub requested_by: String,
    /// `Connected` or the request's status
    pub status: String,
    /// Email of the other party, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An accepted connection as the social service lists it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveConnection {
    /// The connected user
    pub connected_to: String,
    /// Connection id
    pub connection_id: String,
    /// Email of the connected user
    #[serde(default)]
    pub email: Option<String>,
}

/// A connection request awaiting action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingConnection {
    /// Request id
    pub request_id: String,
    /// Requesting user
    pub requested_by: String,
    /// Requested user
    pub requested_to: String,
    /// Request status
    pub status: String,
}

/// Page wrapper used by the social service's list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ConnectionPage<T> {
    /// Items of the page
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub content: Vec<T>,
}

/// Body of a new connection request; forwarded unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendConnectionRequest {
    /// Requesting user
    pub requested_by: String,
    /// Requested user
    pub requested_to: String,
    /// Message sent along with the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Public body for withdrawing a pending request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    /// Request to withdraw
    pub request_id: String,
}

/// Upstream body changing a request's status (accept, reject, withdraw)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatusChange {
    /// Action taken
    pub action: String,
    /// User taking the action
    pub actor_id: String,
    /// Request acted on
    pub request_id: String,
}
