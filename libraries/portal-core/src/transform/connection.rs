/// Connection transforms into the merged list shape
use crate::types::{ActiveConnection, ConnectionEntry, PendingConnection, UserId, STATUS_CONNECTED};

/// An accepted connection, seen from the caller's side
pub fn from_active(connection: &ActiveConnection, caller: &UserId) -> ConnectionEntry {
    ConnectionEntry {
        id: connection.connection_id.clone(),
        user_id: connection.connected_to.clone(),
        requested_by: caller.to_string(),
        status: STATUS_CONNECTED.to_string(),
        email: connection.email.clone(),
    }
}

/// A pending request keeps its own status
pub fn from_pending(request: &PendingConnection) -> ConnectionEntry {
    ConnectionEntry {
        id: request.request_id.clone(),
        user_id: request.requested_to.clone(),
        requested_by: request.requested_by.clone(),
        status: request.status.clone(),
        email: None,
    }
}
