/// Terms-and-conditions transforms
use crate::types::{AcceptTncRequest, TncRecord, UpstreamAcceptTnc, UpstreamTnc, UserId};

/// Whether a caller has never accepted any version of the terms.
///
/// Only a not-accepted record whose first term has no accepted version
/// counts; a record with no terms at all does not.
pub fn is_new_user(tnc: &UpstreamTnc) -> bool {
    let accepted = tnc.is_accepted.unwrap_or(false);
    match tnc.terms_and_conditions.first() {
        Some(first) => !accepted && !first.has_accepted_version(),
        None => false,
    }
}

/// Record built from the caller's own terms
pub fn from_user_terms(tnc: UpstreamTnc) -> TncRecord {
    let is_new_user = is_new_user(&tnc);
    into_record(tnc, is_new_user)
}

/// Record built from the tenant's common terms; the caller counts as new
pub fn from_common_terms(tnc: UpstreamTnc) -> TncRecord {
    into_record(tnc, true)
}

/// Accept body naming the caller, with `newUser` when the client sent it
pub fn to_upstream_accept(request: &AcceptTncRequest, caller: &UserId) -> UpstreamAcceptTnc {
    UpstreamAcceptTnc {
        terms_accepted: request.terms_accepted.clone(),
        user_id: caller.to_string(),
        new_user: request.new_user.clone(),
    }
}

fn into_record(tnc: UpstreamTnc, is_new_user: bool) -> TncRecord {
    TncRecord {
        is_accepted: tnc.is_accepted.unwrap_or(false),
        is_new_user,
        terms_and_conditions: tnc.terms_and_conditions,
        extra: tnc.extra,
    }
}
