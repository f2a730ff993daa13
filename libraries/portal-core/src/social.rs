//! Social/forum forwarding table.
//!
//! Each public social route maps onto one route of the social service. The
//! gateway merges the tenant into the JSON body, and for some routes also
//! the caller's id under a route-specific field name.

use crate::tenant::TenantContext;
use crate::types::UserId;
use http::Method;
use serde_json::{Map, Value};

/// One forwarded social route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialRoute {
    /// Route as clients call it, relative to the social prefix
    pub public: &'static str,
    /// Method clients use
    pub inbound: Method,
    /// Route on the social service
    pub upstream: &'static str,
    /// Method used against the social service
    pub outbound: Method,
    /// Body field receiving the caller's id, if any
    pub caller_field: Option<&'static str>,
    /// Whether the long social timeout applies
    pub long_running: bool,
    /// Whether a `wid` query parameter names the user in place of the caller
    pub wid_query: bool,
}

const fn route(
    public: &'static str,
    inbound: Method,
    upstream: &'static str,
    outbound: Method,
    caller_field: Option<&'static str>,
    long_running: bool,
    wid_query: bool,
) -> SocialRoute {
    SocialRoute {
        public,
        inbound,
        upstream,
        outbound,
        caller_field,
        long_running,
        wid_query,
    }
}

/// Every social route the gateway forwards
pub static SOCIAL_ROUTES: &[SocialRoute] = &[
    route("post/publish", Method::POST, "authtool/publishpost", Method::POST, None, false, false),
    route("post/draft", Method::POST, "authtool/draftpost", Method::POST, None, false, false),
    route("edit/tags", Method::PUT, "authtool/edittags", Method::PUT, None, false, false),
    route("edit/meta", Method::PUT, "authtool/editmeta", Method::PUT, None, false, false),
    route("post/delete", Method::POST, "authtool/deletepost", Method::DELETE, None, false, false),
    route("post/autocomplete", Method::POST, "post/autocomplete", Method::POST, None, false, false),
    route("post/viewConversation", Method::POST, "post/viewConversation", Method::POST, None, false, false),
    route("post/viewConversationV2", Method::POST, "post/viewConversationv2", Method::POST, None, false, false),
    route("post/timeline", Method::POST, "post/timeline", Method::POST, None, true, false),
    route("post/timelineV2", Method::POST, "post/timelinev2", Method::POST, Some("userId"), true, true),
    route("moderator/moderatepost", Method::POST, "moderator/moderatepost", Method::POST, Some("moderatorId"), true, false),
    route("moderator/timeline", Method::POST, "moderator/timeline", Method::POST, Some("userId"), true, false),
    route("admin/timeline", Method::POST, "admin/timeline", Method::POST, Some("userId"), true, false),
    route("admin/deletePost", Method::POST, "admin/deletepost", Method::DELETE, Some("adminId"), false, false),
    route("admin/reactivatePost", Method::POST, "admin/reactivatepost", Method::POST, Some("adminId"), true, false),
    route("viewForum", Method::POST, "forum/viewforum", Method::POST, Some("userId"), true, false),
    route("forum/forumtimeline", Method::POST, "forum/forumtimeline", Method::POST, Some("userId"), true, false),
    route("post/activity/create", Method::POST, "useractivity/create", Method::POST, Some("userId"), false, false),
    route("post/activity/users", Method::POST, "post/users", Method::POST, None, false, false),
    route("createForum", Method::POST, "forum/createforum", Method::POST, Some("forumCreator"), false, false),
    route("editForum", Method::POST, "forum/editforum", Method::POST, Some("forumEditor"), false, false),
    route("post/acceptAnswer", Method::POST, "useractivity/acceptAnswer", Method::POST, None, false, false),
    route("post/search", Method::POST, "search/searchv1", Method::POST, Some("userId"), false, false),
    route("catalog", Method::POST, "catalog/fetch", Method::POST, Some("userid"), false, false),
];

/// Find the route a client called; both path and method must match
pub fn lookup(method: &Method, public: &str) -> Option<&'static SocialRoute> {
    let public = public.trim_matches('/');
    SOCIAL_ROUTES
        .iter()
        .find(|r| r.public == public && r.inbound == *method)
}

impl SocialRoute {
    /// The user a forwarded call acts for: a non-empty `wid` query value on
    /// routes that honor it, else the caller
    pub fn acting_user(&self, query_wid: Option<&str>, caller: Option<&UserId>) -> Option<UserId> {
        match query_wid.filter(|w| self.wid_query && !w.is_empty()) {
            Some(wid) => Some(UserId::new(wid)),
            None => caller.cloned(),
        }
    }

    /// Body forwarded upstream: the client body with tenant (and caller) merged in.
    ///
    /// Gateway fields overwrite client fields of the same name. A non-object
    /// body is replaced by an object holding only the gateway fields.
    pub fn enrich(&self, body: Value, tenant: &TenantContext, caller: Option<&UserId>) -> Value {
        let mut object = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        object.insert("org".to_string(), Value::String(tenant.org.clone()));
        object.insert("rootOrg".to_string(), Value::String(tenant.root_org.clone()));
        if let (Some(field), Some(caller)) = (self.caller_field, caller) {
            object.insert(field.to_string(), Value::String(caller.to_string()));
        }
        Value::Object(object)
    }
}
