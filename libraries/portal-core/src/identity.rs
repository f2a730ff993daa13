//! Caller identity resolution.
//!
//! The gateway trusts two identity sources, in order: an explicit `wid`
//! header, then the claims of the access token the identity provider
//! attached to the request. Nothing here verifies anything; verification
//! (when configured) happens in the server's auth middleware before an
//! [`AuthContext`] is built.

use crate::error::{Result, ValidationError};
use crate::types::UserId;
use http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Header carrying an explicit user id override
pub const WID_HEADER: &str = "wid";

/// Claims read from the embedded access token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject; the caller's user id
    #[serde(default)]
    pub sub: Option<String>,
    /// Full display name
    #[serde(default)]
    pub name: Option<String>,
    /// Given name
    #[serde(default)]
    pub given_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub family_name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Login name
    #[serde(default)]
    pub preferred_username: Option<String>,
    /// Identity provider session
    #[serde(default)]
    pub session_state: Option<String>,
    /// Expiry as a unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Token material attached to a request, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Decoded claims
    pub claims: Option<TokenClaims>,
    /// Raw bearer token
    pub token: Option<String>,
}

impl AuthContext {
    /// No token on the request
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A decoded token
    pub fn new(token: impl Into<String>, claims: TokenClaims) -> Self {
        Self {
            claims: Some(claims),
            token: Some(token.into()),
        }
    }
}

/// Who is making the request, as far as the gateway can tell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerIdentity {
    /// `wid` header, else the `sub` claim
    pub user_id: Option<UserId>,
    /// `name` claim
    pub display_name: Option<String>,
    /// `email` claim, else `preferred_username`
    pub email: Option<String>,
    /// `session_state` claim
    pub session_state: Option<String>,
    /// Raw bearer token
    pub token: Option<String>,
}

impl CallerIdentity {
    /// The caller's id, or the fixed no-identity validation error
    pub fn require_user_id(&self) -> Result<&UserId> {
        self.user_id.as_ref().ok_or(ValidationError::MissingIdentity)
    }

    /// Whether any user id could be resolved
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Resolve the caller identity from request headers and token claims.
///
/// A non-empty `wid` header is the user id, full stop. Otherwise the `sub`
/// claim is used. The remaining attributes come from the claims alone and
/// may each be absent; email falls back to `preferred_username`.
pub fn resolve(headers: &HeaderMap, auth: &AuthContext) -> CallerIdentity {
    let claims = auth.claims.as_ref();

    let user_id = header_value(headers, WID_HEADER)
        .map(UserId::new)
        .or_else(|| claim(claims, |c| c.sub.as_deref()).map(UserId::new));

    CallerIdentity {
        user_id,
        display_name: claim(claims, |c| c.name.as_deref()).map(str::to_string),
        email: claim(claims, |c| c.email.as_deref())
            .or_else(|| claim(claims, |c| c.preferred_username.as_deref()))
            .map(str::to_string),
        session_state: claim(claims, |c| c.session_state.as_deref()).map(str::to_string),
        token: auth.token.clone().filter(|t| !t.is_empty()),
    }
}

/// Non-empty header value as UTF-8
pub(crate) fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn claim<'a>(
    claims: Option<&'a TokenClaims>,
    field: impl Fn(&'a TokenClaims) -> Option<&'a str>,
) -> Option<&'a str> {
    claims.and_then(field).filter(|v| !v.is_empty())
}
