/// Authentication middleware
use crate::{error::GatewayError, state::AppState};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use portal_core::{AuthContext, UserId};

/// Bearer token of the request, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware that decodes the bearer token into an [`AuthContext`].
///
/// A request without a token continues anonymously; routes that need a
/// user reject it later. A token that fails verification is a 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let auth = match bearer_token(request.headers()) {
        None => AuthContext::anonymous(),
        Some(token) => {
            let claims = state.verifier.verify(token).map_err(|e| {
                tracing::warn!("Token verification failed: {}", e);
                GatewayError::Unauthorized("Invalid token".to_string())
            })?;

            if let Some(session) = claims.session_state.as_deref().filter(|s| !s.is_empty()) {
                let user = claims.sub.as_deref().map(UserId::new);
                state.sessions.touch(session, user.as_ref()).await;
            }

            AuthContext::new(token, claims)
        }
    };

    request.extensions_mut().insert(auth);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&with_auth("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&with_auth("Basic abc")), None);
        assert_eq!(bearer_token(&with_auth("Bearer ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
