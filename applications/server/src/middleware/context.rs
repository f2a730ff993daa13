/// Tenant and caller extractors
use crate::error::GatewayError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use portal_core::{identity, AuthContext, CallerIdentity, TenantContext, UserId, ValidationError};
use serde::de::DeserializeOwned;

/// The request's `(org, rootOrg)`; a 400 when either header is missing
#[derive(Debug, Clone)]
pub struct Tenant(pub TenantContext);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Tenant
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Tenant(TenantContext::from_headers(&parts.headers)?))
    }
}

/// Everything known about the caller; never rejects
#[derive(Debug, Clone)]
pub struct Caller(pub CallerIdentity);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let anonymous = AuthContext::anonymous();
        let auth = parts.extensions.get::<AuthContext>().unwrap_or(&anonymous);
        Ok(Caller(identity::resolve(&parts.headers, auth)))
    }
}

/// The caller's user id; a 400 when neither `wid` nor a token names one
#[derive(Debug, Clone)]
pub struct RequiredUser(pub UserId);

impl RequiredUser {
    pub fn user_id(&self) -> &UserId {
        &self.0
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for RequiredUser
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Caller(identity) = Caller::from_request_parts(parts, state).await?;
        Ok(RequiredUser(identity.require_user_id()?.clone()))
    }
}

/// JSON request body; any rejection becomes a 400 `{"error"}` response
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(body_rejection(&rejection)),
        }
    }
}

fn body_rejection(rejection: &JsonRejection) -> GatewayError {
    tracing::debug!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            ValidationError::invalid("Expected a JSON request body").into()
        }
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            ValidationError::invalid(format!("Invalid request body: {}", rejection.body_text())).into()
        }
        _ => GatewayError::BadRequest(rejection.body_text()),
    }
}
