/// Social/forum API routes
use crate::{
    api::relay,
    error::{GatewayError, Result},
    middleware::{Caller, Tenant},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::Method,
    response::Response,
};
use portal_core::{social, CallerIdentity, TenantContext, ValidationError};
use portal_upstream::Artifact;
use serde::Deserialize;
use serde_json::Value;

/// Name of the multipart part holding the uploaded file
const UPLOAD_FIELD: &str = "content";

/// Path prefix of the artifact upload, followed by the content id
const UPLOAD_PREFIX: &str = "post/upload/";

/// Query string accepted on social routes
#[derive(Debug, Default, Deserialize)]
pub struct SocialQuery {
    /// Acts for this user on routes that accept an override
    pub wid: Option<String>,
}

/// ANY /social/*path
///
/// `POST post/upload/:contentId` stores a multipart upload; every other
/// path is looked up in the social route table and forwarded.
pub async fn dispatch(
    Path(path): Path<String>,
    State(app_state): State<AppState>,
    Tenant(tenant): Tenant,
    Caller(caller): Caller,
    Query(query): Query<SocialQuery>,
    request: Request,
) -> Result<Response> {
    let method = request.method().clone();

    if method == Method::POST {
        if let Some(content_id) = upload_target(&path) {
            let multipart = Multipart::from_request(request, &app_state)
                .await
                .map_err(|e| GatewayError::BadRequest(format!("Multipart error: {}", e.body_text())))?;
            return upload(&app_state, &tenant, content_id, multipart).await;
        }
    }

    let body = Bytes::from_request(request, &app_state)
        .await
        .map_err(|e| GatewayError::BadRequest(e.body_text()))?;
    forward(&app_state, &tenant, &caller, &query, &method, &path, &body).await
}

/// Content id of an upload path; `None` for anything else
fn upload_target(path: &str) -> Option<&str> {
    path.trim_matches('/')
        .strip_prefix(UPLOAD_PREFIX)
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

/// Forward a known social route.
///
/// The client body is merged with the tenant (and for some routes the
/// acting user's id) before it is sent to the social service.
async fn forward(
    app_state: &AppState,
    tenant: &TenantContext,
    caller: &CallerIdentity,
    query: &SocialQuery,
    method: &Method,
    path: &str,
    body: &[u8],
) -> Result<Response> {
    let route = social::lookup(method, path)
        .ok_or_else(|| GatewayError::NotFound(format!("No social route {} /{}", method, path)))?;
    let acting_user = route.acting_user(query.wid.as_deref(), caller.user_id.as_ref());

    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(body).map_err(|e| GatewayError::BadRequest(format!("Invalid JSON body: {}", e)))?
    };

    tracing::debug!(route = route.public, upstream = route.upstream, "Forwarding social route");
    let forwarded = app_state
        .upstream
        .social()
        .forward(route, body, tenant, acting_user.as_ref())
        .await?;
    Ok(relay(forwarded))
}

/// Store an uploaded file among the content's public artifacts
async fn upload(
    app_state: &AppState,
    tenant: &TenantContext,
    content_id: &str,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut artifact = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::BadRequest(format!("Multipart error: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| GatewayError::BadRequest(format!("Failed to read upload: {}", e)))?;

        artifact = Some(Artifact {
            file_name,
            mime_type,
            data: data.to_vec(),
        });
        break;
    }

    let artifact = artifact.ok_or_else(|| ValidationError::missing_field(UPLOAD_FIELD))?;
    let forwarded = app_state
        .upstream
        .social()
        .upload_artifact(tenant, content_id, artifact)
        .await?;
    Ok(relay(forwarded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_target() {
        assert_eq!(upload_target("post/upload/c-1"), Some("c-1"));
        assert_eq!(upload_target("/post/upload/c-1/"), Some("c-1"));
        assert_eq!(upload_target("post/upload/"), None);
        assert_eq!(upload_target("post/upload/a/b"), None);
        assert_eq!(upload_target("post/timeline"), None);
    }
}
