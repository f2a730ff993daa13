//! Portal Server Library
//!
//! Backend-for-frontend gateway: validates tenant and caller, then fans
//! requests out to the portal's upstream services and reshapes the answers.
//!
//! This library exposes the router and its components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{
    middleware as axum_middleware,
    routing::{any, get, patch, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

// Re-export commonly used types for convenience
pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use services::{SessionStore, TokenVerifier};
pub use state::AppState;

/// Prefix of every route that acts on behalf of a caller
pub const PROTECTED_PREFIX: &str = "/protected/v8";

/// Prefix of the unauthenticated routes
pub const PUBLIC_PREFIX: &str = "/public/v8";

/// Build the gateway router over `state`
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // Playlists
        .route("/user/playlist", get(api::playlists::list_playlists))
        .route("/user/playlist/recent", get(api::playlists::recent_contents))
        .route("/user/playlist/pending", get(api::playlists::pending_playlists))
        .route("/user/playlist/sync/:id", get(api::playlists::sync_playlist))
        .route("/user/playlist/create", post(api::playlists::create_playlist))
        // GET on these paths reads a playlist of that type
        .route(
            "/user/playlist/accept/:id",
            post(api::playlists::accept_playlist).get(api::playlists::get_typed_playlist),
        )
        .route(
            "/user/playlist/reject/:id",
            post(api::playlists::reject_playlist).get(api::playlists::get_typed_playlist),
        )
        .route(
            "/user/playlist/share/:id",
            post(api::playlists::share_playlist).get(api::playlists::get_typed_playlist),
        )
        .route(
            "/user/playlist/:id",
            patch(api::playlists::update_playlist).delete(api::playlists::delete_playlist),
        )
        .route(
            "/user/playlist/:id/:target",
            get(api::playlists::get_playlist).post(api::playlists::update_contents),
        )
        // Connections
        .route("/user/connections/list", get(api::connections::list_connections))
        .route("/user/connections/send-request", post(api::connections::send_request))
        .route(
            "/user/connections/withdraw-pending",
            post(api::connections::withdraw_pending),
        )
        .route(
            "/user/connections/invitation/:request_id/:action",
            get(api::connections::respond_to_invitation),
        )
        // Terms and conditions
        .route("/user/tnc", get(api::tnc::get_terms))
        .route("/user/tnc/status", get(api::tnc::terms_status))
        .route("/user/tnc/accept", post(api::tnc::accept_terms))
        .route("/user/tnc/postprocessing", patch(api::tnc::postprocess_terms))
        // Goals
        .route(
            "/user/goals",
            get(api::goals::user_goals).post(api::goals::upsert_goal),
        )
        .route("/user/goals/common", get(api::goals::common_goals))
        .route("/user/goals/:id/track", get(api::goals::track_goal))
        // Details
        .route("/user/details", get(api::details::user_details))
        .route("/user/details/detailV1", post(api::details::detail_by_email))
        .route("/user/details/detailV2", get(api::details::caller_detail))
        .route("/user/details/detailV3", post(api::details::details_by_wid))
        .route(
            "/user/autocomplete/:query",
            get(api::autocomplete::autocomplete_users),
        )
        // Admin registration
        .route(
            "/admin/userRegistration/listUsers/:source",
            get(api::registration::list_users),
        )
        .route(
            "/admin/userRegistration/deregisterUsers/:source",
            post(api::registration::deregister_users),
        )
        .route(
            "/admin/userRegistration/getAllSources",
            get(api::registration::all_sources),
        )
        .route(
            "/admin/userRegistration/getSourceDetail/:source",
            get(api::registration::source_detail),
        )
        .route(
            "/admin/userRegistration/checkUserRegistrationContent/:source",
            get(api::registration::user_registration_status),
        )
        .route(
            "/admin/userRegistration/register",
            post(api::registration::register_users),
        )
        // Social routes are table-driven, except the artifact upload
        .route("/social/*path", any(api::social::dispatch))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ));

    let public_routes = Router::new().route("/tnc", get(api::tnc::public_terms));

    Router::new()
        .route("/health", get(api::health::health))
        .nest(PROTECTED_PREFIX, protected_routes)
        .nest(PUBLIC_PREFIX, public_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
