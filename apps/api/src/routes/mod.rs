pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::connect::handlers as connect_handlers;
use crate::dashboard;
use crate::profiles::handlers as profile_handlers;
use crate::state::AppState;
use crate::updates::handlers as update_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Public matrimony surface
        .route(
            "/api/v1/profiles",
            get(profile_handlers::handle_list_profiles)
                .post(profile_handlers::handle_submit_profile),
        )
        .route(
            "/api/v1/profiles/:id",
            get(profile_handlers::handle_get_profile),
        )
        .route("/api/v1/updates", get(update_handlers::handle_list_updates))
        .route(
            "/api/v1/connect",
            post(connect_handlers::handle_create_request),
        )
        // Admin session gate
        .route("/api/v1/admin/login", post(auth_handlers::handle_login))
        .route("/api/v1/admin/logout", post(auth_handlers::handle_logout))
        // Admin moderation
        .route("/api/v1/admin/dashboard", get(dashboard::handle_dashboard))
        .route(
            "/api/v1/admin/profiles",
            get(profile_handlers::handle_admin_list_profiles),
        )
        .route(
            "/api/v1/admin/profiles/pending",
            get(profile_handlers::handle_list_pending),
        )
        .route(
            "/api/v1/admin/profiles/:id/approve",
            post(profile_handlers::handle_approve_profile),
        )
        .route(
            "/api/v1/admin/profiles/:id/reject",
            post(profile_handlers::handle_reject_profile),
        )
        .route(
            "/api/v1/admin/profiles/:id",
            delete(profile_handlers::handle_delete_profile),
        )
        // Admin society updates
        .route(
            "/api/v1/admin/updates",
            post(update_handlers::handle_create_update),
        )
        .route(
            "/api/v1/admin/updates/:id",
            delete(update_handlers::handle_delete_update),
        )
        // Admin connect requests
        .route(
            "/api/v1/admin/connect",
            get(connect_handlers::handle_list_requests),
        )
        .route(
            "/api/v1/admin/connect/:id/contacted",
            post(connect_handlers::handle_mark_contacted),
        )
        // Profile submissions carry photos; allow up to 10 MiB per request.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(state)
}
