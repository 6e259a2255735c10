use axum::{
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;

use crate::{config::Config, state::AppState};

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/login", post(handlers::auth::login))
        .route("/api/users", post(handlers::auth::register))
        .route(
            "/api/auth/forgot-password",
            post(handlers::auth::forgot_password),
        )
        .route(
            "/api/auth/reset-password",
            post(handlers::auth::reset_password),
        )
        .route("/api/disasters", get(handlers::disasters::list_disasters))
        .route(
            "/api/disasters/{id}",
            get(handlers::disasters::get_disaster),
        )
        .route(
            "/api/disasters/type/{disaster_type}",
            get(handlers::disasters::list_by_type),
        )
        .route(
            "/api/disasters/severity/{severity}",
            get(handlers::disasters::list_by_severity),
        )
        .route(
            "/api/disasters/status/{status}",
            get(handlers::disasters::list_by_status),
        )
        .route("/api/feedback", post(handlers::feedback::submit_feedback))
}

fn user_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/me", get(handlers::auth::me))
        .route(
            "/api/users/{id}",
            get(handlers::users::get_user).put(handlers::users::update_user),
        )
        .route(
            "/api/task-requests",
            post(handlers::task_requests::submit_task_request),
        )
        .route(
            "/api/task-requests/user/{user_id}",
            get(handlers::task_requests::list_user_task_requests),
        )
        .route(
            "/api/resource-requests/resources",
            get(handlers::resource_requests::list_resources),
        )
        .route(
            "/api/resource-requests/request",
            post(handlers::resource_requests::request_resource),
        )
        .route(
            "/api/resource-requests/user/{user_id}",
            get(handlers::resource_requests::list_user_requests),
        )
        .route(
            "/api/resource-requests/cancel/{id}",
            put(handlers::resource_requests::cancel_request),
        )
        .route(
            "/api/volunteer-applications",
            post(handlers::volunteer_applications::apply),
        )
        .route(
            "/api/volunteer-applications/user/{user_id}",
            get(handlers::volunteer_applications::list_user_applications),
        )
        .route(
            "/api/notifications/user/{role}",
            get(handlers::notifications::notifications_for_role),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ))
}

fn volunteer_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/tasks/available",
            get(handlers::tasks::list_available_tasks),
        )
        .route(
            "/api/tasks/volunteer/{volunteer_id}",
            get(handlers::tasks::list_volunteer_tasks),
        )
        .route("/api/tasks/{id}/accept", post(handlers::tasks::accept_task))
        .route(
            "/api/tasks/{id}/status",
            put(handlers::tasks::update_task_status),
        )
        .route(
            "/api/tasks/{id}/volunteer-remarks",
            post(handlers::tasks::add_volunteer_remarks),
        )
        .route("/api/tasks/{id}/remarks", get(handlers::tasks::get_remarks))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_volunteer,
        ))
}

fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/users", get(handlers::users::list_users))
        .route(
            "/api/users/{id}",
            axum::routing::delete(handlers::users::delete_user),
        )
        .route("/api/disasters", post(handlers::disasters::create_disaster))
        .route(
            "/api/disasters/{id}",
            put(handlers::disasters::update_disaster)
                .delete(handlers::disasters::delete_disaster),
        )
        .route(
            "/api/task-requests",
            get(handlers::task_requests::list_task_requests),
        )
        .route(
            "/api/task-requests/status/{status}",
            get(handlers::task_requests::list_task_requests_by_status),
        )
        .route(
            "/api/task-requests/{id}/approve",
            post(handlers::task_requests::approve_task_request),
        )
        .route(
            "/api/task-requests/{id}/reject",
            post(handlers::task_requests::reject_task_request),
        )
        .route(
            "/api/task-requests/{id}",
            axum::routing::delete(handlers::task_requests::delete_task_request),
        )
        .route("/api/tasks", get(handlers::tasks::list_tasks))
        .route(
            "/api/tasks/{id}/admin-remarks",
            post(handlers::tasks::add_admin_remarks),
        )
        .route(
            "/api/resource-requests/resources",
            post(handlers::resource_requests::create_resource),
        )
        .route(
            "/api/resource-requests/resources/{id}",
            axum::routing::delete(handlers::resource_requests::delete_resource),
        )
        .route(
            "/api/resource-requests/replenish/{resource_id}",
            put(handlers::resource_requests::replenish_resource),
        )
        .route(
            "/api/resource-requests/admin",
            get(handlers::resource_requests::list_all_requests),
        )
        .route(
            "/api/resource-requests/reject/{id}",
            put(handlers::resource_requests::reject_request),
        )
        .route(
            "/api/resource-requests/accept-allocate/{id}",
            put(handlers::resource_requests::accept_and_allocate),
        )
        .route(
            "/api/volunteer-applications",
            get(handlers::volunteer_applications::list_applications),
        )
        .route(
            "/api/volunteer-applications/{id}",
            get(handlers::volunteer_applications::get_application)
                .put(handlers::volunteer_applications::update_application)
                .delete(handlers::volunteer_applications::delete_application),
        )
        .route(
            "/api/volunteer-applications/{id}/accept",
            put(handlers::volunteer_applications::accept_application),
        )
        .route(
            "/api/volunteer-applications/{id}/reject",
            put(handlers::volunteer_applications::reject_application),
        )
        .route(
            "/api/notifications",
            get(handlers::notifications::list_notifications)
                .post(handlers::notifications::create_notification),
        )
        .route(
            "/api/notifications/{id}",
            put(handlers::notifications::update_notification)
                .delete(handlers::notifications::delete_notification),
        )
        .route("/api/feedback", get(handlers::feedback::list_feedback))
        .route(
            "/api/feedback/{id}/status",
            put(handlers::feedback::update_feedback_status),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_admin,
        ))
}

pub fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allow_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(24 * 60 * 60))
}

/// Assembles every route group with shared layers (request id, trace, CORS).
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(public_routes())
        .merge(user_routes(&state))
        .merge(volunteer_routes(&state))
        .merge(admin_routes(&state))
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", docs::ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(|req: &Request<Body>| middleware::make_request_span(req)),
                )
                .layer(cors),
        )
        .with_state(state)
}
