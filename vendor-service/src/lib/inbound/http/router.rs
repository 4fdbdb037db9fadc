use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::admin_dashboard::admin_dashboard;
use super::handlers::agent_verify::agent_verify;
use super::handlers::health::health;
use super::handlers::list_transactions::list_transactions;
use super::handlers::login::login;
use super::handlers::profile::profile;
use super::middleware::require_role;
use super::middleware::AccessGuard;
use crate::authentication::models::Role;
use crate::authentication::ports::AuthServicePort;
use crate::transaction::ports::TransactionServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub transaction_service: Arc<dyn TransactionServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    transaction_service: Arc<dyn TransactionServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        auth_service,
        transaction_service,
    };

    let public_routes = Router::new()
        .route("/", get(health))
        .route("/login", post(login));

    let admin_routes = Router::new()
        .route("/admin/dashboard", get(admin_dashboard))
        .route("/profile", get(profile))
        .route("/api/transactions-log", get(list_transactions))
        .route_layer(middleware::from_fn_with_state(
            AccessGuard::new(Arc::clone(&authenticator), Role::Admin),
            require_role,
        ));

    let field_agent_routes: Router<AppState> = Router::new()
        .route("/agent/verify", get(agent_verify))
        .route_layer(middleware::from_fn_with_state(
            AccessGuard::new(Arc::clone(&authenticator), Role::FieldAgent),
            require_role,
        ));

    // No headers in the span: Authorization carries bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .merge(field_agent_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
