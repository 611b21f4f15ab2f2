use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod rentals;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Request span keyed by the route template. The raw URI is left out since
/// login credentials travel as path segments.
fn request_span(req: &Request<Body>) -> tracing::Span {
    let path = req.extensions().get::<MatchedPath>().map(MatchedPath::as_str).unwrap_or("<unmatched>");
    tracing::info_span!("request", method = %req.method(), path)
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let user_routes = Router::new()
        .route("/users", post(users::register))
        .route("/userst", get(users::list_users))
        .route("/user/login/:email/:password", get(users::login))
        .route("/user/image/:email", put(users::update_image))
        .route("/user/:email", get(users::get_by_email).put(users::update_profile));

    let rental_routes = Router::new()
        .route("/api/rentals/save", post(rentals::save))
        .route("/api/rentals", get(rentals::list));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(user_routes)
        .merge(rental_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
