//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateTermRequest, ErrorResponse, HealthResponse, TermResponse, UpdateTermRequest,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Glossary API",
        version = "0.1.0",
        description = "Glossary of design pattern recognition terms",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_terms,
        handlers::get_term,
        handlers::create_term,
        handlers::update_term,
        handlers::delete_term,
    ),
    components(
        schemas(
            HealthResponse,
            TermResponse,
            CreateTermRequest,
            UpdateTermRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "terms", description = "Glossary term management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation and CORS.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    // Term routes (generic over Database)
    let term_routes = routes!(D => {
        get "/terms" => handlers::list_terms,
        get "/terms/{keyword}" => handlers::get_term,
        post "/terms" => handlers::create_term,
        put "/terms/{keyword}" => handlers::update_term,
        delete "/terms/{keyword}" => handlers::delete_term,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    system_routes
        .merge(term_routes)
        .merge(Scalar::with_url("/docs", api))
        .layer(cors)
        .with_state(state)
}
