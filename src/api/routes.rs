//! API route definitions

use axum::{
    http::Method,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    self, ErrorResponse, FileResponse, ItemResponse, MessageResponse, ModelResponse, UserResponse,
};
use crate::config::Config;
use crate::types::ModelName;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Path Parameters Tutorial",
        version = "0.1.0",
        description = "Typed, enumerated and catch-all path parameters, one route at a time"
    ),
    tags(
        (name = "tutorial", description = "Hello World"),
        (name = "items", description = "Typed path parameters"),
        (name = "users", description = "Route ordering"),
        (name = "models", description = "Enumerated path parameters"),
        (name = "files", description = "Catch-all path parameters")
    ),
    paths(
        handlers::root,
        handlers::read_item,
        handlers::read_user_me,
        handlers::read_user,
        handlers::get_model,
        handlers::read_file,
    ),
    components(schemas(
        ModelName,
        MessageResponse,
        ItemResponse,
        UserResponse,
        ModelResponse,
        FileResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

/// A single entry of the route table
pub struct RouteEntry {
    pub method: Method,
    /// axum path pattern
    pub path: &'static str,
    /// Handler name, as listed in the OpenAPI document
    pub operation: &'static str,
    handler: MethodRouter,
}

/// Tutorial routes in registration order.
///
/// Fixed paths are listed before parameterized siblings (`/users/me` before
/// `/users/{user_id}`).
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        entry("/", "root", get(handlers::root)),
        entry("/items/{item_id}", "read_item", get(handlers::read_item)),
        entry("/users/me", "read_user_me", get(handlers::read_user_me)),
        entry("/users/{user_id}", "read_user", get(handlers::read_user)),
        entry("/models/{model_name}", "get_model", get(handlers::get_model)),
        entry("/files/", "read_file", get(handlers::read_file_root)),
        entry("/files/{*file_path}", "read_file", get(handlers::read_file)),
    ]
}

fn entry(path: &'static str, operation: &'static str, handler: MethodRouter) -> RouteEntry {
    RouteEntry {
        method: Method::GET,
        path,
        operation,
        handler,
    }
}

/// Create the API router
pub fn create_router(config: &Config) -> Router {
    let mut router = route_table()
        .into_iter()
        .fold(Router::new(), |router, route| {
            tracing::debug!("Registering {} {}", route.method, route.path);
            router.route(route.path, route.handler)
        });

    // OpenAPI spec and Swagger UI
    if config.docs.enabled {
        router = router.merge(
            SwaggerUi::new(config.docs.ui_path.clone())
                .url(config.docs.spec_path.clone(), ApiDoc::openapi()),
        );
    }

    router = router.fallback(handlers::not_found);

    if config.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http())
}
