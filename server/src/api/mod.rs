pub mod convert;
pub mod form;
pub mod materials;
pub mod ping;

use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Path of the health check, which is excluded from request logging.
pub const PING_PATH: &str = "/api/ping";

/// Returns the router for all endpoints
pub fn router() -> Router {
    Router::new()
        .route("/", get(form::index))
        .route("/convert", post(convert::convert))
        .route("/api/materials", get(materials::list_materials))
        .route(PING_PATH, get(ping::ping))
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(info(title = "cupful", description = "Kitchen measure converter"))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        convert::ApiDoc::openapi(),
        materials::ApiDoc::openapi(),
        ping::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.merge(module_spec);
    }

    spec
}
