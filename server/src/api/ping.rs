use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    pub build_id: String,
}

#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "testing",
    responses(
        (status = 200, description = "Health check response", body = PingResponse)
    )
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
        build_id: cupful_core::BUILD_ID.to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(ping), components(schemas(PingResponse)))]
pub struct ApiDoc;
