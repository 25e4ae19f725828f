use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaterialDensity {
    pub name: String,
    pub grams_per_ml: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaterialsResponse {
    pub materials: Vec<MaterialDensity>,
}

/// List the materials with known densities
#[utoipa::path(
    get,
    path = "/api/materials",
    tag = "materials",
    responses(
        (status = 200, description = "Known materials, sorted by name", body = MaterialsResponse)
    )
)]
pub async fn list_materials() -> Json<MaterialsResponse> {
    let materials = ingredient_density::materials()
        .into_iter()
        .map(|(name, grams_per_ml)| MaterialDensity {
            name: name.to_string(),
            grams_per_ml,
        })
        .collect();

    Json(MaterialsResponse { materials })
}

#[derive(OpenApi)]
#[openapi(
    paths(list_materials),
    components(schemas(MaterialsResponse, MaterialDensity))
)]
pub struct ApiDoc;
