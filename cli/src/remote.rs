//! Client for a running cupful server.

use anyhow::{Context, Result};
use cupful_core::{ConversionRequest, ConversionResult, Locale};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ConvertBody<'a> {
    amount: f64,
    unit: &'a str,
    material: &'a str,
    locale: &'a str,
}

#[derive(Deserialize)]
struct ConvertResponse {
    result_cups: String,
    result_tbs: String,
    result_ts: String,
}

impl From<ConvertResponse> for ConversionResult {
    fn from(response: ConvertResponse) -> Self {
        Self {
            cups: response.result_cups,
            tablespoons: response.result_tbs,
            teaspoons: response.result_ts,
        }
    }
}

#[derive(Deserialize)]
pub struct PingResponse {
    pub message: String,
    pub build_id: String,
}

fn endpoint(server: &str, path: &str) -> String {
    format!("{}{}", server.trim_end_matches('/'), path)
}

/// Convert through the server's POST /convert endpoint.
pub async fn convert(
    server: &str,
    request: &ConversionRequest,
    locale: Locale,
) -> Result<ConversionResult> {
    let url = endpoint(server, "/convert");
    let body = ConvertBody {
        amount: request.amount,
        unit: &request.unit,
        material: &request.material,
        locale: locale.as_str(),
    };

    let response: ConvertResponse = reqwest::Client::new()
        .post(&url)
        .json(&body)
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", url))?
        .error_for_status()?
        .json()
        .await
        .context("Invalid response from /convert")?;

    Ok(response.into())
}

pub async fn ping(server: &str) -> Result<PingResponse> {
    let url = endpoint(server, "/api/ping");
    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("Failed to reach {}", url))?
        .error_for_status()?
        .json()
        .await
        .context("Invalid response from /api/ping")?;

    Ok(response)
}
