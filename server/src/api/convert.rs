use axum::Json;
use cupful_core::{ConversionRequest, ConversionResult, Locale};
use serde::{Deserialize, Serialize};
use utoipa::OpenApi;
use utoipa::ToSchema;

/// Amount as sent by the browser form: a number, or the raw text of the input.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// The numeric value, or None when the text is not a number.
    pub fn value(&self) -> Option<f64> {
        match self {
            AmountInput::Number(n) => Some(*n),
            AmountInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Quantity to convert. Missing means 0.
    #[serde(default)]
    pub amount: Option<AmountInput>,
    /// "gram" or "ml". Defaults to "gram".
    #[serde(default)]
    pub unit: Option<String>,
    /// Material identifier, e.g. "flour". Defaults to "water".
    #[serde(default)]
    pub material: Option<String>,
    /// "en" or "he". Defaults to "en".
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ConvertResponse {
    pub result_cups: String,
    pub result_tbs: String,
    pub result_ts: String,
}

impl From<ConversionResult> for ConvertResponse {
    fn from(result: ConversionResult) -> Self {
        Self {
            result_cups: result.cups,
            result_tbs: result.tablespoons,
            result_ts: result.teaspoons,
        }
    }
}

/// Convert a weight or volume into cups, tablespoons and teaspoons
///
/// Rejected input is reported inside the result fields, never as an HTTP error.
#[utoipa::path(
    post,
    path = "/convert",
    tag = "convert",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Formatted amounts or user-facing error messages", body = ConvertResponse)
    )
)]
pub async fn convert(Json(request): Json<ConvertRequest>) -> Json<ConvertResponse> {
    let locale = match request.locale.as_deref() {
        Some(raw) => raw.parse::<Locale>().unwrap_or_else(|e| {
            tracing::debug!("{}, falling back to default", e);
            Locale::default()
        }),
        None => Locale::default(),
    };

    let amount = match request.amount {
        Some(ref input) => input.value(),
        None => Some(0.0),
    };

    let Some(amount) = amount else {
        tracing::debug!(amount = ?request.amount, "unparseable amount");
        return Json(ConversionResult::invalid_amount(locale).into());
    };

    let conversion = ConversionRequest::new(
        amount,
        request
            .unit
            .unwrap_or_else(|| cupful_core::convert::DEFAULT_UNIT.to_string()),
        request
            .material
            .unwrap_or_else(|| cupful_core::convert::DEFAULT_MATERIAL.to_string()),
    );

    let result = cupful_core::convert(&conversion, locale);

    tracing::debug!(
        amount = conversion.amount,
        unit = %conversion.unit,
        material = %conversion.material,
        cups = %result.cups,
        "converted"
    );

    Json(result.into())
}

#[derive(OpenApi)]
#[openapi(
    paths(convert),
    components(schemas(ConvertRequest, ConvertResponse, AmountInput))
)]
pub struct ApiDoc;
