use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::RequestId;
use crate::models::{ClothingItem, Recommendation, Strategy, WeatherContext};

use super::AppState;

/// Plausible air temperatures, in °C
const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=60.0;

// Request/Response types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Owner whose catalog wardrobe is used when `items` is absent
    #[serde(default, alias = "ownerId")]
    pub user_id: Option<String>,
    /// Explicit wardrobe; takes precedence over the catalog
    #[serde(default)]
    pub items: Option<Vec<ClothingItem>>,
    pub weather: WeatherContext,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub description: String,
    pub strategy: Strategy,
    pub items: Vec<ClothingItem>,
}

impl From<&Recommendation<'_>> for RecommendationResponse {
    fn from(recommendation: &Recommendation<'_>) -> Self {
        Self {
            title: recommendation.title.clone(),
            description: recommendation.description.clone(),
            strategy: recommendation.strategy,
            items: recommendation.items.to_owned_items(),
        }
    }
}

// Handlers

/// Service index
pub async fn home() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Outfit recommendation API is running",
        "endpoints": {
            "/api/recommend": "POST - recommend one outfit",
            "/api/recommend/multiple": "POST - one outfit per strategy"
        }
    }))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommend a single outfit
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<Vec<ClothingItem>>> {
    validate_weather(&request.weather)?;
    let wardrobe = load_wardrobe(&state, &request).await?;

    tracing::info!(
        request_id = %request_id,
        wardrobe_size = wardrobe.len(),
        temperature = request.weather.temperature,
        "Processing recommendation request"
    );

    let mut rng = state.rng.lock().await;
    let outfit = state.engine.recommend(&wardrobe, &request.weather, &mut *rng);

    Ok(Json(outfit.to_owned_items()))
}

/// Recommend one outfit per strategy
pub async fn recommend_multiple(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<Vec<RecommendationResponse>>> {
    validate_weather(&request.weather)?;
    let wardrobe = load_wardrobe(&state, &request).await?;

    tracing::info!(
        request_id = %request_id,
        wardrobe_size = wardrobe.len(),
        temperature = request.weather.temperature,
        "Processing multi-strategy recommendation request"
    );

    let mut rng = state.rng.lock().await;
    let recommendations = state
        .engine
        .recommend_multiple(&wardrobe, &request.weather, &mut *rng);

    Ok(Json(
        recommendations
            .iter()
            .map(RecommendationResponse::from)
            .collect(),
    ))
}

fn validate_weather(weather: &WeatherContext) -> AppResult<()> {
    if !weather.temperature.is_finite() || !TEMPERATURE_RANGE.contains(&weather.temperature) {
        return Err(AppError::InvalidInput(format!(
            "temperature {} is outside {:?}",
            weather.temperature, TEMPERATURE_RANGE
        )));
    }
    Ok(())
}

async fn load_wardrobe(state: &AppState, request: &RecommendRequest) -> AppResult<Vec<ClothingItem>> {
    if let Some(items) = &request.items {
        return Ok(items.clone());
    }

    let owner_id = request.user_id.as_deref().unwrap_or_default();
    let items = state.wardrobes.wardrobe_for(owner_id).await?;
    tracing::debug!(
        source = state.wardrobes.name(),
        owner_id,
        items = items.len(),
        "Loaded wardrobe from source"
    );
    Ok(items)
}
