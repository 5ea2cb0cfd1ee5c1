//! HTTP handlers
//!
//! Each handler composes at most three independent lookups: random color
//! (external), random word, random challenge (store). Challenge absence is a
//! content default on the page and the combined endpoint, but a 404 on the
//! dedicated endpoint; color failures always propagate on API endpoints.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::Serialize;

use super::{AppState, SERVICE_NAME};
use crate::db::rows;
use crate::error::ServiceError;
use crate::providers::{self, RandomColor};

/// Default triple served when the store holds no challenges
const FALLBACK_CATEGORY: &str = "Усложнение";
const FALLBACK_NAME: &str = "Базовое задание";
const FALLBACK_DESCRIPTION: &str = "Создайте рисунок на свободную тему";

/// Neutral color for the page when the provider is down
const FALLBACK_COLOR_NAME: &str = "Серый";
const FALLBACK_COLOR_HEX: &str = "#808080";

#[derive(Debug, Clone, Serialize)]
pub struct ColorResponse {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WordResponse {
    pub word: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChallengeResponse {
    pub category: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllResponse {
    pub color: ColorResponse,
    pub word: String,
    pub challenge: ChallengeResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

impl ChallengeResponse {
    fn fallback() -> Self {
        Self {
            category: FALLBACK_CATEGORY.to_string(),
            name: FALLBACK_NAME.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

impl From<RandomColor> for ColorResponse {
    fn from(color: RandomColor) -> Self {
        Self {
            name: color.name,
            hex: color.hex,
        }
    }
}

/// One random draw from the store
fn draw_challenge(state: &AppState) -> Result<Option<ChallengeResponse>, ServiceError> {
    let picked = state.db.with_conn(|conn| rows::pick_random(conn))?;

    Ok(picked.map(|(category, challenge)| ChallengeResponse {
        category: category.name,
        name: challenge.name,
        description: challenge.description,
    }))
}

/// GET / - page with all three generations embedded
pub async fn index(State(state): State<AppState>) -> Html<String> {
    // The page never fails: a downed color provider and an empty store both
    // degrade to fixed defaults
    let color = state
        .color
        .random_color()
        .await
        .map(ColorResponse::from)
        .unwrap_or_else(|_| ColorResponse {
            name: FALLBACK_COLOR_NAME.to_string(),
            hex: FALLBACK_COLOR_HEX.to_string(),
        });

    let word = providers::random_word();

    let challenge = draw_challenge(&state)
        .ok()
        .flatten()
        .unwrap_or_else(ChallengeResponse::fallback);

    Html(render_index(&color, word, &challenge))
}

/// GET /api/random-color
pub async fn api_random_color(
    State(state): State<AppState>,
) -> Result<Json<ColorResponse>, ServiceError> {
    let color = state.color.random_color().await?;
    Ok(Json(color.into()))
}

/// GET /api/random-word
pub async fn api_random_word() -> Json<WordResponse> {
    Json(WordResponse {
        word: providers::random_word().to_string(),
    })
}

/// GET /api/random-challenge - 404 when the store is empty
pub async fn api_random_challenge(
    State(state): State<AppState>,
) -> Result<Json<ChallengeResponse>, ServiceError> {
    let challenge = draw_challenge(&state)?.ok_or(ServiceError::NoChallenges)?;
    Ok(Json(challenge))
}

/// GET /api/random-all - challenge absence degrades to the default triple,
/// color failures propagate
pub async fn api_random_all(
    State(state): State<AppState>,
) -> Result<Json<AllResponse>, ServiceError> {
    let color = state.color.random_color().await?;
    let word = providers::random_word().to_string();
    let challenge = draw_challenge(&state)?.unwrap_or_else(ChallengeResponse::fallback);

    Ok(Json(AllResponse {
        color: color.into(),
        word,
        challenge,
    }))
}

/// GET /api/health
pub async fn api_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
    })
}

/// Render the page template with the three values substituted in
fn render_index(color: &ColorResponse, word: &str, challenge: &ChallengeResponse) -> String {
    include_str!("../../static/index.html")
        .replace("{{color_name}}", &escape(&color.name))
        .replace("{{color_hex}}", &escape(&color.hex))
        .replace("{{word}}", &escape(word))
        .replace("{{challenge_category}}", &escape(&challenge.category))
        .replace("{{challenge_name}}", &escape(&challenge.name))
        .replace("{{challenge_description}}", &escape(&challenge.description))
}

/// Minimal HTML escaping for substituted values
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
