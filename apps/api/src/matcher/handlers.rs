//! Axum route handlers for candidate matching and rating configuration.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::engine::color::{rating_colors, RatingColors};
use crate::engine::gauge::{gauge_geometry, GaugeGeometry, GaugeSize};
use crate::engine::normalize::normalize;
use crate::engine::ranking::{sort_by, SortOption};
use crate::errors::AppError;
use crate::matcher::summary::{generate_rating, generate_summary};
use crate::models::candidate::{Candidate, MatchRequest, RatingConfigResponse};
use crate::state::AppState;

/// How many CVs are preselected for agent scoring per match request.
const TOP_CANDIDATES: usize = 5;

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    /// Sort-option identifier, e.g. `rating-desc`. Unrecognized values fall
    /// back to the default rating-descending.
    pub sort: Option<String>,
}

/// POST /api/candidate-matcher/match
///
/// Selects the most relevant CVs for the vacancy, asks the agent for a
/// summary and rating per CV, and returns ranked candidate summaries.
pub async fn handle_match(
    State(state): State<AppState>,
    Query(query): Query<MatchQuery>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    let vacancy = request.vacancy_description.trim().to_string();
    if vacancy.is_empty() {
        return Err(AppError::Validation(
            "vacancyDescription cannot be empty".to_string(),
        ));
    }

    info!(
        "Processing candidate match request for vacancy: {:.100}",
        vacancy
    );

    // Directory scan + PDF text extraction are blocking; keep them off the
    // async executor.
    let store = state.cvs.clone();
    let vacancy_for_scan = vacancy.clone();
    let top_cvs = tokio::task::spawn_blocking(move || {
        store.find_top_candidates(&vacancy_for_scan, TOP_CANDIDATES)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in match: {e}")))??;

    let range = state.config.rating;
    let mut candidates = Vec::with_capacity(top_cvs.len());

    for cv in top_cvs {
        let summary = match generate_summary(
            state.agent.as_ref(),
            &state.prompts,
            &vacancy,
            &cv.content,
        )
        .await
        {
            Ok(reply) => {
                state.cost.record(reply.usage);
                reply.content
            }
            Err(e) => {
                error!("Agent failed to summarize CV {}: {e}", cv.filename);
                return Err(e.into());
            }
        };

        let (rating, reply) = generate_rating(
            state.agent.as_ref(),
            &state.prompts,
            &vacancy,
            &cv.content,
            range,
        )
        .await
        .map_err(|e| {
            error!("Agent failed to rate CV {}: {e}", cv.filename);
            AppError::from(e)
        })?;
        state.cost.record(reply.usage);

        candidates.push(Candidate::new(cv.name, cv.filename, summary, rating, range));
    }

    let option = query
        .sort
        .as_deref()
        .map(SortOption::from_key)
        .unwrap_or_default();
    let ordered = sort_by(&candidates, option.criterion());

    info!(
        "Successfully processed {} candidates (sort: {})",
        ordered.len(),
        option.key()
    );
    Ok(Json(ordered))
}

/// GET /api/rating/config
///
/// The system-wide rating range applied to all candidates. Clients fall back
/// to the documented `{min: 1, max: 10}` default when this fetch fails.
pub async fn handle_rating_config(State(state): State<AppState>) -> Json<RatingConfigResponse> {
    tracing::debug!(
        "Providing rating configuration: min={}, max={}",
        state.config.rating.min,
        state.config.rating.max
    );
    Json(RatingConfigResponse::from(state.config.rating))
}

#[derive(Debug, Deserialize)]
pub struct VisualQuery {
    pub rating: Option<f64>,
    /// Gauge size token (`sm`/`md`/`lg`). Unrecognized tokens fall back to `md`.
    pub size: Option<String>,
}

/// Render tokens for one rating: percentage, colors, and gauge geometry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingVisualResponse {
    pub rating: f64,
    pub percentage: f64,
    pub colors: RatingColors,
    pub geometry: GaugeGeometry,
}

/// GET /api/rating/visual?rating=7.5&size=md
///
/// Computes the rendering-ready derived values for one rating under the
/// configured range. A missing rating is treated as 0.
pub async fn handle_rating_visual(
    State(state): State<AppState>,
    Query(query): Query<VisualQuery>,
) -> Json<RatingVisualResponse> {
    let rating = query.rating.unwrap_or(0.0);
    let size = query
        .size
        .as_deref()
        .map(GaugeSize::from_key)
        .unwrap_or_default();
    let range = state.config.rating;

    Json(RatingVisualResponse {
        rating,
        percentage: normalize(rating, range.min, range.max),
        colors: rating_colors(rating, range.min, range.max),
        geometry: gauge_geometry(rating, range.min, range.max, size),
    })
}
