pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cost;
use crate::matcher::handlers as matcher_handlers;
use crate::prompts::handlers as prompt_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate matching
        .route(
            "/api/candidate-matcher/match",
            post(matcher_handlers::handle_match),
        )
        // Rating configuration and render tokens
        .route(
            "/api/rating/config",
            get(matcher_handlers::handle_rating_config),
        )
        .route(
            "/api/rating/visual",
            get(matcher_handlers::handle_rating_visual),
        )
        // Admin panel
        .route(
            "/api/admin/status",
            get(prompt_handlers::handle_admin_status),
        )
        .route(
            "/api/admin/prompts",
            get(prompt_handlers::handle_list_prompts),
        )
        .route(
            "/api/admin/prompts/:type",
            get(prompt_handlers::handle_get_prompt).put(prompt_handlers::handle_update_prompt),
        )
        .route(
            "/api/admin/prompts/:type/reset",
            post(prompt_handlers::handle_reset_prompt),
        )
        // Cost tracking
        .route("/api/cost/metrics", get(cost::handle_get_metrics))
        .route("/api/cost/pricing", get(cost::handle_get_pricing))
        .route("/api/cost/latest", get(cost::handle_get_latest))
        .with_state(state)
}
