//! Token-usage accounting — tracks agent token consumption and estimates the
//! monetary cost of each call from configured per-million-token prices.

use std::sync::Mutex;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::agent::Usage;
use crate::errors::AppError;
use crate::state::AppState;

/// Per-million-token prices for the agent model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub input_per_million: f64,
    pub output_per_million: f64,
    pub currency: String,
}

/// Usage and cost of a single agent call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallCost {
    pub timestamp: DateTime<Utc>,
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
}

/// Accumulated usage across all agent calls, plus pricing and the most
/// recent call. The dashboard's health page polls this.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostMetrics {
    pub total_cost: f64,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub pricing: Pricing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_call: Option<CallCost>,
}

#[derive(Debug, Default)]
struct Totals {
    input_tokens: u64,
    output_tokens: u64,
    total_cost: f64,
    latest: Option<CallCost>,
}

/// Running totals plus the most recent call. One per process, shared via
/// `AppState`.
#[derive(Debug)]
pub struct CostTracker {
    pricing: Pricing,
    totals: Mutex<Totals>,
}

impl CostTracker {
    pub fn new(pricing: Pricing) -> Self {
        Self {
            pricing,
            totals: Mutex::new(Totals::default()),
        }
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// Records one call's usage and returns its total cost.
    pub fn record(&self, usage: Usage) -> f64 {
        let input_cost = self.token_cost(usage.input_tokens, self.pricing.input_per_million);
        let output_cost = self.token_cost(usage.output_tokens, self.pricing.output_per_million);
        let total_cost = round4(input_cost + output_cost);

        let call = CallCost {
            timestamp: Utc::now(),
            input_tokens: usage.input_tokens,
            output_tokens: usage.output_tokens,
            input_cost,
            output_cost,
            total_cost,
        };

        let mut totals = self.totals.lock().expect("cost tracker lock poisoned");
        totals.input_tokens += u64::from(usage.input_tokens);
        totals.output_tokens += u64::from(usage.output_tokens);
        totals.total_cost = round4(totals.total_cost + total_cost);
        totals.latest = Some(call);

        total_cost
    }

    /// The most recent recorded call, if any.
    pub fn latest(&self) -> Option<CallCost> {
        self.totals
            .lock()
            .expect("cost tracker lock poisoned")
            .latest
            .clone()
    }

    /// Running totals, pricing, and the latest call in one snapshot.
    pub fn metrics(&self) -> CostMetrics {
        let totals = self.totals.lock().expect("cost tracker lock poisoned");
        CostMetrics {
            total_cost: totals.total_cost,
            total_input_tokens: totals.input_tokens,
            total_output_tokens: totals.output_tokens,
            pricing: self.pricing.clone(),
            latest_call: totals.latest.clone(),
        }
    }

    fn token_cost(&self, tokens: u32, price_per_million: f64) -> f64 {
        round4(f64::from(tokens) / 1_000_000.0 * price_per_million)
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/cost/metrics
pub async fn handle_get_metrics(State(state): State<AppState>) -> Json<CostMetrics> {
    Json(state.cost.metrics())
}

/// GET /api/cost/pricing
pub async fn handle_get_pricing(State(state): State<AppState>) -> Json<Pricing> {
    Json(state.cost.pricing().clone())
}

/// GET /api/cost/latest
///
/// 404 until at least one agent call has been recorded.
pub async fn handle_get_latest(State(state): State<AppState>) -> Result<Json<CallCost>, AppError> {
    state
        .cost
        .latest()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No AI calls recorded yet".to_string()))
}
