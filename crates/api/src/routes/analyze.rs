//! Finance analysis endpoint.

use advisor::{FinanceRequest, FinanceResult, RiskLevel};
use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::error::ApiError;

/// POST /analyze — compute savings and investment advice.
#[tracing::instrument(skip(payload))]
pub async fn analyze(
    payload: Result<Json<FinanceRequest>, JsonRejection>,
) -> Result<Json<FinanceResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        let err = ApiError::from(rejection);
        tracing::debug!(status = %err.status(), error = %err, "rejected analysis request");
        metrics::counter!(
            "finance_analysis_rejections_total",
            "status" => err.status().as_u16().to_string()
        )
        .increment(1);
        err
    })?;

    let result = request.analyze();

    if let Some(savings) = result.savings().filter(|s| !s.is_finite()) {
        return Err(ApiError::Internal(format!(
            "savings of {savings} cannot be represented as a JSON number"
        )));
    }

    tracing::info!(
        outcome = result.outcome(),
        deficit = result.is_deficit(),
        risk_level = %request.risk_level,
        known_risk_level = request.risk_level.is_known(),
        "finance analysis completed"
    );
    metrics::counter!(
        "finance_analyses_total",
        "outcome" => result.outcome(),
        "risk_level" => risk_label(&request.risk_level)
    )
    .increment(1);

    Ok(Json(result))
}

/// Metric label for a risk level; caller-supplied labels collapse to `unknown`.
fn risk_label(level: &RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "low",
        RiskLevel::Medium => "medium",
        RiskLevel::High => "high",
        RiskLevel::Unknown(_) => "unknown",
    }
}
