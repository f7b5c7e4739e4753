//! Savings computation and advice selection.

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// Message returned when expenses exceed income.
pub const DEFICIT_MESSAGE: &str = "You are spending more than you earn! Consider reducing expenses.";

/// Input to a single analysis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinanceRequest {
    pub income: f64,
    pub expenses: f64,
    pub risk_level: RiskLevel,
}

impl FinanceRequest {
    pub fn new(income: f64, expenses: f64, risk_level: impl Into<RiskLevel>) -> Self {
        Self {
            income,
            expenses,
            risk_level: risk_level.into(),
        }
    }

    /// Runs [`analyze`] on this request.
    pub fn analyze(&self) -> FinanceResult {
        analyze(self.income, self.expenses, &self.risk_level)
    }
}

/// Outcome of an analysis.
///
/// Serialized untagged: a deficit is `{"message": ..}`, a surplus is
/// `{"savings": .., "advice": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FinanceResult {
    Deficit { message: String },
    Surplus { savings: f64, advice: String },
}

impl FinanceResult {
    pub fn is_deficit(&self) -> bool {
        matches!(self, FinanceResult::Deficit { .. })
    }

    /// Returns the computed savings for a surplus.
    pub fn savings(&self) -> Option<f64> {
        match self {
            FinanceResult::Deficit { .. } => None,
            FinanceResult::Surplus { savings, .. } => Some(*savings),
        }
    }

    /// Short outcome name used in logs and metric labels.
    pub fn outcome(&self) -> &'static str {
        match self {
            FinanceResult::Deficit { .. } => "deficit",
            FinanceResult::Surplus { .. } => "surplus",
        }
    }
}

/// Computes savings and selects advice for the given risk level.
///
/// Break-even counts as a surplus; only strictly negative savings yield a
/// deficit. An unknown risk level leaves the advice as the bare savings
/// sentence, trailing space included.
pub fn analyze(income: f64, expenses: f64, risk_level: &RiskLevel) -> FinanceResult {
    // Adding +0.0 turns a negative zero into positive zero.
    let savings = income - expenses + 0.0;

    if savings < 0.0 {
        tracing::debug!(savings, "expenses exceed income");
        return FinanceResult::Deficit {
            message: DEFICIT_MESSAGE.to_string(),
        };
    }

    let mut advice = format!("You have ${savings} left after expenses. ");
    match risk_level.clause() {
        Some(clause) => advice.push_str(clause),
        None => tracing::debug!(risk_level = %risk_level, "no advice clause for risk level"),
    }

    FinanceResult::Surplus { savings, advice }
}
