//! Finance analysis for the copilot API.
//!
//! This crate provides the pure analysis core:
//! - `RiskLevel` parsed from the caller's risk-tolerance label
//! - `FinanceRequest` / `FinanceResult` request and result records
//! - `analyze` mapping income, expenses and risk level to savings advice

pub mod analysis;
pub mod risk;

pub use analysis::{DEFICIT_MESSAGE, FinanceRequest, FinanceResult, analyze};
pub use risk::RiskLevel;
