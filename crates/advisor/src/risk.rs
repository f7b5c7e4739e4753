//! Risk tolerance labels and their advice clauses.

use serde::Deserialize;

/// Caller-supplied risk tolerance.
///
/// Parsed by exact, case-sensitive match. Labels outside the known set are
/// kept verbatim in `Unknown` and produce no advice clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown(String),
}

impl RiskLevel {
    /// Parses a label. Never fails.
    pub fn parse(label: &str) -> Self {
        Self::from(label.to_string())
    }

    /// Returns the label as supplied by the caller.
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown(label) => label,
        }
    }

    /// Returns the investment advice clause for this level, if any.
    pub fn clause(&self) -> Option<&'static str> {
        match self {
            RiskLevel::Low => Some("Consider a high-yield savings account or government bonds."),
            RiskLevel::Medium => Some("Look into index funds or diversified ETFs."),
            RiskLevel::High => Some(
                "You could explore stocks, crypto, or startups, but manage risk carefully.",
            ),
            RiskLevel::Unknown(_) => None,
        }
    }

    /// Returns true for `low`, `medium` and `high`.
    pub fn is_known(&self) -> bool {
        !matches!(self, RiskLevel::Unknown(_))
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for RiskLevel {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<String> for RiskLevel {
    fn from(label: String) -> Self {
        match label.as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Unknown(label),
        }
    }
}
