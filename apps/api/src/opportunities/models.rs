#![allow(dead_code)]

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Risk profile of a catalog opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Extreme,
}

/// How much risk the user says they will accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Error)]
#[error("Unknown riskTolerance '{0}' (expected low, medium or high)")]
pub struct UnknownRiskTolerance(pub String);

/// Exact, case-sensitive match on the wire values.
impl FromStr for RiskTolerance {
    type Err = UnknownRiskTolerance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskTolerance::Low),
            "medium" => Ok(RiskTolerance::Medium),
            "high" => Ok(RiskTolerance::High),
            _ => Err(UnknownRiskTolerance(s.to_string())),
        }
    }
}

/// Business model family. Drives the ranking stage's volatility bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    Token,
    Saas,
    Affiliate,
    Content,
    Service,
    Ecommerce,
    Trading,
}

impl OpportunityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityKind::Token => "token",
            OpportunityKind::Saas => "saas",
            OpportunityKind::Affiliate => "affiliate",
            OpportunityKind::Content => "content",
            OpportunityKind::Service => "service",
            OpportunityKind::Ecommerce => "ecommerce",
            OpportunityKind::Trading => "trading",
        }
    }
}

impl fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predefined business opportunity template. Lives in the static catalog and
/// is only ever borrowed by the scoring stages.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OpportunityKind,
    pub categories: &'static [&'static str],
    /// Estimated days to build; fractional for same-day launches.
    pub build_days: f64,
    pub min_revenue_target: u64,
    pub max_revenue_target: u64,
    pub effort: &'static str,
    pub risk_level: RiskLevel,
    pub roi: &'static str,
    pub revenue_projection: &'static str,
    pub build_time: &'static str,
    pub why_this_works: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

/// Preferences for a single recommendation request, with defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    pub goal: String,
    pub interests: Vec<String>,
    /// `None` when the caller sent a value outside low/medium/high; no risk rule matches it.
    pub risk_tolerance: Option<RiskTolerance>,
    pub timeframe: String,
}

/// A catalog record paired with the score one pipeline stage derived for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredOpportunity<'a> {
    pub record: &'a OpportunityRecord,
    pub score: i32,
}

impl<'a> ScoredOpportunity<'a> {
    pub fn new(record: &'a OpportunityRecord, score: i32) -> Self {
        Self { record, score }
    }

    /// Same record, new score. The receiver is left untouched.
    pub fn with_score(&self, score: i32) -> Self {
        Self {
            record: self.record,
            score,
        }
    }
}

/// Display-only template served by `GET /api/templates`.
/// Not used for scoring.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub effort: &'static str,
    pub roi: &'static str,
    #[serde(rename = "buildTime")]
    pub build_time: &'static str,
    pub category: &'static str,
}
