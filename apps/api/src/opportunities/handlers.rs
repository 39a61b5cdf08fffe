//! Axum route handlers for the Opportunities API.

use anyhow::anyhow;
use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::opportunities::catalog::TEMPLATES;
use crate::opportunities::models::{
    BusinessTemplate, OpportunityKind, RiskTolerance, ScoredOpportunity, UserPreferences,
};
use crate::state::AppState;

pub const MISSING_GOAL: &str =
    "Missing required field: goal (e.g., \"Make me $10K/month passive income\")";

const NEXT_STEP: &str = "Choose one opportunity and we'll build it for you";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOpportunitiesRequest {
    pub goal: Option<String>,
    pub interests: Option<Vec<String>>,
    pub risk_tolerance: Option<String>,
    pub timeframe: Option<String>,
}

impl FindOpportunitiesRequest {
    /// Validates the request and fills in configured defaults.
    /// Empty strings count as absent. A risk tolerance outside low/medium/high
    /// is accepted and simply matches no risk rule.
    pub fn into_preferences(self, config: &Config) -> Result<UserPreferences, AppError> {
        let goal = self
            .goal
            .filter(|g| !g.trim().is_empty())
            .ok_or_else(|| AppError::Validation(MISSING_GOAL.to_string()))?;

        let risk_tolerance = match self.risk_tolerance.filter(|r| !r.is_empty()) {
            Some(raw) => raw.parse::<RiskTolerance>().ok(),
            None => Some(config.default_risk_tolerance),
        };

        Ok(UserPreferences {
            goal,
            interests: self.interests.unwrap_or_default(),
            risk_tolerance,
            timeframe: self
                .timeframe
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| config.default_timeframe.clone()),
        })
    }
}

/// Display subset of a ranked opportunity.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunitySummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub estimated_effort: &'static str,
    #[serde(rename = "estimatedROI")]
    pub estimated_roi: &'static str,
    pub revenue_projection: &'static str,
    pub score: i32,
    pub why_this_works: &'static str,
    pub build_time: &'static str,
}

impl From<ScoredOpportunity<'static>> for OpportunitySummary {
    fn from(opp: ScoredOpportunity<'static>) -> Self {
        let record = opp.record;
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            kind: record.kind,
            estimated_effort: record.effort,
            estimated_roi: record.roi,
            revenue_projection: record.revenue_projection,
            score: opp.score,
            why_this_works: record.why_this_works,
            build_time: record.build_time,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOpportunitiesResponse {
    pub success: bool,
    pub user_goal: String,
    pub opportunities: Vec<OpportunitySummary>,
    pub next_step: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub success: bool,
    pub templates: &'static [BusinessTemplate],
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/opportunities
///
/// Scores the catalog against the caller's goal and preferences and returns
/// the configured number of best matches.
pub async fn handle_find_opportunities(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<FindOpportunitiesResponse>, AppError> {
    // Parsed regardless of Content-Type. A body that is not valid JSON is an
    // unexpected failure, not a validation error.
    let request: FindOpportunitiesRequest = serde_json::from_slice(&body)
        .map_err(|e| anyhow!("Request body is not valid JSON: {e}"))?;

    let prefs = request.into_preferences(&state.config)?;

    let shortlist = state
        .recommender
        .recommend(&prefs, state.config.shortlist_size)?;

    info!(
        goal = %prefs.goal,
        risk_tolerance = ?prefs.risk_tolerance,
        backend = state.recommender.backend(),
        returned = shortlist.len(),
        "Recommended opportunities"
    );

    Ok(Json(FindOpportunitiesResponse {
        success: true,
        user_goal: prefs.goal,
        opportunities: shortlist.into_iter().map(OpportunitySummary::from).collect(),
        next_step: NEXT_STEP,
    }))
}

/// GET /api/templates
///
/// Returns the display-only business template list.
pub async fn handle_list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        success: true,
        templates: TEMPLATES,
        count: TEMPLATES.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(goal: Option<&str>) -> FindOpportunitiesRequest {
        FindOpportunitiesRequest {
            goal: goal.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let prefs = request(Some("Make me $10K/month"))
            .into_preferences(&Config::default())
            .unwrap();
        assert_eq!(prefs.risk_tolerance, Some(RiskTolerance::Medium));
        assert_eq!(prefs.timeframe, "3-6 months");
        assert!(prefs.interests.is_empty());
    }

    #[test]
    fn test_missing_goal_is_validation_error() {
        let err = request(None).into_preferences(&Config::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_goal_is_validation_error() {
        let err = request(Some("   ")).into_preferences(&Config::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_risk_tolerance_uses_default() {
        let req = FindOpportunitiesRequest {
            goal: Some("$1K".to_string()),
            risk_tolerance: Some(String::new()),
            timeframe: Some(String::new()),
            ..Default::default()
        };
        let config = Config {
            default_risk_tolerance: RiskTolerance::High,
            default_timeframe: "2 weeks".to_string(),
            ..Config::default()
        };
        let prefs = req.into_preferences(&config).unwrap();
        assert_eq!(prefs.risk_tolerance, Some(RiskTolerance::High));
        assert_eq!(prefs.timeframe, "2 weeks");
    }

    #[test]
    fn test_unknown_risk_tolerance_is_accepted_without_a_rule() {
        for raw in ["aggressive", "HIGH"] {
            let req = FindOpportunitiesRequest {
                goal: Some("$10K".to_string()),
                risk_tolerance: Some(raw.to_string()),
                ..Default::default()
            };
            let prefs = req.into_preferences(&Config::default()).unwrap();
            assert_eq!(prefs.risk_tolerance, None, "{raw}");
        }
    }

    #[test]
    fn test_request_uses_camel_case_fields() {
        let req: FindOpportunitiesRequest = serde_json::from_str(
            r#"{"goal": "$5K", "riskTolerance": "low", "timeframe": "1 week", "interests": ["saas"]}"#,
        )
        .unwrap();
        assert_eq!(req.risk_tolerance.as_deref(), Some("low"));
        assert_eq!(req.interests.unwrap(), vec!["saas".to_string()]);
    }

    #[test]
    fn test_summary_uses_wire_names() {
        let record = crate::opportunities::catalog::find_record("niche-saas").unwrap();
        let summary = OpportunitySummary::from(ScoredOpportunity::new(record, 88));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["type"], "saas");
        assert_eq!(json["estimatedROI"], "2-5x per customer (recurring)");
        assert_eq!(json["estimatedEffort"], "Medium");
        assert_eq!(json["whyThisWorks"], record.why_this_works);
        assert_eq!(json["score"], 88);
    }
}
