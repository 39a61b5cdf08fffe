//! Ranking stage — second, independent scoring pass plus top-N selection.

use tracing::debug;

use crate::opportunities::models::{
    OpportunityKind, OpportunityRecord, RiskLevel, RiskTolerance, ScoredOpportunity,
};

/// Ceiling for ranked scores. There is no floor.
pub const MAX_SCORE: i32 = 100;

const VOLATILITY_PENALTY: i32 = 10;
const CONSISTENCY_BONUS: i32 = 10;

/// Re-scores each discovery result. The discovery score is the starting point
/// and is replaced by the adjusted, clamped value.
pub fn rank<'a>(
    scored: &[ScoredOpportunity<'a>],
    risk_tolerance: Option<RiskTolerance>,
) -> Vec<ScoredOpportunity<'a>> {
    scored
        .iter()
        .map(|opp| {
            let score = adjust(opp.record, opp.score, risk_tolerance);
            debug!(id = opp.record.id, from = opp.score, to = score, "ranking score");
            opp.with_score(score)
        })
        .collect()
}

fn adjust(record: &OpportunityRecord, start: i32, risk_tolerance: Option<RiskTolerance>) -> i32 {
    let score = start
        + build_time_adjustment(record.build_days)
        + risk_alignment_bonus(risk_tolerance, record.risk_level)
        + consistency_adjustment(record.kind);
    score.min(MAX_SCORE)
}

/// Fastest tier wins.
fn build_time_adjustment(build_days: f64) -> i32 {
    if build_days <= 1.0 {
        25
    } else if build_days <= 7.0 {
        15
    } else if build_days <= 30.0 {
        5
    } else {
        -10
    }
}

fn risk_alignment_bonus(tolerance: Option<RiskTolerance>, risk: RiskLevel) -> i32 {
    match (tolerance, risk) {
        (Some(RiskTolerance::Low), RiskLevel::Low) => 20,
        (Some(RiskTolerance::Medium), RiskLevel::Medium) => 20,
        (Some(RiskTolerance::High), risk) if risk != RiskLevel::Low => 15,
        _ => 0,
    }
}

fn consistency_adjustment(kind: OpportunityKind) -> i32 {
    match kind {
        OpportunityKind::Token | OpportunityKind::Trading => -VOLATILITY_PENALTY,
        OpportunityKind::Saas | OpportunityKind::Service => CONSISTENCY_BONUS,
        _ => 0,
    }
}

/// Sorts descending by score and keeps the first `limit`.
/// The sort is stable, so equal scores keep their input (catalog) order.
pub fn select_top<'a>(
    mut ranked: Vec<ScoredOpportunity<'a>>,
    limit: usize,
) -> Vec<ScoredOpportunity<'a>> {
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}
