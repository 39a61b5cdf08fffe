//! Discovery stage — first scoring pass over the catalog.
//!
//! Every record starts at `BASE_SCORE` and collects bonuses for:
//! 1. revenue band (parsed goal vs record minimum target)
//! 2. build speed (timeframe wording vs build days)
//! 3. risk alignment
//! 4. interest overlap with record categories
//!
//! No clamp is applied here; the ranking stage caps the final score.

use std::collections::HashSet;

use tracing::debug;

use crate::opportunities::models::{
    OpportunityRecord, RiskLevel, RiskTolerance, ScoredOpportunity, UserPreferences,
};
use crate::opportunities::revenue::parse_revenue_goal;

pub const BASE_SCORE: i32 = 50;

const REVENUE_BAND_BONUS: i32 = 20;
const BUILD_SPEED_BONUS: i32 = 15;
const LOW_RISK_MATCH_BONUS: i32 = 15;
const RISK_ACCEPTED_BONUS: i32 = 10;
const INTEREST_MATCH_BONUS: i32 = 10;

/// Scores every record in `catalog` against `prefs`, preserving catalog order.
pub fn discover<'a>(
    catalog: &'a [OpportunityRecord],
    prefs: &UserPreferences,
) -> Vec<ScoredOpportunity<'a>> {
    let revenue_target = parse_revenue_goal(&prefs.goal);
    let interests = normalized_interests(&prefs.interests);

    catalog
        .iter()
        .map(|record| {
            let score = BASE_SCORE
                + revenue_band_bonus(revenue_target, record)
                + build_speed_bonus(&prefs.timeframe, record)
                + risk_bonus(prefs.risk_tolerance, record.risk_level)
                + interest_bonus(&interests, record);
            debug!(id = record.id, score, "discovery score");
            ScoredOpportunity::new(record, score)
        })
        .collect()
}

/// The three bands share their thresholds, so at most one fires.
fn revenue_band_bonus(target: u64, record: &OpportunityRecord) -> i32 {
    let min = record.min_revenue_target;
    let matched = (target <= 1_000 && min <= 1_000)
        || (target > 1_000 && target <= 5_000 && min <= 5_000)
        || (target > 5_000 && min > 5_000);

    if matched {
        REVENUE_BAND_BONUS
    } else {
        0
    }
}

/// "week" and "month" are checked independently; both may fire.
fn build_speed_bonus(timeframe: &str, record: &OpportunityRecord) -> i32 {
    let mut bonus = 0;
    if timeframe.contains("week") && record.build_days <= 7.0 {
        bonus += BUILD_SPEED_BONUS;
    }
    if timeframe.contains("month") && record.build_days <= 30.0 {
        bonus += BUILD_SPEED_BONUS;
    }
    bonus
}

fn risk_bonus(tolerance: Option<RiskTolerance>, risk: RiskLevel) -> i32 {
    match tolerance {
        Some(RiskTolerance::Low) if risk == RiskLevel::Low => LOW_RISK_MATCH_BONUS,
        Some(RiskTolerance::Medium) if risk != RiskLevel::Extreme => RISK_ACCEPTED_BONUS,
        Some(RiskTolerance::High) => RISK_ACCEPTED_BONUS,
        _ => 0,
    }
}

fn interest_bonus(interests: &[String], record: &OpportunityRecord) -> i32 {
    let categories: Vec<String> = record
        .categories
        .iter()
        .map(|c| c.to_lowercase())
        .collect();

    let matches = interests
        .iter()
        .filter(|interest| categories.iter().any(|c| c.contains(interest.as_str())))
        .count();

    matches as i32 * INTEREST_MATCH_BONUS
}

/// Lowercases and de-duplicates interests. An empty interest is kept and
/// matches every record.
fn normalized_interests(interests: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    interests
        .iter()
        .map(|i| i.to_lowercase())
        .filter(|i| seen.insert(i.clone()))
        .collect()
}
