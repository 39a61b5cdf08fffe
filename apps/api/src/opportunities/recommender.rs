//! Recommender — pluggable, trait-based shortlist builder.
//!
//! Default: `HeuristicRecommender` (discovery → ranking → top-N over the static catalog).
//!
//! `AppState` holds an `Arc<dyn OpportunityRecommender>`, chosen at startup.

use crate::errors::AppError;
use crate::opportunities::catalog::CATALOG;
use crate::opportunities::discovery::discover;
use crate::opportunities::models::{OpportunityRecord, ScoredOpportunity, UserPreferences};
use crate::opportunities::ranking::{rank, select_top};

/// Implement this to swap recommendation backends without touching the
/// handler or router.
pub trait OpportunityRecommender: Send + Sync {
    /// Returns at most `limit` opportunities, best first.
    fn recommend(
        &self,
        prefs: &UserPreferences,
        limit: usize,
    ) -> Result<Vec<ScoredOpportunity<'static>>, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Fixed weighted-sum heuristic. Stateless and deterministic: identical
/// preferences always yield the identical ordered shortlist.
pub struct HeuristicRecommender {
    catalog: &'static [OpportunityRecord],
}

impl HeuristicRecommender {
    pub fn new(catalog: &'static [OpportunityRecord]) -> Self {
        Self { catalog }
    }
}

impl Default for HeuristicRecommender {
    fn default() -> Self {
        Self::new(CATALOG)
    }
}

impl OpportunityRecommender for HeuristicRecommender {
    fn recommend(
        &self,
        prefs: &UserPreferences,
        limit: usize,
    ) -> Result<Vec<ScoredOpportunity<'static>>, AppError> {
        let discovered = discover(self.catalog, prefs);
        let ranked = rank(&discovered, prefs.risk_tolerance);
        Ok(select_top(ranked, limit))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opportunities::models::RiskTolerance;
    use crate::opportunities::ranking::MAX_SCORE;

    fn ten_k_crypto() -> UserPreferences {
        UserPreferences {
            goal: "Make me $10K/month".to_string(),
            interests: vec!["crypto".to_string()],
            risk_tolerance: Some(RiskTolerance::Medium),
            timeframe: "3 months".to_string(),
        }
    }

    fn ids(shortlist: &[ScoredOpportunity<'_>]) -> Vec<&'static str> {
        shortlist.iter().map(|s| s.record.id).collect()
    }

    #[test]
    fn test_end_to_end_top_three() {
        let shortlist = HeuristicRecommender::default()
            .recommend(&ten_k_crypto(), 3)
            .unwrap();

        // token-launch, niche-saas, affiliate-network, automated-service and
        // ecommerce-ai all clamp to 100; catalog order breaks the tie.
        assert_eq!(ids(&shortlist), vec!["token-launch", "niche-saas", "affiliate-network"]);
        assert!(shortlist.iter().all(|s| s.score == MAX_SCORE));
    }

    #[test]
    fn test_shortlist_sorted_descending() {
        let shortlist = HeuristicRecommender::default()
            .recommend(&ten_k_crypto(), CATALOG.len())
            .unwrap();
        assert_eq!(shortlist.len(), CATALOG.len());
        assert!(shortlist.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_volatility_bias_all_else_equal() {
        // Same starting score for every record isolates the ranking adjustments.
        let flat: Vec<ScoredOpportunity<'static>> =
            CATALOG.iter().map(|r| ScoredOpportunity::new(r, 0)).collect();
        let ranked = rank(&flat, Some(RiskTolerance::Medium));
        let score = |id: &str| ranked.iter().find(|s| s.record.id == id).unwrap().score;

        // token-launch vs affiliate-network: same build tier, no risk bonus for either.
        assert_eq!(score("token-launch"), score("affiliate-network") - 10);
        // niche-saas vs ecommerce-ai: same build tier, both medium risk.
        assert_eq!(score("niche-saas"), score("ecommerce-ai") + 10);
        // trading-bot vs content-monetization: 8–30 day tier, no risk bonus.
        assert_eq!(score("trading-bot"), score("content-monetization") - 10);
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let recommender = HeuristicRecommender::default();
        let first = recommender.recommend(&ten_k_crypto(), 3).unwrap();
        let second = recommender.recommend(&ten_k_crypto(), 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_ranked_scores_capped() {
        let recommender = HeuristicRecommender::default();
        for risk in [RiskTolerance::Low, RiskTolerance::Medium, RiskTolerance::High] {
            let prefs = UserPreferences {
                goal: "$500".to_string(),
                interests: vec!["quick".to_string(), "crypto".to_string(), "saas".to_string()],
                risk_tolerance: Some(risk),
                timeframe: "a few weeks, maybe a month".to_string(),
            };
            let shortlist = recommender.recommend(&prefs, CATALOG.len()).unwrap();
            assert!(shortlist.iter().all(|s| s.score <= MAX_SCORE));
        }
    }

    #[test]
    fn test_unrecognised_tolerance_skips_risk_rules() {
        let recommender = HeuristicRecommender::default();
        let unknown = UserPreferences {
            risk_tolerance: None,
            ..ten_k_crypto()
        };
        let shortlist = recommender.recommend(&unknown, CATALOG.len()).unwrap();
        let score = |id: &str| shortlist.iter().find(|s| s.record.id == id).unwrap().score;

        // discovery 50 + month(15) + crypto(10), ranking + 25 - 10
        assert_eq!(score("token-launch"), 90);
        // discovery 50 + month(15), ranking + 15 + 10
        assert_eq!(score("niche-saas"), 90);
        // discovery 50 + month(15), ranking + 5
        assert_eq!(score("content-monetization"), 70);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(HeuristicRecommender::default().backend(), "heuristic");
    }
}
