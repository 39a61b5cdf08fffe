use std::sync::Arc;

use crate::config::Config;
use crate::opportunities::recommender::OpportunityRecommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable recommender. Default: HeuristicRecommender over the static catalog.
    pub recommender: Arc<dyn OpportunityRecommender>,
}
