// Opportunity discovery: static catalog, two scoring stages, top-N shortlist.
// Scoring is pure; only the handlers touch HTTP types.

pub mod catalog;
pub mod discovery;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod recommender;
pub mod revenue;
