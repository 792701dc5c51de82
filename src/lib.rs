//! Personal finance health score.
//!
//! [`compute_score`] maps a [`FinancialProfile`] to a 0-750 point breakdown
//! across five areas; [`pick_tip`] draws a random improvement tip for an area.

pub mod config;
pub mod errors;
pub mod input;
pub mod models;
pub mod rating;
pub mod report;
pub mod savings;
pub mod score;
pub mod tips;

pub use models::{
    Area, AreaScore, FinancialProfile, Improvement, JobType, PartScore, SavingsEstimate,
    ScoreBreakdown, TipSuggestion,
};
pub use score::compute_score;
pub use tips::pick_tip;
