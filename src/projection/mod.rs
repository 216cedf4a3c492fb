//! Multi-year projection of converted compensation

mod state;
mod engine;
mod series;

pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine};
pub use series::{
    percent_difference, ProjectionPoint, ProjectionResult, ProjectionSeries, ProjectionSummary,
    Verdict, YearComparison, EQUIVALENCE_BAND_PCT,
};
