//! Meeting simulation and statistics.
//!
//! - [`coin`]: fair-coin sources (injectable trait + SplitMix64 bit-buffer fast path)
//! - [`engine`]: core simulation (one trial of two converging walkers)
//! - [`statistics`]: parallel batch runner, aggregate tallies, and the report
//! - [`theory`]: closed-form probability model used as the validation oracle

pub mod coin;
pub mod engine;
pub mod statistics;
pub mod theory;

// Re-export commonly used items
pub use coin::{Coin, CoinBuffer, CoinSource, SplitMix64};
pub use engine::{run_trial, run_trial_with_seed, TrialResult};
pub use statistics::{
    aggregate_outcomes, build_report, run_analysis, save_report, AggregateResult, AnalysisReport,
    MeetingPointReport,
};
pub use theory::{
    conditional_point_distribution, exact_meeting_probability, meeting_point_weights,
    theoretical_probability,
};
