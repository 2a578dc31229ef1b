//! Statistics aggregation over batches of trials.
//!
//! [`run_analysis`] fans trials out with rayon, one independently seeded
//! coin source per trial, and tallies meetings per anti-diagonal cell.
//! [`build_report`] turns the tallies into the serializable
//! [`AnalysisReport`] handed to callers, with the empirical estimate checked
//! against the exact model (standard error and z-score).

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;

use super::coin::CoinBuffer;
use super::engine::simulate_trial;
use super::theory::{
    conditional_point_distribution, exact_meeting_probability, theoretical_probability,
};
use crate::constants::point_label;
use crate::error::SimError;
use crate::types::meeting_points;

/// Tallied outcome of a batch of trials.
#[derive(Clone, Debug)]
pub struct AggregateResult {
    pub grid_size: usize,
    pub trial_count: usize,
    pub meeting_count: u64,
    /// Meetings per anti-diagonal cell, indexed by the cell's x-coordinate.
    pub per_point_counts: Vec<u64>,
    pub seed: u64,
    pub elapsed: Duration,
}

impl AggregateResult {
    /// meetings / trials.
    pub fn empirical_probability(&self) -> f64 {
        self.meeting_count as f64 / self.trial_count as f64
    }

    /// Share of meetings that landed on each cell; all zeros when no trial met.
    pub fn per_point_probabilities(&self) -> Vec<f64> {
        if self.meeting_count == 0 {
            return vec![0.0; self.per_point_counts.len()];
        }
        self.per_point_counts
            .iter()
            .map(|&c| c as f64 / self.meeting_count as f64)
            .collect()
    }
}

/// Run `trials` independent trials on an n×n grid and tally the outcomes.
///
/// Trials are embarrassingly parallel; each gets its own [`CoinBuffer`]
/// seeded `seed + trial_index`, so a fixed seed reproduces the same tallies
/// regardless of thread count.
pub fn run_analysis(
    grid_size: usize,
    trials: usize,
    seed: u64,
) -> Result<AggregateResult, SimError> {
    if grid_size < 1 {
        return Err(SimError::InvalidParameter {
            name: "grid_size",
            value: grid_size,
        });
    }
    if trials < 1 {
        return Err(SimError::InvalidParameter {
            name: "trials",
            value: trials,
        });
    }

    let start = Instant::now();
    let outcomes: Vec<Option<usize>> = (0..trials)
        .into_par_iter()
        .map(|i| {
            let mut coin = CoinBuffer::new(seed.wrapping_add(i as u64));
            simulate_trial(grid_size, &mut coin).meeting_point_index()
        })
        .collect();

    Ok(aggregate_outcomes(grid_size, seed, &outcomes, start.elapsed()))
}

/// Tally per-cell meeting outcomes. A partial batch (the caller stopped
/// requesting trials early) aggregates the same way and stays consistent.
pub fn aggregate_outcomes(
    grid_size: usize,
    seed: u64,
    outcomes: &[Option<usize>],
    elapsed: Duration,
) -> AggregateResult {
    let mut per_point_counts = vec![0u64; grid_size];
    let mut meeting_count = 0u64;
    for outcome in outcomes {
        if let Some(i) = outcome {
            per_point_counts[*i] += 1;
            meeting_count += 1;
        }
    }
    AggregateResult {
        grid_size,
        trial_count: outcomes.len(),
        meeting_count,
        per_point_counts,
        seed,
        elapsed,
    }
}

// ── Report ──────────────────────────────────────────────────────────

/// Serializable summary of a batch: empirical estimate, both model values,
/// and the per-point table the analysis view renders.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub grid_size: usize,
    pub trials: usize,
    pub seed: u64,
    pub meeting_count: u64,
    pub empirical_probability: f64,
    /// The 1/n closed form shown alongside the empirical estimate.
    pub theoretical_probability: f64,
    /// C(2n-2, n-1) / 4^(n-1) — the value the estimate converges to.
    pub exact_probability: f64,
    /// Binomial standard error of the empirical estimate at the exact value.
    pub std_error: f64,
    /// (empirical - exact) / std_error.
    pub z_score: f64,
    pub points: Vec<MeetingPointReport>,
}

/// One anti-diagonal cell in the report.
#[derive(Debug, Serialize)]
pub struct MeetingPointReport {
    pub label: String,
    pub x: i32,
    pub y: i32,
    pub count: u64,
    /// Share of all meetings that landed here.
    pub share: f64,
    /// Share predicted by the path counts: C(n-1,i)^2 / C(2n-2,n-1).
    pub expected_share: f64,
}

/// Build the report for a tallied batch.
pub fn build_report(agg: &AggregateResult) -> AnalysisReport {
    let n = agg.grid_size;
    let exact = exact_meeting_probability(n);
    let empirical = agg.empirical_probability();
    let std_error = (exact * (1.0 - exact) / agg.trial_count as f64).sqrt();
    let z_score = if std_error > 0.0 {
        (empirical - exact) / std_error
    } else {
        0.0
    };

    let shares = agg.per_point_probabilities();
    let expected = conditional_point_distribution(n);
    let points = meeting_points(n)
        .iter()
        .enumerate()
        .map(|(i, p)| MeetingPointReport {
            label: point_label(i),
            x: p.x,
            y: p.y,
            count: agg.per_point_counts[i],
            share: shares[i],
            expected_share: expected[i],
        })
        .collect();

    AnalysisReport {
        grid_size: n,
        trials: agg.trial_count,
        seed: agg.seed,
        meeting_count: agg.meeting_count,
        empirical_probability: empirical,
        theoretical_probability: theoretical_probability(n),
        exact_probability: exact,
        std_error,
        z_score,
        points,
    }
}

/// Save a report as pretty JSON, creating parent directories.
pub fn save_report(report: &AnalysisReport, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(report).expect("Failed to serialize report");
    std::fs::write(path, json).expect("Failed to write report file");
}
