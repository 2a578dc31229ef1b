//! # Gridmeet — Meeting Probability for Converging Grid Walks
//!
//! Two walkers start at opposite corners of an n×n grid. Every round each
//! flips a fair coin to pick an axis, and moves one cell along it — always
//! toward the other walker's corner (the near walker only east/north, the
//! far walker only west/south). After exactly n-1 rounds, did they land on
//! the same cell?
//!
//! | Component | Module | Description |
//! |-----------|--------|-------------|
//! | Walk simulator | [`simulation::engine`] | One trial: both walkers, n-1 rounds, full paths |
//! | Statistics aggregator | [`simulation::statistics`] | Parallel batches, per-cell meeting tallies, report |
//! | Probability model | [`simulation::theory`] | Closed-form values the empirical estimate is checked against |
//!
//! ## Geometry
//!
//! The near walker starts at (0,0) and its coordinate sum grows by one per
//! round; the far walker starts at (n-1,n-1) and its sum shrinks by one.
//! The sums agree only after round n-1, so the walkers can share a cell only
//! at the very end, and only on the SE-NW anti-diagonal
//! {(i, n-1-i) : 0 ≤ i < n} — the n possible meeting points.
//!
//! ## Entry points
//!
//! - [`simulation::run_trial`] — one trial from any [`simulation::CoinSource`]
//! - [`simulation::run_analysis`] — a seeded, rayon-parallel batch of trials
//! - [`simulation::theoretical_probability`] — the 1/n closed form
//! - [`simulation::exact_meeting_probability`] — C(2n-2, n-1) / 4^(n-1),
//!   the value the empirical estimate converges to
//!
//! The binaries (`gridmeet-simulate`, `gridmeet-server`) and the axum router
//! in [`server`] are thin callers over these entry points.

pub mod constants;
pub mod env_config;
pub mod error;
pub mod server;
pub mod simulation;
pub mod types;
