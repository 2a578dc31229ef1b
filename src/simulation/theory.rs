//! Closed-form probability model — the aggregator's validation oracle.
//!
//! The walkers' endpoints are independent: the near walker ends on
//! anti-diagonal cell i with probability C(n-1,i)/2^(n-1), and the far
//! walker does too (by symmetry), so a meeting at cell i has joint weight
//! C(n-1,i)^2/4^(n-1). Summed over all cells this is C(2n-2,n-1)/4^(n-1)
//! (Vandermonde) — the value the empirical estimate converges to.
//!
//! [`theoretical_probability`] is the companion 1/n closed form the analysis
//! layer displays next to the empirical estimate. The two coincide for
//! n = 1 and n = 2 and diverge from n = 3 up, so convergence checks use
//! [`exact_meeting_probability`] while reports show both.
//!
//! Binomial coefficients are evaluated in log space, so large n cannot
//! overflow.

/// Closed-form meeting-probability model: 1/n.
pub fn theoretical_probability(grid_size: usize) -> f64 {
    debug_assert!(grid_size >= 1);
    1.0 / grid_size as f64
}

/// ln C(n, k), accumulated term by term. Overflow-free for any practical n.
fn ln_binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    let mut acc = 0.0f64;
    for j in 0..k {
        acc += ((n - j) as f64).ln() - ((j + 1) as f64).ln();
    }
    acc
}

/// Exact meeting probability: C(2n-2, n-1) / 4^(n-1).
pub fn exact_meeting_probability(grid_size: usize) -> f64 {
    debug_assert!(grid_size >= 1);
    let m = grid_size - 1;
    (ln_binomial(2 * m, m) - m as f64 * 4.0f64.ln()).exp()
}

/// Joint probability of meeting at each anti-diagonal cell:
/// C(n-1,i)^2 / 4^(n-1), indexed by the cell's x-coordinate.
pub fn meeting_point_weights(grid_size: usize) -> Vec<f64> {
    debug_assert!(grid_size >= 1);
    let m = grid_size - 1;
    (0..grid_size)
        .map(|i| (2.0 * ln_binomial(m, i) - m as f64 * 4.0f64.ln()).exp())
        .collect()
}

/// Distribution over meeting cells conditional on a meeting: the joint
/// weights normalized by the exact total.
pub fn conditional_point_distribution(grid_size: usize) -> Vec<f64> {
    let total = exact_meeting_probability(grid_size);
    meeting_point_weights(grid_size)
        .into_iter()
        .map(|w| w / total)
        .collect()
}
