//! Shared defaults and meeting-point labeling.

/// Default grid dimension for the binaries (5×5).
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Default batch size for the binaries.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Default RNG seed for the binaries.
pub const DEFAULT_SEED: u64 = 42;

/// Display label for anti-diagonal cell `index`: A, B, C, … for the first
/// 26 cells, then P26, P27, … (grids that large are past human-legible
/// labeling anyway).
pub fn point_label(index: usize) -> String {
    if index < 26 {
        ((b'A' + index as u8) as char).to_string()
    } else {
        format!("P{}", index)
    }
}
