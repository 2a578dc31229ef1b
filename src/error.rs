//! Error taxonomy for the simulation entry points.

use thiserror::Error;

/// Errors surfaced by [`crate::simulation::run_trial`] and
/// [`crate::simulation::run_analysis`]. All are deterministic functions of
/// the input parameters, raised before any simulation work starts; nothing
/// is retried internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// A parameter was below its minimum of 1.
    #[error("invalid parameter: {name} must be >= 1, got {value}")]
    InvalidParameter { name: &'static str, value: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = SimError::InvalidParameter {
            name: "grid_size",
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter: grid_size must be >= 1, got 0"
        );
    }
}
