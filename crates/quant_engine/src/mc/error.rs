//! Error types for the Monte Carlo engine.

use thiserror::Error;

/// Invalid-configuration errors for the Monte Carlo engine.
///
/// All variants are detected when a configuration or generator is
/// constructed, before any simulation work starts; there are no partial
/// results. Numeric outcomes of a simulation (negative rates, extreme
/// prices) are never errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Path count outside the valid range.
    #[error("invalid path count {0}: must be in range [1, 10000000]")]
    InvalidPathCount(usize),

    /// Step count outside the valid range.
    #[error("invalid step count {0}: must be in range [1, 10000]")]
    InvalidStepCount(usize),

    /// Non-positive or non-finite time horizon.
    #[error("invalid horizon {0}: must be positive and finite")]
    InvalidHorizon(f64),

    /// Invalid parameter value with name and description.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert!(SimulationError::InvalidPathCount(0)
            .to_string()
            .contains("invalid path count 0"));
        assert!(SimulationError::InvalidStepCount(20_000)
            .to_string()
            .contains("20000"));
        assert!(SimulationError::InvalidHorizon(-1.0)
            .to_string()
            .contains("-1"));

        let err = SimulationError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        };
        assert!(err.to_string().contains("n_paths"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SimulationError::InvalidPathCount(0);
        let _: &dyn std::error::Error = &err;
    }
}
