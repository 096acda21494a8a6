//! CLI error handling.

use thiserror::Error;

/// Errors surfaced by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command-line argument combination.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Simulation configuration rejected by the engine.
    #[error(transparent)]
    Simulation(#[from] quant_engine::SimulationError),

    /// Closed-form pricer rejected its inputs.
    #[error(transparent)]
    Analytical(#[from] quant_models::analytical::AnalyticalError),

    /// Value-at-risk inputs rejected.
    #[error(transparent)]
    Risk(#[from] quant_risk::RiskError),

    /// Price series could not be loaded or was too short.
    #[error(transparent)]
    Data(#[from] quant_core::DataError),

    /// JSON serialisation failure.
    #[error("failed to serialise output: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
