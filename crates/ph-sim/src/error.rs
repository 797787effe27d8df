use ph_core::CoreError;
use ph_fleet::FleetError;
use ph_network::NetworkError;
use thiserror::Error;

/// Every error the engine can report.  All are raised before any state is
/// touched.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("step delta must be a positive number of seconds that keeps the clock in range, got {0}")]
    InvalidStepDelta(u64),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Fleet(#[from] FleetError),
}

pub type SimResult<T> = Result<T, SimError>;
