use ph_core::VehicleId;
use ph_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("vehicle {0} not found")]
    UnknownVehicle(VehicleId),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type FleetResult<T> = Result<T, FleetError>;
