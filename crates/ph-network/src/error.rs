use ph_core::StationId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("station {0} is not part of the topology")]
    UnknownStation(StationId),

    #[error("no station named {0:?}")]
    UnknownStationName(String),

    #[error("{0:?} is the hub, not a spoke station")]
    HubNotASpoke(String),

    #[error("invalid destination {destination} for a package from {origin}")]
    InvalidDestination {
        origin:      StationId,
        destination: StationId,
    },

    #[error("topology error: {0}")]
    Topology(String),

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
