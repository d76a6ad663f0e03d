//! Station directory endpoints

pub mod dto;
pub mod handlers;

pub use dto::{
    ConnectorDto, CoordinatesDto, CreateStationRequest, StationResponse, UpdateStationRequest,
};
pub use handlers::StationAppState;
