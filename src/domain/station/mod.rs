//! Station aggregate
//!
//! Contains the Station entity, its connectors, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Connector, ConnectorType, Station, StationPatch};
pub use repository::StationRepository;
