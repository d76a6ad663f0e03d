//! # ChargeSpot Service
//!
//! Backend for an EV charging-station discovery and booking application:
//! station directory, bookings, AI-assisted station recommendations and an
//! operator dashboard API.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, invariants and repository traits
//! - **application**: Use-case services (stations, bookings, recommendations)
//! - **infrastructure**: External concerns (database, crypto, LLM client)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error taxonomy and cross-cutting helpers

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::database::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
