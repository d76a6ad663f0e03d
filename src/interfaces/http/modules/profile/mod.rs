//! Profile endpoints

pub mod dto;
pub mod handlers;

pub use dto::{ProfileResponse, UpdateProfileRequest};
pub use handlers::ProfileAppState;
