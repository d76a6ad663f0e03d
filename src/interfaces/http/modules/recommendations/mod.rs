//! AI recommendation endpoint

pub mod dto;
pub mod handlers;

pub use dto::{RecommendationRequest, RecommendationResponse};
pub use handlers::RecommendationAppState;
