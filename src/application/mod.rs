//! Application layer: use-case services

pub mod services;

pub use services::{
    BookingService, ProfileService, Recommendation, RecommendationQuery, RecommendationService,
    StationDraft, StationService,
};
