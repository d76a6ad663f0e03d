//! Booking endpoints

pub mod dto;
pub mod handlers;

pub use dto::{BookingResponse, CreateBookingRequest};
pub use handlers::BookingAppState;
