//! Cross-cutting types shared by every layer

pub mod errors;
pub mod shutdown;

pub use errors::DomainError;
