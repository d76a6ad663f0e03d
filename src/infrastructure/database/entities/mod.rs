//! Database entities module

pub mod booking;
pub mod connector;
pub mod profile;
pub mod seed_marker;
pub mod station;
pub mod user;

pub use booking::Entity as Booking;
pub use connector::Entity as Connector;
pub use profile::Entity as Profile;
pub use seed_marker::Entity as SeedMarker;
pub use station::Entity as Station;
pub use user::Entity as User;
