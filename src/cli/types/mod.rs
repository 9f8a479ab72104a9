//! Type-safe wrappers and enums for Club Log league filters.

pub mod filters;
pub mod ids;

pub use filters::{DateRange, Deleted, Mode, Qsl, QueryCode};
pub use ids::ClubId;
