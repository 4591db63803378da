//! Shared domain types and errors for the tracklog service.

pub mod error;
pub mod timespan;
pub mod types;
