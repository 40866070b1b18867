//! Roentgen Core Domain
//!
//! Pure domain types for the Roentgen radiology messaging system.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;

// Re-export commonly used types at crate root
pub use entities::{RadiologyOrder, Urgency};
