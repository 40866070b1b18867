//! Error types for the HL7 wire layer

use thiserror::Error;

/// Errors raised by the HL7 wire layer
#[derive(Error, Debug)]
pub enum Hl7Error {
    /// A caller violated a precondition; the message is the contract text
    #[error("{0}")]
    InvalidArgument(String),

    /// A value cannot be represented in the segment's wire format
    #[error("data type error at {location}: {reason}")]
    DataType { location: String, reason: String },
}
