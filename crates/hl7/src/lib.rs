//! Roentgen HL7
//!
//! HL7 v2.3.1 wire layer for the Roentgen radiology messaging system.
//! Provides:
//! - Pipe/caret encoding characters and a segment encoder
//! - A position-addressable segment model with a typed ORC wrapper
//! - Order control and priority wire codes
//! - Mapping from a radiology order into the Common Order segment
//!
//! Message transport and the decode side of the wire format are out of
//! scope here; callers assemble populated segments into messages
//! themselves.

pub mod codes;
pub mod datetime;
pub mod encoding;
pub mod error;
pub mod populate;
pub mod segment;

// Re-export commonly used types
pub use codes::{OrderControl, OrderPriority};
pub use encoding::EncodingCharacters;
pub use error::Hl7Error;
pub use populate::populate_common_order;
pub use segment::{OrcSegment, Segment};
