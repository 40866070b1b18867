use super::Segment;
use crate::encoding::EncodingCharacters;
use crate::error::Hl7Error;

/// Field count of the ORC segment in v2.3.1
const ORC_FIELD_COUNT: usize = 19;

/// HL7 v2.3.1 Common Order (ORC) segment
///
/// Typed accessors cover the sub-fields the order mapping writes; the
/// remaining positions stay addressable through segments assembled by
/// hand if a caller ever needs them.
#[derive(Debug, Clone)]
pub struct OrcSegment {
    segment: Segment,
}

impl OrcSegment {
    pub fn new() -> Self {
        Self {
            segment: Segment::new("ORC", ORC_FIELD_COUNT),
        }
    }

    /// ORC-1: order control code
    pub fn order_control(&self) -> &str {
        self.segment.component(1, 1)
    }

    pub fn set_order_control(&mut self, value: &str) -> Result<(), Hl7Error> {
        self.segment.set_component(1, 1, value)
    }

    /// ORC-2.1: placer order number, entity identifier
    pub fn placer_order_number(&self) -> &str {
        self.segment.component(2, 1)
    }

    pub fn set_placer_order_number(&mut self, value: &str) -> Result<(), Hl7Error> {
        self.segment.set_component(2, 1, value)
    }

    /// ORC-7.4: quantity/timing, start date-time (time of an event)
    pub fn start_date_time(&self) -> &str {
        self.segment.component(7, 4)
    }

    pub fn set_start_date_time(&mut self, value: &str) -> Result<(), Hl7Error> {
        self.segment.set_component(7, 4, value)
    }

    /// ORC-7.6: quantity/timing, priority
    pub fn priority(&self) -> &str {
        self.segment.component(7, 6)
    }

    pub fn set_priority(&mut self, value: &str) -> Result<(), Hl7Error> {
        self.segment.set_component(7, 6, value)
    }

    /// Pipe/caret encode the segment
    pub fn encode(&self, encoding: &EncodingCharacters) -> String {
        self.segment.encode(encoding)
    }
}

impl Default for OrcSegment {
    fn default() -> Self {
        Self::new()
    }
}
