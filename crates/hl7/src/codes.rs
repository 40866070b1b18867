//! Wire codes used in the Common Order segment

use serde::{Deserialize, Serialize};

/// Order control codes for ORC-1 (HL7 table 0119)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderControl {
    /// New order
    NewOrder,
    /// Cancel order request
    CancelOrder,
    /// Discontinue order request
    DiscontinueRequest,
}

impl OrderControl {
    /// The code placed on the wire, verbatim
    pub fn code(&self) -> &'static str {
        match self {
            Self::NewOrder => "NW",
            Self::CancelOrder => "CA",
            Self::DiscontinueRequest => "DC",
        }
    }
}

/// Priority codes for the ORC-7 quantity/timing priority component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderPriority {
    /// With highest priority
    Stat,
    /// As soon as possible, a priority lower than stat
    Asap,
    /// Routine service
    Routine,
    /// To be done prior to a surgical procedure
    PreOp,
    /// Filler should contact the placer regarding scheduling
    Callback,
    /// Critical to come as close as possible to the requested time
    TimingCritical,
}

impl OrderPriority {
    /// The code placed on the wire, verbatim
    pub fn code(&self) -> &'static str {
        match self {
            Self::Stat => "S",
            Self::Asap => "A",
            Self::Routine => "R",
            Self::PreOp => "P",
            Self::Callback => "C",
            Self::TimingCritical => "T",
        }
    }
}
