use serde::{Deserialize, Serialize};

/// How urgently an order should be carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    /// Carried out in the normal course of work
    Routine,
    /// Carried out immediately
    Stat,
    /// Carried out on the date the order was scheduled for
    OnScheduledDate,
}
