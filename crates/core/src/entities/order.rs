use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Urgency;

/// A radiology order as placed in the host system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiologyOrder {
    /// Internal database identifier
    pub order_id: i32,
    /// Assigned at placement; absent for orders still being drafted
    pub order_number: Option<String>,
    pub urgency: Urgency,
    /// Intended start for orders placed for a scheduled date
    pub scheduled_date: Option<NaiveDateTime>,
    /// When the order entered the system
    pub date_activated: Option<NaiveDateTime>,
}

impl RadiologyOrder {
    /// Create a new routine order with nothing else set
    pub fn new(order_id: i32) -> Self {
        Self {
            order_id,
            order_number: None,
            urgency: Urgency::Routine,
            scheduled_date: None,
            date_activated: None,
        }
    }

    /// The date-time the order takes effect
    ///
    /// The scheduled date for orders placed for a scheduled date,
    /// otherwise the activation date.
    pub fn effective_start_date(&self) -> Option<NaiveDateTime> {
        match self.urgency {
            Urgency::OnScheduledDate => self.scheduled_date,
            _ => self.date_activated,
        }
    }
}
