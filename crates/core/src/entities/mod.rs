mod order;
mod urgency;

pub use order::RadiologyOrder;
pub use urgency::Urgency;
