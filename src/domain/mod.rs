pub mod hours;
pub mod models;

pub use hours::{AvailabilityStatus, OpenState, OpeningHours, WeeklyHours};
pub use models::*;
