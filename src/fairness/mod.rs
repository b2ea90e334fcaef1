pub mod accumulator;
pub mod format;

pub use accumulator::{calculate_totals, fairness_summary, most_recent_session, FairnessSummary, Lead};
pub use format::format_minutes;
