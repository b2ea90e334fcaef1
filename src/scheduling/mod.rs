pub mod suggestions;

pub use suggestions::{build_suggestions, Suggestion};
