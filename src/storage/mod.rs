pub mod store;

pub use store::{StateStore, StoredState, STATE_KEY};
