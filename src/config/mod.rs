pub mod courts;
pub mod players;
pub mod settings;

pub use courts::{find_court, get_courts};
pub use players::get_default_players;
pub use settings::{AppConfig, SchedulingSettings, ScoringSettings, WeatherSettings};
