/// Weights and penalties of the court recommendation cost.
///
/// These encode product policy: a rainy forecast should push outdoor courts
/// well down the list, and whoever drove farther last time should get the
/// shorter drive next.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSettings {
    pub balance_weight: f64,
    pub commute_weight: f64,
    /// Added to outdoor courts when rain is likely
    pub rain_penalty: f64,
    /// Subtracted when a court continues the alternation, added otherwise
    pub alternation_bonus: f64,
    /// Rain probability (0-100) at which a forecast day counts as rainy
    pub rain_threshold: u8,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            balance_weight: 1.0,
            commute_weight: 0.6,
            rain_penalty: 40.0,
            alternation_bonus: 8.0,
            rain_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingSettings {
    pub base_score: f64,
    pub rating_weight: f64,
    /// Bonus for Mon-Fri slots starting at `evening_slot_index` or later
    pub evening_bonus: f64,
    pub evening_slot_index: usize,
    pub max_suggestions: usize,
    pub rain_threshold: u8,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            base_score: 100.0,
            rating_weight: 6.0,
            evening_bonus: 8.0,
            evening_slot_index: 5,
            max_suggestions: 5,
            rain_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSettings {
    pub base_url: &'static str,
    pub default_location: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub forecast_days: usize,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            base_url: "https://wttr.in",
            default_location: "Franklin,TN",
            user_agent: "CourtPicker/1.0",
            timeout_secs: 10,
            forecast_days: 3,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub scheduling: SchedulingSettings,
    pub weather: WeatherSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
