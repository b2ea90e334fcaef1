use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::hours::WeeklyHours;

/// The two players sharing the drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    Andrey,
    Lucas,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::Andrey, PlayerId::Lucas];

    pub fn other(self) -> Self {
        match self {
            PlayerId::Andrey => PlayerId::Lucas,
            PlayerId::Lucas => PlayerId::Andrey,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerId::Andrey => "Andrey",
            PlayerId::Lucas => "Lucas",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerId::Andrey => "andrey",
            PlayerId::Lucas => "lucas",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One-way drive minutes per player.
///
/// Also used for running totals. A missing field deserializes as zero, so a
/// session logged without one player's drive still counts for the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveMinutes {
    pub andrey: u32,
    pub lucas: u32,
}

impl DriveMinutes {
    pub const fn new(andrey: u32, lucas: u32) -> Self {
        Self { andrey, lucas }
    }

    pub fn get(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::Andrey => self.andrey,
            PlayerId::Lucas => self.lucas,
        }
    }

    pub fn plus(self, other: DriveMinutes) -> Self {
        Self {
            andrey: self.andrey.saturating_add(other.andrey),
            lucas: self.lucas.saturating_add(other.lucas),
        }
    }

    /// Sum of both players' minutes
    pub fn combined(&self) -> u32 {
        self.andrey.saturating_add(self.lucas)
    }

    pub fn difference(&self) -> u32 {
        self.andrey.abs_diff(self.lucas)
    }

    /// The player with the strictly larger value, if any
    pub fn longer_for(&self) -> Option<PlayerId> {
        if self.andrey > self.lucas {
            Some(PlayerId::Andrey)
        } else if self.lucas > self.andrey {
            Some(PlayerId::Lucas)
        } else {
            None
        }
    }

    pub fn is_shorter_for(&self, player: PlayerId) -> bool {
        self.get(player) < self.get(player.other())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourtType {
    Indoor,
    Outdoor,
}

impl CourtType {
    pub fn as_str(&self) -> &str {
        match self {
            CourtType::Indoor => "indoor",
            CourtType::Outdoor => "outdoor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Hard,
    Clay,
}

impl Surface {
    pub fn as_str(&self) -> &str {
        match self {
            Surface::Hard => "hard",
            Surface::Clay => "clay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub display: String,
    pub detail: String,
    pub booking_rules: String,
}

/// Static court reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub booking_platform: String,
    pub booking_url: String,
    pub coords: (f64, f64),
    pub drive: DriveMinutes,
    pub court_type: CourtType,
    pub surface: Surface,
    pub rating: f64,
    pub pricing: Pricing,
    pub hours: WeeklyHours,
}

impl Court {
    pub fn is_indoor(&self) -> bool {
        self.court_type == CourtType::Indoor
    }

    pub fn combined_commute(&self) -> u32 {
        self.drive.combined()
    }
}

/// A logged play session. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub date: NaiveDate,
    pub court_id: String,
    #[serde(default)]
    pub court_name: String,
    #[serde(default)]
    pub drive: DriveMinutes,
}

impl Session {
    pub fn at_court(court: &Court, date: NaiveDate) -> Self {
        Self {
            date,
            court_id: court.id.clone(),
            court_name: court.name.clone(),
            drive: court.drive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    pub fn is_weekday(self) -> bool {
        self.index() < 5
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_monday() as usize]
    }
}

/// Two-hour playing windows, earliest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    EarlyMorning,
    Morning,
    LateMorning,
    Midday,
    Afternoon,
    LateAfternoon,
    Evening,
    Night,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::EarlyMorning,
        TimeSlot::Morning,
        TimeSlot::LateMorning,
        TimeSlot::Midday,
        TimeSlot::Afternoon,
        TimeSlot::LateAfternoon,
        TimeSlot::Evening,
        TimeSlot::Night,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "6-8 AM",
            TimeSlot::Morning => "8-10 AM",
            TimeSlot::LateMorning => "10-12 PM",
            TimeSlot::Midday => "12-2 PM",
            TimeSlot::Afternoon => "2-4 PM",
            TimeSlot::LateAfternoon => "4-6 PM",
            TimeSlot::Evening => "6-8 PM",
            TimeSlot::Night => "8-10 PM",
        }
    }
}

/// Days and slots a player can make
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeSet<(Day, TimeSlot)>);

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, day: Day, slot: TimeSlot) -> Self {
        self.0.insert((day, slot));
        self
    }

    pub fn set(&mut self, day: Day, slot: TimeSlot, available: bool) {
        if available {
            self.0.insert((day, slot));
        } else {
            self.0.remove(&(day, slot));
        }
    }

    pub fn is_available(&self, day: Day, slot: TimeSlot) -> bool {
        self.0.contains(&(day, slot))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Court kinds a player is happy to play on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub indoor: bool,
    pub outdoor: bool,
    pub clay: bool,
    pub hard: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            indoor: true,
            outdoor: true,
            clay: true,
            hard: true,
        }
    }
}

impl Preferences {
    /// Kinds both players accept
    pub fn shared(&self, other: &Preferences) -> Preferences {
        Preferences {
            indoor: self.indoor && other.indoor,
            outdoor: self.outdoor && other.outdoor,
            clay: self.clay && other.clay,
            hard: self.hard && other.hard,
        }
    }

    pub fn accepts(&self, court: &Court) -> bool {
        let surface_ok = match court.surface {
            Surface::Hard => self.hard,
            Surface::Clay => self.clay,
        };
        let type_ok = match court.court_type {
            CourtType::Indoor => self.indoor,
            CourtType::Outdoor => self.outdoor,
        };
        surface_ok && type_ok
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub location: String,
    pub skill: u8,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub availability: Availability,
}

/// One day of the weather forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub avg_temp: Option<i32>,
    pub min_temp: Option<i32>,
    pub max_temp: Option<i32>,
    pub description: String,
    /// 0-100
    pub rain_probability: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub current_temp: Option<i32>,
    pub description: String,
    pub forecast: Vec<ForecastDay>,
}

impl Weather {
    pub fn is_rainy(&self, threshold: u8) -> bool {
        self.forecast
            .iter()
            .any(|day| day.rain_probability >= threshold)
    }

    pub fn advice(&self, threshold: u8) -> &'static str {
        if self.is_rainy(threshold) {
            "Rain possible, indoor courts are safest."
        } else {
            "Great day for outdoor courts!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_minutes_terms() {
        let drive = DriveMinutes::new(8, 25);

        assert_eq!(drive.combined(), 33);
        assert_eq!(drive.difference(), 17);
        assert_eq!(drive.longer_for(), Some(PlayerId::Lucas));
        assert!(drive.is_shorter_for(PlayerId::Andrey));
        assert!(!drive.is_shorter_for(PlayerId::Lucas));
        assert_eq!(DriveMinutes::new(10, 10).longer_for(), None);
    }

    #[test]
    fn test_missing_drive_field_defaults_to_zero() {
        let session: Session =
            serde_json::from_str(r#"{"date":"2024-03-02","courtId":"adams","drive":{"andrey":30}}"#)
                .unwrap();

        assert_eq!(session.drive, DriveMinutes::new(30, 0));
        assert_eq!(session.court_name, "");
    }

    #[test]
    fn test_availability_round_trip_through_json() {
        let availability = Availability::new()
            .with_slot(Day::Tue, TimeSlot::Evening)
            .with_slot(Day::Sat, TimeSlot::Morning);

        let json = serde_json::to_string(&availability).unwrap();
        let parsed: Availability = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, availability);
        assert!(parsed.is_available(Day::Tue, TimeSlot::Evening));
        assert!(!parsed.is_available(Day::Tue, TimeSlot::Night));
    }

    #[test]
    fn test_shared_preferences() {
        let first = Preferences {
            clay: false,
            ..Preferences::default()
        };
        let second = Preferences {
            indoor: false,
            ..Preferences::default()
        };

        let shared = first.shared(&second);
        assert!(!shared.clay);
        assert!(!shared.indoor);
        assert!(shared.hard);
        assert!(shared.outdoor);
    }

    #[test]
    fn test_day_from_weekday() {
        assert_eq!(Day::from_weekday(Weekday::Mon), Day::Mon);
        assert_eq!(Day::from_weekday(Weekday::Sun), Day::Sun);
        assert!(Day::Fri.is_weekday());
        assert!(!Day::Sat.is_weekday());
    }
}
