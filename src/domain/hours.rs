use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use super::models::Court;

/// Opening window for one day, in whole hours (24h clock)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: u32,
    pub close: u32,
}

impl OpeningHours {
    pub const fn new(open: u32, close: u32) -> Self {
        Self { open, close }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub mon: Option<OpeningHours>,
    pub tue: Option<OpeningHours>,
    pub wed: Option<OpeningHours>,
    pub thu: Option<OpeningHours>,
    pub fri: Option<OpeningHours>,
    pub sat: Option<OpeningHours>,
    pub sun: Option<OpeningHours>,
}

impl WeeklyHours {
    /// Same hours Mon-Fri, separate Saturday and Sunday
    pub fn split(weekdays: OpeningHours, sat: OpeningHours, sun: OpeningHours) -> Self {
        Self {
            mon: Some(weekdays),
            tue: Some(weekdays),
            wed: Some(weekdays),
            thu: Some(weekdays),
            fri: Some(weekdays),
            sat: Some(sat),
            sun: Some(sun),
        }
    }

    pub fn daily(hours: OpeningHours) -> Self {
        Self::split(hours, hours, hours)
    }

    pub fn for_day(&self, weekday: Weekday) -> Option<OpeningHours> {
        match weekday {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
            Weekday::Sun => self.sun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenState {
    Open,
    Soon,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityStatus {
    pub label: String,
    pub state: OpenState,
}

impl AvailabilityStatus {
    fn new(label: impl Into<String>, state: OpenState) -> Self {
        Self {
            label: label.into(),
            state,
        }
    }
}

/// Whether the court is open at `now`
pub fn availability_status(court: &Court, now: NaiveDateTime) -> AvailabilityStatus {
    let Some(schedule) = court.hours.for_day(now.weekday()) else {
        return AvailabilityStatus::new("See hours", OpenState::Soon);
    };

    let current = now.hour() as f64 + now.minute() as f64 / 60.0;
    if current >= schedule.open as f64 && current < schedule.close as f64 {
        return AvailabilityStatus::new("Open Now", OpenState::Open);
    }
    if current < schedule.open as f64 {
        return AvailabilityStatus::new(
            format!("Opens at {}", format_hour(schedule.open)),
            OpenState::Soon,
        );
    }
    AvailabilityStatus::new("Closed", OpenState::Closed)
}

/// Today's opening hour, or an empty string when the day has no schedule
pub fn next_open_time(court: &Court, now: NaiveDateTime) -> String {
    court
        .hours
        .for_day(now.weekday())
        .map(|schedule| format_hour(schedule.open))
        .unwrap_or_default()
}

pub fn format_hour(hour: u32) -> String {
    let period = if hour >= 12 { "pm" } else { "am" };
    let normalized = if hour % 12 == 0 { 12 } else { hour % 12 };
    format!("{normalized}{period}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::courts::get_courts;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn court(id: &str) -> Court {
        get_courts().into_iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(0), "12am");
        assert_eq!(format_hour(7), "7am");
        assert_eq!(format_hour(12), "12pm");
        assert_eq!(format_hour(22), "10pm");
        assert_eq!(format_hour(24), "12pm");
    }

    #[test]
    fn test_open_during_hours() {
        // 2024-06-04 is a Tuesday; 316 Tennis opens 7-22 on weekdays.
        let status = availability_status(&court("316-tennis"), at(2024, 6, 4, 9, 30));
        assert_eq!(status.state, OpenState::Open);
        assert_eq!(status.label, "Open Now");
    }

    #[test]
    fn test_before_opening_reports_opening_hour() {
        let status = availability_status(&court("316-tennis"), at(2024, 6, 4, 6, 15));
        assert_eq!(status.state, OpenState::Soon);
        assert_eq!(status.label, "Opens at 7am");
    }

    #[test]
    fn test_closing_hour_is_exclusive() {
        // 2024-06-09 is a Sunday; 316 Tennis closes at 14.
        let status = availability_status(&court("316-tennis"), at(2024, 6, 9, 14, 0));
        assert_eq!(status.state, OpenState::Closed);
    }

    #[test]
    fn test_missing_schedule() {
        let mut court = court("adams");
        court.hours = WeeklyHours::default();

        let now = at(2024, 6, 4, 12, 0);
        let status = availability_status(&court, now);
        assert_eq!(status.label, "See hours");
        assert_eq!(status.state, OpenState::Soon);
        assert_eq!(next_open_time(&court, now), "");
    }

    #[test]
    fn test_next_open_time_uses_todays_schedule() {
        // Saturday: Adams opens at 8.
        assert_eq!(next_open_time(&court("adams"), at(2024, 6, 8, 20, 0)), "8am");
    }
}
