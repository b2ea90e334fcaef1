use crate::domain::{Court, CourtType, DriveMinutes, OpeningHours, Pricing, Surface, WeeklyHours};

/// Court catalog for the Franklin / Murfreesboro area.
///
/// Drive minutes are one-way estimates from each player's home:
/// Andrey lives in Franklin, Lucas in Murfreesboro.
/// Catalog order matters: it breaks ties between equally scored courts.
pub fn get_courts() -> Vec<Court> {
    vec![three_sixteen(), farm_and_forge(), adams()]
}

pub fn find_court<'a>(courts: &'a [Court], id: &str) -> Option<&'a Court> {
    courts.iter().find(|court| court.id == id)
}

fn three_sixteen() -> Court {
    Court {
        id: "316-tennis".into(),
        name: "Three Sixteen Tennis".into(),
        short_name: "316 Tennis".into(),
        address: "4629 Murfreesboro Rd, Franklin, TN 37067".into(),
        phone: "(615) 604-3218".into(),
        website: "https://www.threesixteentennis.com/".into(),
        booking_platform: "Court Reserve".into(),
        booking_url: "https://app.courtreserve.com/".into(),
        coords: (35.9088, -86.7987),
        drive: DriveMinutes::new(8, 25),
        court_type: CourtType::Indoor,
        surface: Surface::Hard,
        rating: 4.8,
        pricing: Pricing {
            display: "$40/hr (Players)".into(),
            detail: "Founding Members: $300/mo (8 hours included)".into(),
            booking_rules: "Players book 3 days ahead · Members 4 days ahead".into(),
        },
        hours: WeeklyHours::split(
            OpeningHours::new(7, 22),
            OpeningHours::new(6, 21),
            OpeningHours::new(6, 14),
        ),
    }
}

fn farm_and_forge() -> Court {
    Court {
        id: "farm-forge".into(),
        name: "Farm and Forge Club".into(),
        short_name: "Farm & Forge".into(),
        address: "8445 Horton Highway, College Grove, TN 37046".into(),
        phone: "Contact via website".into(),
        website: "https://farmandforgeclub.com/".into(),
        booking_platform: "Club Automation".into(),
        booking_url: "https://farmandforge.clubautomation.com/".into(),
        coords: (35.7445, -86.7034),
        drive: DriveMinutes::new(20, 30),
        court_type: CourtType::Outdoor,
        surface: Surface::Clay,
        rating: 4.7,
        pricing: Pricing {
            display: "Contact".into(),
            detail: "Premium private club · Membership required".into(),
            booking_rules: "Member login required".into(),
        },
        hours: WeeklyHours::daily(OpeningHours::new(7, 21)),
    }
}

fn adams() -> Court {
    Court {
        id: "adams".into(),
        name: "Adams Tennis Complex".into(),
        short_name: "Adams".into(),
        address: "925 Golf Lane, Murfreesboro, TN 37133".into(),
        phone: "(615) 546-4000".into(),
        website: "https://www.murfreesborotn.gov/807/Adams-Tennis-Complex".into(),
        booking_platform: "City of Murfreesboro".into(),
        booking_url: "https://www.murfreesborotn.gov/facilities/facility/details/Adams-Tennis-Complex-27"
            .into(),
        coords: (35.8497, -86.3899),
        drive: DriveMinutes::new(30, 8),
        court_type: CourtType::Outdoor,
        surface: Surface::Hard,
        rating: 4.5,
        pricing: Pricing {
            display: "$15–20".into(),
            detail: "Members free within 24hrs · $12/hr if >24hrs".into(),
            booking_rules: "Non-members pay daily + court fee".into(),
        },
        hours: WeeklyHours::split(
            OpeningHours::new(6, 21),
            OpeningHours::new(8, 19),
            OpeningHours::new(8, 19),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let courts = get_courts();
        let mut ids: Vec<&str> = courts.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), courts.len());
    }

    #[test]
    fn test_find_court() {
        let courts = get_courts();

        assert_eq!(find_court(&courts, "adams").map(|c| c.drive.lucas), Some(8));
        assert!(find_court(&courts, "missing").is_none());
    }
}
