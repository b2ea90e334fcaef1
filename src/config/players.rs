use crate::domain::{Availability, Day, Player, PlayerId, Preferences, TimeSlot};

/// Starting roster, used until a roster has been saved to the store
pub fn get_default_players() -> Vec<Player> {
    vec![
        Player {
            id: PlayerId::Andrey,
            name: "Andrey".into(),
            location: "Franklin, TN".into(),
            skill: 7,
            preferences: Preferences {
                indoor: true,
                outdoor: true,
                clay: false,
                hard: true,
            },
            availability: Availability::new()
                .with_slot(Day::Tue, TimeSlot::Evening)
                .with_slot(Day::Tue, TimeSlot::Night)
                .with_slot(Day::Thu, TimeSlot::Evening)
                .with_slot(Day::Sat, TimeSlot::Morning)
                .with_slot(Day::Sat, TimeSlot::LateMorning),
        },
        Player {
            id: PlayerId::Lucas,
            name: "Lucas".into(),
            location: "Murfreesboro, TN".into(),
            skill: 6,
            preferences: Preferences::default(),
            availability: Availability::new()
                .with_slot(Day::Tue, TimeSlot::Evening)
                .with_slot(Day::Wed, TimeSlot::Evening)
                .with_slot(Day::Thu, TimeSlot::Evening)
                .with_slot(Day::Sat, TimeSlot::Morning)
                .with_slot(Day::Sun, TimeSlot::LateMorning),
        },
    ]
}
