use crate::domain::PlayerId;
use crate::fairness::format_minutes;

pub fn build_reasoning(due_player: Option<PlayerId>, rainy: bool, combined: u32) -> String {
    let mut reasons = Vec::with_capacity(3);

    match due_player {
        Some(player) => reasons.push(format!("It's {}'s turn for the shorter drive.", player.name())),
        None => reasons.push("Balanced drive times for both players.".to_string()),
    }
    if rainy {
        reasons.push("Rain is likely, so indoor courts keep it on track.".to_string());
    }
    reasons.push(format!("Combined commute: {} total.", format_minutes(combined)));

    reasons.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_order() {
        assert_eq!(
            build_reasoning(Some(PlayerId::Andrey), true, 38),
            "It's Andrey's turn for the shorter drive. \
             Rain is likely, so indoor courts keep it on track. \
             Combined commute: 38m total."
        );
    }

    #[test]
    fn test_balanced_without_rain() {
        assert_eq!(
            build_reasoning(None, false, 75),
            "Balanced drive times for both players. Combined commute: 1h 15m total."
        );
    }
}
