use log::{debug, info};

use super::reasoning::build_reasoning;
use super::types::{Recommendation, ScoredCourt, ScoringContext};
use crate::config::settings::ScoringSettings;
use crate::domain::{Court, PlayerId, Session, Weather};
use crate::errors::PlannerError;
use crate::fairness::{calculate_totals, most_recent_session};

/// Picks the court with the lowest cost and explains why
pub fn recommend_court(
    courts: &[Court],
    sessions: &[Session],
    weather: Option<&Weather>,
    settings: &ScoringSettings,
) -> Result<Recommendation, PlannerError> {
    let context = build_context(sessions, weather, settings);
    let ranked = rank_courts(courts, &context, settings);

    let best = ranked.first().ok_or(PlannerError::EmptyCandidateSet)?;
    let court = best.court.clone();
    let reasoning = build_reasoning(context.due_player, context.rainy, best.combined);

    info!(
        "Recommending {} (score {:.1}) out of {} courts",
        court.name,
        best.score,
        ranked.len()
    );

    Ok(Recommendation {
        court,
        reasoning,
        ranked,
    })
}

pub fn build_context(
    sessions: &[Session],
    weather: Option<&Weather>,
    settings: &ScoringSettings,
) -> ScoringContext {
    ScoringContext {
        totals: calculate_totals(sessions),
        due_player: due_for_shorter_drive(sessions),
        rainy: weather.is_some_and(|w| w.is_rainy(settings.rain_threshold)),
    }
}

/// Whoever drove farther last time is owed the shorter drive next
pub fn due_for_shorter_drive(sessions: &[Session]) -> Option<PlayerId> {
    most_recent_session(sessions).and_then(|session| session.drive.longer_for())
}

/// Scores every court and sorts ascending; equal scores keep catalog order
pub fn rank_courts(
    courts: &[Court],
    context: &ScoringContext,
    settings: &ScoringSettings,
) -> Vec<ScoredCourt> {
    let mut ranked: Vec<ScoredCourt> = courts
        .iter()
        .map(|court| score_court(court, context, settings))
        .collect();

    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}

pub fn score_court(court: &Court, context: &ScoringContext, settings: &ScoringSettings) -> ScoredCourt {
    let projected = context.totals.plus(court.drive);
    let balance_diff = projected.difference();
    let combined = court.combined_commute();

    let mut score =
        settings.balance_weight * balance_diff as f64 + settings.commute_weight * combined as f64;

    if context.rainy && !court.is_indoor() {
        score += settings.rain_penalty;
    }

    if let Some(due) = context.due_player {
        if court.drive.is_shorter_for(due) {
            score -= settings.alternation_bonus;
        } else {
            score += settings.alternation_bonus;
        }
    }

    debug!(
        "  {}: balance {} + commute {} -> {:.1}",
        court.id, balance_diff, combined, score
    );

    ScoredCourt {
        court: court.clone(),
        score,
        balance_diff,
        combined,
    }
}
