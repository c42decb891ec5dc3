//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates optimal review intervals based on recall quality:
//! - Each card has an ease factor that adjusts based on performance
//! - Quality grades 0-2: Reset the repetition streak (card needs relearning)
//! - Quality grades 3-5: Increase interval progressively (1 day → 6 days → ease multiplier)
//! - The ease factor is adjusted after every review and has a minimum value of 1.3
//! - Higher quality responses lead to longer intervals between reviews

use super::SchedulingState;
use chrono::Duration;

/// Ease factor below which a card is never allowed to fall.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease factor assigned to a card that has never been reviewed.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// Calculates the next scheduling state according to the SM-2 algorithm.
///
/// `quality` is a 0-5 recall grade (see
/// [`normalize_rating`](super::rating::normalize_rating)); grades below 3
/// count as a failed recall. Grades above 5 are accepted and fed straight
/// into the ease formula rather than clamped, but are untested territory.
///
/// The ease factor is recomputed on every grade, failures included, then
/// floored at 1.3. A failure's remaining penalty is the reset of the
/// repetition streak and a 1-day interval.
///
/// The new next-review date is anchored at the last review date, falling
/// back to the creation date for a never-reviewed card. The returned state
/// carries `last_review_date` through unchanged: recording "reviewed
/// today" is the caller's responsibility.
pub fn calculate_next_review(state: &SchedulingState, quality: u8) -> SchedulingState {
    // Calculate new ease factor
    let q = quality as f64;
    let mut new_ef = state.ease_factor + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02));

    // Ease factor should not fall below 1.3
    if new_ef < MIN_EASE_FACTOR {
        new_ef = MIN_EASE_FACTOR;
    }

    let (new_interval, new_repetitions) = if quality < 3 {
        // Failed recall: streak resets, card comes back tomorrow
        (1, 0)
    } else {
        // Calculate new interval based on repetition number
        let new_reps = state.repetitions + 1;
        let new_int = match new_reps {
            1 => 1, // First successful recall: 1 day
            2 => 6, // Second successful recall: 6 days
            _ => (state.interval_days as f64 * new_ef).round() as u32, // Subsequent: multiply by ease
        };
        (new_int, new_reps)
    };

    // Next review counts from the previous review, not from today
    let next_review_date = state.base_date() + Duration::days(new_interval as i64);

    SchedulingState {
        interval_days: new_interval,
        ease_factor: new_ef,
        repetitions: new_repetitions,
        last_review_date: state.last_review_date,
        next_review_date,
        created_at: state.created_at,
    }
}
