//! Per-card scheduling state driven by the SM-2 algorithm.
use super::sm2::INITIAL_EASE_FACTOR;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the scheduler needs to know about one card.
///
/// Owned by the card and replaced wholesale by each call to
/// [`calculate_next_review`](super::sm2::calculate_next_review); nothing
/// else mutates it. All dates are calendar dates - time of day carries no
/// meaning for review scheduling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchedulingState {
    /// Days until the next scheduled review. 0 only for a card that has
    /// never been reviewed.
    pub interval_days: u32,
    /// Multiplicative growth rate of the interval, never below 1.3.
    pub ease_factor: f64,
    /// Consecutive successful recalls since the last failure.
    pub repetitions: u32,
    /// Date of the most recent review; `None` until the first review.
    pub last_review_date: Option<NaiveDate>,
    /// The card is due when this is today or earlier.
    pub next_review_date: NaiveDate,
    /// Set once at creation; anchors the first interval.
    pub created_at: NaiveDate,
}

impl SchedulingState {
    /// State for a card created today: due immediately, default ease.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            interval_days: 0,
            ease_factor: INITIAL_EASE_FACTOR,
            repetitions: 0,
            last_review_date: None,
            next_review_date: today,
            created_at: today,
        }
    }

    /// True when the next review date is today or earlier.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_review_date <= today
    }

    /// Anchor date for interval arithmetic: the last review if there was
    /// one, otherwise the creation date.
    pub fn base_date(&self) -> NaiveDate {
        self.last_review_date.unwrap_or(self.created_at)
    }
}
