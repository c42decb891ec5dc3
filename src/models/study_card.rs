//! Wrapper for cards that tracks scheduling progress.
use super::{Card, SchedulingState};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyCard {
    pub card: Card,
    pub state: SchedulingState,
}

impl StudyCard {
    /// Wraps a card with a fresh scheduling state: due immediately.
    pub fn new(card: Card, today: NaiveDate) -> Self {
        Self {
            card,
            state: SchedulingState::new(today),
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.state.is_due(today)
    }
}
