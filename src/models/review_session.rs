//! Review session management for spaced repetition practice.
//! Drives a single pass over the cards due today, feeding grades through
//! the SM-2 scheduler.

use super::{Deck, StudyCard, rating::normalize_rating, sm2};
use chrono::NaiveDate;

/// A single pass over the due subset of a deck.
///
/// Cards are presented oldest-due first and each due card is graded
/// exactly once; re-queuing a failed card for a later day is the
/// scheduler's job, not the session's. The session owns the deck while it
/// runs and hands it back, updated, through [`Self::into_deck`].
pub struct ReviewSession {
    deck: Deck,
    due: Vec<usize>,
    current_index: usize,
}

impl ReviewSession {
    /// Creates a session over the cards due on `today`.
    pub fn new(deck: Deck, today: NaiveDate) -> Self {
        let due = deck.due_card_indices(today);
        log::debug!("review session for '{}': {} cards due", deck.name, due.len());

        Self {
            deck,
            due,
            current_index: 0,
        }
    }

    pub fn current_card(&self) -> Option<&StudyCard> {
        self.due
            .get(self.current_index)
            .map(|&idx| &self.deck.cards[idx])
    }

    /// Grades the current card and advances to the next one.
    ///
    /// The label is normalized to an SM-2 quality grade, the scheduler
    /// produces the new state, and `today` is recorded as the last review
    /// date - the scheduler itself leaves that field to its caller.
    /// Does nothing once the session is completed.
    pub fn grade_current_card(&mut self, label: &str, today: NaiveDate) {
        if let Some(&idx) = self.due.get(self.current_index) {
            let card = &mut self.deck.cards[idx];

            let quality = normalize_rating(label);
            let mut new_state = sm2::calculate_next_review(&card.state, quality);
            new_state.last_review_date = Some(today);

            log::debug!(
                "graded '{}' as '{}' (quality {}): next review in {} days",
                card.card.question,
                label,
                quality,
                new_state.interval_days
            );

            card.state = new_state;
            self.current_index += 1;
        }
    }

    pub fn reviewed_count(&self) -> usize {
        self.current_index
    }

    pub fn total_count(&self) -> usize {
        self.due.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.reviewed_count()
    }

    /// True once every due card has been graded.
    pub fn is_completed(&self) -> bool {
        self.current_index >= self.due.len()
    }

    pub fn phase_message(&self) -> String {
        format!(
            "{} of {} cards reviewed",
            self.reviewed_count(),
            self.total_count()
        )
    }

    /// Hands the deck back with its updated scheduling state.
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}
