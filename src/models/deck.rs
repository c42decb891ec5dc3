//! Deck is a named set of study cards, plus the due-set query over them.
use super::StudyCard;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<StudyCard>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            name: "My Deck".to_string(),
            cards: Vec::new(),
        }
    }
}

impl Deck {
    /// Indices of the cards due for review on `today`: next review date
    /// today or earlier, ordered oldest-due first. Ties keep insertion
    /// order (the sort is stable), so the most overdue cards surface at
    /// the front of the queue.
    pub fn due_card_indices(&self, today: NaiveDate) -> Vec<usize> {
        let mut due: Vec<usize> = (0..self.cards.len())
            .filter(|&idx| self.cards[idx].is_due(today))
            .collect();
        due.sort_by_key(|&idx| self.cards[idx].state.next_review_date);
        due
    }

    /// The due subset itself, in the same order as [`Self::due_card_indices`].
    pub fn due_cards(&self, today: NaiveDate) -> Vec<&StudyCard> {
        self.due_card_indices(today)
            .into_iter()
            .map(|idx| &self.cards[idx])
            .collect()
    }
}
