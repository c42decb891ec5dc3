//! Card is a pair <question, answer>. Only text is used in questions and answers.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
    /// Text the card was generated from, when there was any. Carried as
    /// plain data; generating cards from notes happens elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_notes: Option<String>,
}

impl Card {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            source_notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("hello", "cześć");

        assert_eq!(card.question, "hello");
        assert_eq!(card.answer, "cześć");
        assert_eq!(card.source_notes, None);
    }

    #[test]
    fn test_card_clone() {
        let card1 = Card::new("hello", "cześć");

        let card2 = card1.clone();
        assert_eq!(card1.question, card2.question);
        assert_eq!(card1.answer, card2.answer);
    }
}
