//! JSON snapshot module for decks.
//! Saves and loads a Deck, scheduling state included, to/from JSON files,
//! so callers can persist review progress without caring about storage.

use crate::models::Deck;
use std::fs::File;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors raised while saving or loading a deck snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Saves a deck to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn save_deck(deck: &Deck, path: &str) -> Result<(), SnapshotError> {
    let json_string = serde_json::to_string_pretty(deck)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Loads a deck from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn load_deck(path: &str) -> Result<Deck, SnapshotError> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let deck: Deck = serde_json::from_str(&contents)?;

    log::info!("deck '{}' loaded from '{}'", deck.name, path);
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, StudyCard};
    use chrono::NaiveDate;
    use std::fs;

    fn test_deck() -> Deck {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        Deck {
            name: "Test Deck".to_string(),
            cards: vec![
                StudyCard::new(Card::new("hello", "cześć"), today),
                StudyCard::new(Card::new("goodbye", "do widzenia"), today),
            ],
        }
    }

    #[test]
    fn test_save_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let path = path.to_str().unwrap();

        let result = save_deck(&test_deck(), path);
        assert!(result.is_ok());
        assert!(fs::metadata(path).is_ok(), "File should exist");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.json");
        let path = path.to_str().unwrap();

        let mut original = test_deck();
        // Give the first card some review history so state survives the trip
        let reviewed = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        original.cards[0].state.repetitions = 2;
        original.cards[0].state.interval_days = 6;
        original.cards[0].state.last_review_date = Some(reviewed);

        save_deck(&original, path).unwrap();
        let loaded = load_deck(path).unwrap();

        assert_eq!(loaded.name, original.name);
        assert_eq!(loaded.cards, original.cards);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_deck("nonexistent_file_xyz123.json");
        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.json");
        fs::write(&path, "{ this is not valid json }").unwrap();

        let result = load_deck(path.to_str().unwrap());
        assert!(matches!(result, Err(SnapshotError::Json(_))));
    }
}
