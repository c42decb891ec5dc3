pub mod export;
pub mod models;

pub use models::{Card, Deck, ReviewSession, SchedulingState, StudyCard, normalize_rating};
