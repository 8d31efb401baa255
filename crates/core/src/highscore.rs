//! High score persistence seam
//!
//! The engine only ever stores one integer across sessions. It is read once
//! when the score keeper is built and written whenever it increases.

use thiserror::Error;

/// Failure while reading or writing the persisted high score
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid high score value: {0:?}")]
    InvalidValue(String),
}

/// Storage for the single high score scalar
pub trait HighScoreStore {
    /// Stored value, 0 when absent or unreadable
    fn load(&mut self) -> u32;

    fn save(&mut self, score: u32) -> Result<(), StoreError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        (**self).save(score)
    }
}

/// Parse the stored text form: a non-negative integer, surrounding
/// whitespace ignored.
pub fn parse_high_score(text: &str) -> Result<u32, StoreError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| StoreError::InvalidValue(trimmed.to_string()))
}

/// Keeps the high score in memory only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHighScore {
    value: u32,
    saves: u32,
}

impl MemoryHighScore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of successful `save` calls
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&mut self) -> u32 {
        self.value
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.value = score;
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_high_score() {
        assert_eq!(parse_high_score("1200\n").unwrap(), 1200);
        assert_eq!(parse_high_score("  0 ").unwrap(), 0);
        assert!(matches!(
            parse_high_score("-5"),
            Err(StoreError::InvalidValue(v)) if v == "-5"
        ));
        assert!(parse_high_score("").is_err());
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryHighScore::new(300);
        assert_eq!(store.load(), 300);
        store.save(500).unwrap();
        assert_eq!(store.load(), 500);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn HighScoreStore> = Box::new(MemoryHighScore::new(7));
        assert_eq!(store.load(), 7);
        store.save(9).unwrap();
        assert_eq!(store.load(), 9);
    }
}
