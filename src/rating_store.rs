//! Append-only JSON rating log.
//!
//! Each finished game appends one entry carrying a sequential game label, a
//! wall-clock timestamp, the player names, and both rounded ratings. Loading
//! reads only the latest entry's two ratings; anything missing or unreadable
//! falls back to the neutral rating rather than failing.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::errors::Errors;
use crate::rating::PlayerRating;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One persisted game record.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RatingEntry {
    pub game: String,
    pub timestamp: String,
    pub white_name: String,
    pub black_name: String,
    pub white: i32,
    pub black: i32,
}

/// Handle on the rating log file.
pub struct RatingStore {
    path: PathBuf,
}

impl RatingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RatingStore { path: path.into() }
    }

    /// Loads (white, black) ratings from the latest entry, defaulting both
    /// players to the neutral rating when the log is absent, empty, or
    /// corrupt.
    pub fn load(&self) -> (PlayerRating, PlayerRating) {
        match self.read_entries().last() {
            Some(last) => (
                PlayerRating::from_value(last.white as f64),
                PlayerRating::from_value(last.black as f64),
            ),
            None => (PlayerRating::new(), PlayerRating::new()),
        }
    }

    /// Appends one entry with both current rounded ratings and a timestamp.
    pub fn save(
        &self,
        white: &PlayerRating,
        black: &PlayerRating,
        white_name: &str,
        black_name: &str,
    ) -> Result<(), Errors> {
        let mut entries = self.read_entries();
        entries.push(RatingEntry {
            game: format!("Game{}", entries.len() + 1),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            white_name: white_name.to_string(),
            black_name: black_name.to_string(),
            white: white.rounded(),
            black: black.rounded(),
        });
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| Errors::RatingStoreWrite(e.to_string()))?;
        fs::write(&self.path, text).map_err(|e| Errors::RatingStoreWrite(e.to_string()))
    }

    /// All persisted entries; unreadable or unparsable files read as empty.
    pub fn read_entries(&self) -> Vec<RatingEntry> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }
}
