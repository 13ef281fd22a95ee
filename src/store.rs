//! Player, score, and history storage.
//!
//! This is the persistence collaborator behind the [`ResultSink`] boundary:
//! per-player monotonic high scores and an append-only round history, with
//! optional JSON snapshots on disk.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::error::{SinkError, StoreError};
use crate::outcome::RoundSummary;
use crate::sink::ResultSink;

/// Maximum number of history entries returned per player.
pub const HISTORY_LIMIT: usize = 10;

/// One completed round as recorded in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The player the round belongs to.
    pub username: String,
    /// The player's final total.
    pub player_score: u8,
    /// The dealer's final total.
    pub dealer_score: u8,
    /// The canonical result message of the round.
    pub result: String,
}

/// In-memory player/score/history storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    /// High score per username.
    high_scores: HashMap<String, u8>,
    /// Append-only round history across all players.
    history: Vec<HistoryEntry>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished round for the given player.
    ///
    /// The player is created on first sight with a high score of 0. The high
    /// score only moves upward, and only when the round was a win.
    pub fn record_round(&mut self, username: &str, summary: &RoundSummary) {
        let high = self.high_scores.entry(username.to_owned()).or_insert(0);
        if summary.outcome.is_win() && summary.player_score > *high {
            *high = summary.player_score;
        }

        self.history.push(HistoryEntry {
            username: username.to_owned(),
            player_score: summary.player_score,
            dealer_score: summary.dealer_score,
            result: summary.message().to_owned(),
        });
    }

    /// Returns the player's high score, if the player is known.
    #[must_use]
    pub fn high_score(&self, username: &str) -> Option<u8> {
        self.high_scores.get(username).copied()
    }

    /// Returns all players ordered by high score, best first.
    ///
    /// Ties are broken by username so the ordering is stable.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<(String, u8)> {
        let mut rows: Vec<(String, u8)> = self
            .high_scores
            .iter()
            .map(|(name, &score)| (name.clone(), score))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }

    /// Returns the player's most recent rounds, newest first.
    ///
    /// At most [`HISTORY_LIMIT`] entries are returned.
    #[must_use]
    pub fn history(&self, username: &str) -> Vec<&HistoryEntry> {
        self.history
            .iter()
            .rev()
            .filter(|entry| entry.username == username)
            .take(HISTORY_LIMIT)
            .collect()
    }

    /// Loads a snapshot written by [`MemoryStore::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a
    /// valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Writes the store to disk as a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// A [`ResultSink`] that relays rounds into a shared [`MemoryStore`] under a
/// fixed player identity.
#[derive(Debug, Clone)]
pub struct SessionSink {
    /// The shared store.
    store: Arc<Mutex<MemoryStore>>,
    /// The identity rounds are recorded under.
    username: String,
}

impl SessionSink {
    /// Creates a sink recording rounds for `username` into `store`.
    #[must_use]
    pub fn new(store: Arc<Mutex<MemoryStore>>, username: impl Into<String>) -> Self {
        Self {
            store,
            username: username.into(),
        }
    }

    /// Returns the identity this sink records under.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl ResultSink for SessionSink {
    fn record(&mut self, summary: &RoundSummary) -> Result<(), SinkError> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_round(&self.username, summary);
        Ok(())
    }
}
