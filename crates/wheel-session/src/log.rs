//! The outcome log and the statistics derived from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of records kept in the log.
pub const LOG_CAPACITY: usize = 200;

/// One completed spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinRecord {
    /// When the spin completed.
    pub time: DateTime<Utc>,
    /// Label of the winning entry.
    pub label: String,
}

impl SpinRecord {
    /// A record stamped with the current time.
    pub fn now(label: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            label: label.into(),
        }
    }
}

/// Spin results, newest first, capped at [`LOG_CAPACITY`] records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeLog {
    records: Vec<SpinRecord>,
}

impl OutcomeLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a spin at the front, dropping the oldest record past capacity.
    pub fn record(&mut self, record: SpinRecord) {
        self.records.insert(0, record);
        self.records.truncate(LOG_CAPACITY);
    }

    /// All records, newest first.
    pub fn records(&self) -> &[SpinRecord] {
        &self.records
    }

    /// The `n` most recent records.
    pub fn recent(&self, n: usize) -> &[SpinRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&SpinRecord> {
        self.records.first()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no spins have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Win counts per label, highest first.
    ///
    /// Labels with equal counts keep the order in which they first appear in
    /// the log, so the most recent winner leads a tie.
    pub fn leaderboard(&self) -> Vec<(String, usize)> {
        let mut board: Vec<(String, usize)> = Vec::new();
        for record in &self.records {
            match board.iter_mut().find(|(label, _)| *label == record.label) {
                Some((_, count)) => *count += 1,
                None => board.push((record.label.clone(), 1)),
            }
        }
        board.sort_by(|a, b| b.1.cmp(&a.1));
        board
    }
}
