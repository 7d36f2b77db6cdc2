//! The ordered list of entries on the wheel.

use serde::{Deserialize, Serialize};
use wheel_core::Entry;

use crate::error::{SessionError, SessionResult};

/// Labels loaded when there is no saved wheel.
pub const DEFAULT_LABELS: [&str; 8] = [
    "Ali", "Beatriz", "Charles", "Diya", "Eric", "Fatima", "Gabriel", "Hanna",
];

/// A ready-made wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoWheel {
    /// Student names.
    Classroom,
    /// Prizes.
    Giveaway,
    /// Team names.
    Teams,
}

impl DemoWheel {
    /// Every demo wheel, in menu order.
    pub const ALL: [DemoWheel; 3] = [Self::Classroom, Self::Giveaway, Self::Teams];

    /// The labels on this demo wheel.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Classroom => &DEFAULT_LABELS,
            Self::Giveaway => &[
                "iPad",
                "AirPods",
                "Gift Card",
                "T-shirt",
                "Hoodie",
                "Sticker Pack",
                "Mug",
                "Mystery",
            ],
            Self::Teams => &[
                "Frontend", "Backend", "Design", "QA", "Ops", "Data", "Mobile", "PM",
            ],
        }
    }
}

impl std::fmt::Display for DemoWheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classroom => write!(f, "Classroom"),
            Self::Giveaway => write!(f, "Giveaway"),
            Self::Teams => write!(f, "Teams"),
        }
    }
}

impl std::str::FromStr for DemoWheel {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classroom" => Ok(Self::Classroom),
            "giveaway" => Ok(Self::Giveaway),
            "teams" => Ok(Self::Teams),
            _ => Err(SessionError::UnknownDemo(s.to_string())),
        }
    }
}

/// Ordered wheel entries. Position in the list is slice position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::from_labels(&DEFAULT_LABELS)
    }
}

impl EntryStore {
    /// Create an empty store.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a store from plain labels.
    pub fn from_labels(labels: &[&str]) -> Self {
        Self {
            entries: labels.iter().map(|l| Entry::new(*l)).collect(),
        }
    }

    /// All entries in slice order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wheel has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry. The label is trimmed and must not be blank.
    pub fn add(&mut self, mut entry: Entry) -> SessionResult<()> {
        let label = entry.label.trim();
        if label.is_empty() {
            return Err(SessionError::EmptyLabel);
        }
        entry.label = label.to_string();
        self.entries.push(entry);
        Ok(())
    }

    /// Remove and return the entry at `index`.
    pub fn remove_at(&mut self, index: usize) -> SessionResult<Entry> {
        if index >= self.entries.len() {
            return Err(SessionError::NoSuchEntry {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Replace every entry with a demo wheel.
    pub fn load_demo(&mut self, demo: DemoWheel) {
        *self = Self::from_labels(demo.labels());
    }
}
