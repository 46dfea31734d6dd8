//! Typed track rows produced by the transform step.

use rusqlite::types::{ToSql, ToSqlOutput};
use std::fmt;

/// Ordinal popularity class derived from the 0-100 popularity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PopularityBucket {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    Unknown,
}

impl PopularityBucket {
    pub const ALL: [PopularityBucket; 6] = [
        PopularityBucket::VeryLow,
        PopularityBucket::Low,
        PopularityBucket::Medium,
        PopularityBucket::High,
        PopularityBucket::VeryHigh,
        PopularityBucket::Unknown,
    ];

    /// Classify a popularity score.
    ///
    /// The score is floored to an integer before comparison, so `19.9` is
    /// still "very low". Anything at or above 80 is "very high", including
    /// out-of-range values above 100. A missing score is `Unknown`.
    pub fn classify(popularity: Option<f64>) -> Self {
        match popularity {
            None => PopularityBucket::Unknown,
            Some(score) => Self::from_score(score.floor() as i64),
        }
    }

    pub fn from_score(score: i64) -> Self {
        match score {
            s if s < 20 => PopularityBucket::VeryLow,
            s if s < 40 => PopularityBucket::Low,
            s if s < 60 => PopularityBucket::Medium,
            s if s < 80 => PopularityBucket::High,
            _ => PopularityBucket::VeryHigh,
        }
    }

    /// Convert to database string representation
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PopularityBucket::VeryLow => "very low",
            PopularityBucket::Low => "low",
            PopularityBucket::Medium => "medium",
            PopularityBucket::High => "high",
            PopularityBucket::VeryHigh => "very high",
            PopularityBucket::Unknown => "unknown",
        }
    }

    #[cfg(test)]
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.to_db_str() == s)
    }
}

impl fmt::Display for PopularityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// Value of the `explicit` column.
///
/// Recognized booleans are stored as 0/1. Anything else is kept exactly as it
/// appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplicitFlag {
    Bool(bool),
    Raw(String),
}

impl ExplicitFlag {
    /// Parse a raw `explicit` cell. Blank cells are missing.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "true" | "1" => Some(ExplicitFlag::Bool(true)),
            "false" | "0" => Some(ExplicitFlag::Bool(false)),
            _ => Some(ExplicitFlag::Raw(raw.to_string())),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ExplicitFlag::Bool(value) => Some(*value),
            ExplicitFlag::Raw(_) => None,
        }
    }
}

impl ToSql for ExplicitFlag {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            ExplicitFlag::Bool(value) => Ok(ToSqlOutput::from(*value)),
            ExplicitFlag::Raw(value) => Ok(ToSqlOutput::from(value.as_str())),
        }
    }
}

/// One cleaned track, ready to be written to the store.
///
/// `track_name` and `artists` are plain strings: rows missing either are
/// dropped during the transform, so every record carries both.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub track_id: Option<String>,
    pub track_name: String,
    pub artists: String,
    pub album_name: Option<String>,
    pub track_genre: Option<String>,
    pub popularity: Option<f64>,
    pub explicit: Option<ExplicitFlag>,
    pub duration_ms: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub valence: Option<f64>,
    pub tempo: Option<f64>,
    pub duration_min: Option<f64>,
    pub popularity_bucket: PopularityBucket,
}
