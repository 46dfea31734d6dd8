//! Cleaning and enrichment of raw track rows.
//!
//! Per row, in order: project to the required columns, trim text fields,
//! drop rows without a track name or artists, coerce numeric fields
//! (unparsable -> null), derive `duration_min`, classify popularity, and
//! lowercase the genre. No other filtering or deduplication happens.

use super::extract::RawTable;
use super::models::{ExplicitFlag, PopularityBucket, TrackRecord};
use super::validation::SourceColumns;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Counters for one transform. Cell-level counts only cover kept rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub rows_in: usize,
    pub rows_kept: usize,
    /// Rows missing `track_name` or `artists`.
    pub rows_dropped: usize,
    /// Non-empty numeric cells that could not be parsed and became null.
    pub invalid_numeric_values: usize,
    /// Non-empty `explicit` cells that are not a boolean, stored as-is.
    pub unrecognized_explicit_values: usize,
}

impl TransformStats {
    fn coerce(&mut self, raw: &str) -> Option<f64> {
        let value = coerce_numeric(raw);
        if value.is_none() && !raw.trim().is_empty() {
            self.invalid_numeric_values += 1;
        }
        value
    }

    fn explicit(&mut self, raw: &str) -> Option<ExplicitFlag> {
        let flag = parse_explicit(raw);
        if let Some(ExplicitFlag::Raw(_)) = flag {
            self.unrecognized_explicit_values += 1;
        }
        flag
    }
}

#[derive(Debug, Clone)]
pub struct TransformedTracks {
    pub records: Vec<TrackRecord>,
    pub stats: TransformStats,
}

/// Trim surrounding whitespace; blank values are missing.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a numeric cell. Blank, unparsable and non-finite values are missing.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn parse_explicit(raw: &str) -> Option<ExplicitFlag> {
    ExplicitFlag::parse(raw)
}

pub fn duration_minutes(duration_ms: Option<f64>) -> Option<f64> {
    duration_ms.map(|ms| ms / MS_PER_MINUTE)
}

pub fn normalize_genre(genre: Option<String>) -> Option<String> {
    genre.map(|g| g.to_lowercase())
}

/// Clean every row of `table` using the positions found by validation.
pub fn transform(table: &RawTable, columns: &SourceColumns) -> TransformedTracks {
    let mut stats = TransformStats {
        rows_in: table.row_count(),
        ..Default::default()
    };
    let mut records = Vec::with_capacity(table.row_count());

    for row in 0..table.row_count() {
        let field = |column: usize| table.field(row, column);

        let (Some(track_name), Some(artists)) = (
            normalize_text(field(columns.track_name)),
            normalize_text(field(columns.artists)),
        ) else {
            stats.rows_dropped += 1;
            continue;
        };

        let track_id = Some(field(columns.track_id))
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        let popularity = stats.coerce(field(columns.popularity));
        let duration_ms = stats.coerce(field(columns.duration_ms));

        records.push(TrackRecord {
            track_id,
            track_name,
            artists,
            album_name: normalize_text(field(columns.album_name)),
            track_genre: normalize_genre(normalize_text(field(columns.track_genre))),
            popularity,
            explicit: stats.explicit(field(columns.explicit)),
            duration_ms,
            danceability: stats.coerce(field(columns.danceability)),
            energy: stats.coerce(field(columns.energy)),
            valence: stats.coerce(field(columns.valence)),
            tempo: stats.coerce(field(columns.tempo)),
            duration_min: duration_minutes(duration_ms),
            popularity_bucket: PopularityBucket::classify(popularity),
        });
    }

    stats.rows_kept = records.len();
    TransformedTracks { records, stats }
}
