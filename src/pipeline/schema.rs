//! Source column contract and output table layout for the tracks dataset.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table};

/// Columns the raw CSV must provide. Everything else is projected away.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "track_id",
    "track_name",
    "artists",
    "album_name",
    "track_genre",
    "popularity",
    "explicit",
    "duration_ms",
    "danceability",
    "energy",
    "valence",
    "tempo",
];

/// The 12 retained source columns followed by the 2 derived ones.
pub const TRACKS_TABLE: Table = Table {
    columns: &[
        sqlite_column!("track_id", &SqlType::Text),
        sqlite_column!("track_name", &SqlType::Text, non_null = true),
        sqlite_column!("artists", &SqlType::Text, non_null = true),
        sqlite_column!("album_name", &SqlType::Text),
        sqlite_column!("track_genre", &SqlType::Text),
        sqlite_column!("popularity", &SqlType::Real),
        sqlite_column!("explicit", &SqlType::Integer), // 0/1, or the raw text
        sqlite_column!("duration_ms", &SqlType::Real),
        sqlite_column!("danceability", &SqlType::Real),
        sqlite_column!("energy", &SqlType::Real),
        sqlite_column!("valence", &SqlType::Real),
        sqlite_column!("tempo", &SqlType::Real),
        sqlite_column!("duration_min", &SqlType::Real),
        sqlite_column!("popularity_bucket", &SqlType::Text, non_null = true),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_required_columns_plus_derived() {
        let names = TRACKS_TABLE.column_names();
        assert_eq!(names.len(), 14);
        assert_eq!(&names[..12], &REQUIRED_COLUMNS[..]);
        assert_eq!(&names[12..], &["duration_min", "popularity_bucket"]);
    }
}
