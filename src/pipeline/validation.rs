use super::error::EtlError;
use super::extract::RawTable;
use super::schema::REQUIRED_COLUMNS;

/// Positions of the required columns inside a validated raw table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceColumns {
    pub track_id: usize,
    pub track_name: usize,
    pub artists: usize,
    pub album_name: usize,
    pub track_genre: usize,
    pub popularity: usize,
    pub explicit: usize,
    pub duration_ms: usize,
    pub danceability: usize,
    pub energy: usize,
    pub valence: usize,
    pub tempo: usize,
}

/// Locate every required column in `table`.
///
/// Fails with all missing columns, in declaration order.
pub fn validate_required_columns(table: &RawTable) -> Result<SourceColumns, EtlError> {
    let mut positions = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, name) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
        match table.column_index(name) {
            Some(index) => *slot = index,
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(EtlError::MissingColumns(missing));
    }

    // Same order as REQUIRED_COLUMNS
    let [
        track_id,
        track_name,
        artists,
        album_name,
        track_genre,
        popularity,
        explicit,
        duration_ms,
        danceability,
        energy,
        valence,
        tempo,
    ] = positions;
    Ok(SourceColumns {
        track_id,
        track_name,
        artists,
        album_name,
        track_genre,
        popularity,
        explicit,
        duration_ms,
        danceability,
        energy,
        valence,
        tempo,
    })
}
