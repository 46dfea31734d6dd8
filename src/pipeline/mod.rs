//! Extract, validate, transform and load of the raw tracks dataset.

mod error;
mod extract;
mod load;
mod models;
mod schema;
mod transform;
mod validation;

pub use error::EtlError;
pub use extract::{read_raw_table, RawTable};
pub use load::{ensure_parent_dir, SqliteTrackStore};
pub use models::{ExplicitFlag, PopularityBucket, TrackRecord};
pub use schema::{REQUIRED_COLUMNS, TRACKS_TABLE};
pub use transform::{
    coerce_numeric, duration_minutes, normalize_genre, normalize_text, parse_explicit, transform,
    TransformStats, TransformedTracks,
};
pub use validation::{validate_required_columns, SourceColumns};

use crate::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info, warn};

/// What a single run read, dropped and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub rows_read: usize,
    pub columns_read: usize,
    pub rows_dropped: usize,
    pub invalid_numeric_values: usize,
    pub unrecognized_explicit_values: usize,
    pub rows_loaded: usize,
}

/// Run one full pass: read the input file, check its columns, clean the
/// rows, and replace the configured table with the result.
///
/// Any error aborts the run. Nothing is written unless every step before
/// the load succeeded.
pub fn run_pipeline(config: &AppConfig) -> Result<PipelineReport> {
    info!("Reading raw tracks from {}", config.input_path.display());
    let raw = read_raw_table(&config.input_path, config.delimiter)?;
    info!(
        "Loaded {} rows, {} columns",
        raw.row_count(),
        raw.column_count()
    );
    debug!("Input columns: {}", raw.headers().join(", "));

    let columns = validate_required_columns(&raw)?;

    let TransformedTracks { records, stats } = transform(&raw, &columns);
    info!(
        "Kept {} rows, dropped {} without track name or artists",
        stats.rows_kept, stats.rows_dropped
    );
    if stats.invalid_numeric_values > 0 {
        warn!(
            "{} numeric values in kept rows could not be parsed and were set to null",
            stats.invalid_numeric_values
        );
    }
    if stats.unrecognized_explicit_values > 0 {
        warn!(
            "{} explicit values are not booleans and were stored as-is",
            stats.unrecognized_explicit_values
        );
    }

    ensure_parent_dir(&config.db_path)?;
    info!("Connecting to SQLite at {}", config.db_path.display());
    let mut store = SqliteTrackStore::open(&config.db_path)?;
    let rows_loaded = store.replace_tracks(&config.table_name, &records)?;
    info!(
        "Table '{}' loaded with {} rows",
        config.table_name, rows_loaded
    );

    Ok(PipelineReport {
        rows_read: raw.row_count(),
        columns_read: raw.column_count(),
        rows_dropped: stats.rows_dropped,
        invalid_numeric_values: stats.invalid_numeric_values,
        unrecognized_explicit_values: stats.unrecognized_explicit_values,
        rows_loaded,
    })
}
