//! SQLite sink for cleaned tracks.
//!
//! Every load replaces the target table wholesale inside one transaction:
//! drop, create, insert, commit. A failure before commit leaves the previous
//! table untouched.

use super::error::EtlError;
use super::models::TrackRecord;
use super::schema::TRACKS_TABLE;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::debug;

/// Create the directory that will hold the database file, if needed.
pub fn ensure_parent_dir(db_path: &Path) -> Result<(), EtlError> {
    match db_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|source| EtlError::OutputDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

pub struct SqliteTrackStore {
    conn: Connection,
}

impl SqliteTrackStore {
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open tracks database {:?}", db_path.as_ref()))?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Replace `table_name` with `records` and return the row count read
    /// back from the store.
    pub fn replace_tracks(&mut self, table_name: &str, records: &[TrackRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        TRACKS_TABLE
            .replace(&tx, table_name)
            .with_context(|| format!("Failed to recreate table {}", table_name))?;
        {
            let mut stmt = tx.prepare(&TRACKS_TABLE.insert_sql(table_name))?;
            for track in records {
                stmt.execute(params![
                    track.track_id,
                    track.track_name,
                    track.artists,
                    track.album_name,
                    track.track_genre,
                    track.popularity,
                    track.explicit,
                    track.duration_ms,
                    track.danceability,
                    track.energy,
                    track.valence,
                    track.tempo,
                    track.duration_min,
                    track.popularity_bucket.to_db_str(),
                ])
                .with_context(|| {
                    format!("Failed to insert track {:?}", track.track_id.as_deref())
                })?;
            }
        }
        tx.commit()
            .with_context(|| format!("Failed to commit table {}", table_name))?;
        debug!("Committed {} rows into {}", records.len(), table_name);

        TRACKS_TABLE.validate(&self.conn, table_name)?;
        let count = self.count_tracks(table_name)?;
        if count != records.len() {
            bail!(
                "Table {} holds {} rows after load, expected {}",
                table_name,
                count,
                records.len()
            );
        }
        Ok(count)
    }

    pub fn count_tracks(&self, table_name: &str) -> Result<usize> {
        let count = TRACKS_TABLE.count_rows(&self.conn, table_name)?;
        if count < 0 {
            bail!("Table {} reported a negative row count: {}", table_name, count);
        }
        Ok(count as usize)
    }
}
