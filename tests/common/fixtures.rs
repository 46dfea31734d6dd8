//! Test fixture creation for raw input files and output inspection

use super::constants::*;
use anyhow::Result;
use opensound_etl::{AppConfig, CliConfig};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary base directory with `data/raw/spotify_tracks_raw.csv`.
pub struct TestWorkspace {
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Creates the workspace and writes `header` plus `rows` as the raw file.
    pub fn with_rows(header: &str, rows: &[&str]) -> Result<Self> {
        let dir = TempDir::new()?;
        let raw_dir = dir.path().join("data").join("raw");
        fs::create_dir_all(&raw_dir)?;

        let mut content = String::from(header);
        content.push('\n');
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(raw_dir.join("spotify_tracks_raw.csv"), content)?;

        Ok(Self { dir })
    }

    /// A workspace whose raw file holds `count` distinct valid rows.
    pub fn with_generated_rows(count: usize) -> Result<Self> {
        let rows: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    "{i},track{i:06},Artist {a},Album {b},Song {i},{pop},{dur},{explicit},0.5,0.6,1,-5.0,1,0.05,0.1,0.0,0.1,0.4,120.0,4,Genre{g}",
                    a = i % 37,
                    b = i % 101,
                    pop = i % 101,
                    dur = 120_000 + i * 10,
                    explicit = if i % 2 == 0 { "True" } else { "False" },
                    g = i % 7,
                )
            })
            .collect();
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        Self::with_rows(RAW_HEADER, &row_refs)
    }

    pub fn base_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir
            .path()
            .join("data")
            .join("processed")
            .join("opensound.db")
    }

    /// Default configuration rooted at this workspace.
    pub fn config(&self) -> AppConfig {
        let cli = CliConfig {
            base_dir: Some(self.base_dir().to_path_buf()),
            ..Default::default()
        };
        AppConfig::resolve(&cli, None).unwrap()
    }

    pub fn open_db(&self) -> Connection {
        Connection::open(self.db_path()).unwrap()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackRow {
    pub track_id: Option<String>,
    pub track_name: Option<String>,
    pub artists: Option<String>,
    pub album_name: Option<String>,
    pub track_genre: Option<String>,
    pub popularity: Option<f64>,
    pub explicit: Option<i64>,
    pub duration_ms: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub valence: Option<f64>,
    pub tempo: Option<f64>,
    pub duration_min: Option<f64>,
    pub popularity_bucket: Option<String>,
}

/// Every row of `table`, ordered by insertion.
pub fn read_rows(conn: &Connection, table: &str) -> Vec<TrackRow> {
    let sql = format!("SELECT {} FROM {} ORDER BY rowid", OUTPUT_COLUMNS.join(", "), table);
    let mut stmt = conn.prepare(&sql).unwrap();
    stmt.query_map([], |r| {
        Ok(TrackRow {
            track_id: r.get(0)?,
            track_name: r.get(1)?,
            artists: r.get(2)?,
            album_name: r.get(3)?,
            track_genre: r.get(4)?,
            popularity: r.get(5)?,
            explicit: r.get(6)?,
            duration_ms: r.get(7)?,
            danceability: r.get(8)?,
            energy: r.get(9)?,
            valence: r.get(10)?,
            tempo: r.get(11)?,
            duration_min: r.get(12)?,
            popularity_bucket: r.get(13)?,
        })
    })
    .unwrap()
    .collect::<Result<Vec<_>, _>>()
    .unwrap()
}
