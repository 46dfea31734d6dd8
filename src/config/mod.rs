mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_TABLE_NAME: &str = "spotify_tracks";
const RAW_INPUT_SUBPATH: [&str; 3] = ["data", "raw", "spotify_tracks_raw.csv"];
const DB_SUBPATH: [&str; 3] = ["data", "processed", "opensound.db"];

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub base_dir: Option<PathBuf>,
    pub input_path: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub table_name: Option<String>,
    pub delimiter: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_dir: PathBuf,
    pub input_path: PathBuf,
    pub db_path: PathBuf,
    pub table_name: String,
    pub delimiter: u8,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present; the fixed
    /// `data/raw` / `data/processed` layout under `base_dir` fills the rest.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let base_dir = file
            .base_dir
            .map(PathBuf::from)
            .or_else(|| cli.base_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        let input_path = file
            .input_path
            .map(PathBuf::from)
            .or_else(|| cli.input_path.clone())
            .unwrap_or_else(|| join_all(&base_dir, &RAW_INPUT_SUBPATH));

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .or_else(|| cli.db_path.clone())
            .unwrap_or_else(|| join_all(&base_dir, &DB_SUBPATH));

        if db_path.is_dir() {
            bail!("db_path is a directory: {:?}", db_path);
        }

        let table_name = file
            .table_name
            .or_else(|| cli.table_name.clone())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        if !is_plain_identifier(&table_name) {
            bail!(
                "table_name must match [A-Za-z_][A-Za-z0-9_]*, got {:?}",
                table_name
            );
        }

        let delimiter = match file.delimiter {
            Some(s) => parse_delimiter(&s)?,
            None => match cli.delimiter {
                Some(c) => parse_delimiter(&c.to_string())?,
                None => b',',
            },
        };

        Ok(Self {
            base_dir,
            input_path,
            db_path,
            table_name,
            delimiter,
        })
    }
}

fn join_all(base: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(base.to_path_buf(), |path, part| path.join(part))
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn parse_delimiter(s: &str) -> Result<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
        _ => bail!("delimiter must be a single ASCII character, got {:?}", s),
    }
}
