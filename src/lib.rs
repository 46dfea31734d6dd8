//! OpenSound tracks ETL
//!
//! Cleans the raw Spotify tracks CSV and replaces a single SQLite table with
//! the result. The library exposes the pipeline stages for testing and reuse.

pub mod config;
pub mod pipeline;
pub mod sqlite_persistence;

pub use config::{AppConfig, CliConfig, FileConfig};
pub use pipeline::{run_pipeline, EtlError, PipelineReport};
