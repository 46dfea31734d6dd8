use anyhow::{Context, Result};
use clap::Parser;
use opensound_etl::{run_pipeline, AppConfig, CliConfig, FileConfig};
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

/// Clean the raw tracks CSV and load it into SQLite, replacing the table.
///
/// With no arguments, reads `data/raw/spotify_tracks_raw.csv` and writes
/// `data/processed/opensound.db` under the current directory.
#[derive(Parser, Debug)]
#[command(name = "opensound-etl", version)]
struct CliArgs {
    /// Base directory holding `data/raw` and `data/processed`.
    #[clap(long, value_parser = parse_path)]
    pub base_dir: Option<PathBuf>,

    /// Raw tracks file. Defaults to `<base-dir>/data/raw/spotify_tracks_raw.csv`.
    #[clap(long, value_parser = parse_path)]
    pub input: Option<PathBuf>,

    /// SQLite database file. Defaults to `<base-dir>/data/processed/opensound.db`.
    #[clap(long, value_parser = parse_path)]
    pub db_path: Option<PathBuf>,

    /// Name of the table that is replaced on every run.
    #[clap(long)]
    pub table_name: Option<String>,

    /// Field delimiter of the input file.
    #[clap(long)]
    pub delimiter: Option<char>,

    /// Optional TOML config file; its values override the flags above.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    info!("opensound-etl {}", env!("CARGO_PKG_VERSION"));

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        base_dir: cli_args.base_dir,
        input_path: cli_args.input,
        db_path: cli_args.db_path,
        table_name: cli_args.table_name,
        delimiter: cli_args.delimiter,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let report = run_pipeline(&config)?;
    info!(
        "Done: {} rows read, {} dropped, {} loaded into '{}'",
        report.rows_read, report.rows_dropped, report.rows_loaded, config.table_name
    );

    Ok(())
}
