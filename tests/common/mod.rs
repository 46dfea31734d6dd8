//! Common test infrastructure
//!
//! Writes raw CSV fixtures into a temporary base directory laid out like a
//! real deployment (`data/raw`, `data/processed`) and reads the resulting
//! SQLite table back.

mod constants;
mod fixtures;

pub use constants::*;
pub use fixtures::{read_rows, TestWorkspace, TrackRow};
