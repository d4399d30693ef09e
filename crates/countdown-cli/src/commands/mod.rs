pub mod config;
pub mod countdown;
pub mod picker;
pub mod widget;

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use countdown_core::storage::shared_container_dir;
use countdown_core::{
    Clock, Config, CountdownStore, FileStore, FixedClock, RefreshMarker, SystemClock,
};
use uuid::Uuid;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Shared container for the configured app group.
pub fn container(config: &Config) -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(shared_container_dir(&config.storage.app_group)?)
}

/// The owning store, wired to the refresh marker display surfaces watch.
pub fn open_store(config: &Config) -> Result<CountdownStore<FileStore>, Box<dyn std::error::Error>> {
    let container = container(config)?;
    log::debug!("Using shared container {}", container.display());
    Ok(CountdownStore::load(FileStore::new(&container))
        .with_signal(RefreshMarker::in_container(&container)))
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}").into())
}

pub fn parse_id(s: &str) -> Result<Uuid, Box<dyn std::error::Error>> {
    Uuid::parse_str(s.trim()).map_err(|e| format!("invalid countdown id '{s}': {e}").into())
}

/// Clock for this invocation: pinned to `--today` when given, else the
/// system clock read once.
pub fn clock(today: Option<&str>) -> Result<FixedClock, Box<dyn std::error::Error>> {
    let now: NaiveDateTime = match today {
        Some(day) => parse_date(day)?.and_time(NaiveTime::MIN),
        None => SystemClock.now(),
    };
    Ok(FixedClock(now))
}
