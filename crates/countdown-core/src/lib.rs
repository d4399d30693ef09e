//! # Countdown Core Library
//!
//! Core logic for Countdown Widget: named events with a target date, shown
//! as "days remaining" in the app and in home-screen-style display surfaces.
//! The CLI binary is one front end over this library; display surfaces are
//! another, reading the same shared storage.
//!
//! ## Architecture
//!
//! - **Record**: [`CountdownRecord`] with day counts computed against an
//!   injected calendar day
//! - **Store**: [`CountdownStore`] owns the collection and writes every
//!   mutation through to a [`KeyValueStore`], then raises [`RefreshSignal`]s
//! - **Storage**: file-backed shared container and TOML [`Config`]
//! - **Widget**: timeline provider, renderer and selection picker for
//!   read-only display surfaces

pub mod clock;
pub mod countdown;
pub mod error;
pub mod refresh;
pub mod storage;
pub mod store;
pub mod widget;

pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::{days_remaining, is_today, CountdownRecord, CountdownStatus};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use refresh::{NoopRefresh, RefreshMarker, RefreshSignal};
pub use storage::{Config, FileStore, KeyValueStore, MemoryStore};
pub use store::{load_countdowns, CountdownStore};
pub use widget::{CountdownEntity, CountdownEntityQuery, CountdownEntry, CountdownProvider, WidgetFamily};
