//! Timeline provider for display surfaces.

use chrono::{Days, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::countdown::CountdownRecord;
use crate::store::load_countdowns;
use crate::storage::KeyValueStore;

/// What a surface shows at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownEntry {
    pub date: NaiveDateTime,
    /// Featured countdown for the small and medium families.
    pub countdown: Option<CountdownRecord>,
    /// Full snapshot for the large family.
    pub all_countdowns: Vec<CountdownRecord>,
}

/// Entries plus when the surface should ask for a new timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub entries: Vec<CountdownEntry>,
    pub refresh_after: NaiveDateTime,
}

/// Resolve the countdown a surface instance should feature.
///
/// `selection` is the id the user configured, if any. A selection that is
/// not a UUID or no longer exists falls back to the countdown with the
/// earliest target date (first one on ties).
pub fn selected_countdown(
    countdowns: &[CountdownRecord],
    selection: Option<&str>,
) -> Option<CountdownRecord> {
    let chosen = selection
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .and_then(|id| countdowns.iter().find(|c| c.id == id));

    chosen
        .or_else(|| countdowns.iter().min_by_key(|c| c.target_date))
        .cloned()
}

/// Builds entries for a surface from the shared storage area.
pub struct CountdownProvider<S, C> {
    storage: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> CountdownProvider<S, C> {
    pub fn new(storage: S, clock: C) -> Self {
        Self { storage, clock }
    }

    /// Sample entry shown while a surface is being added.
    pub fn placeholder(&self) -> CountdownEntry {
        let now = self.clock.now();
        let target = self
            .clock
            .today()
            .checked_add_days(Days::new(10))
            .unwrap_or_else(|| self.clock.today())
            .and_time(NaiveTime::MIN);
        let countdown = CountdownRecord {
            id: Uuid::nil(),
            name: "My Event".to_string(),
            target_date: target,
        };
        CountdownEntry {
            date: now,
            countdown: Some(countdown),
            all_countdowns: Vec::new(),
        }
    }

    /// Entry built from a fresh read of storage.
    pub fn snapshot(&self, selection: Option<&str>) -> CountdownEntry {
        let countdowns = load_countdowns(&self.storage);
        let countdown = selected_countdown(&countdowns, selection);
        CountdownEntry {
            date: self.clock.now(),
            countdown,
            all_countdowns: countdowns,
        }
    }

    /// Single-entry timeline that expires at the next local midnight, when
    /// the day count changes.
    pub fn timeline(&self, selection: Option<&str>) -> Timeline {
        Timeline {
            entries: vec![self.snapshot(selection)],
            refresh_after: self.clock.next_midnight(),
        }
    }
}
