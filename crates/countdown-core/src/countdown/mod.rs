//! Countdown record and its derived day-count fields.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A named event with a target calendar date.
///
/// `target_date` keeps a wall-clock time so the persisted form matches what
/// was entered, but only its date component feeds the day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownRecord {
    pub id: Uuid,
    pub name: String,
    pub target_date: NaiveDateTime,
}

/// Display state of a record relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CountdownStatus {
    Upcoming { days: i64 },
    Today,
    Passed,
}

impl CountdownRecord {
    /// Create a record with a fresh id, targeting midnight of `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if `name` is blank.
    pub fn new(name: &str, target: NaiveDate) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, target.and_time(NaiveTime::MIN))
    }

    /// Build a record for an existing id, e.g. the edited form of a record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] if `name` is blank.
    pub fn with_id(
        id: Uuid,
        name: &str,
        target_date: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            target_date,
        })
    }

    /// Calendar day the countdown ends on.
    pub fn target_day(&self) -> NaiveDate {
        self.target_date.date()
    }

    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        days_remaining(self.target_day(), today)
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        is_today(self.target_day(), today)
    }

    pub fn status(&self, today: NaiveDate) -> CountdownStatus {
        let target = self.target_day();
        if target == today {
            CountdownStatus::Today
        } else if target < today {
            CountdownStatus::Passed
        } else {
            CountdownStatus::Upcoming {
                days: days_remaining(target, today),
            }
        }
    }
}

/// Whole calendar days from `today` until `target`, never negative.
///
/// Works on day ordinals rather than durations, so the full `NaiveDate`
/// range is safe.
pub fn days_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    let diff = i64::from(target.num_days_from_ce()) - i64::from(today.num_days_from_ce());
    diff.max(0)
}

/// True when `target` falls on `today`. Past targets clamp to zero days
/// remaining but are not "today".
pub fn is_today(target: NaiveDate, today: NaiveDate) -> bool {
    target == today
}

/// Stable ascending sort on target date.
pub fn sort_by_target(records: &mut [CountdownRecord]) {
    records.sort_by_key(|r| r.target_date);
}

/// "day" or "days" for a count.
pub fn day_unit(days: i64) -> &'static str {
    if days == 1 {
        "day"
    } else {
        "days"
    }
}
