//! The countdown store: authoritative in-memory collection plus its
//! persisted form in a shared storage area.
//!
//! Every effective mutation is written through synchronously and followed by
//! a refresh request to the registered [`RefreshSignal`]s. There is no
//! batching and no pending state.

use std::collections::HashSet;

use uuid::Uuid;

use crate::countdown::{sort_by_target, CountdownRecord};
use crate::error::{Result, StorageError, ValidationError};
use crate::refresh::RefreshSignal;
use crate::storage::{KeyValueStore, COUNTDOWNS_KEY};

/// Serialize a collection to its persisted JSON form.
///
/// # Errors
/// Returns [`StorageError::EncodeFailed`] if serialization fails.
pub fn encode_countdowns(countdowns: &[CountdownRecord]) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec(countdowns).map_err(StorageError::EncodeFailed)
}

/// Parse the persisted JSON form.
///
/// # Errors
/// Returns the JSON error for malformed input.
pub fn decode_countdowns(bytes: &[u8]) -> Result<Vec<CountdownRecord>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Read-only snapshot of the persisted collection.
///
/// Missing, unreadable or malformed data all yield an empty list; the cause
/// is logged, never returned.
pub fn load_countdowns<S: KeyValueStore + ?Sized>(storage: &S) -> Vec<CountdownRecord> {
    let bytes = match storage.read(COUNTDOWNS_KEY) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            log::debug!("No persisted countdowns, starting empty");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Failed to read countdowns, starting empty: {e}");
            return Vec::new();
        }
    };

    match decode_countdowns(&bytes) {
        Ok(countdowns) => {
            log::debug!("Loaded {} countdowns", countdowns.len());
            countdowns
        }
        Err(e) => {
            log::warn!("Persisted countdowns are malformed, starting empty: {e}");
            Vec::new()
        }
    }
}

/// Owner of the countdown collection.
///
/// Construct one per process and pass it by reference; display surfaces
/// read through [`load_countdowns`] instead.
pub struct CountdownStore<S: KeyValueStore> {
    storage: S,
    countdowns: Vec<CountdownRecord>,
    signals: Vec<Box<dyn RefreshSignal>>,
}

impl<S: KeyValueStore> CountdownStore<S> {
    /// Load the persisted collection from `storage`. Never fails; see
    /// [`load_countdowns`].
    pub fn load(storage: S) -> Self {
        let countdowns = load_countdowns(&storage);
        Self {
            storage,
            countdowns,
            signals: Vec::new(),
        }
    }

    /// Register a signal raised after every successful save.
    pub fn with_signal(mut self, signal: impl RefreshSignal + 'static) -> Self {
        self.signals.push(Box::new(signal));
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Records in insertion order.
    pub fn countdowns(&self) -> &[CountdownRecord] {
        &self.countdowns
    }

    /// Records sorted ascending by target date, ties in insertion order.
    pub fn sorted(&self) -> Vec<CountdownRecord> {
        let mut sorted = self.countdowns.clone();
        sort_by_target(&mut sorted);
        sorted
    }

    pub fn get(&self, id: Uuid) -> Option<&CountdownRecord> {
        self.countdowns.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.countdowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countdowns.is_empty()
    }

    /// Append `record`, then persist and signal.
    ///
    /// # Errors
    /// Returns [`ValidationError::DuplicateId`] if the id is already present
    /// (nothing changes), or the save error. On a save error the record
    /// stays in memory.
    pub fn add(&mut self, record: CountdownRecord) -> Result<()> {
        if self.get(record.id).is_some() {
            return Err(ValidationError::DuplicateId(record.id).into());
        }
        log::debug!("Adding countdown {} ({})", record.id, record.name);
        self.countdowns.push(record);
        self.save()
    }

    /// Replace the record with the same id. Returns `false` without writing
    /// anything when no record matches.
    ///
    /// # Errors
    /// Returns the save error; the replacement stays in memory.
    pub fn update(&mut self, record: CountdownRecord) -> Result<bool> {
        let Some(slot) = self.countdowns.iter_mut().find(|c| c.id == record.id) else {
            log::debug!("Ignoring update for unknown countdown {}", record.id);
            return Ok(false);
        };
        *slot = record;
        self.save()?;
        Ok(true)
    }

    /// Remove every record whose id is in `ids`, returning how many were
    /// removed. Unknown ids are ignored; nothing is written when none match.
    ///
    /// # Errors
    /// Returns the save error; the removal stays in effect in memory.
    pub fn delete(&mut self, ids: &HashSet<Uuid>) -> Result<usize> {
        let before = self.countdowns.len();
        self.countdowns.retain(|c| !ids.contains(&c.id));
        let removed = before - self.countdowns.len();
        if removed == 0 {
            return Ok(0);
        }
        log::debug!("Deleted {removed} countdowns");
        self.save()?;
        Ok(removed)
    }

    /// Write the whole collection to storage, replacing what was there, and
    /// request a refresh from every registered signal.
    ///
    /// # Errors
    /// On failure the previously persisted value is left as it was, no
    /// refresh is requested, and the error is returned for the caller to
    /// surface.
    pub fn save(&self) -> Result<()> {
        let written = encode_countdowns(&self.countdowns)
            .and_then(|bytes| self.storage.write(COUNTDOWNS_KEY, &bytes));
        if let Err(e) = written {
            log::warn!("Countdowns not persisted: {e}");
            return Err(e.into());
        }

        log::debug!("Saved {} countdowns", self.countdowns.len());
        for signal in &self.signals {
            signal.request_refresh();
        }
        Ok(())
    }
}
