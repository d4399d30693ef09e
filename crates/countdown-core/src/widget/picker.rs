//! Entities offered when configuring which countdown a surface features.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::countdown::{sort_by_target, CountdownRecord};
use crate::store::load_countdowns;
use crate::storage::KeyValueStore;

/// A selectable countdown: just enough to show and store a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownEntity {
    pub id: String,
    pub name: String,
}

/// Query over the persisted collection, nearest countdown first.
pub struct CountdownEntityQuery<S> {
    storage: S,
}

impl<S: KeyValueStore> CountdownEntityQuery<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Entities whose id is in `identifiers`. Ids match in any letter case;
    /// identifiers that are not UUIDs match nothing.
    pub fn entities_for(&self, identifiers: &[String]) -> Vec<CountdownEntity> {
        let wanted: Vec<Uuid> = identifiers
            .iter()
            .filter_map(|id| Uuid::parse_str(id.trim()).ok())
            .collect();
        self.load_sorted()
            .into_iter()
            .filter(|c| wanted.contains(&c.id))
            .map(CountdownEntity::from)
            .collect()
    }

    pub fn suggested_entities(&self) -> Vec<CountdownEntity> {
        self.load_all()
    }

    pub fn default_result(&self) -> Option<CountdownEntity> {
        self.load_all().into_iter().next()
    }

    fn load_all(&self) -> Vec<CountdownEntity> {
        self.load_sorted()
            .into_iter()
            .map(CountdownEntity::from)
            .collect()
    }

    fn load_sorted(&self) -> Vec<CountdownRecord> {
        let mut countdowns = load_countdowns(&self.storage);
        sort_by_target(&mut countdowns);
        countdowns
    }
}

impl From<CountdownRecord> for CountdownEntity {
    fn from(record: CountdownRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name,
        }
    }
}
