//! In-memory ordered user collection mutated through create/update/delete.

use std::{collections::HashSet, fmt, str::FromStr};

use serde::Deserialize;
use shared::domain::{RecordField, UserId, UserRecord};
use tracing::debug;

use crate::error::ParseIdStrategyError;

/// How [`RecordStore::create`] picks an id for a locally created record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// One past the highest id the store has ever held or assigned.
    #[default]
    Monotonic,
    /// Current length plus one. Can hand out an id that is already in use.
    LengthPlusOne,
}

impl IdStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            IdStrategy::Monotonic => "monotonic",
            IdStrategy::LengthPlusOne => "length-plus-one",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdStrategy {
    type Err = ParseIdStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "monotonic" => Ok(IdStrategy::Monotonic),
            "length-plus-one" | "length" => Ok(IdStrategy::LengthPlusOne),
            _ => Err(ParseIdStrategyError(s.to_string())),
        }
    }
}

/// Attribute values submitted from the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl RecordDraft {
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            website: record.website.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::Name => &self.name,
            RecordField::Email => &self.email,
            RecordField::Phone => &self.phone,
            RecordField::Website => &self.website,
        }
    }

    pub fn field_mut(&mut self, field: RecordField) -> &mut String {
        match field {
            RecordField::Name => &mut self.name,
            RecordField::Email => &mut self.email,
            RecordField::Phone => &mut self.phone,
            RecordField::Website => &mut self.website,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<UserRecord>,
    strategy: IdStrategy,
    // highest id seen so far, never decreases
    high_water: i64,
}

impl RecordStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            records: Vec::new(),
            strategy,
            high_water: 0,
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Swaps the whole collection for `records`, keeping their order.
    pub fn replace_all(&mut self, records: Vec<UserRecord>) {
        self.observe_ids(&records);
        self.records = records;
        debug!(count = self.records.len(), "store replaced");
    }

    /// Appends a record built from `draft`; any id carried by the draft is ignored.
    pub fn create(&mut self, draft: &RecordDraft) -> UserId {
        let id = self.next_id();
        self.high_water = self.high_water.max(id.0);
        self.records.push(UserRecord::new(
            id,
            draft.name.clone(),
            draft.email.clone(),
            draft.phone.clone(),
            draft.website.clone(),
        ));
        debug!(%id, strategy = %self.strategy, "record created");
        id
    }

    /// Overwrites the four editable attributes of every record whose id is
    /// `draft.id`. Returns `false` and leaves the store alone when nothing matches.
    pub fn update(&mut self, draft: &RecordDraft) -> bool {
        let Some(id) = draft.id else {
            return false;
        };
        let mut matched = 0usize;
        for record in self.records.iter_mut().filter(|record| record.id == id) {
            record.name = draft.name.clone();
            record.email = draft.email.clone();
            record.phone = draft.phone.clone();
            record.website = draft.website.clone();
            matched += 1;
        }
        debug!(%id, matched, "record update");
        matched > 0
    }

    pub fn delete(&mut self, id: UserId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        let removed = self.records.len() != before;
        debug!(%id, removed, "record delete");
        removed
    }

    fn next_id(&self) -> UserId {
        match self.strategy {
            IdStrategy::LengthPlusOne => UserId(self.records.len() as i64 + 1),
            IdStrategy::Monotonic => match self.high_water.checked_add(1) {
                Some(next) => UserId(next),
                None => self.smallest_unused_id(),
            },
        }
    }

    // Only reached once an id of i64::MAX has been seen.
    fn smallest_unused_id(&self) -> UserId {
        let taken: HashSet<i64> = self.records.iter().map(|record| record.id.0).collect();
        (1..=i64::MAX)
            .find(|candidate| !taken.contains(candidate))
            .map(UserId)
            .unwrap_or(UserId(0))
    }

    fn observe_ids(&mut self, records: &[UserRecord]) {
        if let Some(max) = records.iter().map(|record| record.id.0).max() {
            self.high_water = self.high_water.max(max);
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
