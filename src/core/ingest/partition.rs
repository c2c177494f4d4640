//! Per-company record collections keyed by user id

use crate::domain::Record;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Result of offering a record to the partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// First record for this (company, user id)
    Inserted,
    /// Replaced a stored record with a lower version
    Replaced { previous_version: u64 },
    /// Dropped because the stored version is equal or higher
    Ignored { stored_version: u64 },
}

/// Records grouped by company, at most one per user id
///
/// The record kept for a user is always the one with the highest version
/// offered so far; ties keep the record that arrived first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPartition {
    companies: BTreeMap<String, HashMap<String, Record>>,
}

impl CompanyPartition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record or resolves it against the stored one by version
    pub fn upsert(&mut self, record: Record) -> UpsertOutcome {
        let users = self.companies.entry(record.company.clone()).or_default();

        match users.entry(record.user_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
                UpsertOutcome::Inserted
            }
            Entry::Occupied(mut slot) => {
                let stored_version = slot.get().version;
                if record.version > stored_version {
                    slot.insert(record);
                    UpsertOutcome::Replaced {
                        previous_version: stored_version,
                    }
                } else {
                    UpsertOutcome::Ignored { stored_version }
                }
            }
        }
    }

    /// Looks up the stored record for a user within a company
    pub fn get(&self, company: &str, user_id: &str) -> Option<&Record> {
        self.companies.get(company)?.get(user_id)
    }

    /// Company names in ascending order
    pub fn company_names(&self) -> impl Iterator<Item = &str> {
        self.companies.keys().map(String::as_str)
    }

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    pub fn record_count(&self) -> usize {
        self.companies.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Consumes the partition, yielding each company with its records
    pub fn into_companies(self) -> impl Iterator<Item = (String, Vec<Record>)> {
        self.companies
            .into_iter()
            .map(|(company, users)| (company, users.into_values().collect()))
    }
}
