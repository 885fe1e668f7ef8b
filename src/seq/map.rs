// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::collections::HashMap;

use log::{debug, warn};

use crate::errors::FastaprepError;
use crate::seq::file::SeqFile;

/// What to do when the same ID occurs more than once in a sequence file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one's sequence (with a warning).
    #[default]
    Overwrite,
    /// The first duplicate is an error.
    Reject,
}

/// Maps sequence IDs to sequences. IDs are kept in the order in which they were first seen, so
/// iteration (and hence seeded sampling) does not depend on hashing.
#[derive(Debug, Default)]
pub struct RecordMap {
    ids: Vec<String>,
    sequences: Vec<String>,
    index: HashMap<String, usize>,
}

impl RecordMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seq_file(
        seq_file: SeqFile,
        policy: DuplicatePolicy,
    ) -> Result<Self, FastaprepError> {
        let mut map = RecordMap::new();
        let mut replaced = 0;
        for rec in seq_file {
            let id = String::from(rec.id());
            if map.insert(id, rec.sequence, policy)? {
                replaced += 1;
            }
        }
        debug!("{} distinct IDs, {} records replaced", map.len(), replaced);
        Ok(map)
    }

    /// Inserts a record. Returns true IFF the ID was already present (and its sequence was
    /// replaced).
    pub fn insert(
        &mut self,
        id: String,
        sequence: String,
        policy: DuplicatePolicy,
    ) -> Result<bool, FastaprepError> {
        if let Some(&idx) = self.index.get(&id) {
            match policy {
                DuplicatePolicy::Overwrite => {
                    warn!("Duplicate ID '{}': later record replaces earlier one", id);
                    self.sequences[idx] = sequence;
                    Ok(true)
                }
                DuplicatePolicy::Reject => Err(FastaprepError::DuplicateId(id)),
            }
        } else {
            self.index.insert(id.clone(), self.ids.len());
            self.ids.push(id);
            self.sequences.push(sequence);
            Ok(false)
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&idx| self.sequences[idx].as_str())
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
