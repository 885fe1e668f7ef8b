// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

// A FastA record: the header line (without the leading '>') and the sequence, with multi-line
// sequences already joined.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: &str, sequence: &str) -> Self {
        SeqRecord {
            header: String::from(header),
            sequence: String::from(sequence),
        }
    }

    /// The record's ID, i.e. the header up to the first whitespace. Everything after that is
    /// the description.
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
}
