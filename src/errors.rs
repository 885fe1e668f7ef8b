// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum FastaprepError {
    Io(io::Error),
    Format(String),
    NotAFile(PathBuf),
    DuplicateId(String),
    SampleTooLarge { requested: usize, available: usize },
}

// Allows '?' on I/O results throughout the crate.

impl From<io::Error> for FastaprepError {
    fn from(e: io::Error) -> Self {
        FastaprepError::Io(e)
    }
}

impl fmt::Display for FastaprepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastaprepError::Io(e) => write!(f, "I/O error: {}", e),
            FastaprepError::Format(msg) => write!(f, "Format error: {}", msg),
            FastaprepError::NotAFile(path) => {
                write!(f, "Not a regular file: {}", path.display())
            }
            FastaprepError::DuplicateId(id) => write!(f, "Duplicate sequence ID: {}", id),
            FastaprepError::SampleTooLarge {
                requested,
                available,
            } => write!(
                f,
                "Sample larger than population: requested {}, but only {} distinct IDs",
                requested, available
            ),
        }
    }
}

impl std::error::Error for FastaprepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FastaprepError::Io(e) => Some(e),
            _ => None,
        }
    }
}
