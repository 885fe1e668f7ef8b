// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

pub mod fasta;
pub mod file;
pub mod map;
pub mod record;
