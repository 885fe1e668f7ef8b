// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use crate::seq::record::SeqRecord;

// For our purposes, a sequence file is just a Vec of sequence records, in file order.
//

pub type SeqFile = Vec<SeqRecord>;
