// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::{rngs::StdRng, seq::index, SeedableRng};

use crate::errors::FastaprepError;
use crate::seq::fasta::{read_fasta_file, write_fasta_file};
use crate::seq::map::{DuplicatePolicy, RecordMap};

pub const DEFAULT_SEED: u64 = 123;

#[derive(Clone, Debug)]
pub struct SubsampleOptions {
    pub sample_size: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    pub seed: u64,
    pub duplicates: DuplicatePolicy,
}

impl SubsampleOptions {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(sample_size: usize, input: P, output: Q) -> Self {
        SubsampleOptions {
            sample_size,
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            seed: DEFAULT_SEED,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SubsampleSummary {
    /// Number of distinct IDs in the input
    pub population: usize,
    pub sampled: usize,
}

pub fn read_record_map<P: AsRef<Path>>(
    path: P,
    policy: DuplicatePolicy,
) -> Result<RecordMap, FastaprepError> {
    let seq_file = read_fasta_file(path)?;
    let n_records = seq_file.len();
    let map = RecordMap::from_seq_file(seq_file, policy)?;
    debug!("{} records, {} distinct IDs", n_records, map.len());
    Ok(map)
}

/// Draws `size` distinct IDs uniformly at random, without replacement, from `map`. The result
/// is in draw order and depends only on the map's ID order and on `seed`.
pub fn sample_ids(map: &RecordMap, size: usize, seed: u64) -> Result<Vec<&str>, FastaprepError> {
    if size > map.len() {
        return Err(FastaprepError::SampleTooLarge {
            requested: size,
            available: map.len(),
        });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let ids = map.ids();
    let picked = index::sample(&mut rng, ids.len(), size)
        .into_iter()
        .map(|idx| ids[idx].as_str())
        .collect();
    Ok(picked)
}

/// Reads `options.input`, samples `options.sample_size` records and writes them to
/// `options.output`. Nothing is written if the sample cannot be drawn.
pub fn subsample_file(options: &SubsampleOptions) -> Result<SubsampleSummary, FastaprepError> {
    let map = read_record_map(&options.input, options.duplicates)?;
    info!(
        "Sampling {} of {} IDs from {} (seed {})",
        options.sample_size,
        map.len(),
        options.input.display(),
        options.seed
    );
    let picked = sample_ids(&map, options.sample_size, options.seed)?;
    let records = picked
        .iter()
        .map(|&id| (id, map.get(id).unwrap_or_default()));
    let sampled = write_fasta_file(&options.output, records)?;
    info!("Wrote {} records to {}", sampled, options.output.display());

    Ok(SubsampleSummary {
        population: map.len(),
        sampled,
    })
}
