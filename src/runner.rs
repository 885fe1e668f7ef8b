// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use crate::concat::{concat_folder, ConcatOptions, ListingOrder, DEFAULT_OUTPUT_NAME};
use crate::config::{find_config, FastaprepConfig};
use crate::errors::FastaprepError;
use crate::seq::map::DuplicatePolicy;
use crate::subsample::{subsample_file, SubsampleOptions, DEFAULT_SEED};

/// Concatenate all files in a folder into a single FastA file
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct ConcatCli {
    /// Folder whose files are concatenated (not recursive)
    input_folder: PathBuf,

    /// Folder in which the combined file is written
    output_folder: PathBuf,

    /// Name of the combined file [default: RST6_AllNochimeras.fasta]
    #[arg(short = 'n', long = "output-name")]
    output_name: Option<String>,

    /// Concatenate in file name order instead of directory listing order
    #[arg(short, long)]
    sorted: bool,
}

/// Write a reproducible random subsample of the records in a FastA file
#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct SubsampleCli {
    /// Number of records to draw (without replacement)
    sample_size: usize,

    /// FastA file to sample from
    input_file: PathBuf,

    /// FastA file to write the sample to
    output_file: PathBuf,

    /// Random seed [default: 123]
    #[arg(short = 'S', long)]
    seed: Option<u64>,

    /// Fail on duplicate IDs instead of keeping the last record
    #[arg(short = 'r', long = "reject-duplicates")]
    reject_duplicates: bool,
}

impl ConcatCli {
    fn into_options(self, config: &FastaprepConfig) -> (PathBuf, PathBuf, ConcatOptions) {
        let output_name = self
            .output_name
            .or_else(|| config.output_name.clone())
            .unwrap_or_else(|| String::from(DEFAULT_OUTPUT_NAME));
        let order = if self.sorted || config.sorted.unwrap_or(false) {
            ListingOrder::Sorted
        } else {
            ListingOrder::Listing
        };
        (
            self.input_folder,
            self.output_folder,
            ConcatOptions { output_name, order },
        )
    }
}

impl SubsampleCli {
    fn into_options(self, config: &FastaprepConfig) -> SubsampleOptions {
        let duplicates = if self.reject_duplicates || config.reject_duplicates.unwrap_or(false) {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Overwrite
        };
        SubsampleOptions {
            sample_size: self.sample_size,
            input: self.input_file,
            output: self.output_file,
            seed: self.seed.or(config.seed).unwrap_or(DEFAULT_SEED),
            duplicates,
        }
    }
}

// A bad config file is reported but does not stop the run.
fn load_config() -> FastaprepConfig {
    match find_config() {
        Some(path) => match FastaprepConfig::from_file(&path) {
            Ok(cfg) => {
                info!("Using config {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                FastaprepConfig::default()
            }
        },
        None => FastaprepConfig::default(),
    }
}

pub fn run_concat() -> Result<(), FastaprepError> {
    env_logger::init();
    info!("Starting log");

    let cli = ConcatCli::parse();
    let config = load_config();
    let (input, output, options) = cli.into_options(&config);
    concat_folder(&input, &output, &options)?;
    Ok(())
}

pub fn run_subsample() -> Result<(), FastaprepError> {
    env_logger::init();
    info!("Starting log");

    let cli = SubsampleCli::parse();
    let config = load_config();
    let options = cli.into_options(&config);
    subsample_file(&options)?;
    Ok(())
}
