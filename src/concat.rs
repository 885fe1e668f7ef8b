// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use itertools::Itertools;
use log::{debug, info};

use crate::errors::FastaprepError;

pub const DEFAULT_OUTPUT_NAME: &str = "RST6_AllNochimeras.fasta";

/// Order in which the input folder's files are concatenated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingOrder {
    /// Whatever order the filesystem lists them in.
    #[default]
    Listing,
    /// By file name.
    Sorted,
}

#[derive(Clone, Debug)]
pub struct ConcatOptions {
    pub output_name: String,
    pub order: ListingOrder,
}

impl Default for ConcatOptions {
    fn default() -> Self {
        ConcatOptions {
            output_name: String::from(DEFAULT_OUTPUT_NAME),
            order: ListingOrder::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConcatSummary {
    pub destination: PathBuf,
    pub files: usize,
    pub lines: usize,
    pub bytes: u64,
}

/// Entries directly under `input_dir` (not recursive).
pub fn list_input_files(
    input_dir: &Path,
    order: ListingOrder,
) -> Result<Vec<PathBuf>, FastaprepError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        paths.push(entry?.path());
    }
    let paths = match order {
        ListingOrder::Listing => paths,
        ListingOrder::Sorted => paths
            .into_iter()
            .sorted_by(|a, b| a.file_name().cmp(&b.file_name()))
            .collect(),
    };
    Ok(paths)
}

// Appends `src` to `dest` byte for byte. Returns (lines, bytes); a last line without a newline
// still counts.
fn append_file<W: Write>(src: &Path, dest: &mut W) -> Result<(usize, u64), FastaprepError> {
    let mut reader = BufReader::new(File::open(src)?);
    let mut buf: Vec<u8> = Vec::new();
    let mut lines = 0;
    let mut bytes: u64 = 0;
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        dest.write_all(&buf)?;
        lines += 1;
        bytes += n as u64;
    }
    Ok((lines, bytes))
}

/// Concatenates every file directly under `input_dir` into `output_dir/<output_name>`. The
/// destination is truncated first, so repeated runs do not accumulate. If the destination
/// itself shows up in the listing it is skipped. Any other entry that is not a regular file
/// aborts the run, leaving the destination partially written.
pub fn concat_folder(
    input_dir: &Path,
    output_dir: &Path,
    options: &ConcatOptions,
) -> Result<ConcatSummary, FastaprepError> {
    let destination = output_dir.join(&options.output_name);
    let mut writer = BufWriter::new(File::create(&destination)?);
    let canonical_dest = fs::canonicalize(&destination)?;
    info!("Concatenating {} into {}", input_dir.display(), destination.display());

    let mut summary = ConcatSummary {
        destination,
        files: 0,
        lines: 0,
        bytes: 0,
    };
    for path in list_input_files(input_dir, options.order)? {
        if fs::canonicalize(&path).ok().as_ref() == Some(&canonical_dest) {
            debug!("Skipping destination file {}", path.display());
            continue;
        }
        if !path.is_file() {
            return Err(FastaprepError::NotAFile(path));
        }
        let (lines, bytes) = append_file(&path, &mut writer)?;
        debug!("{}: {} lines", path.display(), lines);
        summary.files += 1;
        summary.lines += lines;
        summary.bytes += bytes;
    }
    writer.flush()?;

    info!(
        "Wrote {} lines ({} bytes) from {} files to {}",
        summary.lines,
        summary.bytes,
        summary.files,
        summary.destination.display()
    );
    Ok(summary)
}
