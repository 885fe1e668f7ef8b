// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::errors::FastaprepError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, FastaprepError> {
    let file = File::open(path.as_ref())?;
    read_fasta(BufReader::new(file))
}

pub fn read_fasta<R: BufRead>(reader: R) -> Result<SeqFile, FastaprepError> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let l = line.trim_end_matches('\r');
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(rec) = current_record.take() {
                result.push(rec);
            }
            current_record = Some(SeqRecord::new(hdr.trim(), ""));
        } else if l.trim().is_empty() {
            continue;
        } else {
            match current_record.as_mut() {
                // append line to current record's sequence
                Some(rec) => l
                    .split_whitespace()
                    .for_each(|chunk| rec.sequence.push_str(chunk)),
                None => {
                    return Err(FastaprepError::Format(format!(
                        "line {}: sequence data before first '>' header",
                        lineno + 1
                    )))
                }
            }
        }
    }
    if let Some(rec) = current_record {
        result.push(rec);
    }
    debug!("Read {} FastA records", result.len());
    Ok(result)
}

/// Writes each record as a header line (`>` + ID) followed by the whole sequence on one line.
pub fn write_fasta<'a, W, I>(writer: &mut W, records: I) -> Result<usize, FastaprepError>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut count = 0;
    for (id, sequence) in records {
        writeln!(writer, ">{}", id)?;
        writeln!(writer, "{}", sequence)?;
        count += 1;
    }
    Ok(count)
}

pub fn write_fasta_file<'a, P, I>(path: P, records: I) -> Result<usize, FastaprepError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    let count = write_fasta(&mut writer, records)?;
    writer.flush()?;
    Ok(count)
}
