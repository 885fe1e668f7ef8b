// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use fastaprep::seq::{fasta::read_fasta_file, file::SeqFile};

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write test file");
}

/// Runs one of the crate's binaries with `home` as both $HOME and working directory, so that no
/// stray config file is picked up.
#[allow(dead_code)]
pub fn run_bin(bin: &str, home: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .current_dir(home)
        .output()
        .expect("run binary")
}

#[allow(dead_code)]
pub fn read_records(path: &Path) -> SeqFile {
    read_fasta_file(path).expect("read FastA output")
}

/// Writes `n` records (seq0, seq1, ...) to `path`.
#[allow(dead_code)]
pub fn write_numbered_fasta(path: &Path, n: usize) {
    let text: String = (0..n)
        .map(|i| format!(">seq{} sample {}\nACGT{}\n", i, i, "A".repeat(i % 7)))
        .collect();
    fs::write(path, text).expect("write FastA");
}
