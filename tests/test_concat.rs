// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

mod common;

use std::fs;

use crate::common::utils;

use fastaprep::concat::{list_input_files, ListingOrder, DEFAULT_OUTPUT_NAME};

const BIN: &str = env!("CARGO_BIN_EXE_fastaprep-concat");

#[test]
fn concatenates_folder_in_listing_order() {
    let home = tempfile::tempdir().unwrap();
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    utils::write_file(input.path(), "s1.fasta", ">r1\nACGT\n>r2\nAAAA\n");
    utils::write_file(input.path(), "s2.fasta", ">r3\nCCCC\n");
    utils::write_file(input.path(), "s3.fasta", ">r4\nGG\n>r5\nTT\n>r6\nNN\n");

    let out = utils::run_bin(
        BIN,
        home.path(),
        &[
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
        ],
    );
    assert!(out.status.success());

    let combined = fs::read_to_string(output.path().join(DEFAULT_OUTPUT_NAME)).unwrap();
    assert_eq!(combined.lines().count(), 4 + 2 + 6);
    let expected: String = list_input_files(input.path(), ListingOrder::Listing)
        .unwrap()
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert_eq!(combined, expected);
}

#[test]
fn sorted_flag_and_custom_name() {
    let home = tempfile::tempdir().unwrap();
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    utils::write_file(input.path(), "zeta.fa", ">z\nZZ\n");
    utils::write_file(input.path(), "alpha.fa", ">a\nAA\n");
    utils::write_file(input.path(), "mid.fa", ">m\nMM\n");

    let out = utils::run_bin(
        BIN,
        home.path(),
        &[
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
            "--sorted",
            "--output-name",
            "all.fa",
        ],
    );
    assert!(out.status.success());
    let combined = fs::read_to_string(output.path().join("all.fa")).unwrap();
    insta::assert_snapshot!(combined.trim_end(), @r"
    >a
    AA
    >m
    MM
    >z
    ZZ
    ");
}

#[test]
fn config_file_sets_defaults() {
    let home = tempfile::tempdir().unwrap();
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    utils::write_file(
        home.path(),
        ".fastaprepconfig",
        r#"{"output_name": "from_cfg.fa", "sorted": true}"#,
    );
    utils::write_file(input.path(), "b.fa", ">b\nBB\n");
    utils::write_file(input.path(), "a.fa", ">a\nAA\n");

    let out = utils::run_bin(
        BIN,
        home.path(),
        &[
            input.path().to_str().unwrap(),
            output.path().to_str().unwrap(),
        ],
    );
    assert!(out.status.success());
    let combined = fs::read_to_string(output.path().join("from_cfg.fa")).unwrap();
    assert_eq!(combined, ">a\nAA\n>b\nBB\n");
}

#[test]
fn second_run_overwrites() {
    let home = tempfile::tempdir().unwrap();
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    utils::write_file(input.path(), "only.fa", ">x\nACGT\n");
    let args = [
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    ];

    assert!(utils::run_bin(BIN, home.path(), &args).status.success());
    assert!(utils::run_bin(BIN, home.path(), &args).status.success());
    let combined = fs::read_to_string(output.path().join(DEFAULT_OUTPUT_NAME)).unwrap();
    assert_eq!(combined, ">x\nACGT\n");
}

#[test]
fn missing_input_folder_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let missing = output.path().join("missing");
    let out = utils::run_bin(
        BIN,
        home.path(),
        &[missing.to_str().unwrap(), output.path().to_str().unwrap()],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("fastaprep-concat: I/O error:"));
}
