// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::process::ExitCode;

fn main() -> ExitCode {
    match fastaprep::run_concat() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fastaprep-concat: {}", e);
            ExitCode::FAILURE
        }
    }
}
