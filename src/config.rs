// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 fastaprep contributors

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;

use crate::errors::FastaprepError;

pub const CONFIG_FILE_NAME: &str = ".fastaprepconfig";

/// Defaults read from the optional JSON dotfile. Every key is optional; command-line flags take
/// precedence over whatever is set here.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FastaprepConfig {
    pub seed: Option<u64>,
    pub output_name: Option<String>,
    pub sorted: Option<bool>,
    pub reject_duplicates: Option<bool>,
}

impl FastaprepConfig {
    pub fn from_value(value: &Value) -> Result<Self, FastaprepError> {
        serde_json::from_value(value.clone())
            .map_err(|e| FastaprepError::Format(format!("bad config: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self, FastaprepError> {
        let text = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| FastaprepError::Format(format!("bad config JSON: {}", e)))?;
        Self::from_value(&value)
    }
}

/// Looks for the dotfile in $HOME, then in the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_config_from_value() {
        let value = json!({
            "seed": 42,
            "output_name": "all.fasta",
            "sorted": true,
            "reject_duplicates": false,
            "unrelated": [1, 2, 3]
        });
        let cfg = FastaprepConfig::from_value(&value).unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.output_name.as_deref(), Some("all.fasta"));
        assert_eq!(cfg.sorted, Some(true));
        assert_eq!(cfg.reject_duplicates, Some(false));
    }

    #[test]
    fn test_config_missing_keys() {
        let cfg = FastaprepConfig::from_value(&json!({})).unwrap();
        assert_eq!(cfg, FastaprepConfig::default());
    }

    #[test]
    fn test_config_wrong_type() {
        let res = FastaprepConfig::from_value(&json!({ "seed": "abc" }));
        assert!(matches!(res, Err(FastaprepError::Format(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"seed\": 7}}").unwrap();
        let cfg = FastaprepConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn test_config_from_file_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "seed = 7").unwrap();
        let res = FastaprepConfig::from_file(file.path());
        assert!(matches!(res, Err(FastaprepError::Format(_))));
    }
}
