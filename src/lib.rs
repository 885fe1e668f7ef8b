pub mod concat;
pub mod config;
pub mod errors;
pub mod runner;
pub mod seq;
pub mod subsample;

use crate::errors::FastaprepError;

pub fn run_concat() -> Result<(), FastaprepError> {
    runner::run_concat()
}

pub fn run_subsample() -> Result<(), FastaprepError> {
    runner::run_subsample()
}
