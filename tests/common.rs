#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::path::Path;

pub fn ow() -> Command {
    cargo_bin_cmd!("overwork")
}

/// Run the binary against a given data file with a scripted stdin session.
/// The menu loop ends when stdin is exhausted, so a finite script always
/// terminates the process.
pub fn run_session(data_file: &Path, script: &str) -> assert_cmd::assert::Assert {
    ow().env("OVERWORK_DATA_FILE", data_file)
        .write_stdin(script)
        .assert()
}

/// Parse the data file back into a JSON value for assertions.
pub fn read_data(data_file: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(data_file).expect("data file should exist");
    serde_json::from_str(&content).expect("data file should be valid JSON")
}
