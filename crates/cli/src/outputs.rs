//! Publishing results for downstream CI steps.

use std::fs::OpenOptions;
use std::io::Write;

use apm_action_core::error::{Error, Result};
use apm_action_core::workflow::ExecutionResult;
use itertools::Itertools;

const DELIMITER: &str = "APM_ACTION_OUTPUT_EOF";

/// Formats the results in the `name=value` / `name<<DELIMITER` file format CI
/// runners read step outputs from.
#[must_use]
pub fn format_outputs(result: &ExecutionResult) -> String {
    // The delimiter must not appear as a line of the output itself
    let mut delimiter = DELIMITER.to_string();
    let mut attempt = 0;
    while result.output.lines().any(|line| line == delimiter) {
        attempt += 1;
        delimiter = format!("{DELIMITER}_{attempt}");
    }

    format!(
        "success={}\noutput<<{delimiter}\n{}\n{delimiter}\n",
        result.success, result.output
    )
}

/// Appends the results to the outputs file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn write_outputs(path: &str, result: &ExecutionResult) -> Result<()> {
    let io_error = |e| Error::io_error("outputs".to_string(), path.to_string(), e);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;

    file.write_all(format_outputs(result).as_bytes())
        .map_err(io_error)
}

/// Renders an argument list for display, quoting each argument so embedded
/// spaces stay visible.
#[must_use]
pub fn format_arguments(arguments: &[String]) -> String {
    arguments.iter().map(|argument| format!("{argument:?}")).join(" ")
}
