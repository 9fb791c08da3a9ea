//! Reading action inputs from disk.

use std::fs::File;

use log::debug;

use crate::config::ActionInputs;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads action inputs from a YAML file.
///
/// Keys use the action's kebab-case input names. `parameters` may be either a
/// JSON string or a YAML mapping:
///
/// ```yaml
/// script: review
/// parameters:
///   model: gpt-4
///   temperature: 0.8
/// args: --debug
/// skip-install: true
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn read_action_inputs(path: &str) -> Result<ActionInputs> {
    let reader = get_reader("inputs", path)?;
    debug!("Reading action inputs from `{path}`");

    serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "inputs".to_string(),
            path.to_string(),
            e,
        )
    })
}
