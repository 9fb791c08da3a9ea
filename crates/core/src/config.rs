//! Action inputs and their defaults.
//!
//! The inputs mirror the fields a CI action exposes. They can be loaded from a
//! YAML file (see [`crate::file_handling::read_action_inputs`]) or assembled by
//! the boundary adapter from flags and environment variables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gathering::RawInputs;

/// Script run when none is given
pub const DEFAULT_SCRIPT: &str = "start";
/// Workflow CLI executable
pub const DEFAULT_PROGRAM: &str = "apm";
/// Script name that stops after dependency installation
pub const INSTALL_SCRIPT: &str = "install";
/// Used for `XDG_CONFIG_HOME` when `HOME` is unset
const DEFAULT_RUNNER_HOME: &str = "/home/runner";

/// Structured parameters, either as JSON text or as a YAML mapping.
///
/// Any YAML value is accepted for the mapping form; whether it is actually an
/// object is decided later, where a non-object only produces a warning.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ParametersInput {
    Json(String),
    Mapping(serde_yaml::Value),
}

impl ParametersInput {
    /// Returns the parameters as JSON object text.
    ///
    /// Mapping keys that are not strings (`1: one`, `true: yes`) are converted
    /// to their text form.
    ///
    /// # Errors
    ///
    /// Returns an error if a mapping cannot be serialized.
    pub fn to_json_text(&self) -> Result<String> {
        match self {
            Self::Json(text) => Ok(text.clone()),
            Self::Mapping(value) => Ok(serde_json::to_string(&yaml_to_json(value))?),
        }
    }
}

fn yaml_to_json(value: &serde_yaml::Value) -> serde_json::Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => serde_json::Value::Null,
        Yaml::Bool(flag) => serde_json::Value::Bool(*flag),
        Yaml::Number(number) => yaml_number_to_json(number),
        Yaml::String(text) => serde_json::Value::String(text.clone()),
        Yaml::Sequence(items) => {
            serde_json::Value::Array(items.iter().map(yaml_to_json).collect())
        }
        Yaml::Mapping(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, value)| (yaml_key_to_string(key), yaml_to_json(value)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn yaml_number_to_json(number: &serde_yaml::Number) -> serde_json::Value {
    if let Some(integer) = number.as_i64() {
        serde_json::Value::from(integer)
    } else if let Some(unsigned) = number.as_u64() {
        serde_json::Value::from(unsigned)
    } else {
        // `.inf` and `.nan` have no JSON number form
        number
            .as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or_else(
                || serde_json::Value::String(number.to_string()),
                serde_json::Value::Number,
            )
    }
}

fn yaml_key_to_string(key: &serde_yaml::Value) -> String {
    match yaml_to_json(key) {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct ActionInputs {
    pub script: Option<String>,
    pub parameters: Option<ParametersInput>,
    pub args: Option<String>,
    pub working_directory: Option<String>,
    pub skip_install: bool,
    pub program: Option<String>,
}

impl ActionInputs {
    /// The script to run, falling back to [`DEFAULT_SCRIPT`] when unset or blank.
    #[must_use]
    pub fn script(&self) -> &str {
        non_blank(self.script.as_deref()).unwrap_or(DEFAULT_SCRIPT)
    }

    /// The workflow CLI executable, falling back to [`DEFAULT_PROGRAM`].
    #[must_use]
    pub fn program(&self) -> &str {
        non_blank(self.program.as_deref()).unwrap_or(DEFAULT_PROGRAM)
    }

    /// The directory commands run in, with `~` expanded.
    ///
    /// Returns `None` for the current directory (unset, blank or `.`).
    #[must_use]
    pub fn working_directory(&self) -> Option<String> {
        match non_blank(self.working_directory.as_deref()) {
            None | Some(".") => None,
            Some(directory) => Some(shellexpand::tilde(directory).to_string()),
        }
    }

    /// The two raw strings fed to argument gathering.
    ///
    /// # Errors
    ///
    /// Returns an error if mapping parameters cannot be serialized to JSON.
    pub fn raw_inputs(&self) -> Result<RawInputs> {
        let parameters = self
            .parameters
            .as_ref()
            .map(ParametersInput::to_json_text)
            .transpose()?;

        Ok(RawInputs::new(parameters, self.args.clone()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Extra environment for every workflow CLI invocation.
///
/// `XDG_CONFIG_HOME` points at the runner's home so the CLI finds its MCP
/// server configuration, and the agent runs in standalone mode.
#[must_use]
pub fn runner_environment(home: Option<&str>) -> HashMap<String, String> {
    let home = non_blank(home).unwrap_or(DEFAULT_RUNNER_HOME);

    HashMap::from([
        ("XDG_CONFIG_HOME".to_string(), home.to_string()),
        (
            "COPILOT_AGENT_RUNNER_TYPE".to_string(),
            "STANDALONE".to_string(),
        ),
    ])
}
