//! Structured parameter encoding.
//!
//! Turns a flat key/value map, usually supplied as a JSON object, into
//! `--param key=value` argument pairs for the workflow CLI.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use log::debug;
use serde_json::{Number, Value};

use crate::diagnostics::WarningSink;
use crate::error::ParameterWarning;

/// Flag emitted in front of every encoded `key=value` pair.
pub const PARAM_FLAG: &str = "--param";

/// Ordered list of arguments handed to the workflow CLI.
pub type ArgumentVector = Vec<String>;

/// Parameters keyed by name, iterated in first-seen order.
pub type ParameterMap = IndexMap<String, ParameterValue>;

/// A single structured parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
    /// Arrays, nested objects and numbers beyond `f64`, rendered as compact JSON.
    Structured(Value),
}

impl ParameterValue {
    /// Converts a JSON value, returning `None` for `null`.
    #[must_use]
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(flag) => Some(Self::Boolean(flag)),
            Value::Number(number) => Some(Self::from_number(number)),
            Value::String(text) => Some(Self::Text(text)),
            structured @ (Value::Array(_) | Value::Object(_)) => {
                Some(Self::Structured(structured))
            }
        }
    }

    fn from_number(number: Number) -> Self {
        if let Some(integer) = number.as_i64() {
            Self::Integer(integer)
        } else if let Some(unsigned) = number.as_u64() {
            Self::Unsigned(unsigned)
        } else if let Some(float) = number.as_f64().filter(|float| float.is_finite()) {
            Self::Float(float)
        } else {
            // Out of range for f64, keep the literal
            Self::Structured(Value::Number(number))
        }
    }
}

impl Display for ParameterValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Integer(integer) => write!(formatter, "{integer}"),
            Self::Unsigned(unsigned) => write!(formatter, "{unsigned}"),
            Self::Float(float) => write!(formatter, "{float}"),
            Self::Boolean(flag) => write!(formatter, "{flag}"),
            Self::Structured(value) => write!(formatter, "{value}"),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Parses the structured parameters input into a [`ParameterMap`].
///
/// Blank input and the empty object `{}` yield an empty map without a warning.
/// Malformed JSON, or JSON that is not an object, is reported to `sink` and
/// also yields an empty map. Entries whose value is `null` are dropped.
pub fn parse_structured_parameters(
    parameters_input: &str,
    sink: &mut impl WarningSink,
) -> ParameterMap {
    let trimmed = parameters_input.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        return ParameterMap::new();
    }

    let parsed: Value = match serde_json::from_str(trimmed) {
        Ok(parsed) => parsed,
        Err(e) => {
            sink.warn(ParameterWarning::InvalidJson(e));
            return ParameterMap::new();
        }
    };

    let Value::Object(entries) = parsed else {
        sink.warn(ParameterWarning::NotAnObject);
        return ParameterMap::new();
    };

    entries
        .into_iter()
        .filter_map(|(key, value)| ParameterValue::from_json(value).map(|value| (key, value)))
        .collect()
}

/// Encodes every entry as the pair `--param`, `key=value`, in map order.
///
/// Values are not escaped; embedded `=`, quotes and spaces pass through.
#[must_use]
pub fn encode_parameter_map(parameters: &ParameterMap) -> ArgumentVector {
    let mut arguments = ArgumentVector::with_capacity(parameters.len() * 2);

    for (key, value) in parameters {
        arguments.push(PARAM_FLAG.to_string());
        arguments.push(format!("{key}={value}"));
    }

    debug!("Encoded {} structured parameter(s)", parameters.len());
    arguments
}

/// Parses and encodes the structured parameters input in one step.
pub fn encode_structured_parameters(
    parameters_input: &str,
    sink: &mut impl WarningSink,
) -> ArgumentVector {
    encode_parameter_map(&parse_structured_parameters(parameters_input, sink))
}
