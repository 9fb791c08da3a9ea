//! Combines structured parameters and free-form arguments into one argument list.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{LogWarnings, WarningSink};
use crate::parameters::{encode_structured_parameters, ArgumentVector};
use crate::tokenizer::tokenize;

/// The two caller-owned inputs that feed the argument list.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    /// JSON object text, e.g. `{"model": "gpt-4"}`.
    pub parameters: Option<String>,
    /// Shell-like argument text, e.g. `--debug --message "Hello world"`.
    pub args: Option<String>,
}

impl RawInputs {
    pub fn new(parameters: Option<String>, args: Option<String>) -> Self {
        Self { parameters, args }
    }
}

/// Gathers the full argument list: encoded structured parameters first, then
/// the tokenized free-form arguments.
///
/// Nothing is deduplicated. When both inputs name the same logical flag, both
/// appear, and the later free-form one wins in whatever parses the list.
pub fn gather(inputs: &RawInputs, sink: &mut impl WarningSink) -> ArgumentVector {
    let mut arguments = match inputs.parameters.as_deref() {
        Some(parameters) => encode_structured_parameters(parameters, sink),
        None => ArgumentVector::new(),
    };

    if let Some(args) = inputs.args.as_deref() {
        arguments.extend(tokenize(args));
    }

    arguments
}

/// [`gather`], reporting warnings through the `log` facade.
pub fn gather_logged(inputs: &RawInputs) -> ArgumentVector {
    gather(inputs, &mut LogWarnings)
}
