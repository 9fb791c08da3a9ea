//! Reporting of recoverable input problems.
//!
//! Gathering never fails on malformed parameters; it hands a
//! [`ParameterWarning`] to a [`WarningSink`] and carries on.

use log::warn;

use crate::error::ParameterWarning;

/// Receives warnings about malformed inputs.
pub trait WarningSink {
    fn warn(&mut self, warning: ParameterWarning);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn warn(&mut self, warning: ParameterWarning) {
        warn!("{warning}");
    }
}

/// Collects warnings in order, mostly useful for inspecting what was reported.
impl WarningSink for Vec<ParameterWarning> {
    fn warn(&mut self, warning: ParameterWarning) {
        self.push(warning);
    }
}
