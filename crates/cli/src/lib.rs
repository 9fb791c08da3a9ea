//! APM Action CLI Library
//!
//! This crate provides the command-line boundary for the APM workflow action.
//! It collects the action inputs, hands them to [`apm_action_core`], and
//! publishes the results where the CI runner expects them.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line and `INPUT_*` environment parsing, merged with an optional inputs file
//! - [`outputs`]: Step output formatting and argument display
//!
//! # Examples
//!
//! The CLI binary (`apm-action`) can be used in several ways:
//!
//! ```bash
//! # Inside a CI action, where inputs arrive as INPUT_* environment variables
//! apm-action
//!
//! # Structured parameters plus free-form arguments
//! apm-action --script review --parameters '{"model": "gpt-4"}' --args '--debug'
//!
//! # Inputs from a file, skipping dependency installation
//! apm-action --inputs-file inputs.yml --skip-install
//!
//! # Dry run (don't execute, just show what would run)
//! apm-action --dry-run --args '--message "Hello world"'
//! ```

pub mod cli_args;
pub mod outputs;
