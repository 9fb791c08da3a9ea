//! APM Action Core Library
//!
//! This crate provides the core functionality for the APM workflow action: it
//! turns the action's inputs into the argument list for `apm run <script>` and
//! drives the workflow CLI through a narrow command-runner seam.
//!
//! # Key Features
//!
//! - **Structured Parameters**: JSON objects encoded as `--param key=value` pairs
//! - **Free-form Arguments**: Shell-like splitting with quotes and escapes, no shell involved
//! - **Parameter Gathering**: Structured parameters first, free-form arguments after
//! - **Workflow Driver**: Install, compile and run steps over any [`execution::CommandRunner`]
//! - **Error Handling**: Fatal errors as [`error::Error`], recoverable input problems as warnings
//!
//! # Examples
//!
//! Gathering arguments from both inputs:
//!
//! ```
//! use apm_action_core::error::ParameterWarning;
//! use apm_action_core::gathering::{gather, RawInputs};
//!
//! let inputs = RawInputs::new(
//!     Some(r#"{"model": "gpt-4"}"#.to_string()),
//!     Some(r#"--message "Hello world""#.to_string()),
//! );
//! let mut warnings: Vec<ParameterWarning> = Vec::new();
//!
//! let arguments = gather(&inputs, &mut warnings);
//! assert_eq!(arguments, vec!["--param", "model=gpt-4", "--message", "Hello world"]);
//! assert!(warnings.is_empty());
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod gathering;
pub mod parameters;
pub mod tokenizer;
pub mod workflow;
