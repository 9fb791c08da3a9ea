//! Command-line argument parsing.
//!
//! Every action input can be given as a flag or through the `INPUT_*`
//! environment variable a CI runner sets for it. Flags and variables take
//! precedence over values loaded from `--inputs-file`.

use apm_action_core::config::{ActionInputs, ParametersInput};
use apm_action_core::error::Result;
use apm_action_core::file_handling::read_action_inputs;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};

/// Command-line arguments for the `apm-action` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use apm_action_cli::cli_args::Args;
///
/// let args = Args::parse_from(["apm-action", "--script", "review", "--args=--debug"]);
/// assert_eq!(args.script.as_deref(), Some("review"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to a YAML file holding action inputs.
    ///
    /// Keys use the action input names, e.g. `script`, `parameters`, `skip-install`.
    #[arg(long, short = 'i')]
    pub inputs_file: Option<String>,

    /// The workflow script to run. Defaults to `start`.
    ///
    /// The special script `install` stops after installing and compiling dependencies.
    #[arg(long, short = 's', env = "INPUT_SCRIPT")]
    pub script: Option<String>,

    /// Structured parameters as a JSON object.
    ///
    /// # Examples
    /// ```bash
    /// apm-action --parameters '{"model": "gpt-4", "temperature": 0.8}'
    /// ```
    #[arg(long, short = 'p', env = "INPUT_PARAMETERS")]
    pub parameters: Option<String>,

    /// Additional free-form arguments, split like a shell would split them.
    ///
    /// # Examples
    /// ```bash
    /// apm-action --args '--debug --message "Hello world"'
    /// ```
    #[arg(long, short = 'a', env = "INPUT_ARGS", allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Directory to run the workflow CLI in.
    #[arg(long, short = 'w', env = "INPUT_WORKING-DIRECTORY")]
    pub working_directory: Option<String>,

    /// Skip `install` and `compile` before running the script.
    #[arg(
        long,
        env = "INPUT_SKIP-INSTALL",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub skip_install: bool,

    /// The workflow CLI executable. Defaults to `apm`.
    #[arg(long, env = "APM_PROGRAM")]
    pub program: Option<String>,

    /// Print the command that would run, without running anything.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// File to append the `success` and `output` results to.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<String>,
}

impl Args {
    /// Merges the inputs file, if any, with flag and environment values.
    ///
    /// Blank flag values do not replace values from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs file cannot be read or parsed.
    pub fn to_action_inputs(&self) -> Result<ActionInputs> {
        let mut inputs = match &self.inputs_file {
            Some(path) => read_action_inputs(path)?,
            None => ActionInputs::default(),
        };

        override_with(&mut inputs.script, self.script.as_ref());
        override_with(&mut inputs.args, self.args.as_ref());
        override_with(&mut inputs.working_directory, self.working_directory.as_ref());
        override_with(&mut inputs.program, self.program.as_ref());

        if let Some(parameters) = non_blank(self.parameters.as_ref()) {
            inputs.parameters = Some(ParametersInput::Json(parameters.clone()));
        }

        inputs.skip_install |= self.skip_install;

        Ok(inputs)
    }
}

fn non_blank(value: Option<&String>) -> Option<&String> {
    value.filter(|value| !value.trim().is_empty())
}

fn override_with(target: &mut Option<String>, value: Option<&String>) {
    if let Some(value) = non_blank(value) {
        *target = Some(value.clone());
    }
}
