//! The action's end-to-end flow: install dependencies, compile, run a script.

use std::collections::HashMap;

use log::{error, info};

use crate::config::{ActionInputs, INSTALL_SCRIPT};
use crate::diagnostics::WarningSink;
use crate::error::{Error, Result};
use crate::execution::{CommandRunner, Invocation};
use crate::gathering::gather;

/// Output reported when the `install` script stops after compilation.
pub const INSTALL_ONLY_OUTPUT: &str = "Dependencies installed and AGENTS.md compiled successfully";

/// Outcome published as the action's outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub success: bool,
    pub output: String,
}

/// Drives the workflow CLI for one set of action inputs.
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    environment: HashMap<String, String>,
}

impl Workflow {
    /// `environment` is added to every invocation.
    #[must_use]
    pub fn new(environment: HashMap<String, String>) -> Self {
        Self { environment }
    }

    fn invocation(&self, inputs: &ActionInputs, args: Vec<String>) -> Invocation {
        Invocation {
            program: inputs.program().to_string(),
            args,
            working_directory: inputs.working_directory(),
            environment: self.environment.clone(),
        }
    }

    /// Builds the `run <script>` invocation without executing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the inputs cannot be turned into raw strings.
    pub fn plan(&self, inputs: &ActionInputs, sink: &mut impl WarningSink) -> Result<Invocation> {
        let mut args = vec!["run".to_string(), inputs.script().to_string()];
        args.extend(gather(&inputs.raw_inputs()?, sink));

        Ok(self.invocation(inputs, args))
    }

    /// Runs the whole flow. Failures are folded into an unsuccessful result.
    pub fn execute(
        &self,
        inputs: &ActionInputs,
        runner: &mut impl CommandRunner,
        sink: &mut impl WarningSink,
    ) -> ExecutionResult {
        match self.try_execute(inputs, runner, sink) {
            Ok(result) => result,
            Err(e) => {
                error!("APM execution failed: {e}");
                ExecutionResult {
                    success: false,
                    output: e.to_string(),
                }
            }
        }
    }

    fn try_execute(
        &self,
        inputs: &ActionInputs,
        runner: &mut impl CommandRunner,
        sink: &mut impl WarningSink,
    ) -> Result<ExecutionResult> {
        if let Some(working_directory) = inputs.working_directory() {
            info!("Using working directory: {working_directory}");
        }

        if inputs.skip_install {
            info!("Skipping dependency installation and compilation");
        } else {
            info!("Installing APM and MCP dependencies...");
            self.run_checked(inputs, "install", runner)?;

            info!("Compiling AGENTS.md from dependencies...");
            self.run_checked(inputs, "compile", runner)?;
        }

        let script = inputs.script();
        if script == INSTALL_SCRIPT {
            info!("APM dependencies installation and compilation completed");
            return Ok(ExecutionResult {
                success: true,
                output: INSTALL_ONLY_OUTPUT.to_string(),
            });
        }

        let invocation = self.plan(inputs, sink)?;
        let parameters = &invocation.args[2..];

        info!("Running APM script: {script}");
        if !parameters.is_empty() {
            info!("Parameters: {}", parameters.join(", "));
        }

        let output = runner.run(&invocation)?;

        Ok(ExecutionResult {
            success: output.success(),
            output: output.output.trim().to_string(),
        })
    }

    fn run_checked(
        &self,
        inputs: &ActionInputs,
        subcommand: &str,
        runner: &mut impl CommandRunner,
    ) -> Result<()> {
        let invocation = self.invocation(inputs, vec![subcommand.to_string()]);
        let output = runner.run(&invocation)?;

        if output.success() {
            Ok(())
        } else {
            Err(Error::command_failed(
                format!("{} {subcommand}", invocation.program),
                output.exit_code,
            ))
        }
    }
}
