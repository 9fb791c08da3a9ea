use std::env;
use std::process::ExitCode;

use apm_action_core::config::runner_environment;
use apm_action_core::diagnostics::LogWarnings;
use apm_action_core::error::Result;
use apm_action_core::execution::ProcessRunner;
use apm_action_core::workflow::Workflow;
use clap::Parser;
use log::{debug, error, info};

use apm_action_cli::cli_args::Args;
use apm_action_cli::outputs::{format_arguments, write_outputs};

/// Runs the action, returning whether the workflow succeeded.
fn execute() -> Result<bool> {
    let args = Args::parse();
    let inputs = args.to_action_inputs()?;
    debug!("Action inputs: {:?}", inputs);

    let home = env::var("HOME").ok();
    let workflow = Workflow::new(runner_environment(home.as_deref()));

    if args.dry_run {
        let invocation = workflow.plan(&inputs, &mut LogWarnings)?;
        println!(
            "Executing command:\n{} {}",
            invocation.program,
            format_arguments(&invocation.args)
        );
        println!("Dry run is specified, exiting without executing.");
        return Ok(true);
    }

    info!("Starting APM AI Workflow Runner...");
    let result = workflow.execute(&inputs, &mut ProcessRunner, &mut LogWarnings);

    if let Some(output_file) = &args.output_file {
        write_outputs(output_file, &result)?;
    }

    if result.success {
        info!("APM workflow completed successfully!");
    } else {
        error!("APM workflow execution failed");
    }

    Ok(result.success)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match execute() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("APM Action failed: {e}");
            ExitCode::FAILURE
        }
    }
}
