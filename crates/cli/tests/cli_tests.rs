use apm_action_cli::cli_args::Args;
use apm_action_cli::outputs::format_arguments;
use apm_action_core::error::ParameterWarning;
use apm_action_core::workflow::Workflow;
use clap::Parser;

fn plan(cli: &[&str]) -> (Vec<String>, Vec<ParameterWarning>) {
    let args = Args::parse_from(cli);
    let inputs = args.to_action_inputs().unwrap();
    let mut warnings: Vec<ParameterWarning> = Vec::new();
    let invocation = Workflow::default().plan(&inputs, &mut warnings).unwrap();
    (invocation.args, warnings)
}

#[test]
fn test_hybrid_parameters_from_flags() {
    let (args, warnings) = plan(&[
        "apm-action",
        "--script",
        "review",
        "--parameters",
        r#"{"model": "gpt-4", "temperature": "0.8"}"#,
        "--args",
        "--debug --verbose",
    ]);

    assert_eq!(
        args,
        vec![
            "run",
            "review",
            "--param",
            "model=gpt-4",
            "--param",
            "temperature=0.8",
            "--debug",
            "--verbose"
        ]
    );
    assert!(warnings.is_empty());
}

#[test]
fn test_free_form_override_follows_structured_parameter() {
    let (args, _) = plan(&[
        "apm-action",
        "--parameters",
        r#"{"model": "gpt-4"}"#,
        "--args=--model gpt-3.5-turbo --debug",
    ]);

    assert_eq!(
        args,
        vec![
            "run",
            "start",
            "--param",
            "model=gpt-4",
            "--model",
            "gpt-3.5-turbo",
            "--debug"
        ]
    );
}

#[test]
fn test_invalid_parameters_fall_back_to_free_form() {
    let (args, warnings) = plan(&[
        "apm-action",
        "--parameters",
        "{invalid json",
        "--args=--debug",
    ]);

    assert_eq!(args, vec!["run", "start", "--debug"]);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_quoted_free_form_arguments() {
    let (args, _) = plan(&[
        "apm-action",
        "--args",
        r#"--message "Hello world" --file 'path/to/file' --flag"#,
    ]);

    assert_eq!(
        format_arguments(&args),
        r#""run" "start" "--message" "Hello world" "--file" "path/to/file" "--flag""#
    );
}
