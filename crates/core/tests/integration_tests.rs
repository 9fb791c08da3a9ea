//! Integration tests for apm-action-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use apm_action_core::{
    config::ParametersInput,
    error::{Error, ParameterWarning},
    file_handling::read_action_inputs,
    gathering::gather,
    workflow::Workflow,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_inputs(yaml_content: &str) -> (NamedTempFile, String) {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();
    (temp_file, temp_path)
}

/// Test loading inputs with a YAML mapping for parameters and planning the run
#[test]
fn test_inputs_file_with_mapping_parameters() {
    let yaml_content = r#"
script: review
parameters:
  model: gpt-4
  temperature: 0.8
  max_tokens: 1000
  stream: false
  unused: null
args: --debug --message "Hello world"
working-directory: /srv/project
skip-install: true
"#;
    let (_temp_file, temp_path) = write_inputs(yaml_content);

    let inputs = read_action_inputs(&temp_path).unwrap();

    assert_eq!(inputs.script(), "review");
    assert!(inputs.skip_install);
    assert!(matches!(inputs.parameters, Some(ParametersInput::Mapping(_))));

    let mut warnings: Vec<ParameterWarning> = Vec::new();
    let invocation = Workflow::default().plan(&inputs, &mut warnings).unwrap();

    assert_eq!(
        invocation.args,
        vec![
            "run",
            "review",
            "--param",
            "model=gpt-4",
            "--param",
            "temperature=0.8",
            "--param",
            "max_tokens=1000",
            "--param",
            "stream=false",
            "--debug",
            "--message",
            "Hello world"
        ]
    );
    assert_eq!(invocation.working_directory.as_deref(), Some("/srv/project"));
    assert!(warnings.is_empty());
}

/// Test loading inputs where parameters are JSON text, as a CI input would supply them
#[test]
fn test_inputs_file_with_json_text_parameters() {
    let yaml_content = r#"
parameters: '{"b": "2", "a": "1"}'
args: "--flag"
"#;
    let (_temp_file, temp_path) = write_inputs(yaml_content);

    let inputs = read_action_inputs(&temp_path).unwrap();
    assert_eq!(inputs.script(), "start");
    assert!(!inputs.skip_install);

    let mut warnings: Vec<ParameterWarning> = Vec::new();
    let arguments = gather(&inputs.raw_inputs().unwrap(), &mut warnings);

    assert_eq!(arguments, vec!["--param", "b=2", "--param", "a=1", "--flag"]);
}

/// Test that a non-object parameters mapping is a warning, not a failure
#[test]
fn test_inputs_file_with_list_parameters_warns() {
    let yaml_content = r#"
parameters:
  - one
  - two
args: --debug
"#;
    let (_temp_file, temp_path) = write_inputs(yaml_content);

    let inputs = read_action_inputs(&temp_path).unwrap();
    let mut warnings: Vec<ParameterWarning> = Vec::new();
    let arguments = gather(&inputs.raw_inputs().unwrap(), &mut warnings);

    assert_eq!(arguments, vec!["--debug"]);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], ParameterWarning::NotAnObject));
}

/// Test that mapping keys which are not strings are encoded by their text
#[test]
fn test_inputs_file_with_non_string_parameter_keys() {
    let yaml_content = r#"
parameters: {1: one, true: yes}
args: --debug
"#;
    let (_temp_file, temp_path) = write_inputs(yaml_content);

    let inputs = read_action_inputs(&temp_path).unwrap();
    let mut warnings: Vec<ParameterWarning> = Vec::new();
    let arguments = gather(&inputs.raw_inputs().unwrap(), &mut warnings);

    assert_eq!(
        arguments,
        vec!["--param", "1=one", "--param", "true=yes", "--debug"]
    );
    assert!(warnings.is_empty());
}

/// Test error handling for a missing inputs file
#[test]
fn test_missing_inputs_file() {
    let result = read_action_inputs("/nonexistent/path/inputs.yml");

    match result {
        Err(Error::Io {
            file_description,
            path,
            ..
        }) => {
            assert_eq!(file_description, "inputs");
            assert_eq!(path, "/nonexistent/path/inputs.yml");
        }
        other => panic!("expected an IO error, got {other:?}"),
    }
}

/// Test error handling for an inputs file with the wrong shape
#[test]
fn test_malformed_inputs_file() {
    let (_temp_file, temp_path) = write_inputs("skip-install: [not, a, bool]\n");

    let result = read_action_inputs(&temp_path);
    assert!(matches!(result, Err(Error::Yaml { .. })));
}
