use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("APM command '{}' failed with exit code {}", .command, .exit_code)]
    CommandFailed { command: String, exit_code: i32 },

    #[error("Error with sub process `{}`: {}", .program, .original)]
    SubProcess {
        program: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error serializing parameters to JSON: {}", .0)]
    Json(#[from] serde_json::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn command_failed(command: String, exit_code: i32) -> Self {
        Self::CommandFailed { command, exit_code }
    }

    pub fn sub_process(program: String, original: std::io::Error) -> Self {
        Self::SubProcess { program, original }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

/// Recoverable problems with the structured parameters input.
///
/// These never abort gathering; they are reported through a
/// [`WarningSink`](crate::diagnostics::WarningSink) and the structured input is
/// treated as empty.
#[derive(Error, Debug)]
pub enum ParameterWarning {
    #[error(
        "Failed to parse parameters JSON: {}. Expected format: {{\"key\": \"value\", \"key2\": \"value2\"}}",
        .0
    )]
    InvalidJson(serde_json::Error),

    #[error("Parameters input must be a JSON object, ignoring invalid format")]
    NotAnObject,
}
