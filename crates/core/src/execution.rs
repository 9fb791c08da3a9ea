use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};
use std::thread;

use log::{debug, info};

use crate::error::{Error, Result};

/// A single workflow CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_directory: Option<String>,
    pub environment: HashMap<String, String>,
}

impl Display for Invocation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.program)?;
        for arg in &self.args {
            write!(formatter, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit code and combined stdout/stderr of a finished invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub output: String,
}

impl CommandOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs workflow CLI invocations.
pub trait CommandRunner {
    /// Runs `invocation` to completion.
    ///
    /// A non-zero exit code is not an error here; callers decide.
    ///
    /// # Errors
    ///
    /// Returns an error if the process could not be started or awaited.
    fn run(&mut self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Runs invocations as child processes.
///
/// Output is echoed to this process's own stdout and stderr as it arrives, so
/// it shows up in the CI log live, and is also collected for the result.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandOutput> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(working_directory) = &invocation.working_directory {
            command.current_dir(working_directory);
        }

        if !invocation.environment.is_empty() {
            debug!(
                "Executing with environment variables: {:?}",
                invocation.environment
            );
            command.envs(&invocation.environment);
        }

        info!("Executing: {invocation}");
        let mut child = command
            .spawn()
            .map_err(|e| Error::sub_process(invocation.program.clone(), e))?;

        let child_stdout = child.stdout.take();
        let child_stderr = child.stderr.take();
        let captured = Mutex::new(Vec::new());

        thread::scope(|scope| -> Result<()> {
            let captured = &captured;
            let pumps = [
                child_stdout.map(|source| {
                    scope.spawn(move || pump(source, std::io::stdout(), captured))
                }),
                child_stderr.map(|source| {
                    scope.spawn(move || pump(source, std::io::stderr(), captured))
                }),
            ];

            for pump in pumps.into_iter().flatten() {
                pump.join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))?;
            }
            Ok(())
        })?;

        let status = child
            .wait()
            .map_err(|e| Error::sub_process(invocation.program.clone(), e))?;
        let captured = captured.into_inner().unwrap_or_else(PoisonError::into_inner);

        Ok(CommandOutput {
            // Killed by a signal
            exit_code: status.code().unwrap_or(-1),
            output: String::from_utf8_lossy(&captured).into_owned(),
        })
    }
}

/// Copies `source` to `echo` chunk by chunk, appending every chunk to `captured`.
fn pump(
    mut source: impl Read,
    mut echo: impl Write,
    captured: &Mutex<Vec<u8>>,
) -> std::io::Result<()> {
    let mut buffer = [0_u8; 8192];

    loop {
        let read = match source.read(&mut buffer) {
            Ok(0) => return Ok(()),
            Ok(read) => read,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        echo.write_all(&buffer[..read])?;
        echo.flush()?;
        captured
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(&buffer[..read]);
    }
}
