//! External command execution
//!
//! Structured program-plus-arguments invocations. Commands carry their own
//! working directory and environment, are logged before launch, and run to
//! completion with inherited stdio. A non-zero status is terminal.

use std::collections::BTreeMap;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::info;

use crate::error::{Result, RunnerError};

/// One external invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    envs: BTreeMap<String, String>,
    path_prepend: Vec<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            envs: BTreeMap::new(),
            path_prepend: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Working directory for this invocation only.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Environment variable for this invocation only.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    /// Prepend a directory to the inherited PATH for this invocation.
    pub fn prepend_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.path_prepend.push(dir.into());
        self
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn env_vars(&self) -> &BTreeMap<String, String> {
        &self.envs
    }

    pub fn path_prepends(&self) -> &[PathBuf] {
        &self.path_prepend
    }

    /// Render the invocation as a single line for logging and error text.
    pub fn render(&self) -> String {
        let mut line = self.program.to_string_lossy().into_owned();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the command to completion, inheriting stdio.
    pub async fn run(&self) -> Result<()> {
        info!("run: {}", self.render());

        let mut command = Command::new(&self.program);
        command.args(&self.args);

        if let Some(ref cwd) = self.cwd {
            command.current_dir(cwd);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        if !self.path_prepend.is_empty() {
            command.env("PATH", extended_path(&self.path_prepend)?);
        }

        let status = command.status().await?;
        if !status.success() {
            return Err(RunnerError::CommandFailed {
                command: self.render(),
                code: status.code().unwrap_or(-1),
            });
        }
        Ok(())
    }
}

/// Run an ordered sequence, stopping at the first failure.
pub async fn run_sequence(commands: &[CommandSpec]) -> Result<()> {
    for command in commands {
        command.run().await?;
    }
    Ok(())
}

/// Inherited PATH with the given directories in front.
fn extended_path(prepend: &[PathBuf]) -> Result<OsString> {
    let mut entries: Vec<PathBuf> = prepend.to_vec();
    if let Some(path) = env::var_os("PATH") {
        entries.extend(env::split_paths(&path));
    }
    env::join_paths(entries)
        .map_err(|e| RunnerError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)))
}
