//! Thin wrapper around `std::process::Command` shared by the git, gh and
//! claude collaborators.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;

use crate::error::{HeraldError, Result};

/// Why an external tool invocation failed
#[derive(Error, Debug)]
pub enum ToolFailure {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with status {code}{}", format_stderr(.stderr))]
    Exit {
        program: String,
        code: i32,
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

impl ToolFailure {
    /// Captured stderr of a tool that ran and failed (empty for spawn errors)
    pub fn stderr(&self) -> &str {
        match self {
            ToolFailure::Spawn { .. } => "",
            ToolFailure::Exit { stderr, .. } => stderr,
        }
    }
}

/// An external program invoked with captured output
#[derive(Debug, Clone)]
pub struct Tool {
    program: String,
    dir: Option<PathBuf>,
}

impl Tool {
    pub fn new(program: impl Into<String>) -> Self {
        Tool {
            program: program.into(),
            dir: None,
        }
    }

    /// Run the tool from `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run with `args` and return stdout on success.
    pub fn run(&self, args: &[&str]) -> std::result::Result<String, ToolFailure> {
        self.run_with_input(args, None)
    }

    /// Run with `args`, feeding `input` to stdin when given.
    ///
    /// Stdin is written from a separate thread so a large input cannot block
    /// against a child that is already filling its stdout pipe.
    pub fn run_with_input(
        &self,
        args: &[&str],
        input: Option<&str>,
    ) -> std::result::Result<String, ToolFailure> {
        log::debug!("running {} {}", self.program, args.join(" "));

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        if let Some(ref dir) = self.dir {
            cmd.current_dir(dir);
        }

        let spawn_error = |source| ToolFailure::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = cmd.spawn().map_err(spawn_error)?;

        let writer = match (input, child.stdin.take()) {
            (Some(text), Some(mut stdin)) => {
                let text = text.to_string();
                Some(thread::spawn(move || stdin.write_all(text.as_bytes())))
            }
            _ => None,
        };

        let output = child.wait_with_output().map_err(spawn_error)?;

        if let Some(handle) = writer {
            // A child that exits without reading all of stdin closes the pipe;
            // its exit status below is the meaningful result.
            if let Ok(Err(e)) = handle.join() {
                log::debug!("{}: stdin not fully consumed: {}", self.program, e);
            }
        }

        if !output.status.success() {
            return Err(ToolFailure::Exit {
                program: self.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Resolve `program` on PATH, or fail with an environment error.
pub fn ensure_installed(program: &str) -> Result<PathBuf> {
    which::which(program)
        .map_err(|_| HeraldError::environment(format!("{} CLI not found in PATH", program)))
}
