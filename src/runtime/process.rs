// src/runtime/process.rs

//! Process-backed runtime: resolves the interpreter on `$PATH` and runs it.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{AppError, Result};
use crate::models::Invocation;
use crate::runtime::Runtime;

/// Runs invocations as child processes of the current process.
#[derive(Debug, Clone, Default)]
pub struct ProcessRuntime;

impl ProcessRuntime {
    pub fn new() -> Self {
        Self
    }

    /// Locate a program, searching `$PATH` for bare names.
    fn resolve(program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => Some(path),
            Err(e) => {
                log::debug!("'{}' not resolvable: {}", program, e);
                None
            }
        }
    }
}

impl Runtime for ProcessRuntime {
    fn probe(&self, invocation: &Invocation) -> bool {
        let Some(program) = Self::resolve(&invocation.program) else {
            return false;
        };

        log::debug!("Probing {} {:?}", program.display(), invocation.args);
        let status = Command::new(&program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                log::debug!("Probe exited with {}", status);
                status.success()
            }
            Err(e) => {
                log::debug!("Probe could not start {}: {}", program.display(), e);
                false
            }
        }
    }

    fn forward(&self, invocation: &Invocation) -> Result<i32> {
        let program = Self::resolve(&invocation.program)
            .unwrap_or_else(|| PathBuf::from(&invocation.program));

        log::debug!("Forwarding to {} {:?}", program.display(), invocation.args);
        let status = Command::new(&program)
            .args(&invocation.args)
            .status()
            .map_err(|e| AppError::spawn(&invocation.program, e))?;

        Ok(exit_code_of(status))
    }
}

/// Exit code of a finished child, using `128 + signal` for signal deaths.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
