// Foreground process execution with inherited stdio.
//
// The launcher never captures or interprets child output; diagnostics and
// exit codes come straight from the external OpenSSH binary.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// A resolved external-process invocation: program plus ordered arguments.
///
/// Built once per run and never mutated afterwards. Two plans built from
/// the same inputs compare equal, argument for argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl LaunchPlan {
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append an `-o Key=Value` option override pair.
    pub fn option(self, key: &str, value: &str) -> Self {
        self.arg("-o").arg(format!("{}={}", key, value))
    }

    /// Render the invocation for logging and --dry-run output.
    pub fn rendered(&self) -> String {
        let mut out = self.program.display().to_string();
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.to_string_lossy());
        }
        out
    }

    /// Spawn the program in the foreground and block until it exits.
    ///
    /// Stdio is inherited, so child prompts and diagnostics go straight to
    /// the launcher's terminal. No retries, no supervision, no timeout;
    /// stopping a long-running child is left to OS signal delivery.
    pub fn run(&self) -> Result<ExitStatus> {
        log::info!("Executing: {}", self.rendered());

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .context(format!("Failed to execute {}", self.program.display()))?;

        log::debug!("Child exited with status: {}", status);
        Ok(status)
    }
}

/// Map a child exit status to the launcher's own exit code.
///
/// A signal-terminated child has no code; use the shell convention 128+N.
pub fn propagate_exit_code(status: ExitStatus) -> i32 {
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
