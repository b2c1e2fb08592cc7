use crate::command::{Command, ERROR, ExitCode, SUCCESS, report};
use crate::env::Environment;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Commands the shell runs itself instead of spawning a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Change the current working directory.
    /// Without a target, changes to the directory named by `HOME`.
    Cd,
    /// Exit the shell process with a success status.
    Exit,
}

impl Builtin {
    /// Look up a builtin by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            "exit" => Some(Builtin::Exit),
            _ => None,
        }
    }

    /// Canonical name of the command, e.g. "cd".
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Exit => "exit",
        }
    }

    /// Executes the builtin. `Exit` never returns.
    ///
    /// Failures are written to `stderr` and reported as [`ERROR`].
    pub fn execute(self, cmd: &Command, env: &mut Environment, stderr: &mut dyn Write) -> ExitCode {
        let result = match self {
            Builtin::Cd => cd(cmd, env, stderr),
            Builtin::Exit => exit(),
        };
        match result {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(builtin = self.name(), error = %e, "builtin failed");
                report(stderr, format_args!("{:#}", e));
                ERROR
            }
        }
    }
}

/// Whether `cmd` names a builtin.
pub fn is_builtin(cmd: &Command) -> bool {
    cmd.program().and_then(Builtin::from_name).is_some()
}

/// Run `cmd` as a builtin. A command that is not a builtin yields [`ERROR`].
pub fn run_builtin(cmd: &Command, env: &mut Environment, stderr: &mut dyn Write) -> ExitCode {
    match cmd.program().and_then(Builtin::from_name) {
        Some(builtin) => builtin.execute(cmd, env, stderr),
        None => ERROR,
    }
}

fn cd(cmd: &Command, env: &mut Environment, stderr: &mut dyn Write) -> Result<ExitCode> {
    let target = match cmd.args() {
        [_] => env
            .get_var("HOME")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("cd: HOME not set"))?,
        [_, target] => PathBuf::from(target),
        _ => {
            writeln!(stderr, "cd: Too many arguments")?;
            return Ok(ERROR);
        }
    };

    let new_dir = env.current_dir.join(&target);
    let canonical = fs::canonicalize(&new_dir)
        .with_context(|| format!("cd: {}", target.display()))?;

    env::set_current_dir(&canonical)
        .with_context(|| format!("cd: {}", canonical.display()))?;
    tracing::debug!(dir = %canonical.display(), "changed directory");
    env.current_dir = canonical;
    Ok(SUCCESS)
}

fn exit() -> Result<ExitCode> {
    std::process::exit(SUCCESS)
}
