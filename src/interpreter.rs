use crate::builtin;
use crate::command::{Command, ERROR, ExitCode, SUCCESS, report};
use crate::env::Environment;
use crate::parser::Parser;
use crate::resolver::{self, ResolveError};
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Prompt shown by [`Interpreter::repl`] unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "$ ";

/// A minimal shell: parses lines, runs `cd`/`exit` itself and everything
/// else as a child process found through `PATH`.
///
/// Example
/// ```no_run
/// use minishell::{Interpreter, SUCCESS};
/// let mut sh = Interpreter::default();
/// assert_eq!(sh.run_line("true"), SUCCESS);
/// ```
pub struct Interpreter {
    env: Environment,
    parser: Parser,
}

impl Interpreter {
    /// Create an interpreter over an explicit environment and parser.
    pub fn new(env: Environment, parser: Parser) -> Self {
        Self { env, parser }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Parse and execute a single line. Blank lines succeed without doing anything.
    pub fn run_line(&mut self, line: &str) -> ExitCode {
        let mut cmd = self.parser.parse(line);
        self.run_command(&mut cmd)
    }

    /// Execute one parsed command, reporting to the process stdout/stderr.
    ///
    /// Returns [`SUCCESS`] only for a builtin that succeeded or a child that
    /// exited with status 0; everything else is [`ERROR`].
    pub fn execute(&mut self, cmd: &mut Command) -> ExitCode {
        self.execute_with_output(cmd, &mut std::io::stdout(), &mut std::io::stderr())
    }

    /// Run every line from `input` until it is exhausted or `exit` is run.
    pub fn run_script(&mut self, input: impl BufRead) -> Result<()> {
        let mut lines = input.lines();
        loop {
            let line = lines.next().transpose().context("failed to read input")?;
            let Some(mut cmd) = self.parser.parse_input(line.as_deref()) else {
                break;
            };
            self.run_command(&mut cmd);
        }
        Ok(())
    }

    /// Interactive loop on the terminal. Ctrl-C drops the current line and
    /// Ctrl-D ends the loop. Nothing is kept in history.
    pub fn repl(&mut self, prompt: &str) -> Result<()> {
        let mut rl = DefaultEditor::new().context("failed to create line editor")?;

        loop {
            let line = match rl.readline(prompt) {
                Ok(line) => Some(line),
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => None,
                Err(err) => return Err(err).context("failed to read line"),
            };
            let Some(mut cmd) = self.parser.parse_input(line.as_deref()) else {
                break;
            };
            self.run_command(&mut cmd);
        }

        Ok(())
    }

    fn run_command(&mut self, cmd: &mut Command) -> ExitCode {
        if cmd.is_empty() {
            return SUCCESS;
        }
        self.execute(cmd)
    }

    fn execute_with_output(
        &mut self,
        cmd: &mut Command,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ExitCode {
        let Some(name) = cmd.program().map(str::to_owned) else {
            return ERROR;
        };

        if builtin::is_builtin(cmd) {
            return builtin::run_builtin(cmd, &mut self.env, stderr);
        }

        if let Err(e) = resolver::resolve(cmd, &self.env) {
            tracing::warn!(command = %name, error = %e, "resolution failed");
            if e == ResolveError::PathUnset {
                report(stderr, format_args!("minishell: {}", e));
            }
            report(stdout, format_args!("Command {} not found!", name));
            return ERROR;
        }

        if let Err(e) = stdout.flush() {
            tracing::warn!(error = %e, "failed to flush stdout");
        }
        self.spawn_and_wait(cmd, stderr)
    }

    fn spawn_and_wait(&self, cmd: &Command, stderr: &mut dyn Write) -> ExitCode {
        let [program, args @ ..] = cmd.args() else {
            return ERROR;
        };

        let mut child = match std::process::Command::new(program)
            .args(args)
            .env_clear()
            .envs(self.env.vars.iter())
            .current_dir(&self.env.current_dir)
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!(program = %program, error = %e, "spawn failed");
                report(stderr, format_args!("{}: {}", program, e));
                return ERROR;
            }
        };
        tracing::debug!(program = %program, pid = child.id(), "spawned child");

        match child.wait() {
            Ok(status) => {
                tracing::debug!(pid = child.id(), %status, "child terminated");
                if status.success() { SUCCESS } else { ERROR }
            }
            Err(e) => {
                tracing::warn!(pid = child.id(), error = %e, "wait failed");
                report(stderr, format_args!("{}: wait failed: {}", program, e));
                ERROR
            }
        }
    }
}

impl Default for Interpreter {
    /// An interpreter over the current process environment with the default
    /// argument length limit.
    fn default() -> Self {
        Self::new(Environment::new(), Parser::default())
    }
}
