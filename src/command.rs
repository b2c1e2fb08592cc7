use std::fmt;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Status reported when a command ran to completion and succeeded.
pub const SUCCESS: ExitCode = 0;

/// Status reported for every kind of failure: missing command, bad builtin
/// usage, spawn failure or a child that did not exit cleanly with 0.
pub const ERROR: ExitCode = 1;

/// One parsed invocation: the program name followed by its arguments.
///
/// `args()[0]` is always the command name as typed, until the resolver
/// rewrites it to the path it found. The vector length is the argument count,
/// so there is never anything stored past the last argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    args: Vec<String>,
}

impl Command {
    /// Build a command from already tokenized arguments.
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Number of arguments, including the command name itself.
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// All arguments in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Argument at `index`; `arg(argc())` is always `None`.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// The command name (or resolved path), if there is one.
    pub fn program(&self) -> Option<&str> {
        self.arg(0).filter(|name| !name.is_empty())
    }

    /// Replace the command name, e.g. with the path found in `PATH`.
    ///
    /// Does nothing on an empty command.
    pub(crate) fn set_program(&mut self, program: impl Into<String>) {
        if let Some(first) = self.args.first_mut() {
            *first = program.into();
        }
    }
}

/// Write one diagnostic line. A stream that cannot be written to is logged
/// instead of failing the command that was being reported on.
pub(crate) fn report(stream: &mut dyn Write, message: fmt::Arguments<'_>) {
    if let Err(e) = stream.write_fmt(message).and_then(|()| stream.write_all(b"\n")) {
        tracing::warn!(error = %e, message = %message, "failed to write diagnostic");
    }
}
