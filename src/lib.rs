//! A minimal command-line shell.
//!
//! Each input line goes through the same short pipeline: it is split on
//! whitespace into a [`Command`], `cd` and `exit` are handled in-process, and
//! anything else is looked up in `PATH` and run as a child process whose exit
//! status decides between [`SUCCESS`] and [`ERROR`].
//!
//! The main entry point is [`Interpreter`]. The public modules expose the
//! individual stages so they can be used and tested on their own.

pub mod builtin;
pub mod command;
pub mod env;
mod interpreter;
pub mod parser;
pub mod resolver;

#[cfg(test)]
mod test_utils;

pub use command::{Command, ERROR, ExitCode, SUCCESS};
pub use env::Environment;
pub use interpreter::{DEFAULT_PROMPT, Interpreter};
pub use parser::{MAX_ARG_LEN, Parser};
