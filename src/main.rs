use anyhow::{Context, Result};
use argh::FromArgs;
use minishell::{DEFAULT_PROMPT, Environment, Interpreter, MAX_ARG_LEN, Parser};
use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(FromArgs)]
/// A minimal shell: runs `cd`, `exit` and programs found in PATH.
struct Args {
    #[argh(option)]
    /// read commands from this file instead of standard input
    script: Option<PathBuf>,

    #[argh(option, default = "DEFAULT_PROMPT.to_string()")]
    /// prompt shown in interactive mode
    prompt: String,

    #[argh(option, default = "MAX_ARG_LEN")]
    /// capacity of a single argument; longer tokens are truncated to one less
    max_arg_len: usize,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for them.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args: Args = argh::from_env();
    let mut sh = Interpreter::new(Environment::new(), Parser::with_max_arg_len(args.max_arg_len));

    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("can't open script {}", path.display()))?;
            sh.run_script(BufReader::new(file))
        }
        None if std::io::stdin().is_terminal() => sh.repl(&args.prompt),
        None => sh.run_script(std::io::stdin().lock()),
    }
}
