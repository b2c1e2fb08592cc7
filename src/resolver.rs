use crate::command::Command;
use crate::env::Environment;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a command name could not be turned into an executable path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no command to resolve")]
    NoCommand,
    #[error("PATH is not set")]
    PathUnset,
    #[error("{0}: not found")]
    NotFound(String),
}

/// Resolve `cmd`'s program name through `PATH`, rewriting `args()[0]` to the
/// path that was found.
///
/// Each non-empty `PATH` entry is tried in order and the first `dir/name`
/// that is a regular file wins. The name is appended as text, so `sub/tool`
/// is looked up as `dir/sub/tool` and `/bin/sh` as `dir//bin/sh`.
///
/// On error the command is left untouched.
pub fn resolve(cmd: &mut Command, env: &Environment) -> Result<(), ResolveError> {
    let name = cmd.program().ok_or(ResolveError::NoCommand)?;
    let search_paths = env.get_var("PATH").ok_or(ResolveError::PathUnset)?;

    match find_in_path(search_paths, name) {
        Some(path) => {
            tracing::debug!(name, path = %path.display(), "resolved command");
            cmd.set_program(path.to_string_lossy());
            Ok(())
        }
        None => Err(ResolveError::NotFound(name.to_owned())),
    }
}

/// First `dir/name` over the `:`-separated `search_paths` that is a regular file.
pub fn find_in_path(search_paths: &str, name: &str) -> Option<PathBuf> {
    search_paths
        .split(':')
        .filter(|dir| !dir.is_empty())
        .map(|dir| PathBuf::from(format!("{}/{}", dir, name)))
        .find(|path| find_by_path(path))
}

// Follows symlinks; any stat failure is a miss.
fn find_by_path(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file())
}
