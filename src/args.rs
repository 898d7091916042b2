use pgs::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Map each CSV row into a gateway request
    Request,

    /// Parse a gateway response document
    Response,
}

/// Parses the input arguments, `<request|response> <file>`
pub fn parse_input_args() -> Result<(Command, PathBuf)> {
    let mut args = env::args().skip(1);

    let command = match args.next().as_deref() {
        Some("request") => Command::Request,
        Some("response") => Command::Response,
        _ => Err(InputArgsError::Parse(
            "First argument must be either request or response.".to_string(),
        ))?,
    };

    let filename = args.next().ok_or_else(|| {
        InputArgsError::Parse("Second argument must be the input file.".to_string())
    })?;

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok((command, path))
}
