use pgs::Result;

use std::{fs, fs::File, path::PathBuf};

use csv::{Reader, ReaderBuilder, Trim};

/// Request rows, empty cells deserialize as absent values
pub fn build_request_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(filepath)?;

    return Ok(reader);
}

pub fn read_document(filepath: PathBuf) -> Result<String> {
    let document = fs::read_to_string(filepath)?;
    return Ok(document);
}
