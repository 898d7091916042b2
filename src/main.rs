mod args;
mod config;
mod reader;
mod writer;

use args::Command;
use pgs::input::{DataRecord, InputRequest, RequestRecord};
use pgs::{Response, Result};

use std::path::PathBuf;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let (command, input_path) = args::parse_input_args()?;
    log::debug!("Found command {command:?} with filepath: {input_path:?}");

    let output = match command {
        Command::Request => map_requests(input_path)?,
        Command::Response => parse_response(input_path)?,
    };

    log::debug!("Writing to stdout: {output:?}");
    println!("{}", output);

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Map every row of the input file, rows that fail are skipped
fn map_requests(input_path: PathBuf) -> Result<String> {
    let mut rdr = reader::build_request_reader(input_path)?;
    let mut records = vec![];

    log::debug!("Deserializing reader...");
    for (idx, record) in rdr.deserialize::<InputRequest>().enumerate() {
        let request = idx + 1;

        log::debug!("Parsing record into InputRequest: {record:?}");
        let input_request = match record {
            Ok(input_request) => input_request,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Mapping input_request: {input_request:?}");
        let map = match input_request.map_request() {
            Ok(map) => map,
            Err(e) => {
                log::warn!("Request {request}: {e}");
                continue;
            }
        };

        log::debug!("Mapped request {request} with {} fields", map.len());
        records.extend(RequestRecord::from_map(request, &map));
    }

    writer::write_records(records)
}

/// Parse the response document and report its flattened data
fn parse_response(input_path: PathBuf) -> Result<String> {
    let xml = reader::read_document(input_path)?;

    let response = Response::from_xml(&xml)?;
    log::debug!("Parsed response: {response:?}");

    log::debug!("Serializing data...");
    writer::write_records(DataRecord::from_response(&response))
}
