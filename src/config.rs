use pgs::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr so stdout only carries the CSV report, `RUST_LOG` overrides the level
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("pgs", LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
