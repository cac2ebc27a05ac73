//! Terminal logging with an optional copy written to a file.
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::Path;

/// Installs the global logger. Fails if a logger is already set or the log file
/// cannot be created.
pub fn init_logger(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(path) = log_file {
        loggers.push(WriteLogger::new(level, config, File::create(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
