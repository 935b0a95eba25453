use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

pub fn level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Log to stderr, and additionally to `logging.file` when configured.
/// Stdout is left to command output.
pub fn setup_logger(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let console = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(level_filter(config.level()))
        .chain(console);

    if let Some(file_path) = config.file() {
        match OpenOptions::new().create(true).append(true).open(file_path) {
            Ok(file) => {
                let file_output = fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {} {}] {}",
                            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file);
                dispatch = dispatch.chain(file_output);
            }
            Err(e) => {
                eprintln!("Warning: Failed to open log file '{file_path}': {e}");
                eprintln!("Continuing without file logging.");
            }
        }
    }

    dispatch.apply()?;
    log::debug!("Logger initialized with level: {}", config.level());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_fall_back_to_warn() {
        assert_eq!(level_filter("DEBUG"), LevelFilter::Debug);
        assert_eq!(level_filter("off"), LevelFilter::Off);
        assert_eq!(level_filter("chatty"), LevelFilter::Warn);
    }
}
