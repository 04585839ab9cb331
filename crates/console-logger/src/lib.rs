//! Console Logger
//!
//! `log` backend for browser builds. Each record becomes one timestamped
//! line routed to the matching `console.*` method so devtools filtering works.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger {
    app_name: &'static str,
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &timestamp,
            record.level(),
            self.app_name,
            record.target(),
            &record.args().to_string(),
        );
        let line = line.into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { app_name, level }))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name (`"off"`, `"error"` .. `"trace"`), case-insensitive.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Render one log line: `[12:00:01.250] INFO  App target: message`
pub fn format_line(timestamp: &str, level: Level, app_name: &str, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {} {}: {}", timestamp, level, app_name, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_pads_level() {
        let line = format_line("12:00:01.250", Level::Info, "Collection", "app::load", "Loaded 3 items");
        assert_eq!(line, "[12:00:01.250] INFO  Collection app::load: Loaded 3 items");
    }

    #[test]
    fn test_format_line_error() {
        let line = format_line("00:00:00.000", Level::Error, "Collection", "api", "boom");
        assert_eq!(line, "[00:00:00.000] ERROR Collection api: boom");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
