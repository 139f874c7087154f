//! Console output control for command handlers

/// Output volume selected by the global `--quiet`/`--verbose` flags
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    /// Progress lines
    Normal,
    /// Progress plus per-field detail
    Verbose,
}

impl LogLevel {
    /// Whether a message gated at `required` is shown at this level.
    ///
    /// Normal messages show at normal and verbose, verbose messages only at
    /// verbose, and quiet suppresses everything.
    fn shows(self, required: LogLevel) -> bool {
        match (self, required) {
            (LogLevel::Quiet, _) => false,
            (_, LogLevel::Normal) => true,
            (level, required) => level == required,
        }
    }
}

/// Print `msg` when the selected level shows messages gated at `required`
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.shows(required) {
        println!("{msg}");
    }
}

/// Log a success marker line at normal level
pub fn log_success(level: LogLevel, msg: &str) {
    log(level, LogLevel::Normal, &format!("✓ {msg}"));
}
