//! Debug-gated diagnostic output.
//!
//! `log`, `info` and `warn` only reach the tracing subscriber when debug mode
//! is on. `error` always does.

use std::fmt::Display;

use tracing::Level;

/// Debug mode used when no configuration says otherwise.
pub const DEBUG_MODE: bool = false;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    debug: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEBUG_MODE)
    }
}

impl Logger {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn from_config(config: &crate::Config) -> Self {
        Self::new(config.logging.debug)
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Whether a message at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level == Level::ERROR || self.debug
    }

    pub fn log(&self, message: impl Display) {
        if self.enabled(Level::DEBUG) {
            tracing::debug!("{}", message);
        }
    }

    pub fn info(&self, message: impl Display) {
        if self.enabled(Level::INFO) {
            tracing::info!("{}", message);
        }
    }

    pub fn warn(&self, message: impl Display) {
        if self.enabled(Level::WARN) {
            tracing::warn!("{}", message);
        }
    }

    pub fn error(&self, message: impl Display) {
        tracing::error!("{}", message);
    }
}
