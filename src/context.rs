//! Per-invocation state shared by the command handlers.

use crate::config::Config;
use crate::core::log::oplog_quiet;
use std::path::PathBuf;

pub struct AppContext {
    pub config: Config,
    pub config_path: PathBuf,
    /// `None` in test mode: nothing is logged.
    pub log_path: Option<PathBuf>,
    pub is_test: bool,
}

impl AppContext {
    pub fn new(config: Config, config_path: PathBuf, is_test: bool) -> Self {
        // the log lives next to the configuration file
        let log_path = if is_test {
            None
        } else {
            Some(
                config_path
                    .parent()
                    .map(|d| d.join("shiftgrid.log"))
                    .unwrap_or_else(Config::log_file),
            )
        };

        Self {
            config,
            config_path,
            log_path,
            is_test,
        }
    }

    pub fn log(&self, operation: &str, target: &str, message: &str) {
        if let Some(path) = &self.log_path {
            oplog_quiet(path, operation, target, message);
        }
    }
}
