use std::cell::Cell;

/// Severity of a diagnostic message, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Configuration for the console logger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggerConfig {
    /// Messages below this level are dropped
    pub min_level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: if cfg!(debug_assertions) {
                LogLevel::Debug
            } else {
                LogLevel::Info
            },
        }
    }
}

impl LoggerConfig {
    pub fn allows(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

thread_local! {
    static CONFIG: Cell<LoggerConfig> = Cell::new(LoggerConfig::default());
}

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    /// Apply a configuration for the rest of the page's lifetime
    pub fn init(config: LoggerConfig) {
        CONFIG.with(|current| current.set(config));
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, message, component);
    }

    fn log(level: LogLevel, message: &str, component: &str) {
        if !CONFIG.with(|config| config.get().allows(level)) {
            return;
        }

        let line = format_line(component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_threshold() {
        let config = LoggerConfig {
            min_level: LogLevel::Warn,
        };
        assert!(!config.allows(LogLevel::Debug));
        assert!(!config.allows(LogLevel::Info));
        assert!(config.allows(LogLevel::Warn));
        assert!(config.allows(LogLevel::Error));
    }

    #[test]
    fn test_default_config_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };
        assert_eq!(LoggerConfig::default().min_level, expected);
    }

    #[test]
    fn test_line_is_tagged_with_component() {
        assert_eq!(
            format_line("AmountEntryStep", "deposit is NaN"),
            "[AmountEntryStep] deposit is NaN"
        );
    }
}
