//! # Output Configuration
//!
//! Controls CLI output appearance. Colors and emojis are disabled for
//! non-TTY output and when the user asks (`--color=never`, `NO_COLOR`,
//! `CLICOLOR=0`, `TERM=dumb`); `--color=always` and `CLICOLOR_FORCE`
//! override the detection.

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color`
    /// CLI flag ("always", "never", or "auto").
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => detect_color_support(),
        };
        Self { use_color }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }
}

fn detect_color_support() -> bool {
    // https://no-color.org/ — presence alone disables colors
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

/// Pick the emoji or its plain-text fallback depending on the config.
pub fn emoji<'a>(config: &OutputConfig, symbol: &'a str, fallback: &'a str) -> &'a str {
    if config.use_color {
        symbol
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_always_forces_color() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_flag_never_disables_color() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
    }

    #[test]
    fn test_flag_is_case_insensitive() {
        assert!(OutputConfig::from_env_and_flag("ALWAYS").use_color);
        assert!(!OutputConfig::from_env_and_flag("Never").use_color);
    }

    #[test]
    fn test_emoji_fallback() {
        assert_eq!(emoji(&OutputConfig::with_color(), "🔄", "[SYNC]"), "🔄");
        assert_eq!(emoji(&OutputConfig::without_color(), "🔄", "[SYNC]"), "[SYNC]");
    }
}
