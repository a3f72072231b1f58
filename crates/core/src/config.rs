//! Runtime configuration
//!
//! Values come from environment variables with fixed defaults, so an
//! embedding shell can run with no configuration at all.

use std::path::PathBuf;
use std::time::Duration;

/// Default directory for the file-backed store
pub const DEFAULT_DATA_DIR: &str = ".taskmaster-data";

/// Default notification lifetime
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one JSON file per storage key
    pub data_dir: PathBuf,
    /// How long a notification stays visible
    pub toast_ttl: Duration,
    /// Write stored snapshots as pretty-printed JSON
    pub pretty_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            toast_ttl: DEFAULT_TOAST_TTL,
            pretty_json: true,
        }
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_millis(raw: &str) -> Option<Duration> {
    raw.trim().parse::<u64>().ok().map(Duration::from_millis)
}

impl Config {
    /// Build a configuration from `TASKMASTER_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = lookup("TASKMASTER_DATA_DIR")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let toast_ttl = match lookup("TASKMASTER_TOAST_MS") {
            Some(raw) => parse_millis(&raw).unwrap_or_else(|| {
                tracing::warn!("Ignoring invalid TASKMASTER_TOAST_MS value: {:?}", raw);
                defaults.toast_ttl
            }),
            None => defaults.toast_ttl,
        };

        let pretty_json = lookup("TASKMASTER_PRETTY_JSON")
            .map(|raw| parse_flag(&raw, defaults.pretty_json))
            .unwrap_or(defaults.pretty_json);

        Self {
            data_dir,
            toast_ttl,
            pretty_json,
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_toast_ttl(mut self, toast_ttl: Duration) -> Self {
        self.toast_ttl = toast_ttl;
        self
    }

    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.toast_ttl, Duration::from_secs(4));
        assert_eq!(config.data_dir, PathBuf::from(".taskmaster-data"));
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("TASKMASTER_DATA_DIR", "/tmp/tm"),
            ("TASKMASTER_TOAST_MS", "2500"),
            ("TASKMASTER_PRETTY_JSON", "off"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/tm"));
        assert_eq!(config.toast_ttl, Duration::from_millis(2500));
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("TASKMASTER_DATA_DIR", "   "),
            ("TASKMASTER_TOAST_MS", "soon"),
            ("TASKMASTER_PRETTY_JSON", "maybe"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_flag_is_case_insensitive() {
        assert!(parse_flag(" YES ", false));
        assert!(!parse_flag("False", true));
    }
}
