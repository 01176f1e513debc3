//! Runtime configuration from environment variables.
//!
//! Supported:
//! - `MEDFORECAST_LOG_MODE`: `auto` (default), `file` or `stdout`
//! - `MEDFORECAST_LOG_FILE`: log path used in file mode
//! - `MEDFORECAST_CATALOG_PATH`: JSON catalog document (mock data when unset)
//! - `MEDFORECAST_SEED`: u64 seed for reproducible predicted amounts
//! - `MEDFORECAST_SUBMIT_POLICY`: `strict` (default) or `permissive`
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;

const DEFAULT_LOG_FILE: &str = "medforecast.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// File when stdout is a terminal, stdout otherwise
    Auto,
    File,
    Stdout,
}

/// How submissions with incomplete or inconsistent fields are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Reject the submission and report every problem.
    #[default]
    Strict,
    /// Record the prediction whatever the field contents.
    Permissive,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub submit_policy: SubmitPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            catalog_path: None,
            seed: None,
            submit_policy: SubmitPolicy::Strict,
        }
    }
}

impl AppConfig {
    /// Load config overrides from the process environment (best-effort).
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config overrides through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("MEDFORECAST_LOG_MODE") {
            match v.trim().to_ascii_lowercase().as_str() {
                "auto" => cfg.log_mode = LogMode::Auto,
                "file" => cfg.log_mode = LogMode::File,
                "stdout" => cfg.log_mode = LogMode::Stdout,
                _ => {}
            }
        }

        if let Some(v) = lookup("MEDFORECAST_LOG_FILE") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.log_file = PathBuf::from(v);
            }
        }

        if let Some(v) = lookup("MEDFORECAST_CATALOG_PATH") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.catalog_path = Some(PathBuf::from(v));
            }
        }

        if let Some(v) = lookup("MEDFORECAST_SEED") {
            if let Ok(seed) = v.trim().parse::<u64>() {
                cfg.seed = Some(seed);
            }
        }

        if let Some(v) = lookup("MEDFORECAST_SUBMIT_POLICY") {
            match v.trim().to_ascii_lowercase().as_str() {
                "strict" => cfg.submit_policy = SubmitPolicy::Strict,
                "permissive" => cfg.submit_policy = SubmitPolicy::Permissive,
                _ => {}
            }
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg.log_mode, LogMode::Auto);
        assert_eq!(cfg.log_file, PathBuf::from("medforecast.log"));
        assert!(cfg.catalog_path.is_none());
        assert!(cfg.seed.is_none());
        assert_eq!(cfg.submit_policy, SubmitPolicy::Strict);
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("MEDFORECAST_LOG_MODE", "FILE"),
            ("MEDFORECAST_LOG_FILE", "/tmp/mf.log"),
            ("MEDFORECAST_CATALOG_PATH", "catalog.json"),
            ("MEDFORECAST_SEED", " 1234 "),
            ("MEDFORECAST_SUBMIT_POLICY", "permissive"),
        ]));
        assert_eq!(cfg.log_mode, LogMode::File);
        assert_eq!(cfg.log_file, PathBuf::from("/tmp/mf.log"));
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("catalog.json")));
        assert_eq!(cfg.seed, Some(1234));
        assert_eq!(cfg.submit_policy, SubmitPolicy::Permissive);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("MEDFORECAST_LOG_MODE", "syslog"),
            ("MEDFORECAST_SEED", "-3"),
            ("MEDFORECAST_SUBMIT_POLICY", "lenient"),
            ("MEDFORECAST_CATALOG_PATH", "   "),
        ]));
        assert_eq!(cfg.log_mode, LogMode::Auto);
        assert!(cfg.seed.is_none());
        assert_eq!(cfg.submit_policy, SubmitPolicy::Strict);
        assert!(cfg.catalog_path.is_none());
    }
}
