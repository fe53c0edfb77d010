use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// User id written to the session cookie when the browser has none.
    /// `None` means a missing cookie is a loader error.
    pub default_user_id: Option<String>,
    pub session_max_age_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            default_user_id: Some("1".to_string()),
            session_max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
        }
    }
}

/// Variables baked in at compile time (see `build.rs`).
fn compiled_var(key: &str) -> Option<&'static str> {
    match key {
        "API_BASE_URL" => option_env!("API_BASE_URL"),
        "ENVIRONMENT" => option_env!("ENVIRONMENT"),
        "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
        "LOG_LEVEL" => option_env!("LOG_LEVEL"),
        "DEFAULT_USER_ID" => option_env!("DEFAULT_USER_ID"),
        "SESSION_MAX_AGE_SECS" => option_env!("SESSION_MAX_AGE_SECS"),
        _ => None,
    }
}

impl AppConfig {
    /// Loads the configuration baked in at compile time
    pub fn from_env() -> Self {
        Self::from_vars(compiled_var)
    }

    pub fn from_vars<'a>(var: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: var("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            environment: var("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: var("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: var("LOG_LEVEL")
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
            // An explicitly empty value disables the fallback session
            default_user_id: match var("DEFAULT_USER_ID") {
                Some(id) if id.trim().is_empty() => None,
                Some(id) => Some(id.trim().to_string()),
                None => defaults.default_user_id,
            },
            session_max_age_secs: var("SESSION_MAX_AGE_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_max_age_secs),
        }
    }

    /// Unknown levels fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> AppConfig {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        AppConfig::from_vars(|key| vars.get(key).copied())
    }

    #[test]
    fn falls_back_to_defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let config = config_from(&[("API_BASE_URL", "https://api.example.com/")]);
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.api_url("/products"), "https://api.example.com/products");
        assert_eq!(config.api_url("users/1"), "https://api.example.com/users/1");
    }

    #[test]
    fn empty_default_user_disables_fallback_session() {
        let config = config_from(&[("DEFAULT_USER_ID", "")]);
        assert_eq!(config.default_user_id, None);

        let config = config_from(&[("DEFAULT_USER_ID", " 7 ")]);
        assert_eq!(config.default_user_id.as_deref(), Some("7"));
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = config_from(&[
            ("ENABLE_LOGGING", "maybe"),
            ("SESSION_MAX_AGE_SECS", "soon"),
            ("LOG_LEVEL", "chatty"),
        ]);
        assert!(config.enable_logging);
        assert_eq!(config.session_max_age_secs, DEFAULT_SESSION_MAX_AGE_SECS);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn reads_log_level_case_insensitively() {
        let config = config_from(&[("LOG_LEVEL", "DEBUG"), ("ENVIRONMENT", "production")]);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.environment, "production");
    }
}
