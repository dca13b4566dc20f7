use crate::errors::HandlerError;
use std::env;

/// Output format for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_format: LogFormat,
    pub log_filter: String,
    pub function_name: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            log_filter: "info".to_string(),
            function_name: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`AppConfig::from_env`], but never fails: an invalid logging
    /// setting falls back to the defaults and is returned alongside.
    pub fn from_env_or_default() -> (Self, Option<HandlerError>) {
        Self::from_lookup_or_default(|key| env::var(key).ok())
    }

    pub fn from_lookup_or_default<F>(lookup: F) -> (Self, Option<HandlerError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::from_lookup(&lookup) {
            Ok(config) => (config, None),
            Err(e) => {
                // the function name is unrelated to the bad setting; keep it
                let config = Self {
                    function_name: function_name(&lookup),
                    ..Self::default()
                };
                (config, Some(e))
            }
        }
    }

    /// Reads the configuration through `lookup` instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HandlerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") => LogFormat::Json,
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(v) if v.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(other) => {
                return Err(HandlerError::Config(format!(
                    "LOG_FORMAT: unsupported value '{}'",
                    other
                )));
            }
        };

        Ok(Self {
            log_format,
            log_filter: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "info".to_string()),
            function_name: function_name(&lookup),
        })
    }
}

fn function_name<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup("AWS_LAMBDA_FUNCTION_NAME").filter(|v| !v.is_empty())
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
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_text_format_filter_and_function_name() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LOG_FORMAT", "TEXT"),
            ("RUST_LOG", "debug"),
            ("AWS_LAMBDA_FUNCTION_NAME", "hello"),
        ]))
        .unwrap();
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.function_name.as_deref(), Some("hello"));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = AppConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, HandlerError::Config(ref m) if m.contains("xml")));
    }

    #[test]
    fn invalid_log_format_keeps_function_name() {
        let (config, err) = AppConfig::from_lookup_or_default(lookup_from(&[
            ("LOG_FORMAT", "xml"),
            ("RUST_LOG", "debug"),
            ("AWS_LAMBDA_FUNCTION_NAME", "hello"),
        ]));
        assert!(matches!(err, Some(HandlerError::Config(_))));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.function_name.as_deref(), Some("hello"));
    }

    #[test]
    fn valid_config_has_no_fallback_error() {
        let (config, err) =
            AppConfig::from_lookup_or_default(lookup_from(&[("LOG_FORMAT", "text")]));
        assert!(err.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }
}
