use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default Gemini model for chat completions.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

/// Public Gemini REST endpoint.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct CampusConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Only production is special; any other value runs as development.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "prod" | "production" => Environment::Production,
            "" | "dev" | "development" | "test" | "local" => Environment::Development,
            other => {
                tracing::warn!(
                    environment = other,
                    "Unrecognized environment, running as development"
                );
                Environment::Development
            }
        }
    }

    /// `ENVIRONMENT` wins; `NODE_ENV` is honoured for existing deployments.
    pub fn resolve(environment: Option<&str>, node_env: Option<&str>) -> Self {
        environment
            .or(node_env)
            .map(Self::parse_lenient)
            .unwrap_or(Environment::Development)
    }
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Missing key puts the chat route into setup-instructions mode.
    pub api_key: Option<String>,
    pub api_base: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub chat_model: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: String,
}

impl CampusConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env, the configuration file, APP__* and PORT
        let common_config = core_config::Config::load()?;

        let environment = Environment::resolve(
            get_optional_env("ENVIRONMENT").as_deref(),
            get_optional_env("NODE_ENV").as_deref(),
        );

        Ok(CampusConfig {
            common: common_config,
            environment,
            google: GoogleConfig {
                api_key: get_optional_env("GOOGLE_API_KEY"),
                api_base: get_env("GEMINI_API_BASE", Some(DEFAULT_GEMINI_API_BASE))?,
            },
            models: ModelConfig {
                chat_model: get_env("CAMPUS_CHAT_MODEL", Some(DEFAULT_CHAT_MODEL))?,
            },
            storage: StorageConfig {
                upload_dir: get_env("UPLOAD_DIR", Some("uploads"))?,
            },
        })
    }

    pub fn ai_ready(&self) -> bool {
        self.google.api_key.is_some()
    }

    /// Internal error detail is only published outside production.
    pub fn expose_error_details(&self) -> bool {
        !self.environment.is_production()
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}

/// Unset and blank values are both treated as absent.
fn get_optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::parse_lenient("prod"), Environment::Production);
        assert_eq!(Environment::parse_lenient(" Production "), Environment::Production);
        assert_eq!(Environment::parse_lenient("development"), Environment::Development);
    }

    #[test]
    fn test_unknown_environment_runs_as_development() {
        assert_eq!(Environment::parse_lenient("staging"), Environment::Development);
        assert_eq!(
            Environment::resolve(Some("staging"), None),
            Environment::Development
        );
    }

    #[test]
    fn test_node_env_used_when_environment_unset() {
        assert_eq!(
            Environment::resolve(None, Some("production")),
            Environment::Production
        );
        assert_eq!(
            Environment::resolve(Some("development"), Some("production")),
            Environment::Development
        );
        assert_eq!(Environment::resolve(None, None), Environment::Development);
    }

    #[test]
    fn test_blank_optional_env_is_absent() {
        env::set_var("CAMPUS_TEST_BLANK_KEY", "   ");
        assert_eq!(get_optional_env("CAMPUS_TEST_BLANK_KEY"), None);

        env::set_var("CAMPUS_TEST_SET_KEY", " abc ");
        assert_eq!(
            get_optional_env("CAMPUS_TEST_SET_KEY"),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        let value = get_env("CAMPUS_TEST_NEVER_SET", Some("fallback")).unwrap();
        assert_eq!(value, "fallback");
        assert!(get_env("CAMPUS_TEST_NEVER_SET", None).is_err());
    }
}
