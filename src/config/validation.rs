//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use axum::http::HeaderName;

use crate::config::error::ConfigError;
use crate::config::settings::{
    ApiKeyConfig, DatabaseConfig, FileSettings, LoggerSettings, ServerConfig, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be empty
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Server host is required.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    ///
    /// # Validation Rules
    /// - URL must not be empty and must use a PostgreSQL scheme
    /// - Max and min connections must be greater than 0
    /// - Min connections must not exceed max connections
    /// - Connection timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL is required. Please specify a valid database connection string.",
            ));
        }

        if !self.is_valid_database_url() {
            return Err(ConfigError::validation(
                "database.url",
                "Invalid database URL format. Expected format: postgres://[user:password@]host[:port]/database",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError {
                field: "database.min_connections".to_string(),
                message: format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            });
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }

    fn is_valid_database_url(&self) -> bool {
        ["postgres://", "postgresql://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }
}

impl ApiKeyConfig {
    /// Validate API key configuration
    ///
    /// # Validation Rules
    /// - Header must be a valid HTTP header name
    /// - Secret must not be empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if HeaderName::from_bytes(self.header.as_bytes()).is_err() {
            return Err(ConfigError::ValidationError {
                field: "api_key.header".to_string(),
                message: format!("'{}' is not a valid HTTP header name.", self.header),
            });
        }

        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "api_key.secret",
                "API key secret is required. Set it with USUARIO_API_KEY__SECRET.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one of console and file output must be enabled
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one of logger.console and logger.file must be enabled.",
            ));
        }

        self.file.validate()?;

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.api_key.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::ConsoleSettings;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    fn valid_database() -> DatabaseConfig {
        DatabaseConfig {
            url: "postgres://localhost/usuarios".to_string(),
            ..Default::default()
        }
    }

    fn valid_api_key() -> ApiKeyConfig {
        ApiKeyConfig {
            secret: "chave".to_string(),
            ..Default::default()
        }
    }

    // ========================================================================
    // ServerConfig validation tests
    // ========================================================================

    #[test]
    fn test_server_config_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_server_config_invalid_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "server.port");
    }

    #[test]
    fn test_server_config_valid_port_boundaries() {
        for port in [1, 65535] {
            let config = ServerConfig {
                port,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_server_config_invalid_request_timeout() {
        let config = ServerConfig {
            request_timeout: 0,
            ..Default::default()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "server.request_timeout"
        );
    }

    #[test]
    fn test_server_config_empty_host() {
        let config = ServerConfig {
            host: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "server.host");
    }

    // ========================================================================
    // DatabaseConfig validation tests
    // ========================================================================

    #[test]
    fn test_database_config_valid() {
        assert!(valid_database().validate().is_ok());

        let config = DatabaseConfig {
            url: "postgresql://user:pass@db:5432/usuarios".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_config_empty_url() {
        let err = DatabaseConfig::default().validate().unwrap_err();
        assert_eq!(field_of(err), "database.url");
    }

    #[test]
    fn test_database_config_non_postgres_url() {
        let config = DatabaseConfig {
            url: "mysql://localhost/usuarios".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "database.url");
    }

    #[test]
    fn test_database_config_zero_connections() {
        let config = DatabaseConfig {
            max_connections: 0,
            ..valid_database()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "database.max_connections"
        );

        let config = DatabaseConfig {
            min_connections: 0,
            ..valid_database()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "database.min_connections"
        );
    }

    #[test]
    fn test_database_config_min_exceeds_max() {
        let config = DatabaseConfig {
            max_connections: 2,
            min_connections: 5,
            ..valid_database()
        };
        match config.validate().unwrap_err() {
            ConfigError::ValidationError { field, message } => {
                assert_eq!(field, "database.min_connections");
                assert!(message.contains("(5)"));
                assert!(message.contains("(2)"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_database_config_zero_timeout() {
        let config = DatabaseConfig {
            connection_timeout: 0,
            ..valid_database()
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "database.connection_timeout"
        );
    }

    // ========================================================================
    // ApiKeyConfig validation tests
    // ========================================================================

    #[test]
    fn test_api_key_config_valid() {
        assert!(valid_api_key().validate().is_ok());
    }

    #[test]
    fn test_api_key_config_missing_secret() {
        let err = ApiKeyConfig::default().validate().unwrap_err();
        assert_eq!(field_of(err), "api_key.secret");
    }

    #[test]
    fn test_api_key_config_invalid_header() {
        let config = ApiKeyConfig {
            header: "X Api Key".to_string(),
            ..valid_api_key()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "api_key.header");
    }

    // ========================================================================
    // LoggerSettings validation tests
    // ========================================================================

    #[test]
    fn test_logger_settings_valid_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "INFO"] {
            let settings = LoggerSettings {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(settings.validate().is_ok(), "level {} should be valid", level);
        }
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger.level");
    }

    #[test]
    fn test_logger_settings_all_outputs_disabled() {
        let settings = LoggerSettings {
            console: ConsoleSettings {
                enabled: false,
                colored: false,
            },
            ..Default::default()
        };
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger");
    }

    #[test]
    fn test_logger_settings_file_enabled_without_path() {
        let settings = LoggerSettings {
            file: FileSettings {
                enabled: true,
                path: "".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "logger.file.path"
        );
    }

    #[test]
    fn test_logger_settings_invalid_format() {
        let settings = LoggerSettings {
            file: FileSettings {
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "logger.file.format"
        );
    }

    // ========================================================================
    // Settings validation tests
    // ========================================================================

    #[test]
    fn test_settings_valid() {
        let settings = Settings {
            database: valid_database(),
            api_key: valid_api_key(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_reports_first_failure() {
        let settings = Settings {
            database: valid_database(),
            ..Default::default()
        };
        assert_eq!(field_of(settings.validate().unwrap_err()), "api_key.secret");
    }
}
