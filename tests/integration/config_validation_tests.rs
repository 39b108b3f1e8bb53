//! Configuration validation integration tests
//!
//! Tests for configuration validation across all config components.

#[cfg(test)]
mod tests {
    use batchsort::config::models::{
        LogFormat, LoggingConfig, ServerConfig, ServiceConfig, SorterConfig,
    };
    use batchsort::server::builder::load_config;
    use batchsort::{Config, ServiceError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    // ==================== ServiceConfig Validation ====================

    /// Test that the default config passes validation
    #[test]
    fn test_default_service_config_is_valid() {
        assert!(ServiceConfig::default().validate().is_ok());
    }

    /// Test that server port 0 fails validation
    #[test]
    fn test_port_zero() {
        let mut config = ServiceConfig::default();
        config.server.port = 0;

        let result = config.validate();
        assert!(result.unwrap_err().contains("Port"));
    }

    /// Test that an empty host fails validation
    #[test]
    fn test_empty_host() {
        let config = ServerConfig {
            host: "  ".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("Host"));
    }

    /// Test that zero concurrency fails validation
    #[test]
    fn test_sorter_zero_concurrency() {
        let config = SorterConfig {
            max_concurrency: Some(0),
        };
        assert!(config.validate().is_err());

        let config = SorterConfig {
            max_concurrency: Some(4),
        };
        assert!(config.validate().is_ok());
    }

    /// Test log level validation is case-insensitive
    #[test]
    fn test_logging_levels() {
        for level in ["trace", "DEBUG", "Info", "warn", "error", "off"] {
            let config = LoggingConfig {
                level: level.to_string(),
                format: LogFormat::Text,
            };
            assert!(config.validate().is_ok(), "{}", level);
        }
    }

    // ==================== File Loading ====================

    /// Test that a full YAML file loads
    #[tokio::test]
    async fn test_load_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "server:\n  host: \"127.0.0.1\"\n  port: 8181\n  max_body_size: 1048576\nsorter:\n  max_concurrency: 32\nlogging:\n  format: json\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().address(), "127.0.0.1:8181");
        assert_eq!(config.server().body_limit(), 1_048_576);
        assert_eq!(config.sorter().max_concurrency, Some(32));
        assert_eq!(config.logging().format, LogFormat::Json);
    }

    /// Test that an invalid file is rejected with a config error
    #[tokio::test]
    async fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "sorter:\n  max_concurrency: 0\n").unwrap();

        let result = Config::from_file(file.path()).await;
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }

    /// Test that an unreadable file falls back to defaults
    #[tokio::test]
    async fn test_load_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing").join("batchsort.yaml");

        let config = load_config(Some(missing)).await.unwrap();
        let expected = Config::default().with_env().unwrap();
        assert_eq!(config.to_yaml().unwrap(), expected.to_yaml().unwrap());
    }

    /// Test that a file that exists but is invalid still fails startup
    #[tokio::test]
    async fn test_load_config_invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 0\n").unwrap();

        let result = load_config(Some(file.path().to_path_buf())).await;
        assert!(matches!(result, Err(ServiceError::Config(_))));
    }

    /// Test that malformed YAML is rejected
    #[test]
    fn test_malformed_yaml() {
        let result = Config::from_yaml("server: [port");
        assert!(matches!(result, Err(ServiceError::Config(msg)) if msg.contains("parse")));
    }

    /// Test that unknown log formats are rejected at parse time
    #[test]
    fn test_unknown_log_format() {
        let result = Config::from_yaml("logging:\n  format: xml\n");
        assert!(result.is_err());
    }
}
