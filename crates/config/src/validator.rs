use crate::*;
use observability::{check_filter, LogFormat};
use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("Server host is required")]
    MissingHost,

    #[error("Invalid server host '{0}'. Must be an IP address (e.g., 0.0.0.0 or 127.0.0.1)")]
    InvalidHost(String),

    #[error("Server port must be non-zero")]
    ZeroPort,

    #[error("Invalid log format: {0}. Must be one of: pretty, json, compact")]
    InvalidLogFormat(String),

    #[error("Invalid log level '{level}': {message}")]
    InvalidLogLevel { level: String, message: String },
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

pub fn validate_config(config: &LabmockConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    if config.service.name.trim().is_empty() {
        report.add_error(ValidationError::MissingServiceName);
    }

    validate_server(&config.server, &mut report);
    validate_logging(&config.logging, &mut report);

    report
}

fn validate_server(server: &ServerSection, report: &mut ValidationReport) {
    if server.host.trim().is_empty() {
        report.add_error(ValidationError::MissingHost);
    } else if server.host.parse::<IpAddr>().is_err() {
        report.add_error(ValidationError::InvalidHost(server.host.clone()));
    }

    if server.port == 0 {
        report.add_error(ValidationError::ZeroPort);
    } else if server.port < 1024 {
        report.add_warning(
            "server.port",
            &format!("Port {} is privileged and requires root/admin privileges", server.port),
        );
    }

    if server.host == "127.0.0.1" || server.host == "::1" {
        report.add_warning(
            "server.host",
            "Bound to loopback only; the service is unreachable from other hosts",
        );
    }
}

fn validate_logging(logging: &LoggingConfig, report: &mut ValidationReport) {
    if LogFormat::parse(&logging.format).is_none() {
        report.add_error(ValidationError::InvalidLogFormat(logging.format.clone()));
    }

    if let Err(message) = check_filter(&logging.level) {
        report.add_error(ValidationError::InvalidLogLevel {
            level: logging.level.clone(),
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let report = validate_config(&generate_default_config());
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_invalid_server_settings() {
        let mut config = generate_default_config();
        config.server.host = "localhost".to_string();
        config.server.port = 0;

        let report = validate_config(&config);
        assert!(!report.is_valid());
        assert!(report
            .errors
            .contains(&ValidationError::InvalidHost("localhost".to_string())));
        assert!(report.errors.contains(&ValidationError::ZeroPort));

        config.server.host = "  ".to_string();
        let report = validate_config(&config);
        assert!(report.errors.contains(&ValidationError::MissingHost));
    }

    #[test]
    fn test_privileged_port_and_loopback_warn() {
        let mut config = generate_default_config();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 80;

        let report = validate_config(&config);
        assert!(report.is_valid());
        let fields: Vec<&str> = report.warnings.iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, vec!["server.port", "server.host"]);
    }

    #[test]
    fn test_invalid_logging_settings() {
        let mut config = generate_default_config();
        config.logging.format = "xml".to_string();
        config.logging.level = "server=loud".to_string();

        let report = validate_config(&config);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(
            report.errors[0],
            ValidationError::InvalidLogFormat("xml".to_string())
        );
        assert!(matches!(
            &report.errors[1],
            ValidationError::InvalidLogLevel { level, .. } if level == "server=loud"
        ));
    }

    #[test]
    fn test_missing_service_name() {
        let mut config = generate_default_config();
        config.service.name = String::new();
        let report = validate_config(&config);
        assert_eq!(report.errors, vec![ValidationError::MissingServiceName]);
    }
}
