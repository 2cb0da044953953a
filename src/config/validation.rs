//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Check the base path shape before the server derives routes from it

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("base path must start with '/': '{0}'")]
    BasePathMissingSlash(String),

    #[error("base path must not end with '/' unless it is the root: '{0}'")]
    BasePathTrailingSlash(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Run all semantic checks, collecting every failure.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if !config.base_path.starts_with('/') {
        errors.push(ValidationError::BasePathMissingSlash(
            config.base_path.clone(),
        ));
    } else if config.base_path != "/" && config.base_path.ends_with('/') {
        errors.push(ValidationError::BasePathTrailingSlash(
            config.base_path.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_bind_address() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("not-an-address".into())]
        );
    }

    #[test]
    fn test_base_path_shape() {
        let mut config = AppConfig::default();
        config.base_path = "app".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::BasePathMissingSlash("app".into())]
        );

        config.base_path = "/app/".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::BasePathTrailingSlash("/app/".into())]
        );

        config.base_path = "/app".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "nope".into();
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
