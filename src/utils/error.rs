use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Search API returned {status}: {message}")]
    ApiStatus { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Saved search not found: {id}")]
    SavedSearchNotFound { id: i64 },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Configuration,
    Storage,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SearchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SearchError::HttpError(_) => ErrorCategory::Network,
            SearchError::ApiStatus { .. } => ErrorCategory::Api,
            SearchError::ConfigValidationError { .. }
            | SearchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SearchError::IoError(_)
            | SearchError::SerializationError(_)
            | SearchError::StorageError { .. } => ErrorCategory::Storage,
            SearchError::SavedSearchNotFound { .. } | SearchError::ValidationError { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SearchError::SavedSearchNotFound { .. } => ErrorSeverity::Low,
            SearchError::HttpError(_) => ErrorSeverity::Medium,
            SearchError::ApiStatus { status, .. } if *status >= 500 || *status == 429 => {
                ErrorSeverity::Medium
            }
            SearchError::ApiStatus { .. } | SearchError::ValidationError { .. } => {
                ErrorSeverity::High
            }
            SearchError::ConfigValidationError { .. }
            | SearchError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SearchError::IoError(_)
            | SearchError::SerializationError(_)
            | SearchError::StorageError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SearchError::HttpError(_) => {
                "Check network connectivity and that the search API is reachable".to_string()
            }
            SearchError::ApiStatus { status: 401, .. } | SearchError::ApiStatus { status: 403, .. } => {
                "Set a valid api.auth_token in the configuration".to_string()
            }
            SearchError::ApiStatus { status, .. } if *status >= 500 => {
                "The search service failed; retry later".to_string()
            }
            SearchError::ApiStatus { .. } => {
                "Review the search filters sent to the API".to_string()
            }
            SearchError::ConfigValidationError { field, .. }
            | SearchError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            SearchError::IoError(_) | SearchError::StorageError { .. } => {
                "Check that the storage path exists and is writable".to_string()
            }
            SearchError::SerializationError(_) => {
                "The stored data is malformed; remove or repair the saved searches file".to_string()
            }
            SearchError::SavedSearchNotFound { .. } => {
                "Run `saved list` to see the available saved searches".to_string()
            }
            SearchError::ValidationError { .. } => "Correct the input and try again".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the search service: {}", self),
            ErrorCategory::Api => format!("The search service rejected the request: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Storage => format!("Saved search storage failed: {}", self),
            ErrorCategory::Input => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for SearchError {
    fn from(e: toml::de::Error) -> Self {
        SearchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err = SearchError::ApiStatus {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Api);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("retry"));
    }

    #[test]
    fn test_unauthorized_points_at_token() {
        let err = SearchError::ApiStatus {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("auth_token"));
    }

    #[test]
    fn test_config_error_names_field() {
        let err = SearchError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: "ftp://hr".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("api.base_url"));
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }

    #[test]
    fn test_not_found_is_low_severity() {
        let err = SearchError::SavedSearchNotFound { id: 42 };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.to_string(), "Saved search not found: 42");
    }
}
