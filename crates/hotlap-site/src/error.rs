#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Message(String),
    Timeout {
        operation: &'static str,
        seconds: u64,
    },
    ReleaseFetchFailed {
        details: String,
    },
    OpenLinkFailed {
        target: String,
        details: String,
    },
}

impl AppError {
    pub fn timeout(operation: &'static str, seconds: u64) -> Self {
        Self::Timeout { operation, seconds }
    }

    pub fn release_fetch_failed(details: impl Into<String>) -> Self {
        Self::ReleaseFetchFailed {
            details: details.into(),
        }
    }

    pub fn open_link_failed(target: impl Into<String>, details: impl Into<String>) -> Self {
        Self::OpenLinkFailed {
            target: target.into(),
            details: details.into(),
        }
    }
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for AppError {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<hotlap_core::ReleaseError> for AppError {
    fn from(value: hotlap_core::ReleaseError) -> Self {
        Self::release_fetch_failed(value.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Timeout { operation, seconds } => {
                write!(f, "{operation} timed out after {seconds}s")
            }
            Self::ReleaseFetchFailed { details } => {
                write!(f, "Release lookup failed: {details}")
            }
            Self::OpenLinkFailed { target, details } => {
                write!(f, "Failed to open {target}: {details}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn message_variant_and_display_match() {
        let error = AppError::from("something failed");
        assert_eq!(error, AppError::Message("something failed".to_string()));
        assert_eq!(error.to_string(), "something failed");
    }

    #[test]
    fn timeout_constructor_and_display_match() {
        let error = AppError::timeout("Release lookup", 15);
        assert_eq!(
            error,
            AppError::Timeout {
                operation: "Release lookup",
                seconds: 15
            }
        );
        assert_eq!(error.to_string(), "Release lookup timed out after 15s");
    }

    #[test]
    fn string_conversions_build_message_variant() {
        assert_eq!(
            AppError::from("from str"),
            AppError::Message("from str".to_string())
        );
        assert_eq!(
            AppError::from("from string".to_string()),
            AppError::Message("from string".to_string())
        );
    }

    #[test]
    fn release_errors_convert_to_fetch_failures() {
        let error = AppError::from(hotlap_core::ReleaseError::MissingTag);

        assert_eq!(
            error,
            AppError::ReleaseFetchFailed {
                details: "latest release response has no tag".to_string()
            }
        );
        assert_eq!(
            error.to_string(),
            "Release lookup failed: latest release response has no tag"
        );
    }

    #[test]
    fn open_link_failure_includes_target() {
        let error = AppError::open_link_failed("hotlapai://auth/callback#", "no handler");

        assert_eq!(
            error.to_string(),
            "Failed to open hotlapai://auth/callback#: no handler"
        );
    }
}
