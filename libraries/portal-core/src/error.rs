/// Validation errors raised before anything is forwarded upstream
use thiserror::Error;

/// Fixed message for a request missing its tenant headers
pub const ERROR_NO_ORG_DATA: &str = "ORG_DATA not provided";

/// Fixed message for a request with no resolvable caller id
pub const ERROR_NO_USER_ID: &str = "user id not present";

/// Result type alias using `ValidationError`
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Local validation failure. Always terminal: never retried, never forwarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `org` or `rootOrg` header missing or empty
    #[error("ORG_DATA not provided")]
    MissingTenant,

    /// Neither a `wid` header nor a `sub` claim was present
    #[error("user id not present")]
    MissingIdentity,

    /// A required request field was absent
    #[error("{0} is not supplied")]
    MissingField(String),

    /// A request field was present but unusable
    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    /// Create a missing-field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create an invalid-value error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_messages_match_display() {
        assert_eq!(ValidationError::MissingTenant.to_string(), ERROR_NO_ORG_DATA);
        assert_eq!(ValidationError::MissingIdentity.to_string(), ERROR_NO_USER_ID);
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = ValidationError::missing_field("requestID | actionType");
        assert_eq!(err.to_string(), "requestID | actionType is not supplied");
    }
}
