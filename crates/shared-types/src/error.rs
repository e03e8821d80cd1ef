use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    BadRequest,
    NotFound,
    ValidationError,
    Conflict,
    DatabaseError,
    Unauthorized,
    Forbidden,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::Conflict => "Conflict",
            AppErrorKind::DatabaseError => "DatabaseError",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::InternalError => "InternalError",
        };
        f.write_str(name)
    }
}

/// Structured error carried from server functions to the client.
///
/// On the wire it travels as JSON inside the `ServerFnError` message; the
/// client recovers it with [`AppError::from_server_error`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DatabaseError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Recover an `AppError` from a `ServerFnError` string.
    ///
    /// The server function layer wraps the payload, e.g.
    /// `error running server function: {"kind":"Unauthorized",...} (details: None)`,
    /// so the outermost `{ ... }` span is parsed when the raw string is not JSON.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Per-field validation messages, or an empty map.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Message suitable for showing to the user.
    pub fn friendly_message(error_string: &str) -> String {
        match Self::from_server_error(error_string) {
            Some(app_error) => app_error.message,
            None => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_server_error_parses_raw_json() {
        let json = r#"{"kind":"Unauthorized","message":"Invalid email or password"}"#;
        let err = AppError::from_server_error(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid email or password");
    }

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"Forbidden","message":"User account is inactive"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert_eq!(err.message, "User account is inactive");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("connection refused").is_none());
        assert!(AppError::from_server_error("").is_none());
        assert!(AppError::from_server_error("} backwards {").is_none());
    }

    #[test]
    fn friendly_message_extracts_message_field() {
        let json = r#"{"kind":"Conflict","message":"Email already registered"}"#;
        assert_eq!(AppError::friendly_message(json), "Email already registered");
    }

    #[test]
    fn friendly_message_fallback_for_unparseable() {
        assert_eq!(
            AppError::friendly_message("network down"),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn parse_field_errors_reads_validation_payload() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "Valid email is required".to_string());
        let json = serde_json::to_string(&AppError::validation("Validation failed", fields.clone()))
            .unwrap();
        let wrapped = format!("error running server function: {json} (details: None)");

        assert_eq!(AppError::parse_field_errors(&wrapped), fields);
        assert!(AppError::parse_field_errors("nothing here").is_empty());
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(AppError::bad_request("").kind, AppErrorKind::BadRequest);
        assert_eq!(AppError::not_found("").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::conflict("").kind, AppErrorKind::Conflict);
        assert_eq!(AppError::database("").kind, AppErrorKind::DatabaseError);
        assert_eq!(AppError::unauthorized("").kind, AppErrorKind::Unauthorized);
        assert_eq!(AppError::forbidden("").kind, AppErrorKind::Forbidden);
        assert_eq!(AppError::internal("").kind, AppErrorKind::InternalError);
    }

    #[test]
    fn not_found_survives_the_server_fn_wrapper() {
        let json = serde_json::to_string(&AppError::not_found("Enquiry not found")).unwrap();
        let wrapped = format!("error running server function: {json} (details: None)");
        let err = AppError::from_server_error(&wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(AppError::friendly_message(&wrapped), "Enquiry not found");
    }

    #[test]
    fn display_impl_formats_kind_and_message() {
        let err = AppError::unauthorized("bad credentials");
        assert_eq!(err.to_string(), "Unauthorized: bad credentials");
    }

    #[test]
    fn empty_field_errors_are_omitted_from_json() {
        let json = serde_json::to_string(&AppError::forbidden("nope")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
