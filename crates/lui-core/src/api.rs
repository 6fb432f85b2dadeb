#![forbid(unsafe_code)]

//! Generic API call outcome.
//!
//! Page controllers talk to the REST backend through their own client; this
//! core only ever sees the summarized outcome. [`ApiResult`] mirrors the
//! `{ success, data }` / `{ success, error, errorCode }` shapes the client
//! produces, so a result can be forwarded straight into a notification.

/// Outcome of an API call as reported by the (external) HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ApiResult {
    /// Whether the call succeeded.
    pub success: bool,
    /// Human-readable payload summary on success.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<String>,
    /// Error message on failure.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
    /// Machine-readable error code on failure (e.g. `VALIDATION_ERROR`).
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error_code: Option<String>,
}

impl ApiResult {
    /// A bare success.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// A success carrying a payload summary.
    #[must_use]
    pub fn ok_with(data: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data.into()),
            ..Self::default()
        }
    }

    /// A failure with a message.
    #[must_use]
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// A failure with a message and an error code.
    #[must_use]
    pub fn fail_with(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            error_code: Some(code.into()),
            ..Self::default()
        }
    }

    /// The error message, if this is a failure that carries one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_constructors() {
        assert!(ApiResult::ok().success);
        let r = ApiResult::ok_with("Friend request sent!");
        assert!(r.success);
        assert_eq!(r.data.as_deref(), Some("Friend request sent!"));
        assert!(r.error.is_none());
    }

    #[test]
    fn fail_constructors() {
        let r = ApiResult::fail("Login failed");
        assert!(!r.success);
        assert_eq!(r.error_message(), Some("Login failed"));
        assert!(r.error_code.is_none());

        let r = ApiResult::fail_with("Invalid input", "VALIDATION_ERROR");
        assert_eq!(r.error_code.as_deref(), Some("VALIDATION_ERROR"));
    }

    #[test]
    fn default_is_unsuccessful_and_empty() {
        let r = ApiResult::default();
        assert!(!r.success);
        assert!(r.error_message().is_none());
    }
}
