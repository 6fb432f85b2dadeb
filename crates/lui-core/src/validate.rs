#![forbid(unsafe_code)]

//! Client-side form validation.
//!
//! Field validators mirror the backend's bean-validation rules so users get
//! feedback before a request is made. Each validator returns `Ok(())` or an
//! error message ready for display; [`ValidationErrors`] bundles the
//! per-field messages a form run produces, in insertion order, for rendering
//! as a single error notification.
//!
//! Empty values pass every validator except [`required`]; whether a field is
//! mandatory is a separate rule from what a non-empty value must look like.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum accepted password length.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum accepted display-name length.
pub const NAME_MAX_LENGTH: usize = 50;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// A single field failure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldError {
    /// Form field the message belongs to.
    pub field: String,
    /// Display-ready message.
    pub message: String,
}

/// Ordered collection of field errors from one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationErrors {
    entries: Vec<FieldError>,
}

impl ValidationErrors {
    /// Create an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entries.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Run a validator and record its message under `field` if it fails.
    pub fn check(&mut self, field: &str, outcome: Result<(), String>) {
        if let Err(message) = outcome {
            self.add(field, message);
        }
    }

    /// Whether the run produced no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate failures in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }

    /// The messages alone, in insertion order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }
}

/// Reject empty or whitespace-only values.
pub fn required(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

/// Validate email format. Empty values pass.
pub fn email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    if EMAIL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_owned())
    }
}

/// Validate trimmed length against `min` and an optional `max`. Empty values
/// pass.
pub fn length(value: &str, min: usize, max: Option<usize>, field: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    let len = value.trim().chars().count();
    if len < min {
        return Err(format!("{field} must be at least {min} characters long"));
    }
    if let Some(max) = max
        && len > max
    {
        return Err(format!("{field} must not exceed {max} characters"));
    }
    Ok(())
}

/// Password strength buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    /// No password given.
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

/// Outcome of a password strength check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    /// Strength bucket.
    pub strength: PasswordStrength,
    /// Raw criteria score (0–7).
    pub score: u8,
    /// Suggestions for improving a weak password.
    pub feedback: Vec<&'static str>,
    /// Display-ready message when the password is rejected.
    pub error: Option<String>,
}

impl PasswordReport {
    /// Whether the password is acceptable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Score password strength. Empty passwords pass (pair with [`required`]).
///
/// Scoring: one point each for length ≥ 8, lowercase, uppercase, digits,
/// and symbols, plus bonus points at 12 and 16 characters. A score of at
/// least 3 (fair) is required.
#[must_use]
pub fn password(value: &str) -> PasswordReport {
    if value.is_empty() {
        return PasswordReport {
            strength: PasswordStrength::None,
            score: 0,
            feedback: Vec::new(),
            error: None,
        };
    }

    if value.chars().count() < PASSWORD_MIN_LENGTH {
        return PasswordReport {
            strength: PasswordStrength::Weak,
            score: 0,
            feedback: Vec::new(),
            error: Some(format!(
                "Password must be at least {PASSWORD_MIN_LENGTH} characters long"
            )),
        };
    }

    let len = value.chars().count();
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value.chars().any(|c| r#"!@#$%^&*(),.?":{}|<>"#.contains(c));

    let mut score = u8::from(len >= 8)
        + u8::from(has_lower)
        + u8::from(has_upper)
        + u8::from(has_digit)
        + u8::from(has_symbol);
    if len >= 12 {
        score += 1;
    }
    if len >= 16 {
        score += 1;
    }

    let strength = match score {
        0..=2 => PasswordStrength::Weak,
        3..=4 => PasswordStrength::Fair,
        5 => PasswordStrength::Good,
        _ => PasswordStrength::Strong,
    };

    let mut feedback = Vec::new();
    if !has_lower {
        feedback.push("Add lowercase letters");
    }
    if !has_upper {
        feedback.push("Add uppercase letters");
    }
    if !has_digit {
        feedback.push("Add numbers");
    }
    if !has_symbol {
        feedback.push("Add special characters");
    }
    if len < 12 {
        feedback.push("Use 12+ characters for better security");
    }

    let error = if score >= 3 {
        None
    } else {
        Some(format!("Password is too weak. {}", feedback.join(", ")))
    };

    PasswordReport {
        strength,
        score,
        feedback,
        error,
    }
}

/// Cross-field check that a confirmation matches. Empty confirmations pass.
pub fn password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if confirmation.is_empty() || password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match".to_owned())
    }
}

/// Validate a phone number: 10–15 digits after stripping punctuation. Empty
/// values pass.
pub fn phone(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if (10..=15).contains(&digits) {
        Ok(())
    } else {
        Err("Please enter a valid phone number".to_owned())
    }
}

/// Validate a numeric value against optional bounds. Empty values pass.
pub fn range(value: &str, min: Option<f64>, max: Option<f64>, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Ok(());
    }
    let Ok(number) = value.trim().parse::<f64>() else {
        return Err(format!("{field} must be a valid number"));
    };
    if let Some(min) = min
        && number < min
    {
        return Err(format!("{field} must be at least {min}"));
    }
    if let Some(max) = max
        && number > max
    {
        return Err(format!("{field} must not exceed {max}"));
    }
    Ok(())
}
