//! Reusable field validators
//!
//! The free functions check a single value and return a message on failure.
//! [`FieldChecks`] runs them over a whole draft and accumulates the failures.

use crate::core::error::{FieldValidationError, ValidationError};
use chrono::{NaiveDate, NaiveTime};
use validator::{ValidateEmail, ValidateUrl};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M %p", "%I:%M%p"];

/// Validator: string length (in characters) must be within range
pub fn string_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        Err(format!(
            "'{}' must be at least {} characters (got {})",
            field, min, len
        ))
    } else if len > max {
        Err(format!(
            "'{}' cannot exceed {} characters (got {})",
            field, max, len
        ))
    } else {
        Ok(())
    }
}

/// Validator: value must be in the allowed list (case-insensitive)
///
/// Returns the canonical spelling from the list.
pub fn in_list<'a>(field: &str, value: &str, allowed: &'a [String]) -> Result<&'a str, String> {
    let needle = value.to_lowercase();
    allowed
        .iter()
        .find(|candidate| candidate.to_lowercase() == needle)
        .map(String::as_str)
        .ok_or_else(|| {
            format!(
                "'{}' must be one of {:?} (got '{}')",
                field, allowed, value
            )
        })
}

/// Validator: calendar date in `YYYY-MM-DD` form
pub fn date_format(field: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        format!(
            "'{}' must be a valid date in YYYY-MM-DD format (got '{}')",
            field, value
        )
    })
}

/// Validator: time of day, 24h (`18:00`, `18:00:00`) or 12h (`6:00 PM`)
pub fn time_format(field: &str, value: &str) -> Result<NaiveTime, String> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("'{}' must be a valid time (got '{}')", field, value))
}

/// Validator: email address
pub fn email(field: &str, value: &str) -> Result<(), String> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(format!("'{}' must be a valid email address", field))
    }
}

/// Validator: absolute http(s) URL
pub fn url(field: &str, value: &str) -> Result<(), String> {
    let scheme_ok = value.starts_with("http://") || value.starts_with("https://");
    if scheme_ok && value.validate_url() {
        Ok(())
    } else {
        Err(format!("'{}' must be a valid http(s) URL", field))
    }
}

/// Collects field failures over one payload
///
/// Each check returns the cleaned value (trimmed, canonicalised, parsed) so
/// that the caller can build the record in the same pass. A failed check
/// returns a placeholder and the failure is reported by [`FieldChecks::finish`].
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<FieldValidationError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`
    pub fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldValidationError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.fail(field, message);
                None
            }
        }
    }

    /// Required string, trimmed; blank counts as missing
    pub fn required_text(
        &mut self,
        field: &str,
        value: Option<&str>,
        min: usize,
        max: usize,
    ) -> String {
        let trimmed = value.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            self.fail(field, format!("'{}' is required", field));
            return String::new();
        }
        self.check(field, string_length(field, trimmed, min, max));
        trimmed.to_string()
    }

    /// Optional string, trimmed; blank becomes `None`
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, max: usize) -> Option<String> {
        let trimmed = value.map(str::trim).filter(|s| !s.is_empty())?;
        self.check(field, string_length(field, trimmed, 0, max));
        Some(trimmed.to_string())
    }

    /// Required value from a reference list, returned in canonical spelling
    pub fn one_of(&mut self, field: &str, value: Option<&str>, allowed: &[String]) -> String {
        let trimmed = value.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            self.fail(field, format!("'{}' is required", field));
            return String::new();
        }
        self.check(field, in_list(field, trimmed, allowed))
            .unwrap_or(trimmed)
            .to_string()
    }

    /// Non-empty set of values from a reference list, deduplicated in input order
    pub fn many_of(&mut self, field: &str, values: &[String], allowed: &[String]) -> Vec<String> {
        let mut picked: Vec<String> = Vec::new();
        let mut failed = false;
        for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
            match in_list(field, value, allowed) {
                Ok(canonical) => {
                    if !picked.iter().any(|p| p == canonical) {
                        picked.push(canonical.to_string());
                    }
                }
                Err(message) => {
                    self.fail(field, message);
                    failed = true;
                }
            }
        }
        if picked.is_empty() && !failed {
            self.fail(field, format!("Please select at least one entry for '{}'", field));
        }
        picked
    }

    /// Required calendar date
    pub fn date(&mut self, field: &str, value: Option<&str>) -> Option<NaiveDate> {
        match value.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => self.check(field, date_format(field, raw)),
            None => {
                self.fail(field, format!("'{}' is required", field));
                None
            }
        }
    }

    /// Required time of day
    pub fn time(&mut self, field: &str, value: Option<&str>) -> Option<NaiveTime> {
        match value.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => self.check(field, time_format(field, raw)),
            None => {
                self.fail(field, format!("'{}' is required", field));
                None
            }
        }
    }

    /// Required email address
    pub fn required_email(&mut self, field: &str, value: Option<&str>) -> String {
        let text = self.required_text(field, value, 3, 100);
        if !text.is_empty() {
            self.check(field, email(field, &text));
        }
        text
    }

    /// Optional email address
    pub fn optional_email(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let text = self.optional_text(field, value, 100)?;
        self.check(field, email(field, &text));
        Some(text)
    }

    /// Optional http(s) URL
    pub fn optional_url(&mut self, field: &str, value: Option<&str>) -> Option<String> {
        let text = self.optional_text(field, value, 2048)?;
        self.check(field, url(field, &text));
        Some(text)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Turn the collected failures into a result
    pub fn finish(mut self) -> Result<(), ValidationError> {
        if self.errors.len() > 1 {
            return Err(ValidationError::FieldErrors(self.errors));
        }
        match self.errors.pop() {
            None => Ok(()),
            Some(only) => Err(ValidationError::FieldError {
                field: only.field,
                message: only.message,
            }),
        }
    }
}
