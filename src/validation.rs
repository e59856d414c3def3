//! Sanitize/validate chains for submitted form fields
//!
//! Each field runs an ordered list of steps. Transforms (`trim`, `escape`)
//! always apply; checks record at most one message per field. Messages from
//! all fields are collected in submission order so the form can show every
//! problem at once.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One violated field rule, in the shape views expect
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
    pub value: String,
}

impl FieldError {
    pub fn new(param: impl Into<String>, msg: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            msg: msg.into(),
            value: value.into(),
        }
    }
}

/// Collects field errors across every chain run through it
#[derive(Debug, Default)]
pub struct FormValidator {
    errors: Vec<FieldError>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a chain for `param`. `message` is reported if any check fails.
    pub fn field<'a>(&'a mut self, param: &'static str, raw: Option<&str>, message: &'static str) -> FieldChain<'a> {
        FieldChain {
            param,
            message,
            value: raw.unwrap_or_default().to_string(),
            skip_checks: false,
            failed: false,
            errors: &mut self.errors,
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

pub struct FieldChain<'a> {
    param: &'static str,
    message: &'static str,
    value: String,
    skip_checks: bool,
    failed: bool,
    errors: &'a mut Vec<FieldError>,
}

impl<'a> FieldChain<'a> {
    pub fn trim(mut self) -> Self {
        let trimmed = self.value.trim();
        if trimmed.len() != self.value.len() {
            self.value = trimmed.to_string();
        }
        self
    }

    /// Encode `& < > " ' /` as HTML entities
    pub fn escape(mut self) -> Self {
        self.value = html_escape::encode_safe(&self.value).into_owned();
        self
    }

    /// Skip the remaining checks when the value is empty
    pub fn optional(mut self) -> Self {
        if self.value.is_empty() {
            self.skip_checks = true;
        }
        self
    }

    pub fn not_empty(mut self) -> Self {
        if self.value.is_empty() {
            self.fail();
        }
        self
    }

    /// Finish the chain with the sanitized value
    pub fn value(self) -> String {
        self.value
    }

    /// Finish the chain by parsing an ISO 8601 date.
    ///
    /// Returns `None` for a skipped optional value or a value that does not parse.
    pub fn date(mut self) -> Option<NaiveDate> {
        if self.skip_checks || self.failed {
            return None;
        }
        let parsed = parse_iso_date(&self.value);
        if parsed.is_none() {
            self.fail();
        }
        parsed
    }

    fn fail(&mut self) {
        if self.skip_checks || self.failed {
            return;
        }
        self.failed = true;
        self.errors.push(FieldError::new(self.param, self.message, self.value.clone()));
    }
}

/// Accepts `YYYY-MM-DD` and full ISO 8601 date-times
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|datetime| datetime.date())
}
