// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client-side validation of the registration form
//!
//! Every predicate is a pure function of the current form. The submit path
//! only needs the combined verdict; per-field errors exist for logging and
//! for highlighting the offending inputs.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::form::{EmbeddingModelForm, FormField, IntField};

/// Message shown when any field fails validation
pub const INVALID_FORM_MESSAGE: &str = "Please fill in valid value for all fields";

/// Starts with an alphanumeric, then alphanumerics, `_` or `-`
pub const MODEL_NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9_-]*$";

fn model_name_regex() -> &'static Regex {
    static MODEL_NAME_RE: OnceLock<Regex> = OnceLock::new();
    MODEL_NAME_RE.get_or_init(|| Regex::new(MODEL_NAME_PATTERN).expect("static pattern"))
}

/// True when `name` is not an acceptable model name
pub fn error_model_name(name: &str) -> bool {
    !model_name_regex().is_match(name)
}

/// True when a count field is negative or not a number
pub fn error_count(value: IntField) -> bool {
    match value {
        IntField::Number(n) => n < 0,
        IntField::NotANumber => true,
    }
}

/// True when no language is selected
pub fn error_language<T>(languages: &[T]) -> bool {
    languages.is_empty()
}

/// Why a single field is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    InvalidModelName(String),
    Negative { field: FormField, value: i64 },
    NotANumber { field: FormField },
    NoLanguage,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidModelName(name) => write!(
                f,
                "model name '{}' must start with a letter or digit and contain only letters, digits, '_' or '-'",
                name
            ),
            FieldError::Negative { field, value } => {
                write!(f, "{} must not be negative (got {})", field.label(), value)
            }
            FieldError::NotANumber { field } => write!(f, "{} must be a number", field.label()),
            FieldError::NoLanguage => write!(f, "at least one model language must be selected"),
        }
    }
}

/// Snapshot of the four validity predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormValidity {
    pub error_model_name: bool,
    pub error_dimensions: bool,
    pub error_max_tokens: bool,
    pub error_language: bool,
}

impl FormValidity {
    pub fn check(form: &EmbeddingModelForm) -> Self {
        Self {
            error_model_name: error_model_name(&form.model_name),
            error_dimensions: error_count(form.dimensions),
            error_max_tokens: error_count(form.max_tokens),
            error_language: error_language(&form.language),
        }
    }

    /// Submission is allowed only when nothing is flagged
    pub fn is_valid(&self) -> bool {
        !self.any_error()
    }

    pub fn any_error(&self) -> bool {
        self.error_model_name || self.error_dimensions || self.error_max_tokens || self.error_language
    }

    /// Whether an input should be highlighted
    pub fn field_has_error(&self, field: FormField) -> bool {
        match field {
            FormField::ModelName => self.error_model_name,
            FormField::Dimensions => self.error_dimensions,
            FormField::MaxTokens => self.error_max_tokens,
            FormField::ModelUri => false,
        }
    }
}

/// Per-field reasons for rejecting `form`, in display order
pub fn field_errors(form: &EmbeddingModelForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if error_model_name(&form.model_name) {
        errors.push(FieldError::InvalidModelName(form.model_name.clone()));
    }

    for (field, value) in [
        (FormField::Dimensions, form.dimensions),
        (FormField::MaxTokens, form.max_tokens),
    ] {
        match value {
            IntField::Number(n) if n < 0 => errors.push(FieldError::Negative { field, value: n }),
            IntField::NotANumber => errors.push(FieldError::NotANumber { field }),
            _ => {}
        }
    }

    if error_language(&form.language) {
        errors.push(FieldError::NoLanguage);
    }

    errors
}
