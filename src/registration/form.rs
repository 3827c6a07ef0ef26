// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Form state for registering a custom embedding model.
//!
//! The form is created fresh for every registration session and is never
//! persisted locally. Its JSON encoding is what the backend receives as the
//! `model` string of the registration request.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default model name shown when the form is opened
pub const DEFAULT_MODEL_NAME: &str = "custom-embedding";

/// Default embedding vector size
pub const DEFAULT_DIMENSIONS: i64 = 768;

/// Default maximum input tokens
pub const DEFAULT_MAX_TOKENS: i64 = 512;

/// Placeholder model directory
pub const DEFAULT_MODEL_URI: &str = "/path/to/embedding-model";

// ============================================================================
// Languages
// ============================================================================

/// Languages an embedding model can declare support for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

impl Language {
    /// Every language offered by the form, in display order
    pub const SUPPORTED: [Language; 2] = [Language::En, Language::Zh];

    /// Wire code (`en`, `zh`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Human-readable checkbox label
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => Err(format!(
                "unsupported language '{}'; expected one of: en, zh",
                other
            )),
        }
    }
}

// ============================================================================
// Numeric fields
// ============================================================================

/// An integer text input after parsing.
///
/// Text inputs accept anything, so a numeric field can hold a value that is
/// not a number at all. That state is kept explicitly instead of being folded
/// into a sentinel integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntField {
    Number(i64),
    NotANumber,
}

impl IntField {
    /// Parse a raw input using base-10 leading-integer rules.
    ///
    /// Leading whitespace is skipped, one optional sign is accepted, then the
    /// longest run of ASCII digits is taken. Trailing characters are ignored,
    /// so `"12px"` parses as 12 and `"3.9"` as 3. Input with no digits is
    /// `NotANumber`. Values beyond the `i64` range saturate to `i64::MAX` or
    /// `i64::MIN`, keeping their sign.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let digits = &rest[..digits_end];
        if digits.is_empty() {
            return IntField::NotANumber;
        }

        let signed = if negative {
            format!("-{}", digits)
        } else {
            digits.to_string()
        };

        match signed.parse::<i64>() {
            Ok(n) => IntField::Number(n),
            // Only overflow is possible: the text is a sign plus digits
            Err(_) if negative => IntField::Number(i64::MIN),
            Err(_) => IntField::Number(i64::MAX),
        }
    }

    /// The parsed number, if there is one
    pub fn value(&self) -> Option<i64> {
        match self {
            IntField::Number(n) => Some(*n),
            IntField::NotANumber => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, IntField::Number(_))
    }
}

impl From<i64> for IntField {
    fn from(value: i64) -> Self {
        IntField::Number(value)
    }
}

impl fmt::Display for IntField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntField::Number(n) => write!(f, "{}", n),
            IntField::NotANumber => f.write_str("NaN"),
        }
    }
}

// NotANumber goes over the wire as `null`.
impl Serialize for IntField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IntField::Number(n) => serializer.serialize_i64(*n),
            IntField::NotANumber => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for IntField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<i64>::deserialize(deserializer)?;
        Ok(value.map(IntField::Number).unwrap_or(IntField::NotANumber))
    }
}

// ============================================================================
// Form data
// ============================================================================

/// Identifies one editable input of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ModelName,
    Dimensions,
    MaxTokens,
    ModelUri,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::ModelName => "Model Name",
            FormField::Dimensions => "Dimensions",
            FormField::MaxTokens => "Max Tokens",
            FormField::ModelUri => "Model Path",
        }
    }

    pub fn helper_text(&self) -> Option<&'static str> {
        match self {
            FormField::ModelName => Some(
                "Alphanumeric characters with properly placed hyphens and underscores. Must not match any built-in model names.",
            ),
            FormField::ModelUri => Some("Provide the model directory path."),
            _ => None,
        }
    }
}

/// Metadata of a user-supplied embedding model.
///
/// Field order matters: it is the key order of the serialized `model` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingModelForm {
    pub model_name: String,
    pub dimensions: IntField,
    pub max_tokens: IntField,
    pub language: Vec<Language>,
    pub model_uri: String,
}

impl Default for EmbeddingModelForm {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            dimensions: IntField::Number(DEFAULT_DIMENSIONS),
            max_tokens: IntField::Number(DEFAULT_MAX_TOKENS),
            language: vec![Language::En],
            model_uri: DEFAULT_MODEL_URI.to_string(),
        }
    }
}

impl EmbeddingModelForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field from raw input text
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::ModelName => self.model_name = raw.to_string(),
            FormField::Dimensions => self.dimensions = IntField::parse(raw),
            FormField::MaxTokens => self.max_tokens = IntField::parse(raw),
            FormField::ModelUri => self.model_uri = raw.to_string(),
        }
    }

    /// Current text of a field as an input would display it
    pub fn field_text(&self, field: FormField) -> String {
        match field {
            FormField::ModelName => self.model_name.clone(),
            FormField::Dimensions => self.dimensions.to_string(),
            FormField::MaxTokens => self.max_tokens.to_string(),
            FormField::ModelUri => self.model_uri.clone(),
        }
    }

    /// Remove `lang` if selected, otherwise append it
    pub fn toggle_language(&mut self, lang: Language) {
        if let Some(pos) = self.language.iter().position(|l| *l == lang) {
            self.language.remove(pos);
        } else {
            self.language.push(lang);
        }
    }

    pub fn has_language(&self, lang: Language) -> bool {
        self.language.contains(&lang)
    }

    /// JSON text sent as the `model` field of the registration request
    pub fn to_model_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
