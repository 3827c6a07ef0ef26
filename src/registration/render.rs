// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Plain-text rendering of the registration form.
//!
//! Invalid inputs are prefixed with `!`; valid ones with a space. The
//! success banner appears only while the controller holds a message.

use super::controller::RegisterEmbeddingModel;
use super::form::{EmbeddingModelForm, FormField, Language};
use super::validation::FormValidity;

const TEXT_FIELDS: [FormField; 4] = [
    FormField::ModelName,
    FormField::Dimensions,
    FormField::MaxTokens,
    FormField::ModelUri,
];

pub const SUBMIT_BUTTON: &str = "[ Register Model ]";

/// Render the controller's current state
pub fn render(controller: &RegisterEmbeddingModel) -> String {
    render_form(controller.form(), controller.success_msg())
}

/// Render a form with an optional success message (empty = hidden)
pub fn render_form(form: &EmbeddingModelForm, success_msg: &str) -> String {
    let validity = FormValidity::check(form);
    let mut lines = Vec::new();

    for field in TEXT_FIELDS {
        let marker = error_marker(validity.field_has_error(field));
        lines.push(format!("{} {}: {}", marker, field.label(), form.field_text(field)));
        if let Some(help) = field.helper_text() {
            lines.push(format!("    {}", help));
        }
    }

    let language_marker = error_marker(validity.error_language);
    let boxes: Vec<String> = Language::SUPPORTED
        .iter()
        .map(|lang| {
            let check = if form.has_language(*lang) { 'x' } else { ' ' };
            format!("[{}] {}", check, lang.label())
        })
        .collect();
    lines.push(format!("{} Model Languages", language_marker));
    lines.push(format!("{}   {}", language_marker, boxes.join("  ")));

    if !success_msg.is_empty() {
        lines.push(String::new());
        lines.push("Success".to_string());
        lines.push(success_msg.to_string());
    }

    lines.push(String::new());
    lines.push(SUBMIT_BUTTON.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn error_marker(has_error: bool) -> char {
    if has_error {
        '!'
    } else {
        ' '
    }
}
