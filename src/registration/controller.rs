// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Controller behind the "register embedding model" form
//!
//! Owns the form state for one session, validates it on submit and sends it
//! to the registration API. Failures go to the injected [`ErrorSink`]; a
//! successful registration sets the local success banner. The form is never
//! reset after a submit, whatever the outcome.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::client::{HttpRegistrationClient, RegisterModelRequest, RegistrationTransport};
use super::error::RegistrationError;
use super::form::{EmbeddingModelForm, FormField, Language};
use super::sink::ErrorSink;
use super::validation::{field_errors, FormValidity, INVALID_FORM_MESSAGE};

/// Banner text after a successful registration
pub const REGISTERED_MESSAGE: &str =
    "Model has been registered successfully! Navigate to launch model page to proceed.";

/// Fallback when a transport failure carries no description
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// What happened on a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the registration
    Registered,
    /// Validation failed; no request was sent
    Invalid(FormValidity),
    /// The backend answered with a non-success status
    Rejected { status: u16, message: String },
    /// The request could not be completed
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, SubmitOutcome::Registered)
    }
}

/// Form controller with injected transport and error sink
pub struct RegisterEmbeddingModel {
    form: EmbeddingModelForm,
    success_msg: String,
    persist: bool,
    transport: Arc<dyn RegistrationTransport>,
    error_sink: Arc<dyn ErrorSink>,
}

impl RegisterEmbeddingModel {
    /// Controller talking HTTP to `endpoint`
    pub fn new(endpoint: &str, error_sink: Arc<dyn ErrorSink>) -> Result<Self, RegistrationError> {
        let client = HttpRegistrationClient::new(endpoint)?;
        Ok(Self::with_transport(Arc::new(client), error_sink))
    }

    pub fn with_transport(
        transport: Arc<dyn RegistrationTransport>,
        error_sink: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            form: EmbeddingModelForm::default(),
            success_msg: String::new(),
            persist: true,
            transport,
            error_sink,
        }
    }

    /// Override the `persist` flag sent with the registration
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn form(&self) -> &EmbeddingModelForm {
        &self.form
    }

    /// Current success banner text; empty when hidden
    pub fn success_msg(&self) -> &str {
        &self.success_msg
    }

    pub fn dismiss_success(&mut self) {
        self.success_msg.clear();
    }

    pub fn validity(&self) -> FormValidity {
        FormValidity::check(&self.form)
    }

    pub fn update_field(&mut self, field: FormField, raw: &str) {
        self.form.set_field(field, raw);
    }

    pub fn toggle_language(&mut self, lang: Language) {
        self.form.toggle_language(lang);
    }

    /// Validate and send the form.
    ///
    /// Only one request per call; no retry and no timeout beyond what the
    /// transport enforces.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let validity = self.validity();
        if validity.any_error() {
            for problem in field_errors(&self.form) {
                debug!("Registration form rejected: {}", problem);
            }
            self.error_sink.set_error_msg(INVALID_FORM_MESSAGE.to_string());
            return SubmitOutcome::Invalid(validity);
        }

        let model = match self.form.to_model_json() {
            Ok(model) => model,
            Err(e) => return self.fail(RegistrationError::from(e).to_string()),
        };
        let request = RegisterModelRequest {
            model,
            persist: self.persist,
        };

        info!(
            "Registering embedding model '{}' ({} dims, {} max tokens)",
            self.form.model_name, self.form.dimensions, self.form.max_tokens
        );

        match self.transport.register(&request).await {
            Ok(()) => {
                self.success_msg = REGISTERED_MESSAGE.to_string();
                SubmitOutcome::Registered
            }
            Err(RegistrationError::Server { status, detail }) => {
                let message = RegistrationError::Server { status, detail }.to_string();
                warn!("Registration rejected: {}", message);
                self.error_sink.set_error_msg(message.clone());
                SubmitOutcome::Rejected { status, message }
            }
            Err(err) => self.fail(err.to_string()),
        }
    }

    fn fail(&self, description: String) -> SubmitOutcome {
        let message = if description.trim().is_empty() {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        } else {
            description
        };
        error!("There was a problem with the registration request: {}", message);
        self.error_sink.set_error_msg(message.clone());
        SubmitOutcome::Failed(message)
    }
}
