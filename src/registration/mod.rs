// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Custom embedding model registration
//!
//! - `form`: the form state and its wire encoding
//! - `validation`: validity predicates over the form
//! - `controller`: field updates, language toggling and submit
//! - `client`: HTTP client for `/v1/model_registrations/embedding`
//! - `render`: plain-text view of the form

pub mod client;
pub mod controller;
pub mod error;
pub mod form;
pub mod render;
pub mod sink;
pub mod validation;

pub use client::{
    HttpRegistrationClient, ModelRegistration, RegisterModelRequest, RegistrationTransport,
};
pub use controller::{
    RegisterEmbeddingModel, SubmitOutcome, REGISTERED_MESSAGE, UNEXPECTED_ERROR_MESSAGE,
};
pub use error::RegistrationError;
pub use form::{EmbeddingModelForm, FormField, IntField, Language};
pub use render::render;
pub use sink::{ErrorSink, SharedErrorSlot};
pub use validation::{field_errors, FieldError, FormValidity, INVALID_FORM_MESSAGE};
