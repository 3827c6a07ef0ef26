// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Submit scenarios for the registration form over real HTTP

use embedding_registrar::registration::{
    EmbeddingModelForm, FormField, Language, RegisterEmbeddingModel, SharedErrorSlot,
    SubmitOutcome, INVALID_FORM_MESSAGE, REGISTERED_MESSAGE,
};
use std::sync::Arc;

use super::mock_backend::{closed_endpoint, MockBackend};

fn form_for(endpoint: &str) -> (RegisterEmbeddingModel, SharedErrorSlot) {
    let errors = SharedErrorSlot::new();
    let form = RegisterEmbeddingModel::new(endpoint, Arc::new(errors.clone())).unwrap();
    (form, errors)
}

/// Default form is valid and registers on 201
#[tokio::test]
async fn test_default_form_registers_on_created() {
    let backend = MockBackend::spawn(201, "").await;
    let (mut form, errors) = form_for(&backend.endpoint);

    assert!(form.validity().is_valid());
    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Registered);
    assert_eq!(form.success_msg(), REGISTERED_MESSAGE);
    assert_eq!(errors.get(), None);
    assert_eq!(backend.requests().len(), 1);
}

/// Request carries JSON content type and the form as a JSON string
#[tokio::test]
async fn test_request_wire_format() {
    let backend = MockBackend::spawn(200, "{}").await;
    let (mut form, _errors) = form_for(&backend.endpoint);

    form.toggle_language(Language::Zh);
    form.submit().await;

    let requests = backend.requests();
    let request = &requests[0];
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.body["persist"], serde_json::Value::Bool(true));

    let model = request.body["model"].as_str().expect("model is a JSON string");
    assert_eq!(
        model,
        r#"{"model_name":"custom-embedding","dimensions":768,"max_tokens":512,"language":["en","zh"],"model_uri":"/path/to/embedding-model"}"#
    );
}

/// Invalid name never reaches the backend
#[tokio::test]
async fn test_invalid_name_sends_nothing() {
    let backend = MockBackend::spawn(201, "").await;
    let (mut form, errors) = form_for(&backend.endpoint);

    form.update_field(FormField::ModelName, "bad name!");
    assert!(form.validity().error_model_name);

    let outcome = form.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(errors.get().as_deref(), Some(INVALID_FORM_MESSAGE));
    assert!(backend.requests().is_empty());
}

/// Server detail is surfaced with the status code
#[tokio::test]
async fn test_server_detail_is_reported() {
    let backend = MockBackend::spawn(400, r#"{"detail":"duplicate name"}"#).await;
    let (mut form, errors) = form_for(&backend.endpoint);

    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            status: 400,
            message: "Server error: 400 - duplicate name".to_string(),
        }
    );
    assert_eq!(errors.get().as_deref(), Some("Server error: 400 - duplicate name"));
    assert_eq!(form.success_msg(), "");
}

/// Missing detail falls back to "Unknown error"
#[tokio::test]
async fn test_server_error_without_detail() {
    let backend = MockBackend::spawn(500, r#"{"error":"boom"}"#).await;
    let (mut form, errors) = form_for(&backend.endpoint);

    form.submit().await;
    assert_eq!(errors.get().as_deref(), Some("Server error: 500 - Unknown error"));
}

/// A body that is not JSON counts as no detail
#[tokio::test]
async fn test_server_error_with_non_json_body() {
    let backend = MockBackend::spawn(502, "Bad Gateway").await;
    let (mut form, errors) = form_for(&backend.endpoint);

    form.submit().await;
    assert_eq!(errors.get().as_deref(), Some("Server error: 502 - Unknown error"));
}

/// Connection failures report the transport's description
#[tokio::test]
async fn test_unreachable_backend() {
    let endpoint = closed_endpoint().await;
    let (mut form, errors) = form_for(&endpoint);

    let outcome = form.submit().await;

    match outcome {
        SubmitOutcome::Failed(message) => {
            assert!(!message.is_empty());
            assert_eq!(errors.get(), Some(message));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
    assert_eq!(form.success_msg(), "");
}

/// Fields are kept after both failure and success
#[tokio::test]
async fn test_form_not_reset_after_submit() {
    let backend = MockBackend::spawn(201, "").await;
    let (mut form, _errors) = form_for(&backend.endpoint);

    form.update_field(FormField::ModelName, "e5-large");
    form.update_field(FormField::Dimensions, "1024");
    form.submit().await;

    assert_eq!(form.form().model_name, "e5-large");
    assert_eq!(form.form().dimensions.value(), Some(1024));
    assert_ne!(form.form(), &EmbeddingModelForm::default());
}
