// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Listing and removing registrations through the HTTP client

use embedding_registrar::registration::{
    HttpRegistrationClient, RegisterModelRequest, RegistrationError, RegistrationTransport,
};

use super::mock_backend::MockBackend;

#[tokio::test]
async fn test_register_list_unregister() {
    let backend = MockBackend::spawn(200, "{}").await;
    let client = HttpRegistrationClient::new(&format!("{}/", backend.endpoint)).unwrap();

    let request = RegisterModelRequest {
        model: r#"{"model_name":"my-embedder"}"#.to_string(),
        persist: false,
    };
    client.register(&request).await.unwrap();
    assert_eq!(backend.requests()[0].body["persist"], serde_json::Value::Bool(false));

    let models = client.list().await.unwrap();
    assert_eq!(models.len(), 2);
    assert!(models[0].is_builtin);
    assert_eq!(models[1].model_name, "my-embedder");
    assert!(!models[1].is_builtin);

    client.unregister("my-embedder").await.unwrap();
    let models = client.list().await.unwrap();
    assert_eq!(models.len(), 1);
}

#[tokio::test]
async fn test_unregister_unknown_model() {
    let backend = MockBackend::spawn(200, "{}").await;
    let client = HttpRegistrationClient::new(&backend.endpoint).unwrap();

    let err = client.unregister("ghost").await.unwrap_err();
    match err {
        RegistrationError::Server { status, detail } => {
            assert_eq!(status, 404);
            assert_eq!(detail.as_deref(), Some("Model ghost not found"));
        }
        other => panic!("expected Server error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_rejection_maps_to_server_error() {
    let backend = MockBackend::spawn(422, r#"{"detail":[{"msg":"field required"}]}"#).await;
    let client = HttpRegistrationClient::new(&backend.endpoint).unwrap();

    let request = RegisterModelRequest {
        model: "{}".to_string(),
        persist: true,
    };
    let err = client.register(&request).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Server error: 422 - [{"msg":"field required"}]"#
    );
}
