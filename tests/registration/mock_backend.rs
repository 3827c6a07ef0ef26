// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Minimal stand-in for the model-serving backend's registration routes

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// A registration request as the backend saw it
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    reply_status: StatusCode,
    reply_body: String,
    received: Arc<Mutex<Vec<CapturedRequest>>>,
    custom_models: Arc<Mutex<Vec<String>>>,
}

pub struct MockBackend {
    pub endpoint: String,
    received: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockBackend {
    /// Backend answering every registration with `status` and raw `body`
    pub async fn spawn(status: u16, body: &str) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply_status: StatusCode::from_u16(status).unwrap(),
            reply_body: body.to_string(),
            received: received.clone(),
            custom_models: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route(
                "/v1/model_registrations/embedding",
                post(register_handler).get(list_handler),
            )
            .route(
                "/v1/model_registrations/embedding/:model_name",
                delete(unregister_handler),
            )
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{}", addr),
            received,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.received.lock().unwrap().clone()
    }
}

/// An endpoint where nothing is listening
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn register_handler(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

    if state.reply_status.is_success() {
        let model_name = body["model"]
            .as_str()
            .and_then(|m| serde_json::from_str::<Value>(m).ok())
            .and_then(|m| m["model_name"].as_str().map(|s| s.to_string()));
        if let Some(name) = model_name {
            state.custom_models.lock().unwrap().push(name);
        }
    }

    state
        .received
        .lock()
        .unwrap()
        .push(CapturedRequest { content_type, body });

    (
        state.reply_status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply_body.clone(),
    )
}

async fn list_handler(State(state): State<MockState>) -> Json<Value> {
    let mut models = vec![json!({"model_name": "bge-base-en-v1.5", "is_builtin": true})];
    for name in state.custom_models.lock().unwrap().iter() {
        models.push(json!({"model_name": name, "is_builtin": false}));
    }
    Json(Value::Array(models))
}

async fn unregister_handler(
    State(state): State<MockState>,
    Path(model_name): Path<String>,
) -> (StatusCode, Json<Value>) {
    let mut models = state.custom_models.lock().unwrap();
    match models.iter().position(|m| *m == model_name) {
        Some(pos) => {
            models.remove(pos);
            (StatusCode::OK, Json(Value::Null))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": format!("Model {} not found", model_name)})),
        ),
    }
}
