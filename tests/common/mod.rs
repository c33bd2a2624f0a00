//! In-process stand-in for the remote Catalog API.
//!
//! Serves `GET /products` and `POST /product/add` on a random local port and
//! records every call so tests can assert on request counts, query strings
//! and bodies.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tokio::sync::Notify;

#[derive(Clone, Default)]
pub struct MockCatalog {
    pub products: Arc<Mutex<Vec<Value>>>,
    pub list_calls: Arc<AtomicUsize>,
    pub add_calls: Arc<AtomicUsize>,
    pub last_list_query: Arc<Mutex<Option<String>>>,
    pub last_add_query: Arc<Mutex<Option<String>>>,
    pub last_add_body: Arc<Mutex<Option<Value>>>,
    pub last_add_content_type: Arc<Mutex<Option<String>>>,
    /// Canned `(status, body)` replacing the normal list response.
    pub list_override: Arc<Mutex<Option<(StatusCode, String)>>>,
    /// Canned `(status, body)` replacing the normal add response.
    pub add_override: Arc<Mutex<Option<(StatusCode, String)>>>,
    /// When set, the next list call snapshots the products, signals
    /// `list_started` and then waits here before answering.
    pub list_gate: Arc<Mutex<Option<Arc<Notify>>>>,
    pub list_started: Arc<Notify>,
}

impl MockCatalog {
    pub fn with_products(products: Vec<Value>) -> Self {
        let mock = Self::default();
        *mock.products.lock().unwrap() = products;
        mock
    }

    pub fn respond_to_list(&self, status: StatusCode, body: &str) {
        *self.list_override.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn respond_to_add(&self, status: StatusCode, body: &str) {
        *self.add_override.lock().unwrap() = Some((status, body.to_string()));
    }

    /// Hold the next list response until the returned handle is notified.
    pub fn hold_next_list(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.list_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn add_count(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/products", get(list_products))
            .route("/product/add", post(add_product))
            .with_state(self.clone())
    }

    /// Serve the mock and return its base URL (with a trailing slash).
    pub async fn start(&self) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.router();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }
}

fn canned(status: StatusCode, body: String) -> Response {
    (status, [("content-type", "application/json")], body).into_response()
}

async fn list_products(State(mock): State<MockCatalog>, RawQuery(query): RawQuery) -> Response {
    mock.list_calls.fetch_add(1, Ordering::SeqCst);
    *mock.last_list_query.lock().unwrap() = query;

    if let Some((status, body)) = mock.list_override.lock().unwrap().clone() {
        return canned(status, body);
    }
    let products = mock.products.lock().unwrap().clone();
    let gate = mock.list_gate.lock().unwrap().take();
    if let Some(gate) = gate {
        mock.list_started.notify_one();
        gate.notified().await;
    }
    axum::Json(json!({ "products": products })).into_response()
}

async fn add_product(
    State(mock): State<MockCatalog>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    mock.add_calls.fetch_add(1, Ordering::SeqCst);
    *mock.last_add_query.lock().unwrap() = query;
    *mock.last_add_content_type.lock().unwrap() = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    *mock.last_add_body.lock().unwrap() = Some(parsed.clone());

    if let Some((status, body)) = mock.add_override.lock().unwrap().clone() {
        return canned(status, body);
    }

    let mut products = mock.products.lock().unwrap();
    let id = products.len() + 1;
    let mut record = parsed;
    if let Some(obj) = record.as_object_mut() {
        obj.insert("id".into(), json!(id));
    }
    products.push(record.clone());
    axum::Json(json!({ "product_id": id, "product": record })).into_response()
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
