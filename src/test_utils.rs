// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use crate::provision::Stage;
use crate::report::Reporter;
use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Route = (String, String);

/// A mock HTTP service that returns predefined responses based on method and
/// exact request path, and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Route, (u16, String)>>>,
    requests: Arc<Mutex<Vec<Route>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for PATCH requests (server-side apply) matching the exact path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    /// Requests received so far as (method, path), in order
    pub fn requests(&self) -> Vec<Route> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let route = (req.method().to_string(), req.uri().path().to_string());
        self.requests.lock().unwrap().push(route.clone());

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(&route)
            .cloned()
            .unwrap_or_else(|| (404, not_found_json("resource", &route.1)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Serialize a typed object as the API server would return it
pub fn to_json<T: Serialize>(object: &T) -> String {
    serde_json::to_string(object).unwrap()
}

/// Create a mock service account JSON response
pub fn service_account_json(name: &str, namespace: &str, secret: Option<&str>) -> String {
    let mut account = serde_json::json!({
        "apiVersion": "v1",
        "kind": "ServiceAccount",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        }
    });
    if let Some(secret) = secret {
        account["secrets"] = serde_json::json!([{ "name": secret }]);
    }
    account.to_string()
}

/// Create a mock token secret JSON response; values are base64 encoded like the API does
pub fn secret_json(name: &str, namespace: &str, token: &str, ca_crt: &str) -> String {
    use base64::prelude::{Engine, BASE64_STANDARD};

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "type": "kubernetes.io/service-account-token",
        "metadata": {
            "name": name,
            "namespace": namespace
        },
        "data": {
            "token": BASE64_STANDARD.encode(token),
            "ca.crt": BASE64_STANDARD.encode(ca_crt)
        }
    })
    .to_string()
}

/// Create a mock node list JSON response
pub fn node_list_json(names: &[&str]) -> String {
    let items: Vec<_> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "apiVersion": "v1",
                "kind": "Node",
                "metadata": { "name": name }
            })
        })
        .collect();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "NodeList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a failure Status response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportEvent {
    Stage(Stage),
    Success(String),
    Failure(String),
}

/// Reporter that keeps every event for later inspection
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn stages(&self) -> Vec<Stage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Stage(stage) => Some(stage),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Failure(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn stage(&self, stage: Stage) {
        self.events.lock().unwrap().push(ReportEvent::Stage(stage));
    }

    fn success(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ReportEvent::Success(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ReportEvent::Failure(message.to_string()));
    }
}
