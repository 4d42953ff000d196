use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde::Deserialize;
use tower::ServiceExt;
use trv_api::config::Environment;
use trv_api::state::ApiState;
use trv_db::models::NewQuestion;
use trv_db::{MemoryStore, QuestionStore};

/// Fresh state over a seeded in-memory store: the six stock categories, no
/// questions. Tests insert the questions they need.
pub fn test_state() -> ApiState<MemoryStore> {
    let store = MemoryStore::new();
    for (id, label) in [
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ] {
        store.put_category(id, label);
    }
    ApiState::new(store, Environment::Development)
}

/// Router + client over the given state.
pub fn test_client(state: ApiState<MemoryStore>) -> TestClient {
    TestClient::new(trv_api::router::router().with_state(state))
}

/// Insert one question directly through the store.
pub async fn seed_question(
    store: &MemoryStore,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i32,
) -> i64 {
    store
        .insert(NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
        .await
        .expect("failed to seed question")
}

/// Insert `count` generated questions into one category.
pub async fn seed_many(store: &MemoryStore, category: i64, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for n in 0..count {
        let id = seed_question(
            store,
            &format!("Seeded question number {n}?"),
            &format!("Answer {n}"),
            category,
            1 + (n % 5) as i32,
        )
        .await;
        ids.push(id);
    }
    ids
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}

/// Assert the standard error envelope: `success: false` plus the numeric
/// code and its stable message.
pub fn assert_error_envelope(response: &TestResponse, code: u16, message: &str) {
    let json: serde_json::Value = response.json();
    assert_eq!(json["success"], false, "body: {json}");
    assert_eq!(json["error"], code, "body: {json}");
    assert_eq!(json["message"], message, "body: {json}");
}
