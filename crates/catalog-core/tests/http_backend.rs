//! HTTP backend against a mock catalog service.
//!
//! Checks the wire contract: paths, query strings, bodies, bearer auth and
//! how error responses surface.

use std::cell::Cell;
use std::rc::Rc;

use catalog_core::domain::{AutofillFile, AutofillRequest, CompareRequest, ModelStatus};
use catalog_core::{
    CatalogBackend, ClientConfig, ClientError, HttpBackend, SearchParams, SessionContext,
};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(server: &MockServer, session: Rc<SessionContext>) -> HttpBackend {
    HttpBackend::new(ClientConfig::new(server.uri()), session).expect("client should build")
}

#[tokio::test]
async fn test_bearer_token_attached_when_signed_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 3, "name": "Llama 3", "model_type": "LLM", "tags": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::with_token("abc123")));
    let models = http.list_models().await.unwrap();

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].name, "Llama 3");
    assert!(models[0].tags.is_empty());
}

#[tokio::test]
async fn test_keyword_search_sends_populated_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models/search"))
        .and(query_param("q", "bert"))
        .and(query_param("status", "Studying"))
        .and(query_param("workspace_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::new()));
    let params = SearchParams {
        q: Some("bert".to_string()),
        status: Some(ModelStatus::Studying),
        workspace_id: Some(2),
        ..Default::default()
    };

    assert!(http.search_models(&params).await.unwrap().is_empty());

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert!(!query.contains("type="));
    assert!(!query.contains("tag="));
}

#[tokio::test]
async fn test_semantic_search_hits_its_own_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/models/semantic-search"))
        .and(query_param("q", "reads charts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 5, "name": "Pix2Struct", "similarity": 0.82}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::new()));
    let models = http.semantic_search("reads charts").await.unwrap();

    assert_eq!(models[0].id, 5);
    assert_eq!(models[0].relevance, Some(0.82));
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_notifies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workspaces"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Token has expired"
        })))
        .mount(&server)
        .await;

    let session = Rc::new(SessionContext::with_token("stale"));
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    session.subscribe(move || counter.set(counter.get() + 1));

    let http = backend(&server, session.clone());
    let err = http.list_workspaces().await.unwrap_err();

    assert_eq!(err, ClientError::Unauthorized);
    assert!(!session.is_authenticated());
    assert_eq!(fired.get(), 1);
}

#[tokio::test]
async fn test_anonymous_unauthorized_is_a_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::new()));
    let err = http
        .login(&catalog_core::domain::Credentials {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn test_server_error_message_is_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/models/9"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Failed to delete model: database is locked"
        })))
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::with_token("t")));
    let err = http.delete_model(9).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Server {
            status: 500,
            message: "Failed to delete model: database is locked".to_string(),
        }
    );
}

#[tokio::test]
async fn test_autofill_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/autofill"))
        .and(body_json(serde_json::json!({
            "model_id": "google/gemma-2b",
            "model_links": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Lightweight open model."))
        .expect(1)
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::with_token("t")));
    let body = http
        .autofill(&AutofillRequest {
            model_id: "google/gemma-2b".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(body, "Lightweight open model.");
}

#[tokio::test]
async fn test_autofill_with_files_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/autofill"))
        .and(body_string_contains("name=\"model_id\""))
        .and(body_string_contains("filename=\"card.md\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Gemma"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::with_token("t")));
    let body = http
        .autofill(&AutofillRequest {
            model_id: "google/gemma-2b".to_string(),
            model_links: vec!["https://ai.google.dev/gemma".to_string()],
            files: vec![AutofillFile {
                name: "card.md".to_string(),
                bytes: b"# Gemma".to_vec(),
            }],
        })
        .await
        .unwrap();

    assert!(body.contains("Gemma"));
}

#[tokio::test]
async fn test_compare_posts_ids_without_blank_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/insights/compare"))
        .and(body_json(serde_json::json!({"model_ids": [3, 5]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "comparative_analysis": "Both are small.\nOnly one is multilingual."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::with_token("t")));
    let analysis = http
        .compare_models(&CompareRequest {
            model_ids: vec![3, 5],
            prompt: None,
        })
        .await
        .unwrap();

    assert!(analysis.comparative_analysis.starts_with("Both are small."));
}

#[tokio::test]
async fn test_move_model_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/workspaces/1/models/3/move"))
        .and(body_json(serde_json::json!({"target_workspace_id": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Model moved successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let http = backend(&server, Rc::new(SessionContext::with_token("t")));
    http.move_model(3, 1, 2).await.unwrap();
}
