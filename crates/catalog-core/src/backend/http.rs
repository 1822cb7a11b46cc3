//! REST implementation of [`CatalogBackend`] on reqwest.
//!
//! In the browser reqwest drives `fetch`; natively it is used by the tests.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

use super::traits::{CatalogBackend, SearchParams};
use crate::config::ClientConfig;
use crate::domain::{
    AuthResponse, AutofillRequest, ComparativeAnalysis, CompareRequest, Credentials, ModelDraft,
    ModelEntry, ModelId, ModelInsights, ModelPatch, Registration, WorkspaceDraft, WorkspaceEntry,
    WorkspaceId,
};
use crate::error::{ClientError, ClientResult};
use crate::session::SessionContext;

#[derive(Serialize)]
struct TermQuery<'a> {
    q: &'a str,
}

#[derive(Serialize)]
struct MoveModelBody {
    target_workspace_id: WorkspaceId,
}

/// Catalog backend reached over HTTP
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
    session: Rc<SessionContext>,
}

impl HttpBackend {
    pub fn new(config: ClientConfig, session: Rc<SessionContext>) -> ClientResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {e}")))?;

        info!("Catalog backend at {}", config.api_base_url);
        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Rc<SessionContext> {
        &self.session
    }

    /// Build a request, attaching the bearer token when signed in.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("{} {}", method, url);
        let req = self.client.request(method, url);
        match self.session.read() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and classify the status.
    ///
    /// A 401 on an authenticated request tears the session down; on an
    /// anonymous one (bad password) it is an ordinary server error.
    async fn send(&self, req: RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED && self.session.is_authenticated() {
            warn!("Bearer token rejected, clearing session");
            self.session.clear();
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            warn!("Catalog backend returned {}: {}", status, message);
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let body = self.send(req).await?.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ClientError::Decode(format!("Failed to parse response: {e}")))
    }
}

/// Extract the backend's own wording from an error body.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message", "detail"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                if !msg.trim().is_empty() {
                    return msg.clone();
                }
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status {status}")
    } else {
        body.to_string()
    }
}

#[async_trait(?Send)]
impl CatalogBackend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        self.send_json(self.request(Method::POST, "/auth/login").json(credentials))
            .await
    }

    async fn register(&self, registration: &Registration) -> ClientResult<AuthResponse> {
        self.send_json(self.request(Method::POST, "/auth/register").json(registration))
            .await
    }

    async fn current_user(&self) -> ClientResult<AuthResponse> {
        self.send_json(self.request(Method::GET, "/auth/verify-token"))
            .await
    }

    async fn list_models(&self) -> ClientResult<Vec<ModelEntry>> {
        self.send_json(self.request(Method::GET, "/models")).await
    }

    async fn get_model(&self, id: ModelId) -> ClientResult<ModelEntry> {
        self.send_json(self.request(Method::GET, &format!("/models/{id}")))
            .await
    }

    async fn search_models(&self, params: &SearchParams) -> ClientResult<Vec<ModelEntry>> {
        self.send_json(self.request(Method::GET, "/models/search").query(params))
            .await
    }

    async fn semantic_search(&self, term: &str) -> ClientResult<Vec<ModelEntry>> {
        let req = self
            .request(Method::GET, "/models/semantic-search")
            .query(&TermQuery { q: term });
        self.send_json(req).await
    }

    async fn create_model(&self, draft: &ModelDraft) -> ClientResult<ModelEntry> {
        self.send_json(self.request(Method::POST, "/models").json(draft))
            .await
    }

    async fn update_model(&self, id: ModelId, patch: &ModelPatch) -> ClientResult<ModelEntry> {
        self.send_json(self.request(Method::PUT, &format!("/models/{id}")).json(patch))
            .await
    }

    async fn delete_model(&self, id: ModelId) -> ClientResult<()> {
        self.send(self.request(Method::DELETE, &format!("/models/{id}")))
            .await?;
        Ok(())
    }

    async fn autofill(&self, request: &AutofillRequest) -> ClientResult<String> {
        let req = self.request(Method::POST, "/models/autofill");
        let req = if request.files.is_empty() {
            req.json(request)
        } else {
            let mut form = Form::new().text("model_id", request.model_id.clone());
            for link in &request.model_links {
                form = form.text("model_links", link.clone());
            }
            for file in &request.files {
                form = form.part(
                    "files",
                    Part::bytes(file.bytes.clone()).file_name(file.name.clone()),
                );
            }
            req.multipart(form)
        };
        Ok(self.send(req).await?.text().await?)
    }

    async fn model_insights(&self, id: ModelId) -> ClientResult<ModelInsights> {
        self.send_json(self.request(Method::GET, &format!("/models/{id}/insights")))
            .await
    }

    async fn compare_models(&self, request: &CompareRequest) -> ClientResult<ComparativeAnalysis> {
        self.send_json(
            self.request(Method::POST, "/models/insights/compare")
                .json(request),
        )
        .await
    }

    async fn list_workspaces(&self) -> ClientResult<Vec<WorkspaceEntry>> {
        self.send_json(self.request(Method::GET, "/workspaces")).await
    }

    async fn get_workspace(&self, id: WorkspaceId) -> ClientResult<WorkspaceEntry> {
        self.send_json(self.request(Method::GET, &format!("/workspaces/{id}")))
            .await
    }

    async fn create_workspace(&self, draft: &WorkspaceDraft) -> ClientResult<WorkspaceEntry> {
        self.send_json(self.request(Method::POST, "/workspaces").json(draft))
            .await
    }

    async fn update_workspace(
        &self,
        id: WorkspaceId,
        draft: &WorkspaceDraft,
    ) -> ClientResult<WorkspaceEntry> {
        self.send_json(
            self.request(Method::PUT, &format!("/workspaces/{id}"))
                .json(draft),
        )
        .await
    }

    async fn delete_workspace(&self, id: WorkspaceId) -> ClientResult<()> {
        self.send(self.request(Method::DELETE, &format!("/workspaces/{id}")))
            .await?;
        Ok(())
    }

    async fn move_model(
        &self,
        model_id: ModelId,
        from: WorkspaceId,
        to: WorkspaceId,
    ) -> ClientResult<()> {
        let req = self
            .request(
                Method::POST,
                &format!("/workspaces/{from}/models/{model_id}/move"),
            )
            .json(&MoveModelBody {
                target_workspace_id: to,
            });
        self.send(req).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_backend_wording() {
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"error": "Model not found on hub"}"#),
            "Model not found on hub"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#"{"message": "Name taken"}"#),
            "Name taken"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body_or_status() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream timed out\n"),
            "upstream timed out"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Request failed with status 500 Internal Server Error"
        );
    }
}
