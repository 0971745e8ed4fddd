//! Scoring service API.
//!
//! Two endpoints under `{base_url}/api/tasks`:
//! - POST /analyze/  {"tasks": [...], "strategy": "<id>"} -> {"results": [...]}
//! - GET  /suggest/                                      -> {"results": [...]}
//!
//! Error bodies may carry `{"detail": "..."}`; that text is surfaced as-is.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use taskrank_core::{ScoredTask, Strategy, Task};
use tracing::debug;

use crate::error::RemoteError;

pub const API_BASE_PATH: &str = "/api/tasks";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote scoring operations. The session is generic over this so tests can
/// swap in an in-memory double.
#[async_trait]
pub trait ScoringBackend: Send + Sync {
    async fn analyze(
        &self,
        tasks: &[Task],
        strategy: Strategy,
    ) -> Result<Vec<ScoredTask>, RemoteError>;

    async fn suggest(&self) -> Result<Vec<ScoredTask>, RemoteError>;
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    tasks: &'a [Task],
    strategy: Strategy,
}

#[derive(Deserialize)]
struct ResultsEnvelope {
    results: Vec<ScoredTask>,
    #[serde(default)]
    strategy: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpScoringClient {
    base: String,
    timeout: Duration,
    client: Client,
}

impl HttpScoringClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self {
            base: format!("{}{}", base_url.trim_end_matches('/'), API_BASE_PATH),
            timeout,
            client,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/", self.base, path)
    }

    fn transport_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout {
                millis: self.timeout.as_millis() as u64,
            }
        } else {
            RemoteError::Transport(e.to_string())
        }
    }

    async fn read_results(&self, resp: Response) -> Result<Vec<ScoredTask>, RemoteError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.map_err(|e| self.transport_error(e))?;
            return Err(RemoteError::Status {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        let bytes = resp.bytes().await.map_err(|e| self.transport_error(e))?;
        let envelope: ResultsEnvelope =
            serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))?;

        if let Some(strategy) = &envelope.strategy {
            debug!(%strategy, "scoring service echoed strategy");
        }
        Ok(envelope.results)
    }
}

#[async_trait]
impl ScoringBackend for HttpScoringClient {
    async fn analyze(
        &self,
        tasks: &[Task],
        strategy: Strategy,
    ) -> Result<Vec<ScoredTask>, RemoteError> {
        let url = self.endpoint("analyze");
        debug!(%url, tasks = tasks.len(), %strategy, "POST analyze");

        let resp = self
            .client
            .post(&url)
            .json(&AnalyzeRequest { tasks, strategy })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_results(resp).await
    }

    async fn suggest(&self) -> Result<Vec<ScoredTask>, RemoteError> {
        let url = self.endpoint("suggest");
        debug!(%url, "GET suggest");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_results(resp).await
    }
}

/// Pull a text `detail` field out of an error body, if there is one.
fn extract_detail(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v.get("detail")
        .and_then(|d| d.as_str())
        .map(|d| d.to_string())
}
