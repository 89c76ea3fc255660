//! Langfuse prompt API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{CreatePromptRequest, CreatedPrompt, LangfuseError};
use crate::config::ResolvedLangfuseConfig;

/// Path of the prompt creation endpoint, relative to the host
pub const PROMPTS_PATH: &str = "/api/public/v2/prompts";

/// Somewhere prompts can be created
///
/// Each call is a single request; there is no retry or batching.
#[async_trait]
pub trait PromptStore: Send + Sync {
    async fn create_prompt(&self, request: &CreatePromptRequest) -> Result<CreatedPrompt, LangfuseError>;
}

/// Client for the Langfuse public REST API
pub struct LangfuseClient {
    host: String,
    public_key: String,
    secret_key: String,
    http: Client,
}

impl LangfuseClient {
    pub fn from_config(config: &ResolvedLangfuseConfig) -> Result<Self, LangfuseError> {
        debug!(?config, "from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LangfuseError::Network)?;

        Ok(Self {
            host: config.host.clone(),
            public_key: config.public_key.clone(),
            secret_key: config.secret_key.clone(),
            http,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn prompts_url(&self) -> String {
        format!("{}{}", self.host, PROMPTS_PATH)
    }
}

#[async_trait]
impl PromptStore for LangfuseClient {
    async fn create_prompt(&self, request: &CreatePromptRequest) -> Result<CreatedPrompt, LangfuseError> {
        let url = self.prompts_url();
        debug!(%url, name = %request.name, "create_prompt: called");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.public_key, Some(&self.secret_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), %message, "create_prompt: API error");
            return Err(LangfuseError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let created: CreatedPrompt = serde_json::from_str(&body)
            .map_err(|e| LangfuseError::InvalidResponse(format!("{}: {}", e, body)))?;
        debug!(name = %created.name, version = created.version, "create_prompt: success");
        Ok(created)
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Scripted prompt store for unit tests
    ///
    /// Returns `outcomes` in order, one per call, and records the names it
    /// was asked to create.
    pub struct MockPromptStore {
        outcomes: Mutex<Vec<Result<CreatedPrompt, LangfuseError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockPromptStore {
        pub fn new(mut outcomes: Vec<Result<CreatedPrompt, LangfuseError>>) -> Self {
            outcomes.reverse();
            Self {
                outcomes: Mutex::new(outcomes),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Succeed for every call with version 1
        pub fn always_ok(count: usize) -> Self {
            Self::new((0..count).map(|_| Ok(created("", 1))).collect())
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("calls lock poisoned").clone()
        }
    }

    /// Store whose requests never complete
    #[derive(Default)]
    pub struct PendingPromptStore;

    #[async_trait]
    impl PromptStore for PendingPromptStore {
        async fn create_prompt(&self, _request: &CreatePromptRequest) -> Result<CreatedPrompt, LangfuseError> {
            std::future::pending().await
        }
    }

    pub fn created(name: &str, version: u32) -> CreatedPrompt {
        CreatedPrompt {
            name: name.to_string(),
            version,
            labels: vec![],
            created_at: None,
        }
    }

    #[async_trait]
    impl PromptStore for MockPromptStore {
        async fn create_prompt(&self, request: &CreatePromptRequest) -> Result<CreatedPrompt, LangfuseError> {
            self.calls.lock().expect("calls lock poisoned").push(request.name.clone());
            let next = self.outcomes.lock().expect("outcomes lock poisoned").pop();
            match next {
                Some(Ok(mut created)) => {
                    if created.name.is_empty() {
                        created.name = request.name.clone();
                    }
                    Ok(created)
                }
                Some(Err(e)) => Err(e),
                None => Err(LangfuseError::InvalidResponse("No more mock responses".to_string())),
            }
        }
    }
}
