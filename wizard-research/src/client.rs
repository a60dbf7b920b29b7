//! Completion client: the pipeline's single network dependency

use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::instrument;
use wizard_core::{WizardError, WizardResult};

use crate::prompts::PromptSpec;

/// Seam between the pipeline and the external completion endpoint
///
/// One synchronous round trip per call, no retry. Tests substitute a stub to
/// exercise the pipeline without spending provider quota.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue a single completion request and return the raw response text
    async fn complete(&self, spec: &PromptSpec) -> WizardResult<String>;
}

/// Production client backed by the OpenAI chat completions API
#[derive(Debug, Clone)]
pub struct OpenAiCompletion {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Option<Duration>,
}

impl OpenAiCompletion {
    /// Create a client from the `OPENAI_API_KEY` environment variable
    ///
    /// The credential is read once here, at startup; a missing or blank key
    /// is a `Config` error rather than a deferred request failure.
    pub fn from_env() -> WizardResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| WizardError::config("OPENAI_API_KEY is not set"))?;

        let config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);

        Ok(Self {
            client,
            model: "gpt-4".to_string(),
            timeout: None,
        })
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Bound each request by a wall-clock deadline; expiry surfaces as a
    /// `Provider` error
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletion {
    #[instrument(skip(self, spec), fields(model = %self.model))]
    async fn complete(&self, spec: &PromptSpec) -> WizardResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(spec.system.as_str())
                    .build()
                    .map_err(|e| WizardError::provider(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(spec.user.as_str())
                    .build()
                    .map_err(|e| WizardError::provider(e.to_string()))?
                    .into(),
            ])
            .temperature(spec.temperature)
            .max_tokens(spec.max_tokens)
            .build()
            .map_err(|e| WizardError::provider(e.to_string()))?;

        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.client.chat().create(request))
                .await
                .map_err(|_| {
                    WizardError::provider(format!(
                        "completion request timed out after {}s",
                        limit.as_secs()
                    ))
                })?,
            None => self.client.chat().create(request).await,
        }
        .map_err(|e| WizardError::provider(format!("OpenAI API error: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .ok_or(WizardError::EmptyResponse)?;

        if content.trim().is_empty() {
            return Err(WizardError::EmptyResponse);
        }

        Ok(content.clone())
    }
}
