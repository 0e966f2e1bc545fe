//! `ExplanationEnricher` backed by a chat-completions HTTP endpoint.
//!
//! The [`ExplanationEnricher`] trait is synchronous. This provider bridges
//! the async HTTP call to that interface by blocking on a Tokio runtime it
//! owns, or on the caller's multi-threaded runtime when there is one.

use std::time::Duration;

use offpeak_core::{EnrichmentContext, EnrichmentError, ExplanationEnricher, Recommendation};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::openai::{ChatMessage, ChatRequest, ChatResponse};
use super::prompt::{SYSTEM_PROMPT, build_user_prompt, parse_explanations};

/// Error type for [`HttpEnricher`] construction failures.
#[derive(Debug, Error)]
pub enum EnricherBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default user agent for enrichment requests.
pub const DEFAULT_USER_AGENT: &str = "offpeak-enrichment/0.1";

/// Sample key shipped in example environment files; treated as absent.
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 500;

/// Configuration for [`HttpEnricher`].
#[derive(Clone)]
pub struct HttpEnricherConfig {
    /// API key; enrichment is disabled without a usable key.
    pub api_key: Option<String>,
    /// Base URL of the API, e.g. `"https://api.openai.com/v1"`.
    pub base_url: String,
    /// Chat model name.
    pub model: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl std::fmt::Debug for HttpEnricherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEnricherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Default for HttpEnricherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl HttpEnricherConfig {
    /// Create a configuration with the given API key and defaults elsewhere.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the chat model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The key to send, or `None` when it is missing, blank or the placeholder.
    #[must_use]
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

/// Explanation enricher calling an OpenAI-compatible chat-completions API.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the provider blocks on its own current-thread
/// runtime. Inside a multi-threaded runtime it uses that runtime's handle via
/// [`tokio::task::block_in_place`]. Inside a `current_thread` runtime it falls
/// back to its own runtime, which may deadlock if the caller's runtime drives
/// IO this request depends on.
pub struct HttpEnricher {
    client: Client,
    config: HttpEnricherConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpEnricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEnricher")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpEnricher {
    /// Create an enricher with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: Option<String>) -> Result<Self, EnricherBuildError> {
        Self::with_config(HttpEnricherConfig::new(api_key))
    }

    /// Create an enricher with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: HttpEnricherConfig) -> Result<Self, EnricherBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(EnricherBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(EnricherBuildError::Runtime)?;
        if config.usable_api_key().is_none() {
            log::info!("enrichment API key not configured; using static explanations");
        }
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &HttpEnricherConfig {
        &self.config
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn fetch_explanations(
        &self,
        api_key: &str,
        recommendations: &[Recommendation],
        context: &EnrichmentContext,
    ) -> Result<Vec<String>, EnrichmentError> {
        let url = self.completions_url();
        let user_prompt = build_user_prompt(recommendations, context);
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let body: ChatResponse =
            response
                .json()
                .await
                .map_err(|err| EnrichmentError::Parse {
                    message: err.to_string(),
                })?;

        let content = body.first_content().ok_or(EnrichmentError::EmptyResponse)?;
        let lines = parse_explanations(&content);
        log::debug!(
            "received {} explanations for {} recommendations",
            lines.len(),
            recommendations.len()
        );
        Ok(lines)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> EnrichmentError {
        if error.is_timeout() {
            return EnrichmentError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return EnrichmentError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        EnrichmentError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

impl ExplanationEnricher for HttpEnricher {
    fn is_enabled(&self) -> bool {
        self.config.usable_api_key().is_some()
    }

    fn generate_explanations(
        &self,
        recommendations: &[Recommendation],
        context: &EnrichmentContext,
    ) -> Result<Vec<String>, EnrichmentError> {
        let Some(api_key) = self.config.usable_api_key() else {
            return Err(EnrichmentError::Disabled);
        };
        if recommendations.is_empty() {
            return Ok(Vec::new());
        }

        let future = self.fetch_explanations(api_key, recommendations, context);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}
