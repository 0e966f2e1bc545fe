//! HTTP-based explanation enrichment using an OpenAI-compatible API.
//!
//! [`HttpEnricher`] implements [`offpeak_core::ExplanationEnricher`] by
//! sending the ranked recommendations to a chat-completions endpoint and
//! parsing one explanation per line from the reply. The trait is synchronous;
//! the provider blocks on its HTTP call internally so the scoring crates stay
//! free of async code.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use offpeak_core::ExplanationEnricher;
//! use offpeak_data::enrich::{HttpEnricher, HttpEnricherConfig};
//!
//! let config = HttpEnricherConfig::new(Some("sk-test".to_owned()))
//!     .with_timeout(Duration::from_secs(10))
//!     .with_model("gpt-4o-mini");
//! let enricher = HttpEnricher::with_config(config)?;
//! assert!(enricher.is_enabled());
//! # Ok::<(), offpeak_data::enrich::EnricherBuildError>(())
//! ```

mod openai;
mod prompt;
mod provider;

pub use prompt::{SYSTEM_PROMPT, build_user_prompt, parse_explanations};
pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_USER_AGENT, EnricherBuildError, HttpEnricher,
    HttpEnricherConfig, PLACEHOLDER_API_KEY,
};
