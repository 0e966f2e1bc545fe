//! Optional narrative enrichment of recommendations.
//!
//! The [`ExplanationEnricher`] trait abstracts a text-generation collaborator
//! that rewrites the static explanation of each
//! [`Recommendation`](crate::Recommendation). Enrichment never affects
//! ranking; callers fall back to the static text when it is disabled or fails.

mod enricher;
mod error;

pub use enricher::{DisabledEnricher, EnrichmentContext, ExplanationEnricher};
pub use error::EnrichmentError;
