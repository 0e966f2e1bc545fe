//! Integration tests for [`HttpEnricher`] against a local HTTP server.

mod support;

use std::time::Duration;

use offpeak_core::{
    EnrichmentContext, EnrichmentError, ExplanationEnricher, Recommendation, UserPreferences,
};
use offpeak_data::StaticCatalog;
use offpeak_data::enrich::{HttpEnricher, HttpEnricherConfig};
use offpeak_scorer::{RecommendationEngine, enrich_recommendations};
use rstest::{fixture, rstest};
use support::{OneShotServer, refused_base_url};

struct Ranked {
    preferences: UserPreferences,
    recommendations: Vec<Recommendation>,
}

impl Ranked {
    fn context(&self) -> EnrichmentContext {
        EnrichmentContext::from(&self.preferences)
    }
}

#[fixture]
fn ranked() -> Ranked {
    let catalog = StaticCatalog::builtin().expect("bundled catalog");
    let preferences = UserPreferences::new("London", "September").expect("valid preferences");
    let recommendations = RecommendationEngine::new(&catalog, &catalog)
        .recommend(&preferences)
        .expect("ranking succeeds");
    Ranked {
        preferences,
        recommendations,
    }
}

fn enricher(base_url: &str, timeout: Duration) -> HttpEnricher {
    let config = HttpEnricherConfig::new(Some("sk-test".to_owned()))
        .with_base_url(base_url)
        .with_timeout(timeout);
    HttpEnricher::with_config(config).expect("enricher builds")
}

#[rstest]
fn sends_prompt_and_parses_numbered_reply(ranked: Ranked) {
    let server = OneShotServer::replying_with(
        "1. Sunset views without the queues.\n2. Empty coves.\n\n3. Quiet walls.\n4. Monsoon bargains.\n5. Souks at half price.",
    );
    let enricher = enricher(&server.base_url, Duration::from_secs(5));

    let lines = enricher
        .generate_explanations(&ranked.recommendations, &ranked.context())
        .expect("request succeeds");

    assert_eq!(lines.len(), 5);
    assert_eq!(lines.first().map(String::as_str), Some("Sunset views without the queues."));

    let request = server.captured();
    assert_eq!(request.request_line, "POST /v1/chat/completions HTTP/1.1");
    assert_eq!(request.header("authorization"), Some("Bearer sk-test"));
    let body: serde_json::Value = serde_json::from_str(&request.body).expect("JSON body");
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "system");
    let prompt = body["messages"][1]["content"].as_str().expect("user prompt");
    assert!(prompt.contains("great value in September"), "prompt: {prompt}");
    assert!(prompt.contains("1. Greece - Santorini"), "prompt: {prompt}");
}

#[rstest]
fn merged_reply_marks_recommendations_enriched(ranked: Ranked) {
    let server = OneShotServer::replying_with("1. Caldera calm.\n2. Adriatic quiet.");
    let enricher = enricher(&server.base_url, Duration::from_secs(5));

    let merged = enrich_recommendations(&enricher, ranked.recommendations.clone(), &ranked.context());

    let first = merged.first().expect("first recommendation");
    assert_eq!(first.explanation, "Caldera calm.");
    assert!(first.enriched);
    let third = merged.get(2).expect("third recommendation");
    assert_eq!(Some(third), ranked.recommendations.get(2));
    assert!(!third.enriched);
}

#[rstest]
fn maps_server_errors_to_http(ranked: Ranked) {
    let server = OneShotServer::start(
        "500 Internal Server Error",
        r#"{"error":{"message":"boom"}}"#.to_owned(),
        Duration::ZERO,
    );
    let enricher = enricher(&server.base_url, Duration::from_secs(5));

    let err = enricher
        .generate_explanations(&ranked.recommendations, &ranked.context())
        .expect_err("server error");

    assert!(
        matches!(&err, EnrichmentError::Http { status: 500, .. }),
        "expected Http error, got {err:?}"
    );
}

#[rstest]
fn maps_refused_connections_to_network(ranked: Ranked) {
    let enricher = enricher(&refused_base_url(), Duration::from_secs(5));

    let err = enricher
        .generate_explanations(&ranked.recommendations, &ranked.context())
        .expect_err("connection refused");

    assert!(
        matches!(&err, EnrichmentError::Network { .. }),
        "expected Network error, got {err:?}"
    );
}

#[rstest]
fn maps_slow_replies_to_timeout(ranked: Ranked) {
    let server = OneShotServer::start("200 OK", "{}".to_owned(), Duration::from_secs(3));
    let enricher = enricher(&server.base_url, Duration::from_secs(1));

    let err = enricher
        .generate_explanations(&ranked.recommendations, &ranked.context())
        .expect_err("timeout");

    assert_eq!(
        err,
        EnrichmentError::Timeout {
            url: format!("{}/chat/completions", server.base_url),
            timeout_secs: 1,
        }
    );
}

#[rstest]
#[case(r#"{"choices": []}"#)]
#[case(r#"{"choices": [{"message": {"content": "   "}}]}"#)]
fn blank_replies_are_empty_responses(ranked: Ranked, #[case] body: &str) {
    let server = OneShotServer::start("200 OK", body.to_owned(), Duration::ZERO);
    let enricher = enricher(&server.base_url, Duration::from_secs(5));

    let err = enricher
        .generate_explanations(&ranked.recommendations, &ranked.context())
        .expect_err("empty reply");

    assert_eq!(err, EnrichmentError::EmptyResponse);
}

#[rstest]
fn malformed_replies_are_parse_errors(ranked: Ranked) {
    let server = OneShotServer::start("200 OK", "not json".to_owned(), Duration::ZERO);
    let enricher = enricher(&server.base_url, Duration::from_secs(5));

    let err = enricher
        .generate_explanations(&ranked.recommendations, &ranked.context())
        .expect_err("malformed reply");

    assert!(
        matches!(&err, EnrichmentError::Parse { .. }),
        "expected Parse error, got {err:?}"
    );
}

#[rstest]
fn placeholder_key_leaves_recommendations_untouched(ranked: Ranked) {
    let enricher = HttpEnricher::new(Some(offpeak_data::enrich::PLACEHOLDER_API_KEY.to_owned()))
        .expect("enricher builds");

    let merged = enrich_recommendations(&enricher, ranked.recommendations.clone(), &ranked.context());

    assert!(!enricher.is_enabled());
    assert_eq!(merged, ranked.recommendations);
}
