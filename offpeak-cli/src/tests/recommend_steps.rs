//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::{StubServicesBuilder, utf8_tempdir, write_utf8};
use super::*;
use crate::recommend::{RecommendReport, run_recommend_with};
use camino::Utf8PathBuf;
use offpeak_core::test_support::StubEnricher;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

struct RecommendWorld {
    _tmp: TempDir,
    root: Utf8PathBuf,
    catalog: RefCell<Option<Utf8PathBuf>>,
    enricher: RefCell<StubEnricher>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        let (tmp, root) = utf8_tempdir();
        Self {
            _tmp: tmp,
            root,
            catalog: RefCell::new(None),
            enricher: RefCell::new(StubEnricher::disabled()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, flags: &str) -> Vec<String> {
        let mut argv = vec!["offpeak".to_owned(), "recommend".to_owned()];
        argv.extend(flags.split_whitespace().map(str::to_owned));
        if let Some(path) = self.catalog.borrow().as_ref() {
            argv.extend([format!("--{ARG_CATALOG}"), path.as_str().to_owned()]);
        }
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn report(&self) -> RecommendReport {
        let borrowed = self.result.borrow();
        if let Some(Err(err)) = borrowed.as_ref() {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON report")
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("an enricher that writes {text}")]
fn enricher_writes(#[from(world)] world: &RecommendWorld, text: String) {
    world
        .enricher
        .replace(StubEnricher::with_lines([text.trim_matches('"').to_owned()]));
}

#[given("a catalog path that does not exist")]
fn missing_catalog_path(#[from(world)] world: &RecommendWorld) {
    world.catalog.replace(Some(world.root.join("missing.json")));
}

#[given("a catalog file listing only {id}")]
fn catalog_file(#[from(world)] world: &RecommendWorld, id: String) {
    let wanted = id.trim_matches('"');
    let document = serde_json::json!({
        "regions": [{
            "id": "iberia",
            "default": true,
            "destinations": [{
                "id": wanted,
                "name": "Portugal",
                "location": "Porto",
                "peakCost": 1600.0,
                "baseCost": 1000.0
            }]
        }],
        "sharedDefault": {
            "season": "shoulder",
            "priceMultiplier": 0.8,
            "rainRisk": 0.3,
            "crowdLevel": 0.3,
            "flightReliability": "Good"
        },
        "seasonality": { wanted: {} }
    });
    let path = world.root.join("catalog.json");
    write_utf8(&path, document.to_string().as_bytes());
    world.catalog.replace(Some(path));
}

#[when("I run the recommend command with {flags}")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld, flags: String) {
    let invocation = world.build_command_line(flags.trim_matches('"'));
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let builder = StubServicesBuilder {
        enricher: world.enricher.borrow().clone(),
    };
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &builder, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints {count} destinations")]
fn command_succeeds(#[from(world)] world: &RecommendWorld, count: usize) {
    assert_eq!(world.report().destinations.len(), count);
}

#[then("the report names origin {origin} and month {month}")]
fn report_names(#[from(world)] world: &RecommendWorld, origin: String, month: String) {
    let report = world.report();
    assert_eq!(report.origin, origin.trim_matches('"'));
    assert_eq!(report.month, month.trim_matches('"'));
}

#[then("the first explanation reads {text}")]
fn first_explanation(#[from(world)] world: &RecommendWorld, text: String) {
    let report = world.report();
    let first = report.destinations.first().expect("a recommendation");
    assert_eq!(first.explanation, text.trim_matches('"'));
    assert!(first.enriched);
}

#[then("the command fails because option {field} is missing")]
fn command_fails_missing(#[from(world)] world: &RecommendWorld, field: String) {
    match &*world.error() {
        CliError::MissingArgument { field: missing, .. } => {
            assert_eq!(*missing, field.trim_matches('"'));
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the preferences are invalid")]
fn command_fails_invalid_preferences(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::InvalidPreferences(_) => {}
        other => panic!("expected InvalidPreferences, found {other:?}"),
    }
}

#[then("the command fails because the catalog file is missing")]
fn command_fails_missing_catalog(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(
    recommend_happy_path,
    "recommending destinations for a London traveller"
);
register_recommend_scenario!(
    recommend_enriched,
    "enriching explanations when an enricher is available"
);
register_recommend_scenario!(recommend_missing_month, "rejecting a missing month");
register_recommend_scenario!(
    recommend_invalid_tolerance,
    "rejecting an out of range tolerance"
);
register_recommend_scenario!(
    recommend_missing_catalog,
    "rejecting a missing catalog file"
);
register_recommend_scenario!(
    recommend_catalog_file,
    "reading destinations from a catalog file"
);
