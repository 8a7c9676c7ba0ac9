use std::process::ExitCode;

use mimalloc::MiMalloc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rerank_gate::service::{KeywordRule, evaluate, scenario_loader};
use rerank_gate::types::{Scenario, builtin_scenarios};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = &rerank_gate::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        model_keyword = %cfg.model_keyword,
        template_keyword = %cfg.template_keyword,
        loglevel = %cfg.loglevel,
        "starting scenario run"
    );

    let scenarios = resolve_scenarios();
    let rule = KeywordRule::new(cfg.model_keyword.clone(), cfg.template_keyword.clone());
    let report = evaluate(&rule, &scenarios);

    for outcome in &report.outcomes {
        if outcome.passed {
            info!(
                scenario = %outcome.scenario.name,
                model = %outcome.scenario.model_name,
                algorithm = %outcome.actual,
                "scenario passed"
            );
        } else {
            error!(
                scenario = %outcome.scenario.name,
                model = %outcome.scenario.model_name,
                expected = %outcome.scenario.expected,
                actual = %outcome.actual,
                "scenario failed"
            );
        }

        if outcome.legacy != outcome.scenario.expected {
            warn!(
                scenario = %outcome.scenario.name,
                legacy = %outcome.legacy,
                "disjunction rule would mislabel this scenario"
            );
        }
    }

    info!(
        passed = report.passed,
        failed = report.failed,
        legacy_divergences = report.legacy_divergences(),
        "scenario run complete"
    );

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Scenarios from the configured directory when it yields any, otherwise the
/// builtin table.
fn resolve_scenarios() -> Vec<Scenario> {
    let cfg = &rerank_gate::config::CONFIG;

    let Some(dir) = cfg.scenario_dir.as_ref() else {
        return builtin_scenarios();
    };

    match scenario_loader::load_from_dir(dir) {
        Ok(list) if !list.is_empty() => {
            info!(
                path = %dir.display(),
                count = list.len(),
                "using scenarios loaded from filesystem"
            );
            list
        }
        Ok(_) => {
            info!(path = %dir.display(), "no scenario files discovered; using builtin table");
            builtin_scenarios()
        }
        Err(e) => {
            warn!(
                path = %dir.display(),
                error = %e,
                "failed to load scenarios; using builtin table"
            );
            builtin_scenarios()
        }
    }
}
