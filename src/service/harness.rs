//! Scenario harness: drives a scoring rule across a table of named cases
//! and records agreement with the expected labels.

use crate::service::classifier::ScoringRule;
use crate::types::scenario::Scenario;
use crate::types::scoring::ScoringAlgorithm;

/// Result of one scenario under the active rule.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub actual: ScoringAlgorithm,
    /// Label the pre-fix disjunction rule would have produced.
    pub legacy: ScoringAlgorithm,
    pub passed: bool,
}

/// Aggregate over a scenario table.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<ScenarioOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Scenarios where the disjunction rule diverges from the expected label.
    pub fn legacy_divergences(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.legacy != o.scenario.expected)
            .count()
    }
}

/// Run every scenario through `rule` and collect outcomes.
pub fn evaluate(rule: &dyn ScoringRule, scenarios: &[Scenario]) -> SuiteReport {
    let mut report = SuiteReport::default();

    for scenario in scenarios {
        let actual = rule.algorithm(&scenario.model_name, &scenario.template);
        let legacy = legacy_disjunction(&scenario.model_name, &scenario.template);
        let passed = actual == scenario.expected;

        if passed {
            report.passed += 1;
        } else {
            report.failed += 1;
        }

        report.outcomes.push(ScenarioOutcome {
            scenario: scenario.clone(),
            actual,
            legacy,
            passed,
        });
    }

    report
}

/// The pre-fix combination with the stock keywords: either predicate alone
/// selects BGE. Kept only for divergence reporting.
fn legacy_disjunction(model_name: &str, template: &str) -> ScoringAlgorithm {
    let is_target_model = model_name.to_lowercase().contains("bge");
    let has_relevance_hint = template.to_lowercase().contains("relevance");

    if is_target_model || has_relevance_hint {
        ScoringAlgorithm::Bge
    } else {
        ScoringAlgorithm::Qwen3
    }
}
