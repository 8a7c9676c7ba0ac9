use serde::Deserialize;

use crate::types::scoring::ScoringAlgorithm;

/// A named detection case with its expected label.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub model_name: String,
    pub template: String,
    pub expected: ScoringAlgorithm,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        model_name: impl Into<String>,
        template: impl Into<String>,
        expected: ScoringAlgorithm,
    ) -> Self {
        Self {
            name: name.into(),
            model_name: model_name.into(),
            template: template.into(),
            expected,
        }
    }
}

/// The six cases the conjunction rule was validated against.
pub fn builtin_scenarios() -> Vec<Scenario> {
    use ScoringAlgorithm::{Bge, Qwen3};

    vec![
        Scenario::new(
            "Qwen3 model with relevance template",
            "qwen3p6b",
            "template with relevance keyword",
            Qwen3,
        ),
        Scenario::new(
            "Qwen3 model without relevance",
            "qwen3p6b",
            "simple template",
            Qwen3,
        ),
        Scenario::new(
            "BGE model with relevance template",
            "bgetest",
            "template with relevance",
            Bge,
        ),
        Scenario::new(
            "BGE model without relevance",
            "bgetest",
            "simple template",
            Qwen3,
        ),
        Scenario::new(
            "Non-BGE model with relevance",
            "random",
            "template with relevance",
            Qwen3,
        ),
        Scenario::new(
            "Non-BGE model without relevance",
            "random",
            "simple template",
            Qwen3,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_six_cases() {
        let scenarios = builtin_scenarios();
        assert_eq!(scenarios.len(), 6);

        // Exactly one case expects the BGE path.
        let bge_count = scenarios
            .iter()
            .filter(|s| s.expected == ScoringAlgorithm::Bge)
            .count();
        assert_eq!(bge_count, 1);
    }

    #[test]
    fn scenario_deserializes_from_json() {
        let raw = r#"{
            "name": "BGE model with relevance template",
            "model_name": "bgetest",
            "template": "template with relevance",
            "expected": "BGE"
        }"#;

        let scenario: Scenario = serde_json::from_str(raw).expect("valid scenario JSON");
        assert_eq!(scenario.model_name, "bgetest");
        assert_eq!(scenario.expected, ScoringAlgorithm::Bge);
    }
}
