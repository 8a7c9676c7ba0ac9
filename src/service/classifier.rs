//! Reranker scoring-algorithm detection.

use crate::types::scoring::ScoringAlgorithm;

/// Chooses the scoring algorithm for a reranking request.
pub trait ScoringRule: Send + Sync {
    fn algorithm(&self, model_name: &str, template: &str) -> ScoringAlgorithm;
}

/// Keyword-based detection rule.
///
/// The BGE path is taken only when the model identifier contains the model
/// keyword AND the template contains the template keyword, both
/// case-insensitive. A template match alone never selects BGE.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    model_keyword: String,
    template_keyword: String,
}

impl KeywordRule {
    pub fn new(model_keyword: impl Into<String>, template_keyword: impl Into<String>) -> Self {
        Self {
            model_keyword: model_keyword.into().to_lowercase(),
            template_keyword: template_keyword.into().to_lowercase(),
        }
    }
}

impl Default for KeywordRule {
    fn default() -> Self {
        Self::new("bge", "relevance")
    }
}

impl ScoringRule for KeywordRule {
    fn algorithm(&self, model_name: &str, template: &str) -> ScoringAlgorithm {
        let is_target_model = model_name.to_lowercase().contains(&self.model_keyword);
        let has_relevance_hint = template.to_lowercase().contains(&self.template_keyword);

        if is_target_model && has_relevance_hint {
            ScoringAlgorithm::Bge
        } else {
            ScoringAlgorithm::Qwen3
        }
    }
}

/// Detection with the stock keywords.
pub fn classify(model_name: &str, template: &str) -> ScoringAlgorithm {
    KeywordRule::default().algorithm(model_name, template)
}
