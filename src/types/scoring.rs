use serde::{Deserialize, Serialize};

/// Scoring algorithm a reranking endpoint applies to a request.
///
/// `Qwen3` is the default path; `Bge` is selected only by explicit
/// detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringAlgorithm {
    #[serde(rename = "BGE")]
    Bge,
    #[serde(rename = "Qwen3")]
    Qwen3,
}

impl ScoringAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bge => "BGE",
            Self::Qwen3 => "Qwen3",
        }
    }
}

impl std::fmt::Display for ScoringAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
