pub mod config;
pub mod error;
pub mod service;
pub mod types;

pub use error::GateError;
pub use service::classifier::{KeywordRule, ScoringRule, classify};
pub use types::scoring::ScoringAlgorithm;
