pub mod scenario;
pub mod scoring;

pub use scenario::{Scenario, builtin_scenarios};
pub use scoring::ScoringAlgorithm;
