use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use rerank_gate::service::{KeywordRule, evaluate, scenario_loader};
use rerank_gate::types::{ScoringAlgorithm, builtin_scenarios};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!("rerank-gate-{tag}-{}-{}", std::process::id(), nanos));
    path
}

#[test]
fn builtin_suite_passes_end_to_end() {
    let report = evaluate(&KeywordRule::default(), &builtin_scenarios());

    assert!(report.all_passed());
    assert_eq!(report.passed, 6);
    assert_eq!(report.legacy_divergences(), 3);

    // The single BGE outcome is the model+template conjunction case.
    let bge: Vec<_> = report
        .outcomes
        .iter()
        .filter(|o| o.actual == ScoringAlgorithm::Bge)
        .collect();
    assert_eq!(bge.len(), 1);
    assert_eq!(bge[0].scenario.model_name, "bgetest");
}

#[test]
fn loader_reads_scenario_files_and_skips_garbage() {
    let dir = unique_temp_dir("loader");
    fs::create_dir_all(&dir).expect("failed to create temp dir");

    let valid = r#"[
        {
            "name": "uppercase BGE reranker",
            "model_name": "BAAI/BGE-reranker-v2-m3",
            "template": "judge the Relevance of the passage",
            "expected": "BGE"
        },
        {
            "name": "qwen reranker stays on default path",
            "model_name": "qwen3-reranker-0.6b",
            "template": "judge the relevance of the passage",
            "expected": "Qwen3"
        }
    ]"#;
    fs::write(dir.join("cases.json"), valid).expect("failed to write scenario file");
    fs::write(dir.join("broken.json"), "{ not json").expect("failed to write garbage file");
    fs::write(dir.join("notes.txt"), "ignored").expect("failed to write non-json file");

    let scenarios = scenario_loader::load_from_dir(&dir).expect("load_from_dir failed");
    assert_eq!(scenarios.len(), 2);

    let report = evaluate(&KeywordRule::default(), &scenarios);
    assert!(report.all_passed());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn loader_returns_empty_for_missing_directory() {
    let dir = unique_temp_dir("missing");

    let scenarios = scenario_loader::load_from_dir(&dir).expect("load_from_dir failed");
    assert!(scenarios.is_empty());
}
