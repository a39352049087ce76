// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests: configuration file -> router -> routed prompts.

use std::io::Write;

use switchyard_config::load_and_validate_path;
use switchyard_core::{ComplexityLevel, DecisionLevel, SwitchyardError};
use switchyard_router::ModelRouter;

const CONFIG: &str = r#"
[router]
default_models = false
presets = ["fast-text", "code-expert"]

[analyzer]
default_priority = "cost"

[[models]]
key = "local-coder"
name = "Local Coder"
model_id = "local-coder-7b"
provider = "ollama"
max_tokens = 4096
capabilities = ["text_generation", "code_generation"]
complexity_threshold = "medium"
cost_per_token = 0.0
response_time_ms = 800.0
"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn config_file_drives_the_registry() {
    let file = write_config(CONFIG);
    let config = load_and_validate_path(file.path()).unwrap();
    let router = ModelRouter::new(&config).unwrap();

    let names: Vec<String> = router.list_models().into_keys().collect();
    assert_eq!(names, vec!["code-expert-v1", "fast-text-v1", "local-coder"]);
}

#[test]
fn routes_follow_configured_models() {
    let file = write_config(CONFIG);
    let config = load_and_validate_path(file.path()).unwrap();
    let router = ModelRouter::new(&config).unwrap();

    let code = router.route("Write a function to reverse a string").unwrap();
    assert_eq!(code.selected_model, "local-coder");

    let text = router.route("What is the capital of France?").unwrap();
    assert_eq!(text.selected_model, "fast-text-v1");

    let hard = router
        .route(
            "Design and prove correctness of a distributed consensus algorithm \
             optimized for Byzantine fault tolerance",
        )
        .unwrap_err();
    // code-expert lacks reasoning, so nothing qualifies.
    match hard {
        SwitchyardError::NoEligibleModel { complexity, .. } => {
            assert_eq!(complexity, ComplexityLevel::Expert);
        }
        other => panic!("expected NoEligibleModel, got {other:?}"),
    }

    let stats = router.get_routing_stats();
    assert_eq!(stats.total_routes, 2);
    assert_eq!(stats.decision_distribution[&DecisionLevel::Low], 2);
}

#[test]
fn invalid_model_in_file_is_reported() {
    let file = write_config(&CONFIG.replace("max_tokens = 4096", "max_tokens = 0"));
    let errors = load_and_validate_path(file.path()).unwrap_err();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.to_string().contains("max_tokens")));
}

#[test]
fn unknown_section_key_is_rejected() {
    let file = write_config("[router]\nlog_levle = \"debug\"\n");
    let errors = load_and_validate_path(file.path()).unwrap_err();
    assert_eq!(errors.len(), 1);
}
