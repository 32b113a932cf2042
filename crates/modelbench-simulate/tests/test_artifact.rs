//! Unit tests for output artifacts and simulator config

use modelbench_simulate::{
    generate_response, load_all_outputs, write_outputs, ModelOutput, SimulatorConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_outputs(model_name: &str) -> Vec<ModelOutput> {
    vec![
        ModelOutput {
            task_id: "r1".to_string(),
            model_name: model_name.to_string(),
            response: "8".to_string(),
        },
        ModelOutput {
            task_id: "c1".to_string(),
            model_name: model_name.to_string(),
            response: "positive".to_string(),
        },
    ]
}

#[test]
fn test_outputs_roundtrip() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let outputs_dir = temp_dir.path().join("outputs");

    let written = sample_outputs("llama3_dummy");
    write_outputs(&outputs_dir, "llama3_dummy", &written).expect("Failed to write outputs");

    let loaded = load_all_outputs(&outputs_dir).expect("Failed to load outputs");
    assert_eq!(loaded, written);
}

#[test]
fn test_load_collects_every_model_artifact() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let outputs_dir = temp_dir.path().join("outputs");

    write_outputs(&outputs_dir, "llama3_dummy", &sample_outputs("llama3_dummy"))
        .expect("Failed to write outputs");
    write_outputs(&outputs_dir, "gpt4_dummy", &sample_outputs("gpt4_dummy"))
        .expect("Failed to write outputs");

    let loaded = load_all_outputs(&outputs_dir).expect("Failed to load outputs");
    assert_eq!(loaded.len(), 4);
    assert!(loaded.iter().any(|o| o.model_name == "llama3_dummy"));
    assert!(loaded.iter().any(|o| o.model_name == "gpt4_dummy"));
}

#[test]
fn test_missing_outputs_dir_fails_fast() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let outputs_dir = temp_dir.path().join("outputs");

    let err = load_all_outputs(&outputs_dir).unwrap_err();
    assert!(err.to_string().contains("modelbench simulate"));
}

#[test]
fn test_empty_outputs_dir_fails_fast() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let outputs_dir = temp_dir.path().join("outputs");
    std::fs::create_dir_all(&outputs_dir).expect("Failed to create directory");

    let err = load_all_outputs(&outputs_dir).unwrap_err();
    assert!(err.to_string().contains("No output artifacts"));
}

#[test]
fn test_default_config_matches_roster() {
    let config = SimulatorConfig::default();

    assert_eq!(config.seed, 42);
    let names: Vec<&str> = config.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["llama3_dummy", "mistral_dummy", "gpt4_dummy"]);
}

#[test]
fn test_config_loads_from_json() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("simulator.json");
    std::fs::write(
        &path,
        r#"{"seed": 7, "models": [{"name": "tiny_dummy", "quality": 0.5}]}"#,
    )
    .expect("Failed to write config");

    let config = SimulatorConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config.seed, 7);
    assert_eq!(config.models.len(), 1);
    assert_eq!(config.models[0].name, "tiny_dummy");
}

#[test]
fn test_chat_generation_per_model() {
    let mut rng = StdRng::seed_from_u64(1);

    let gpt4 = generate_response(&mut rng, "gpt4_dummy", "hello");
    assert_eq!(gpt4, "[GPT-4 Dummy] Answer: olleh");

    let llama3 = generate_response(&mut rng, "LLaMA3_DUMMY", "hello");
    assert_eq!(llama3, "[LLaMA-3 Dummy] Answer: HELLO");

    let mistral = generate_response(&mut rng, "mistral_dummy", "abc");
    assert!(mistral.starts_with("[Mistral Dummy] Answer: "));

    let unknown = generate_response(&mut rng, "other_model", "hello");
    assert!(unknown.starts_with("Unknown model"));
}
