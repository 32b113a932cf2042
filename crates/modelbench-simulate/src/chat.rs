//! Ad hoc chat generation for the playground
//!
//! Same responder roster as the pipeline simulation, but for unscored,
//! free-form prompts: each dummy responder applies a fixed transform to
//! the prompt so answers are recognizably model-specific.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

const UNKNOWN_MODEL: &str = "Unknown model. Available: gpt4_dummy, llama3_dummy, mistral_dummy.";

fn gpt4_dummy(prompt: &str) -> String {
    let reversed: String = prompt.chars().rev().collect();
    format!("[GPT-4 Dummy] Answer: {}", reversed)
}

fn llama3_dummy(prompt: &str) -> String {
    format!("[LLaMA-3 Dummy] Answer: {}", prompt.to_uppercase())
}

fn mistral_dummy(rng: &mut StdRng, prompt: &str) -> String {
    let mut chars: Vec<char> = prompt.chars().collect();
    chars.shuffle(rng);
    let shuffled: String = chars.into_iter().collect();
    format!("[Mistral Dummy] Answer: {}", shuffled)
}

/// Generate a response to an ad hoc prompt
///
/// Model names are matched case-insensitively; an unrecognized name
/// returns a fixed help string rather than an error.
pub fn generate_response(rng: &mut StdRng, model_name: &str, prompt: &str) -> String {
    match model_name.to_lowercase().as_str() {
        "gpt4_dummy" => gpt4_dummy(prompt),
        "llama3_dummy" => llama3_dummy(prompt),
        "mistral_dummy" => mistral_dummy(rng, prompt),
        _ => UNKNOWN_MODEL.to_string(),
    }
}
