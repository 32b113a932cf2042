//! Unit tests for the scoring rubric

use modelbench_rubric::{
    apply_rubric, score_math_reasoning, score_sentiment, token_overlap_score,
};
use modelbench_simulate::ModelOutput;
use modelbench_tasks::{build_tasks, Task, TaskCategory};

#[test]
fn test_math_full_credit_within_tolerance() {
    assert_eq!(score_math_reasoning("8", "8"), 1.0);
    assert_eq!(score_math_reasoning("8.0005", "8"), 1.0);
    assert_eq!(score_math_reasoning(" 3.5 ", "3.5"), 1.0);
}

#[test]
fn test_math_partial_credit_decays_linearly() {
    // diff 2, ref 8 -> 1 - 2/8 = 0.75
    let score = score_math_reasoning("10", "8");
    assert!((score - 0.75).abs() < 1e-9);

    // far-off answers floor at zero
    assert_eq!(score_math_reasoning("100", "8"), 0.0);
}

#[test]
fn test_math_zero_reference_normalizes_to_unit() {
    // ref 0 -> score = max(0, 1 - |pred|)
    let score = score_math_reasoning("0.25", "0");
    assert!((score - 0.75).abs() < 1e-9);
    assert_eq!(score_math_reasoning("2", "0"), 0.0);
}

#[test]
fn test_math_unparseable_scores_zero() {
    assert_eq!(score_math_reasoning("around eight", "8"), 0.0);
    assert_eq!(score_math_reasoning("8", "eight"), 0.0);
}

#[test]
fn test_sentiment_ignores_case_and_whitespace() {
    assert_eq!(score_sentiment("Positive", "positive"), 1.0);
    assert_eq!(score_sentiment("  NEGATIVE  ", "negative"), 1.0);
    assert_eq!(score_sentiment("neutral", "negative"), 0.0);
}

#[test]
fn test_token_overlap_bounds() {
    let reference = "revenue increased due to cloud demand";

    // superset of the reference tokens scores 1.0
    let superset = "the revenue increased due to cloud demand last quarter";
    assert_eq!(token_overlap_score(superset, reference), 1.0);

    // no shared tokens scores 0.0
    assert_eq!(token_overlap_score("entirely unrelated text", reference), 0.0);

    // partial overlap lands strictly inside (0, 1)
    let partial = token_overlap_score("revenue increased", reference);
    assert!(partial > 0.0 && partial < 1.0);
}

#[test]
fn test_token_overlap_is_set_based() {
    // repeating a reference token must not inflate the score
    let reference = "alpha beta gamma";
    let repeated = token_overlap_score("alpha alpha alpha", reference);
    let single = token_overlap_score("alpha", reference);
    assert_eq!(repeated, single);
}

#[test]
fn test_token_overlap_empty_reference_scores_zero() {
    assert_eq!(token_overlap_score("anything", ""), 0.0);
    assert_eq!(token_overlap_score("anything", "   "), 0.0);
}

#[test]
fn test_apply_rubric_scores_each_output() {
    let tasks = build_tasks();
    let outputs = vec![
        ModelOutput {
            task_id: "r1".to_string(),
            model_name: "gpt4_dummy".to_string(),
            response: "8".to_string(),
        },
        ModelOutput {
            task_id: "c2".to_string(),
            model_name: "gpt4_dummy".to_string(),
            response: "positive".to_string(),
        },
    ];

    let scored = apply_rubric(&tasks, &outputs).expect("scoring failed");

    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].auto_correctness, 1.0);
    assert_eq!(scored[0].category, TaskCategory::MathReasoning);
    assert_eq!(scored[1].auto_correctness, 0.0);
    assert_eq!(scored[1].reference_answer, "negative");
}

#[test]
fn test_apply_rubric_rejects_dangling_task_id() {
    let tasks = build_tasks();
    let outputs = vec![ModelOutput {
        task_id: "z99".to_string(),
        model_name: "gpt4_dummy".to_string(),
        response: "whatever".to_string(),
    }];

    let err = apply_rubric(&tasks, &outputs).unwrap_err();
    assert!(err.to_string().contains("z99"));
}

#[test]
fn test_unknown_category_scores_zero() {
    let tasks = vec![Task {
        task_id: "x1".to_string(),
        category: TaskCategory::Unknown,
        prompt: "Do something else".to_string(),
        reference_answer: "n/a".to_string(),
    }];
    let outputs = vec![ModelOutput {
        task_id: "x1".to_string(),
        model_name: "gpt4_dummy".to_string(),
        response: "n/a".to_string(),
    }];

    let scored = apply_rubric(&tasks, &outputs).expect("scoring failed");
    assert_eq!(scored[0].auto_correctness, 0.0);
}
