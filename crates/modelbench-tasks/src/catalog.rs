//! Fixed catalog of evaluation tasks

use crate::{Task, TaskCategory};

/// Math word problems with numeric reference answers
const MATH_REASONING: &[(&str, &str)] = &[
    (
        "John has 3 apples and buys 5 more. How many apples does he have now?",
        "8",
    ),
    (
        "A train leaves at 3 PM and arrives at 6:30 PM. How many hours is the journey?",
        "3.5",
    ),
    (
        "Sarah had 12 cookies and gave 7 to her friend. How many cookies does she have left?",
        "5",
    ),
];

/// (source text, reference summary) pairs
const SUMMARIZATION: &[(&str, &str)] = &[
    (
        "The company reported a 20% increase in quarterly revenue driven by strong demand \
         for its cloud services. However, rising operating costs slightly reduced overall profit margins.",
        "Company revenue increased by 20% due to cloud demand, but higher costs reduced profit margins.",
    ),
    (
        "A new city-wide bike-sharing program launched last month and has already attracted over \
         10,000 registered users. Officials hope it will reduce traffic congestion and promote sustainability.",
        "A new bike-sharing program gained 10,000 users in a month and aims to cut traffic and support sustainability.",
    ),
];

/// (review text, sentiment label) pairs
const SENTIMENT: &[(&str, &str)] = &[
    (
        "The product quality is amazing and I would definitely buy it again.",
        "positive",
    ),
    (
        "The service was terrible and I will not recommend this to anyone.",
        "negative",
    ),
    (
        "The movie was okay, not great but not terrible either.",
        "neutral",
    ),
];

fn push_category(
    tasks: &mut Vec<Task>,
    category: TaskCategory,
    items: &[(&str, &str)],
    make_prompt: impl Fn(&str) -> String,
) {
    for (i, (text, reference)) in items.iter().enumerate() {
        tasks.push(Task {
            task_id: format!("{}{}", category.id_prefix(), i + 1),
            category,
            prompt: make_prompt(text),
            reference_answer: (*reference).to_string(),
        });
    }
}

/// Build the fixed evaluation task set
///
/// Pure construction with no external input; calling it twice yields
/// identical output, row for row.
pub fn build_tasks() -> Vec<Task> {
    let mut tasks = Vec::new();

    push_category(
        &mut tasks,
        TaskCategory::MathReasoning,
        MATH_REASONING,
        |prompt| prompt.to_string(),
    );

    push_category(
        &mut tasks,
        TaskCategory::Summarization,
        SUMMARIZATION,
        |source| format!("Summarize the following text in 1-2 sentences:\n\n{}", source),
    );

    push_category(
        &mut tasks,
        TaskCategory::SentimentClassification,
        SENTIMENT,
        |text| {
            format!(
                "Classify the sentiment of the following text as positive, negative, or neutral:\n\n{}",
                text
            )
        },
    );

    tasks
}
