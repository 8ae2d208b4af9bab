//! Profile output for a finished quiz: affinity plus personality.

use serde::Serialize;

use crate::affinity::{classify_affinity, AffinityCategory};
use crate::answers::AnswerVector;
use crate::personality::{resolve_personality, Personality};

/// What the profile screen renders after a quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizOutcome {
    pub category: AffinityCategory,
    pub description: String,
    pub personality: Personality,
}

/// Run both classifications over one answer vector.
///
/// The affinity category and the personality type come from separate
/// reductions and may point in different directions.
pub fn evaluate_quiz(answers: &AnswerVector, locale: &str) -> QuizOutcome {
    let category = classify_affinity(answers);
    let resolved = resolve_personality(answers, locale);
    tracing::debug!(
        %category,
        personality = %resolved.personality.personality_type,
        answers = answers.len(),
        "quiz evaluated"
    );
    QuizOutcome {
        category,
        description: resolved.description,
        personality: resolved.personality,
    }
}
