//! FAQ assistant - answers help-center questions grounded in the site FAQs.

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domains::content::Faq;
use crate::kernel::{BaseGenerativeAi, StructuredOutput};

/// System instruction for the FAQ assistant.
///
/// The assistant must stay inside the provided context; questions it cannot
/// ground there get a polite referral to support instead of a made-up answer.
const FAQ_SYSTEM_PROMPT: &str = "\
You are a friendly and helpful customer support assistant for RoomVerse, a co-living and rental platform.

Your goal is to answer the user's question based *only* on the provided FAQ context.

If the answer is in the context, provide it clearly and concisely.
If the answer is not in the context, politely state that you don't have the information and suggest they contact support. Do not make up answers.";

/// Input for the FAQ assistant.
#[derive(Debug, Clone)]
pub struct FaqQuestionInput {
    /// The user's question
    pub question: String,
    /// All FAQs (questions and answers) to use as context
    pub context: String,
}

/// Structured output contract for the FAQ assistant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FaqAnswer {
    /// A helpful and concise answer to the user's question, based on the provided context.
    pub answer: String,
}

/// Render the site FAQs into the context block the assistant is grounded in.
pub fn build_faq_context(faqs: &[Faq]) -> String {
    faqs.iter()
        .map(|faq| format!("Q: {}\nA: {}", faq.question, faq.answer))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Answer a help-center question using only the provided FAQ context.
pub async fn answer_faq_question(
    input: &FaqQuestionInput,
    ai: &dyn BaseGenerativeAi,
) -> Result<FaqAnswer> {
    debug!(
        question_length = input.question.len(),
        context_length = input.context.len(),
        "Answering FAQ question"
    );

    let user_prompt = format!(
        "Here is the FAQ context:\n---\n{}\n---\n\nUser's question: \"{}\"",
        input.context, input.question
    );

    let raw = ai
        .generate_structured(FAQ_SYSTEM_PROMPT, &user_prompt, FaqAnswer::response_schema())
        .await?;

    serde_json::from_str(&raw).with_context(|| format!("Failed to parse FAQ answer: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::content::SiteContent;
    use crate::kernel::MockGenerativeAi;

    fn input(question: &str) -> FaqQuestionInput {
        FaqQuestionInput {
            question: question.to_string(),
            context: build_faq_context(SiteContent::seed().faqs()),
        }
    }

    #[test]
    fn context_renders_question_answer_pairs() {
        let faqs = vec![
            Faq {
                question: "One?".to_string(),
                answer: "First.".to_string(),
            },
            Faq {
                question: "Two?".to_string(),
                answer: "Second.".to_string(),
            },
        ];

        assert_eq!(
            build_faq_context(&faqs),
            "Q: One?\nA: First.\n\nQ: Two?\nA: Second."
        );
    }

    #[tokio::test]
    async fn answers_from_queued_response() {
        let ai = MockGenerativeAi::new().with_json_response(&FaqAnswer {
            answer: "Deposits are refundable.".to_string(),
        });

        let answer = answer_faq_question(&input("Is there a deposit?"), &ai)
            .await
            .unwrap();

        assert_eq!(answer.answer, "Deposits are refundable.");
        assert_eq!(ai.call_count(), 1);
    }

    #[tokio::test]
    async fn prompt_carries_question_context_and_grounding_rule() {
        let ai = MockGenerativeAi::new();
        answer_faq_question(&input("Is there a deposit?"), &ai)
            .await
            .unwrap();

        assert!(ai.was_called_with("Is there a deposit?"));
        assert!(ai.was_called_with("Q: What is the booking process?"));
        assert!(ai.was_called_with("based *only* on the provided FAQ context"));
    }

    #[tokio::test]
    async fn schema_demands_an_answer_field() {
        let ai = MockGenerativeAi::new();
        answer_faq_question(&input("Hello?"), &ai).await.unwrap();

        let recorded = ai.last_prompt().unwrap();
        assert!(recorded.schema["properties"]["answer"].is_object());
    }

    #[tokio::test]
    async fn malformed_model_output_is_an_error() {
        let ai = MockGenerativeAi::new().with_response("not json at all");

        let result = answer_faq_question(&input("Hello?"), &ai).await;
        assert!(result.is_err());
    }
}
