//! Generic answer prompt definition.

use super::{PromptArgument, PromptDefinition};

/// Fallback prompt for queries no other tool claims.
pub struct AnswerQueryPrompt;

impl PromptDefinition for AnswerQueryPrompt {
    const NAME: &'static str = "answer_query";
    const DESCRIPTION: &'static str = "Answer a free-text user query";

    fn template() -> &'static str {
        "Answer this user query as best as you can:\n\n{{input}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument::required("input", "The user's question")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_query_prompt_metadata() {
        assert_eq!(AnswerQueryPrompt::NAME, "answer_query");
        assert!(!AnswerQueryPrompt::DESCRIPTION.is_empty());
        assert_eq!(AnswerQueryPrompt::arguments()[0].name, "input");
    }
}
