//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{AnswerQueryPrompt, BusinessSummaryPrompt, PromptDefinition};
use super::templates::PromptTemplate;

/// Get all registered prompts as PromptTemplates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate::from_definition::<BusinessSummaryPrompt>(),
        PromptTemplate::from_definition::<AnswerQueryPrompt>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 2);

        let names: Vec<_> = prompts.iter().map(|p| p.name.as_str()).collect();
        assert!(names.contains(&BusinessSummaryPrompt::NAME));
        assert!(names.contains(&AnswerQueryPrompt::NAME));
    }
}
