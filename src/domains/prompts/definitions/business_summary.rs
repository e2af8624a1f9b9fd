//! Business summary prompt definition.

use super::{PromptArgument, PromptDefinition};

/// Summarize arbitrary text for a business reader.
pub struct BusinessSummaryPrompt;

impl PromptDefinition for BusinessSummaryPrompt {
    const NAME: &'static str = "business_summary";
    const DESCRIPTION: &'static str = "Summarize text for a business user";

    fn template() -> &'static str {
        "Summarize this for a business user:\n\n{{text}}"
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument::required("text", "The text to summarize")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_summary_prompt_metadata() {
        assert_eq!(BusinessSummaryPrompt::NAME, "business_summary");
        assert!(
            BusinessSummaryPrompt::template().starts_with("Summarize this for a business user:")
        );

        let args = BusinessSummaryPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "text");
        assert!(args[0].required);
    }
}
