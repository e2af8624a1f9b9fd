//! Prompt service implementation.
//!
//! The PromptService holds the prompt templates the LLM-backed tools send to
//! the backend and renders them with arguments.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use std::collections::HashMap;
use tracing::debug;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for looking up and rendering prompts.
#[derive(Debug, Clone)]
pub struct PromptService {
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a service with every prompt from the registry.
    pub fn new() -> Self {
        let mut service = Self {
            prompts: HashMap::new(),
        };

        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register (or replace) a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// Render the named prompt.
    pub fn render(&self, name: &str, arguments: &[(&str, &str)]) -> Result<String, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments: HashMap<String, String> = arguments
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        template.render(&arguments)
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_service_creation() {
        let service = PromptService::new();
        let prompt = service.render("answer_query", &[("input", "Why?")]).unwrap();
        assert_eq!(prompt, "Answer this user query as best as you can:\n\nWhy?");
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut service = PromptService::new();
        service.register_prompt(PromptTemplate::new(
            "answer_query",
            None,
            vec![],
            "Short answer: {{input}}",
        ));
        let prompt = service.render("answer_query", &[("input", "Why?")]).unwrap();
        assert_eq!(prompt, "Short answer: Why?");
    }

    #[test]
    fn test_render_business_summary() {
        let service = PromptService::new();
        let prompt = service
            .render("business_summary", &[("text", "Q3 revenue grew 12%.")])
            .unwrap();
        assert_eq!(
            prompt,
            "Summarize this for a business user:\n\nQ3 revenue grew 12%."
        );
    }

    #[test]
    fn test_render_missing_required_argument() {
        let service = PromptService::new();
        let result = service.render("answer_query", &[]);
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[test]
    fn test_render_nonexistent_prompt() {
        let service = PromptService::new();
        let result = service.render("nonexistent", &[]);
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
