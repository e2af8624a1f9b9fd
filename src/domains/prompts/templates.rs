//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and its renderer.

use std::collections::HashMap;

use super::definitions::{PromptArgument, PromptDefinition};
use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Build a template from a [`PromptDefinition`].
    pub fn from_definition<P: PromptDefinition>() -> Self {
        Self::new(
            P::NAME,
            Some(P::DESCRIPTION.to_string()),
            P::arguments(),
            P::template(),
        )
    }

    /// Render the template with the given arguments.
    ///
    /// Placeholders are substituted in a single left-to-right pass, so
    /// argument values are inserted verbatim even when they contain `{{`.
    /// Unknown optional placeholders render as nothing.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut rendered = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let end = after_open.find("}}").ok_or_else(|| {
                PromptError::template(format!("Unclosed placeholder in '{}'", self.name))
            })?;

            let key = after_open[..end].trim();
            match arguments.get(key) {
                Some(value) => rendered.push_str(value),
                None if self.is_required(key) => {
                    return Err(PromptError::missing_argument(key));
                }
                None => {}
            }

            rest = &after_open[end + 2..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }

    fn is_required(&self, key: &str) -> bool {
        self.arguments.iter().any(|a| a.name == key && a.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");
        let result = template.render(&args(&[("name", "World")])).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_value_with_braces_is_verbatim() {
        let template = PromptTemplate::new("test", None, vec![], "Q: {{input}}");
        let result = template
            .render(&args(&[("input", "what does {{name}} mean?")]))
            .unwrap();
        assert_eq!(result, "Q: what does {{name}} mean?");
    }

    #[test]
    fn test_missing_required_argument() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![PromptArgument::required("text", "body")],
            "Summarize: {{text}}",
        );
        let err = template.render(&HashMap::new()).unwrap_err();
        assert!(matches!(err, PromptError::MissingArgument(ref a) if a == "text"));
    }

    #[test]
    fn test_missing_optional_argument_renders_empty() {
        let template = PromptTemplate::new("test", None, vec![], "Hello{{suffix}}!");
        assert_eq!(template.render(&HashMap::new()).unwrap(), "Hello!");
    }

    #[test]
    fn test_unclosed_placeholder() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name");
        assert!(matches!(
            template.render(&HashMap::new()),
            Err(PromptError::TemplateError(_))
        ));
    }
}
