//! Letter composition for the action engine.
//!
//! A letter is produced by filling a response template (appeal, dispute,
//! cancellation) with case details and handing the composed instruction to a
//! [`GenerativeModel`](crate::model::GenerativeModel). Composition itself is
//! a pure function of the template text, the case details, and the region;
//! only the generation step is fallible.

use std::collections::BTreeMap;

/// One letter generation request.
#[derive(Debug, Clone)]
pub struct LetterRequest {
    /// Raw template text with `[Placeholder]` markers.
    pub template_text: String,
    /// Case details keyed by the detail name (e.g. "Your Name").
    ///
    /// A `BTreeMap` keeps rendering deterministic for identical input.
    pub case_details: BTreeMap<String, String>,
    /// Region whose legal conventions the letter should follow.
    pub region: String,
}

impl LetterRequest {
    /// Create a request for a template and region.
    pub fn new(template_text: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            template_text: template_text.into(),
            case_details: BTreeMap::new(),
            region: region.into(),
        }
    }

    /// Add one case detail.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.case_details.insert(key.into(), value.into());
        self
    }
}

/// Compose the generation instruction for a letter request.
///
/// Deterministic: the same request always yields the same instruction text.
pub fn compose_instruction(request: &LetterRequest) -> String {
    let mut details = String::new();
    for (key, value) in &request.case_details {
        details.push_str(&format!("- {}: {}\n", key, value));
    }

    format!(
        "You are a legal assistant drafting a formal response letter.\n\
         Fill in the template below with the provided case details.\n\
         \n\
         Rules:\n\
         - The user is located in: {region}. Match the legal terminology, \
         referenced laws, and tone to that region.\n\
         - Replace placeholders (like [Name], [Date]) with the provided details.\n\
         - Rewrite any [Explanation] section so it is professional and \
         persuasive, based on the user's story.\n\
         - Keep the formatting formal.\n\
         \n\
         Template:\n\
         {template}\n\
         \n\
         Case Details:\n\
         {details}",
        region = request.region,
        template = request.template_text,
        details = details,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_includes_template_and_details() {
        let request = LetterRequest::new("Dear [Name], re citation [Citation Number].", "Ontario")
            .with_detail("Your Name", "John Doe")
            .with_detail("Citation Number", "12345678");

        let instruction = compose_instruction(&request);
        assert!(instruction.contains("Dear [Name]"));
        assert!(instruction.contains("- Your Name: John Doe"));
        assert!(instruction.contains("Ontario"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = LetterRequest::new("T", "Global")
            .with_detail("B", "2")
            .with_detail("A", "1");
        let b = LetterRequest::new("T", "Global")
            .with_detail("A", "1")
            .with_detail("B", "2");

        assert_eq!(compose_instruction(&a), compose_instruction(&b));
    }
}
