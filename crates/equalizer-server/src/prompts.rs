//! Instruction builders for the analysis endpoints.
//!
//! The instruction text is deliberately incidental: endpoints only depend
//! on these returning a non-empty instruction, so wording can change
//! without touching any handler.

/// Instruction for risk analysis of a document.
pub fn risk_analysis() -> String {
    "You are an expert rights advocate and legal analyst. Analyze the \
     following document (provided as text or images). Identify: \
     1. High risk clauses, 2. Hidden fees or overcharges, 3. Unfair or \
     ambiguous terms. Provide the output as a clear, simple bulleted \
     list and explain why each item is a risk in plain language."
        .to_string()
}

/// Instruction for plain-language simplification.
pub fn simplify() -> String {
    "You are a helpful interpreter. Rewrite the following document \
     (provided as text or images) in plain language a layperson can \
     understand. Remove or explain all jargon, keep sentences short, \
     keep the tone friendly and reassuring, and preserve the original \
     meaning."
        .to_string()
}

/// Instruction for translating advice into a target language.
pub fn translate(target_language: &str) -> String {
    format!(
        "You are an empathetic rights advocate. Translate the following \
         advice into {target_language}. Keep the tone helpful, clear, and \
         reassuring; explain legal terms for a layperson; do not lose the \
         meaning. Plain text only, no markdown, concise and suitable for \
         listening."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_are_non_empty() {
        assert!(!risk_analysis().is_empty());
        assert!(!simplify().is_empty());
    }

    #[test]
    fn test_translate_embeds_language() {
        assert!(translate("Spanish").contains("Spanish"));
    }
}
