//! Redaction Filter
//!
//! Literal substring scrubbing of model output before it reaches a client.
//!
//! Matching is exact. Paraphrases ("10 million dollars") or reformatted
//! figures ("$10000000") pass through untouched, so this is not a
//! data-loss-prevention mechanism.

use crate::domain::errors::DomainError;

/// The legal team salary as written in the policy prompt
pub const SENSITIVE_FIGURE: &str = "$10,000,000";

/// Replacement for every occurrence of [`SENSITIVE_FIGURE`]
pub const REDACTION_PLACEHOLDER: &str = "REDACTED";

/// Replace every literal occurrence of the legal team salary
pub fn redact(text: &str) -> String {
    text.replace(SENSITIVE_FIGURE, REDACTION_PLACEHOLDER)
}

/// Literal needle/placeholder pair
#[derive(Debug, Clone)]
pub struct RedactionFilter {
    needle: String,
    placeholder: String,
}

impl RedactionFilter {
    /// Build a filter. An empty needle would match between every character.
    pub fn new(
        needle: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let needle = needle.into();
        let placeholder = placeholder.into();

        if needle.is_empty() {
            return Err(DomainError::Validation(
                "Redaction needle must not be empty".to_string(),
            ));
        }

        Ok(Self {
            needle,
            placeholder,
        })
    }

    /// Filter for the legal team salary
    pub fn legal_salary() -> Self {
        Self {
            needle: SENSITIVE_FIGURE.to_string(),
            placeholder: REDACTION_PLACEHOLDER.to_string(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.needle, &self.placeholder)
    }
}

impl Default for RedactionFilter {
    fn default() -> Self {
        Self::legal_salary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_every_occurrence() {
        let text = "$10,000,000 and again $10,000,000!";
        let redacted = redact(text);
        assert_eq!(redacted, "REDACTED and again REDACTED!");
        assert!(!redacted.contains(SENSITIVE_FIGURE));
    }

    #[test]
    fn test_preserves_surrounding_text() {
        let text = "  The CEO legal team makes $10,000,000.\n\n\tThanks";
        assert_eq!(
            redact(text),
            "  The CEO legal team makes REDACTED.\n\n\tThanks"
        );
    }

    #[test]
    fn test_text_without_figure_unchanged() {
        let text = "Employees get 20 days of PTO. The CEO makes $5,000,000.";
        assert_eq!(redact(text), text);
        assert_eq!(redact(""), "");
    }

    #[test]
    fn test_near_misses_pass_through() {
        for text in [
            "10 million dollars",
            "$10000000",
            "10,000,000",
            "$ 10,000,000",
            "$10.000.000",
            "$10,000, 000",
        ] {
            assert_eq!(redact(text), text, "{text:?} should not be redacted");
        }
    }

    #[test]
    fn test_literal_prefix_inside_longer_figure() {
        assert_eq!(redact("$10,000,000.00"), "REDACTED.00");
    }

    #[test]
    fn test_idempotent() {
        for text in [
            "plain",
            "$10,000,000",
            "$$10,000,000,000,000",
            "REDACTED $10,000,000 REDACTED",
        ] {
            let once = redact(text);
            assert_eq!(redact(&once), once);
        }
    }

    #[test]
    fn test_overlapping_matches() {
        // "$10,000,000,000,000" holds one leftmost match; the rest is not a figure.
        assert_eq!(redact("$10,000,000,000,000"), "REDACTED,000,000");
    }

    #[test]
    fn test_filter_matches_free_function() {
        let filter = RedactionFilter::default();
        let text = "legal: $10,000,000";
        assert_eq!(filter.apply(text), redact(text));
        assert_eq!(filter.needle(), SENSITIVE_FIGURE);
    }

    #[test]
    fn test_filter_rejects_empty_needle() {
        assert!(RedactionFilter::new("", "X").is_err());

        let filter = RedactionFilter::new("secret", "[hidden]").unwrap();
        assert_eq!(filter.apply("a secret b"), "a [hidden] b");
    }
}
