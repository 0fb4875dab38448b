//! Prompt templates sent to the generative model.
//!
//! Summary and compliance prompts carry the first
//! [`SUMMARY_EXCERPT_CHARS`] characters of the document; open questions
//! carry the first [`QUESTION_EXCERPT_CHARS`]. There is no chunking or
//! retrieval over longer documents.

use crate::intent::SummaryLength;

pub const SUMMARY_EXCERPT_CHARS: usize = 10_000;
pub const QUESTION_EXCERPT_CHARS: usize = 5_000;

/// Returns the first `max_chars` characters of `text`.
///
/// Counts `char`s, so multi-byte characters are never split.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

pub fn summary_prompt(text: &str, length: SummaryLength) -> String {
    format!(
        "Below is a document. Please summarize it in approximately {} words. \
         Use only the information provided in the document. Do not add any external knowledge.\n\n\
         Document:\n\n{}\n\nSummary:",
        length.word_target(),
        excerpt(text, SUMMARY_EXCERPT_CHARS)
    )
}

pub fn compliance_prompt(text: &str) -> String {
    format!(
        "Review the following document for compliance issues (e.g., legal terms, sensitive data). \
         Use only the information provided in the document. Do not add any external knowledge.\n\n\
         Document:\n\n{}\n\nFindings:",
        excerpt(text, SUMMARY_EXCERPT_CHARS)
    )
}

/// `question` is embedded as given; callers pass the normalized message.
pub fn question_prompt(text: &str, question: &str) -> String {
    format!(
        "You are a helpful assistant. Your knowledge is strictly limited to the following document. \
         Do not use any external knowledge. If the answer is not in the document, say 'I don't know'.\n\n\
         Document:\n\n{}\n\nUser asks: {}\n\nAnswer:",
        excerpt(text, QUESTION_EXCERPT_CHARS),
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_shorter_than_limit() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("", 10), "");
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let text = "§§§§§";
        assert_eq!(excerpt(text, 3), "§§§");
        assert_eq!(excerpt(text, 5), text);
    }

    #[test]
    fn test_summary_prompt_embeds_target_and_truncates() {
        let text = "a".repeat(SUMMARY_EXCERPT_CHARS + 500);
        let prompt = summary_prompt(&text, SummaryLength::Small);
        assert!(prompt.contains("approximately 50 words"));
        assert!(prompt.contains(&"a".repeat(SUMMARY_EXCERPT_CHARS)));
        assert!(!prompt.contains(&"a".repeat(SUMMARY_EXCERPT_CHARS + 1)));
        assert!(prompt.ends_with("Summary:"));
    }

    #[test]
    fn test_compliance_prompt() {
        let prompt = compliance_prompt("The tenant shall pay rent.");
        assert!(prompt.starts_with("Review the following document for compliance issues"));
        assert!(prompt.contains("The tenant shall pay rent."));
        assert!(prompt.ends_with("Findings:"));
    }

    #[test]
    fn test_question_prompt_uses_shorter_excerpt() {
        let text = "b".repeat(QUESTION_EXCERPT_CHARS * 2);
        let prompt = question_prompt(&text, "who signed?");
        assert!(prompt.contains(&"b".repeat(QUESTION_EXCERPT_CHARS)));
        assert!(!prompt.contains(&"b".repeat(QUESTION_EXCERPT_CHARS + 1)));
        assert!(prompt.contains("say 'I don't know'"));
        assert!(prompt.contains("User asks: who signed?\n\nAnswer:"));
    }
}
