//! Keyword intent classification.
//!
//! A chat message is normalized (trimmed, lowercased) and matched against
//! an ordered rule table. The first rule with any trigger contained in the
//! message wins; intents never combine. A message mentioning both
//! "summarize" and "compliance" is a summary request.
//!
//! | Priority | Triggers | Intent |
//! |----------|----------|--------|
//! | 1 | `summarize` | [`Intent::Summarize`] |
//! | 2 | `compliance` | [`Intent::Compliance`] |
//! | 3 | `date` | [`Intent::Dates`] |
//! | 4 | `people`, `person` | [`Intent::People`] |
//! | 5 | `legal` | [`Intent::Legal`] |
//! | — | anything else | [`Intent::Question`] |

/// Target length of a generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLength {
    Small,
    Medium,
    Large,
}

impl SummaryLength {
    /// Approximate word count requested from the model.
    pub fn word_target(self) -> usize {
        match self {
            SummaryLength::Small => 50,
            SummaryLength::Medium => 150,
            SummaryLength::Large => 300,
        }
    }

    /// "small" is checked before "large"; neither means medium.
    fn from_normalized(message: &str) -> Self {
        if message.contains("small") {
            SummaryLength::Small
        } else if message.contains("large") {
            SummaryLength::Large
        } else {
            SummaryLength::Medium
        }
    }
}

/// What a chat message asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Summarize(SummaryLength),
    Compliance,
    Dates,
    People,
    Legal,
    /// Open question answered from the document text.
    Question,
}

struct Rule {
    triggers: &'static [&'static str],
    build: fn(&str) -> Intent,
}

const RULES: &[Rule] = &[
    Rule {
        triggers: &["summarize"],
        build: |m| Intent::Summarize(SummaryLength::from_normalized(m)),
    },
    Rule {
        triggers: &["compliance"],
        build: |_| Intent::Compliance,
    },
    Rule {
        triggers: &["date"],
        build: |_| Intent::Dates,
    },
    Rule {
        triggers: &["people", "person"],
        build: |_| Intent::People,
    },
    Rule {
        triggers: &["legal"],
        build: |_| Intent::Legal,
    },
];

/// Trims and lowercases a raw chat message.
pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

impl Intent {
    /// Classifies a raw chat message.
    pub fn classify(message: &str) -> Self {
        Self::classify_normalized(&normalize(message))
    }

    /// Classifies a message that has already been through [`normalize`].
    pub fn classify_normalized(message: &str) -> Self {
        RULES
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| message.contains(t)))
            .map(|rule| (rule.build)(message))
            .unwrap_or(Intent::Question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lengths() {
        assert_eq!(
            Intent::classify("Summarize this, small please"),
            Intent::Summarize(SummaryLength::Small)
        );
        assert_eq!(
            Intent::classify("summarize LARGE"),
            Intent::Summarize(SummaryLength::Large)
        );
        assert_eq!(
            Intent::classify("  summarize  "),
            Intent::Summarize(SummaryLength::Medium)
        );
    }

    #[test]
    fn test_small_beats_large() {
        assert_eq!(
            Intent::classify("summarize small or large"),
            Intent::Summarize(SummaryLength::Small)
        );
    }

    #[test]
    fn test_summarize_outranks_everything() {
        assert_eq!(
            Intent::classify("summarize small the compliance dates of legal people"),
            Intent::Summarize(SummaryLength::Small)
        );
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(Intent::classify("compliance dates"), Intent::Compliance);
        assert_eq!(Intent::classify("legal dates"), Intent::Dates);
        assert_eq!(Intent::classify("legal person"), Intent::People);
        assert_eq!(Intent::classify("Who are the PEOPLE?"), Intent::People);
        assert_eq!(Intent::classify("legal terms"), Intent::Legal);
    }

    #[test]
    fn test_substring_matching() {
        // "update" contains "date"
        assert_eq!(Intent::classify("any update?"), Intent::Dates);
        // "personal" contains "person"
        assert_eq!(Intent::classify("personal data"), Intent::People);
    }

    #[test]
    fn test_fallback_is_question() {
        assert_eq!(
            Intent::classify("What is the governing law?"),
            Intent::Question
        );
        assert_eq!(Intent::classify(""), Intent::Question);
    }

    #[test]
    fn test_word_targets() {
        assert_eq!(SummaryLength::Small.word_target(), 50);
        assert_eq!(SummaryLength::Medium.word_target(), 150);
        assert_eq!(SummaryLength::Large.word_target(), 300);
    }
}
