//! Query routing: classify a chat message and produce the reply.
//!
//! Entity lookups are answered locally from the [`EntityIndex`]; summaries,
//! compliance reviews and open questions are forwarded to the
//! [`Generator`] and its text is returned unmodified.
//!
//! [`EntityIndex`]: crate::entities::EntityIndex

use anyhow::Result;

use crate::collaborators::Generator;
use crate::intent::{normalize, Intent};
use crate::models::LoadedDocument;
use crate::prompts;

/// Maximum number of spans listed by an entity lookup.
pub const ENTITY_LOOKUP_LIMIT: usize = 10;

/// Answers `message` against `doc`.
pub async fn answer_query(
    message: &str,
    doc: &LoadedDocument,
    generator: &dyn Generator,
) -> Result<String> {
    let message = normalize(message);
    let intent = Intent::classify_normalized(&message);

    match intent {
        Intent::Summarize(length) => {
            let prompt = prompts::summary_prompt(doc.text(), length);
            generator.generate(&prompt).await
        }
        Intent::Compliance => {
            let prompt = prompts::compliance_prompt(doc.text());
            generator.generate(&prompt).await
        }
        Intent::Dates => Ok(entity_reply("Important dates", &doc.entities.dates)),
        Intent::People => Ok(entity_reply("Key people", &doc.entities.people)),
        Intent::Legal => Ok(entity_reply("Legal entities", &doc.entities.legal)),
        Intent::Question => {
            let prompt = prompts::question_prompt(doc.text(), &message);
            generator.generate(&prompt).await
        }
    }
}

fn entity_reply(heading: &str, spans: &[String]) -> String {
    let listed: Vec<&str> = spans
        .iter()
        .take(ENTITY_LOOKUP_LIMIT)
        .map(String::as_str)
        .collect();
    format!("{}: {}", heading, listed.join(", "))
}
