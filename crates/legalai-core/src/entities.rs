//! Entity buckets derived from recognizer output.
//!
//! Recognizer labels are folded into four fixed categories:
//!
//! | Bucket | Labels |
//! |--------|--------|
//! | `dates` | `DATE` |
//! | `people` | `PERSON` |
//! | `orgs` | `ORG` |
//! | `legal` | `LAW`, `NORP` |
//!
//! Spans keep extraction order and duplicates. Every other label is dropped.

use serde::Serialize;

use crate::models::EntitySpan;

/// Entity category a recognizer label is folded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityBucket {
    Dates,
    People,
    Orgs,
    Legal,
}

impl EntityBucket {
    /// Maps a recognizer label to its bucket, if it has one.
    pub fn for_label(label: &str) -> Option<Self> {
        match label {
            "DATE" => Some(Self::Dates),
            "PERSON" => Some(Self::People),
            "ORG" => Some(Self::Orgs),
            "LAW" | "NORP" => Some(Self::Legal),
            _ => None,
        }
    }
}

/// Categorized entity spans for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityIndex {
    pub dates: Vec<String>,
    pub people: Vec<String>,
    pub orgs: Vec<String>,
    pub legal: Vec<String>,
}

impl EntityIndex {
    /// Builds an index from recognizer spans in the order given.
    pub fn from_spans<I>(spans: I) -> Self
    where
        I: IntoIterator<Item = EntitySpan>,
    {
        let mut index = Self::default();
        for span in spans {
            if let Some(bucket) = EntityBucket::for_label(&span.label) {
                index.bucket_mut(bucket).push(span.text);
            }
        }
        index
    }

    pub fn bucket(&self, bucket: EntityBucket) -> &[String] {
        match bucket {
            EntityBucket::Dates => &self.dates,
            EntityBucket::People => &self.people,
            EntityBucket::Orgs => &self.orgs,
            EntityBucket::Legal => &self.legal,
        }
    }

    fn bucket_mut(&mut self, bucket: EntityBucket) -> &mut Vec<String> {
        match bucket {
            EntityBucket::Dates => &mut self.dates,
            EntityBucket::People => &mut self.people,
            EntityBucket::Orgs => &mut self.orgs,
            EntityBucket::Legal => &mut self.legal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
            && self.people.is_empty()
            && self.orgs.is_empty()
            && self.legal.is_empty()
    }
}
