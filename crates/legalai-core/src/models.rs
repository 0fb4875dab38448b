//! Core data models shared between the document store, the router, and the
//! HTTP boundary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::entities::EntityIndex;

/// A labelled span produced by an entity recognizer.
///
/// Labels follow the OntoNotes scheme used by common NER pipelines
/// (`DATE`, `PERSON`, `ORG`, `LAW`, `NORP`, ...). Only the span text and
/// its label are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// The text of an uploaded PDF.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the upload was stored on disk.
    pub path: PathBuf,
    /// Sanitized filename, as reported back to the client.
    pub filename: String,
    /// Concatenated page text. Empty when no page yielded text.
    pub text: String,
    pub size_bytes: u64,
}

/// A document together with the entities derived from its text.
///
/// Published as a single immutable value so that readers never see text
/// from one upload paired with entities from another.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: Document,
    pub entities: EntityIndex,
}

impl LoadedDocument {
    pub fn new(document: Document, entities: EntityIndex) -> Self {
        Self { document, entities }
    }

    pub fn text(&self) -> &str {
        &self.document.text
    }
}
