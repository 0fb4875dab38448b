//! # LegalAI Core
//!
//! Runtime-free logic for LegalAI: document models, entity bucketing,
//! intent classification, prompt templates, collaborator traits, and the
//! query router that ties them together.
//!
//! This crate contains no tokio, HTTP, PDF or filesystem dependencies. The
//! NER pipeline and the generative model are reached only through the
//! [`collaborators`] traits, which the `legalai` crate implements.

pub mod collaborators;
pub mod entities;
pub mod intent;
pub mod models;
pub mod prompts;
pub mod router;

pub use collaborators::{EntityRecognizer, Generator};
pub use entities::EntityIndex;
pub use intent::{Intent, SummaryLength};
pub use models::{Document, EntitySpan, LoadedDocument};
pub use router::answer_query;
