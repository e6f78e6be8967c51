//! # Core Type Definitions
//!
//! This module contains the document model and error types for the
//! scoreshape transform:
//! - Input tree representation (`Element`, `InputDocument`)
//! - Output model (`ScoresDocument`, `Category`, `Score`, `Subscore`)
//! - Error taxonomy (`ScoreError`)
//! - The `Source`/`Sink` capability traits
//!
//! ## Ordering Guarantees
//!
//! Attributes and children are stored in insertion (document) order.
//! `Vec<(String, String)>` is used instead of a hash map so that the
//! order-preservation invariants of the reshaper hold by construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// INPUT TREE
// =============================================================================

/// A named node in a parsed document tree.
///
/// Attribute names are unique within an element; both attributes and
/// children preserve document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag identifier.
    pub name: String,
    /// Ordered attribute name/value pairs.
    pub attributes: Vec<(String, String)>,
    /// Ordered child elements. Non-element nodes never appear here.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with the given tag name and no content.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by exact, case-sensitive name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append an attribute, replacing any existing value for the same name.
    ///
    /// Replacement keeps the original position so attribute order stays
    /// stable under repeated sets.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }
}

/// A parsed input document: a single optional root element.
///
/// The loader always produces a rooted document; the root is optional so
/// that the reshaper's `MissingRoot` failure path is represented in the
/// type rather than assumed away.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputDocument {
    /// The root element, if any.
    pub root: Option<Element>,
}

impl InputDocument {
    /// Create a document from a root element.
    #[must_use]
    pub fn with_root(root: Element) -> Self {
        Self { root: Some(root) }
    }

    /// Create a document with no root element.
    #[must_use]
    pub fn empty() -> Self {
        Self { root: None }
    }
}

// =============================================================================
// OUTPUT MODEL
// =============================================================================

/// The reshaped output document. Serialized root tag is `scores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoresDocument {
    /// Categories in input document order.
    pub categories: Vec<Category>,
}

/// A named grouping of score records. Serialized tag `subjectiveCategory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Source category tag name.
    pub name: String,
    /// Scores in input document order.
    pub scores: Vec<Score>,
}

/// One judged entity's reshaped record. Serialized tag `score`.
///
/// Carries the reserved structural attributes (in input order, plus the
/// derived `judging_station`) and the extracted subscores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Score {
    /// Structural attributes, insertion-ordered.
    pub attributes: Vec<(String, String)>,
    /// Extracted free-form fields, in input attribute order.
    pub subscores: Vec<Subscore>,
}

impl Score {
    /// Look up a structural attribute by exact name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a subscore value by name.
    #[must_use]
    pub fn subscore(&self, name: &str) -> Option<&str> {
        self.subscores
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.as_str())
    }
}

/// A single named field extracted from a non-reserved attribute.
/// Serialized tag `subscore` with `name`/`value` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscore {
    pub name: String,
    pub value: String,
}

impl Subscore {
    /// Create a subscore from a name/value pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// CAPABILITY TRAITS
// =============================================================================

/// A readable document source.
///
/// # Extension Point
///
/// The core never opens files or sockets itself. Callers supply a
/// `Source` (file, buffer, test fixture) and the core reports failures
/// with the source's identifier attached.
pub trait Source {
    /// Identifier used in error context (typically a path).
    fn id(&self) -> &str;

    /// Read the entire document text.
    fn read(&self) -> Result<String, ScoreError>;
}

/// A writable document sink.
pub trait Sink {
    /// Identifier used in error context (typically a path).
    fn id(&self) -> &str;

    /// Write the serialized document text.
    fn write(&mut self, text: &str) -> Result<(), ScoreError>;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by the scoreshape pipeline.
///
/// Each per-document failure carries enough context to identify the
/// offending input. None of these are retried; a document that fails is
/// reported and its siblings continue.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The input markup could not be parsed.
    #[error("malformed document '{source_id}': {detail}")]
    MalformedDocument { source_id: String, detail: String },

    /// The input parsed but contains no root element.
    #[error("empty document '{source_id}': no root element")]
    EmptyDocument { source_id: String },

    /// The in-memory document handed to the reshaper has no root.
    #[error("document has no root element")]
    MissingRoot,

    /// A source could not be read.
    #[error("read failure '{source_id}': {detail}")]
    ReadFailure { source_id: String, detail: String },

    /// A sink could not be written.
    #[error("write failure '{sink_id}': {detail}")]
    WriteFailure { sink_id: String, detail: String },

    /// Two documents handed to the comparator do not share a structure.
    #[error("document mismatch: {0}")]
    DocumentMismatch(String),
}

// =============================================================================
// TESTS
// =============================================================================
