//! # scoreshape-core
//!
//! The document-restructuring transform for scoreshape - THE TRANSFORM.
//!
//! This crate converts flat, per-category scoring documents into the
//! normalized `scores / subjectiveCategory / score / subscore` hierarchy
//! consumed by downstream aggregation tooling.
//!
//! ## Pipeline
//!
//! Loader -> Reshaper -> Writer, one document at a time:
//! - [`loader`] parses markup into an [`InputDocument`] tree
//! - [`reshape`](reshape::reshape) classifies attributes against the
//!   reserved set and applies the `judging_station` derived-default rule
//! - [`writer`] serializes the resulting [`ScoresDocument`]
//!
//! ## Architectural Constraints
//!
//! - The reshaper is pure, total, and deterministic: no I/O, no shared
//!   state, safe to call concurrently on distinct documents
//! - Attribute order is document order end to end; no hash-ordered maps
//! - File and network I/O live behind the [`Source`]/[`Sink`] seams and
//!   are implemented by the app layer

// =============================================================================
// MODULES
// =============================================================================

pub mod diff;
pub mod loader;
pub mod reshape;
pub mod types;
pub mod writer;

// =============================================================================
// RE-EXPORTS: Document Model
// =============================================================================

pub use types::{
    Category, Element, InputDocument, Score, ScoreError, ScoresDocument, Sink, Source, Subscore,
};

// =============================================================================
// RE-EXPORTS: Pipeline Operations
// =============================================================================

pub use diff::{ScoreDifference, compare_documents};
pub use loader::{load_document, parse_document};
pub use reshape::{JUDGING_STATION, RESERVED_ATTRIBUTES, is_reserved, reshape};
pub use writer::{write_document, write_to_sink};
