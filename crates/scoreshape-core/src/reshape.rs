//! # Score Reshaper
//!
//! The reshaping transform: flat, per-category score elements become the
//! normalized `scores / subjectiveCategory / score / subscore` hierarchy.
//!
//! - Pure and deterministic: borrows the input tree, builds owned output,
//!   never mutates the input
//! - Total per element: every attribute lands in exactly one of the two
//!   buckets (structural attribute or subscore)
//! - The only failure is a missing root

use crate::types::{Category, InputDocument, Score, ScoresDocument, ScoreError, Subscore};

// =============================================================================
// RESERVED ATTRIBUTES
// =============================================================================

/// Attribute names treated as structural identifiers rather than scored
/// fields. Matching is exact and case-sensitive.
pub const RESERVED_ATTRIBUTES: &[&str] = &[
    "NoShow",
    "division",
    "teamNumber",
    "judge",
    "organization",
    "teamName",
];

/// The derived grouping attribute. Never copied from the input; filled
/// from `division` when absent after classification.
pub const JUDGING_STATION: &str = "judging_station";

/// The attribute a missing judging station is derived from.
pub const DIVISION: &str = "division";

/// Check whether an attribute name belongs to the reserved set.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_ATTRIBUTES.contains(&name)
}

// =============================================================================
// RESHAPE
// =============================================================================

/// Reshape a parsed input document into the normalized output model.
///
/// Root children become categories named by their tag; their children
/// become scores. Each score attribute is classified in input order:
/// reserved names are copied verbatim, everything else becomes a
/// subscore. Afterwards a score without a `judging_station` attribute
/// gets one derived from its `division` value (empty string when
/// `division` is itself absent).
///
/// # Errors
/// [`ScoreError::MissingRoot`] when the document has no root element.
/// No partial output is produced.
pub fn reshape(doc: &InputDocument) -> Result<ScoresDocument, ScoreError> {
    let root = doc.root.as_ref().ok_or(ScoreError::MissingRoot)?;

    let mut categories = Vec::with_capacity(root.children.len());
    for category_element in &root.children {
        let mut scores = Vec::with_capacity(category_element.children.len());
        for raw_score in &category_element.children {
            scores.push(reshape_score(&raw_score.attributes));
        }
        categories.push(Category {
            name: category_element.name.clone(),
            scores,
        });
    }

    Ok(ScoresDocument { categories })
}

/// Classify one raw score element's attributes into a [`Score`].
fn reshape_score(attributes: &[(String, String)]) -> Score {
    let mut score = Score::default();

    for (name, value) in attributes {
        if is_reserved(name) {
            score.attributes.push((name.clone(), value.clone()));
        } else {
            score.subscores.push(Subscore::new(name, value));
        }
    }

    // Conditional fill: only when judging_station is absent. Real inputs
    // never carry it, but a future caller constructing scores directly may.
    if score.attribute(JUDGING_STATION).is_none() {
        let station = score.attribute(DIVISION).unwrap_or("").to_string();
        score.attributes.push((JUDGING_STATION.to_string(), station));
    }

    score
}

// =============================================================================
// TESTS
// =============================================================================
