//! # Score Comparison
//!
//! Compare two reshaped score documents and report per-score differences.
//!
//! Used to reconcile score files collected from independent judging
//! stations: categories are matched by name, scores by their
//! (`teamNumber`, `judge`) pair, and subscores by name. Values that parse
//! as numbers on both sides are compared numerically, everything else as
//! exact strings.

use crate::types::{Score, ScoresDocument, ScoreError};
use serde::{Deserialize, Serialize};

// =============================================================================
// DIFFERENCE RECORD
// =============================================================================

/// One disagreement between the master and compare documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDifference {
    /// Category the score belongs to.
    pub category: String,
    /// The field that differs: `NoShow` or a subscore name.
    pub field: String,
    /// Team number of the score, as carried in the document.
    pub team_number: String,
    /// Judge identifier of the score.
    pub judge: String,
    /// Value on the master side, if present.
    pub master: Option<String>,
    /// Value on the compare side, if present.
    pub compare: Option<String>,
}

// =============================================================================
// COMPARISON
// =============================================================================

/// Compare two reshaped documents, master against compare.
///
/// Returns the differences found, empty when the documents agree.
///
/// # Errors
/// [`ScoreError::DocumentMismatch`] when the documents do not share a
/// structure: a master category missing from compare, differing score
/// counts, or a master score with no (`teamNumber`, `judge`) counterpart.
pub fn compare_documents(
    master: &ScoresDocument,
    compare: &ScoresDocument,
) -> Result<Vec<ScoreDifference>, ScoreError> {
    let mut diffs = Vec::new();

    for master_category in &master.categories {
        let compare_category = compare
            .categories
            .iter()
            .find(|c| c.name == master_category.name)
            .ok_or_else(|| {
                ScoreError::DocumentMismatch(format!(
                    "category '{}' missing from compare document",
                    master_category.name
                ))
            })?;

        if master_category.scores.len() != compare_category.scores.len() {
            return Err(ScoreError::DocumentMismatch(format!(
                "category '{}' has {} scores in master but {} in compare",
                master_category.name,
                master_category.scores.len(),
                compare_category.scores.len()
            )));
        }

        for master_score in &master_category.scores {
            let team = master_score.attribute("teamNumber").unwrap_or("");
            let judge = master_score.attribute("judge").unwrap_or("");

            let compare_score = compare_category
                .scores
                .iter()
                .find(|s| {
                    s.attribute("teamNumber").unwrap_or("") == team
                        && s.attribute("judge").unwrap_or("") == judge
                })
                .ok_or_else(|| {
                    ScoreError::DocumentMismatch(format!(
                        "no score for team '{}' judge '{}' in compare category '{}'",
                        team, judge, master_category.name
                    ))
                })?;

            diff_scores(
                &master_category.name,
                master_score,
                compare_score,
                &mut diffs,
            );
        }
    }

    Ok(diffs)
}

/// Collect field-level differences between two matched scores.
fn diff_scores(
    category: &str,
    master: &Score,
    compare: &Score,
    diffs: &mut Vec<ScoreDifference>,
) {
    let team = master.attribute("teamNumber").unwrap_or("").to_string();
    let judge = master.attribute("judge").unwrap_or("").to_string();

    let record = |field: &str, m: Option<&str>, c: Option<&str>| ScoreDifference {
        category: category.to_string(),
        field: field.to_string(),
        team_number: team.clone(),
        judge: judge.clone(),
        master: m.map(str::to_string),
        compare: c.map(str::to_string),
    };

    let master_noshow = master.attribute("NoShow");
    let compare_noshow = compare.attribute("NoShow");
    if master_noshow != compare_noshow {
        diffs.push(record("NoShow", master_noshow, compare_noshow));
    }

    // Subscores present in master, changed or missing in compare.
    for subscore in &master.subscores {
        let other = compare.subscore(&subscore.name);
        match other {
            None => diffs.push(record(&subscore.name, Some(&subscore.value), None)),
            Some(value) if !values_equal(&subscore.value, value) => {
                diffs.push(record(&subscore.name, Some(&subscore.value), Some(value)));
            }
            Some(_) => {}
        }
    }

    // Subscores only present in compare.
    for subscore in &compare.subscores {
        if master.subscore(&subscore.name).is_none() {
            diffs.push(record(&subscore.name, None, Some(&subscore.value)));
        }
    }
}

/// Numeric comparison when both sides parse as f64, string equality
/// otherwise. Makes "4" and "4.0" agree without inventing tolerance.
fn values_equal(a: &str, b: &str) -> bool {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}

// =============================================================================
// TESTS
// =============================================================================
