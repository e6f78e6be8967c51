//! # CLI Command Implementations
//!
//! Batch orchestration over the core pipeline. Documents are processed
//! independently: a failure is reported with its source identifier and
//! never aborts sibling documents.

use crate::io::{derive_output_path, validate_input_path, FileSink, FileSource};
use scoreshape_core::{
    compare_documents, load_document, reshape, write_to_sink, ScoreError, ScoresDocument,
};
use std::path::{Path, PathBuf};

// =============================================================================
// RESHAPE COMMAND
// =============================================================================

/// Outcome of one document in a batch run.
struct DocumentOutcome {
    input: PathBuf,
    output: Option<PathBuf>,
    error: Option<ScoreError>,
}

/// Reshape each input document and write the normalized form.
///
/// Processes every input even when some fail; returns the first error
/// after the whole batch has run so the process exits nonzero.
pub fn cmd_reshape(
    inputs: &[PathBuf],
    out_dir: Option<&Path>,
    json: bool,
) -> Result<(), ScoreError> {
    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir).map_err(|e| ScoreError::WriteFailure {
            sink_id: dir.display().to_string(),
            detail: e.to_string(),
        })?;
    }

    let mut outcomes = Vec::with_capacity(inputs.len());
    for input in inputs {
        let outcome = match reshape_one(input, out_dir) {
            Ok(output) => {
                tracing::info!(input = %input.display(), output = %output.display(), "reshaped");
                DocumentOutcome {
                    input: input.clone(),
                    output: Some(output),
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(input = %input.display(), error = %e, "reshape failed");
                DocumentOutcome {
                    input: input.clone(),
                    output: None,
                    error: Some(e),
                }
            }
        };
        outcomes.push(outcome);
    }

    report_batch(&outcomes, json);
    finish_batch(outcomes)
}

/// Load, reshape, and write a single document.
fn reshape_one(input: &Path, out_dir: Option<&Path>) -> Result<PathBuf, ScoreError> {
    let validated = validate_input_path(input)?;
    let doc = load_document(&FileSource::new(&validated))?;
    let reshaped = reshape(&doc)?;

    let output = derive_output_path(&validated, out_dir);
    write_to_sink(&reshaped, &mut FileSink::new(&output))?;
    Ok(output)
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Parse and reshape each input without writing anything.
pub fn cmd_check(inputs: &[PathBuf], json: bool) -> Result<(), ScoreError> {
    let mut outcomes = Vec::with_capacity(inputs.len());
    for input in inputs {
        let result = check_one(input);
        let outcome = match result {
            Ok(()) => {
                tracing::info!(input = %input.display(), "ok");
                DocumentOutcome {
                    input: input.clone(),
                    output: None,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(input = %input.display(), error = %e, "check failed");
                DocumentOutcome {
                    input: input.clone(),
                    output: None,
                    error: Some(e),
                }
            }
        };
        outcomes.push(outcome);
    }

    report_batch(&outcomes, json);
    finish_batch(outcomes)
}

fn check_one(input: &Path) -> Result<(), ScoreError> {
    let validated = validate_input_path(input)?;
    let doc = load_document(&FileSource::new(&validated))?;
    reshape(&doc).map(|_| ())
}

// =============================================================================
// DIFF COMMAND
// =============================================================================

/// Load and reshape both documents, then report their differences.
pub fn cmd_diff(master: &Path, compare: &Path, json: bool) -> Result<(), ScoreError> {
    let master_doc = load_reshaped(master)?;
    let compare_doc = load_reshaped(compare)?;

    let diffs = compare_documents(&master_doc, &compare_doc)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&diffs).unwrap_or_default()
        );
        return Ok(());
    }

    if diffs.is_empty() {
        println!("Documents agree");
        return Ok(());
    }

    println!("{} difference(s):", diffs.len());
    for diff in &diffs {
        println!(
            "  [{}] team {} judge {} field '{}': master={:?} compare={:?}",
            diff.category, diff.team_number, diff.judge, diff.field, diff.master, diff.compare
        );
    }

    Ok(())
}

fn load_reshaped(path: &Path) -> Result<ScoresDocument, ScoreError> {
    let validated = validate_input_path(path)?;
    let doc = load_document(&FileSource::new(&validated))?;
    reshape(&doc)
}

// =============================================================================
// BATCH HELPERS
// =============================================================================

/// Print the per-document batch summary.
fn report_batch(outcomes: &[DocumentOutcome], json: bool) {
    if json {
        let entries: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|o| {
                serde_json::json!({
                    "input": o.input.display().to_string(),
                    "output": o.output.as_ref().map(|p| p.display().to_string()),
                    "status": if o.error.is_none() { "ok" } else { "failed" },
                    "error": o.error.as_ref().map(|e| e.to_string()),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_default()
        );
        return;
    }

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    println!(
        "Processed {} document(s), {} failed",
        outcomes.len(),
        failed
    );
    for outcome in outcomes {
        match (&outcome.output, &outcome.error) {
            (Some(output), None) => {
                println!("  ok     {} -> {}", outcome.input.display(), output.display());
            }
            (None, None) => println!("  ok     {}", outcome.input.display()),
            (_, Some(e)) => println!("  failed {} ({})", outcome.input.display(), e),
        }
    }
}

/// Surface the first failure after the whole batch has run.
fn finish_batch(outcomes: Vec<DocumentOutcome>) -> Result<(), ScoreError> {
    match outcomes.into_iter().find_map(|o| o.error) {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
