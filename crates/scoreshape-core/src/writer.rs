//! # Document Writer
//!
//! Mechanical serialization of a [`ScoresDocument`] back to XML.
//!
//! - Element and attribute order reproduced exactly as stored
//! - Standard escaping of `< > & "` in attribute values (quick-xml)
//! - 2-space indentation with an XML declaration, matching the external
//!   representation consumed by downstream aggregation tooling

use crate::types::{Score, ScoresDocument, ScoreError, Sink};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Serialized tag names of the external representation.
pub const SCORES_TAG: &str = "scores";
pub const CATEGORY_TAG: &str = "subjectiveCategory";
pub const SCORE_TAG: &str = "score";
pub const SUBSCORE_TAG: &str = "subscore";

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Serialize a document to XML text.
///
/// Pure transformation; sink I/O belongs to the caller. The result is
/// deterministic for a given document.
///
/// # Errors
/// [`ScoreError::WriteFailure`] if event assembly fails.
pub fn write_document(doc: &ScoresDocument) -> Result<String, ScoreError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write_events(doc, &mut writer).map_err(|detail| ScoreError::WriteFailure {
        sink_id: "<memory>".to_string(),
        detail,
    })?;

    String::from_utf8(writer.into_inner()).map_err(|e| ScoreError::WriteFailure {
        sink_id: "<memory>".to_string(),
        detail: e.to_string(),
    })
}

/// Serialize a document and write it through a [`Sink`].
pub fn write_to_sink<S: Sink>(doc: &ScoresDocument, sink: &mut S) -> Result<(), ScoreError> {
    let text = write_document(doc)?;
    sink.write(&text)
}

fn write_events<W: std::io::Write>(
    doc: &ScoresDocument,
    writer: &mut Writer<W>,
) -> Result<(), String> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| e.to_string())?;

    writer
        .write_event(Event::Start(BytesStart::new(SCORES_TAG)))
        .map_err(|e| e.to_string())?;

    for category in &doc.categories {
        let mut start = BytesStart::new(CATEGORY_TAG);
        start.push_attribute(("name", category.name.as_str()));

        if category.scores.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(|e| e.to_string())?;
            continue;
        }

        writer
            .write_event(Event::Start(start))
            .map_err(|e| e.to_string())?;
        for score in &category.scores {
            write_score(score, writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(CATEGORY_TAG)))
            .map_err(|e| e.to_string())?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(SCORES_TAG)))
        .map_err(|e| e.to_string())
}

fn write_score<W: std::io::Write>(score: &Score, writer: &mut Writer<W>) -> Result<(), String> {
    let mut start = BytesStart::new(SCORE_TAG);
    for (name, value) in &score.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if score.subscores.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| e.to_string());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| e.to_string())?;

    for subscore in &score.subscores {
        let mut sub = BytesStart::new(SUBSCORE_TAG);
        sub.push_attribute(("name", subscore.name.as_str()));
        sub.push_attribute(("value", subscore.value.as_str()));
        writer
            .write_event(Event::Empty(sub))
            .map_err(|e| e.to_string())?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(SCORE_TAG)))
        .map_err(|e| e.to_string())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Subscore};

    fn sample_document() -> ScoresDocument {
        ScoresDocument {
            categories: vec![Category {
                name: "Teamwork".to_string(),
                scores: vec![Score {
                    attributes: vec![
                        ("NoShow".to_string(), "false".to_string()),
                        ("division".to_string(), "A".to_string()),
                        ("judging_station".to_string(), "A".to_string()),
                    ],
                    subscores: vec![Subscore::new("courtesy", "4")],
                }],
            }],
        }
    }

    #[test]
    fn writes_expected_tags_and_attributes() {
        let xml = write_document(&sample_document()).expect("write");

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<subjectiveCategory name=\"Teamwork\">"));
        assert!(xml.contains("NoShow=\"false\""));
        assert!(xml.contains("judging_station=\"A\""));
        assert!(xml.contains("<subscore name=\"courtesy\" value=\"4\"/>"));
    }

    #[test]
    fn attribute_order_matches_storage() {
        let xml = write_document(&sample_document()).expect("write");

        let noshow = xml.find("NoShow").expect("NoShow present");
        let division = xml.find("division=").expect("division present");
        let station = xml.find("judging_station").expect("station present");
        assert!(noshow < division && division < station);
    }

    #[test]
    fn escapes_attribute_values() {
        let doc = ScoresDocument {
            categories: vec![Category {
                name: "A&B".to_string(),
                scores: Vec::new(),
            }],
        };

        let xml = write_document(&doc).expect("write");
        assert!(xml.contains("name=\"A&amp;B\""));
    }

    #[test]
    fn serialization_is_deterministic() {
        let doc = sample_document();
        assert_eq!(
            write_document(&doc).expect("first"),
            write_document(&doc).expect("second")
        );
    }

    #[test]
    fn score_without_subscores_is_self_closing() {
        let doc = ScoresDocument {
            categories: vec![Category {
                name: "Design".to_string(),
                scores: vec![Score {
                    attributes: vec![("judging_station".to_string(), String::new())],
                    subscores: Vec::new(),
                }],
            }],
        };

        let xml = write_document(&doc).expect("write");
        assert!(xml.contains("<score judging_station=\"\"/>"));
    }
}
