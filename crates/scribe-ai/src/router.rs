//! Output router: decides what a finished completion does to the document.
//!
//! Text modes splice the completion over the selection; `chart` parses it
//! as relaxed JSON and inserts a chart node. The selection is read at
//! routing time, since the user may have moved it while the response
//! streamed.

use serde_json::Value;
use tracing::{debug, warn};

use crate::document::{Document, Node, Selection};
use crate::mode::Mode;
use crate::relaxed_json;
use crate::AiError;

/// What routing did to the document.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// No mode selected; the document was not touched.
    Skipped,
    /// `range` was replaced by the completion text.
    Spliced { range: Selection },
    /// A chart node carrying `data` was inserted.
    ChartInserted { data: Value },
}

/// Route a fully drained completion into `doc`.
///
/// On error the document is left exactly as it was.
pub fn route(
    mode: Option<Mode>,
    output: &str,
    doc: &mut dyn Document,
) -> Result<RouteOutcome, AiError> {
    let Some(mode) = mode else {
        return Ok(RouteOutcome::Skipped);
    };

    if !mode.is_chart() {
        let range = doc.selection();
        doc.replace_range(range, output);
        debug!(option = %mode, from = range.from, to = range.to, "spliced completion");
        return Ok(RouteOutcome::Spliced { range });
    }

    let data = relaxed_json::parse_output(output).map_err(|e| {
        warn!(error = %e, "chart payload did not parse");
        AiError::ChartParse(e.to_string())
    })?;
    doc.insert_node(Node::Chart { data: data.clone() });
    debug!("inserted chart node");
    Ok(RouteOutcome::ChartInserted { data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;
    use serde_json::json;

    #[test]
    fn no_mode_is_a_no_op() {
        let mut doc = TextDocument::new("untouched").with_selection(0, 9);
        let outcome = route(None, "replacement", &mut doc).unwrap();
        assert_eq!(outcome, RouteOutcome::Skipped);
        assert_eq!(doc.text(), "untouched");
    }

    #[test]
    fn text_modes_replace_selection_verbatim() {
        for mode in [Mode::Fix, Mode::Improve, Mode::Zap, Mode::Continue] {
            let mut doc = TextDocument::new("Teh cat sat. More.").with_selection(0, 12);
            let outcome = route(Some(mode), "The the cat sat.", &mut doc).unwrap();

            assert_eq!(
                outcome,
                RouteOutcome::Spliced {
                    range: Selection::new(0, 12)
                }
            );
            assert_eq!(doc.text(), "The the cat sat. More.");
            assert_eq!(doc.slice(Selection::new(0, 16)), "The the cat sat.");
            assert!(doc.nodes().is_empty());
        }
    }

    #[test]
    fn text_mode_does_not_interpret_json() {
        let mut doc = TextDocument::new("");
        route(Some(Mode::Fix), "{a: 1}", &mut doc).unwrap();
        assert_eq!(doc.text(), "{a: 1}");
        assert!(doc.nodes().is_empty());
    }

    #[test]
    fn chart_inserts_parsed_payload() {
        let mut doc = TextDocument::new("Sales").with_selection(5, 5);
        let raw = "```javascript\n{value: 10, label: 'A'}\n```";
        let outcome = route(Some(Mode::Chart), raw, &mut doc).unwrap();

        let expected = json!({"value": 10, "label": "A"});
        assert_eq!(
            outcome,
            RouteOutcome::ChartInserted {
                data: expected.clone()
            }
        );
        assert_eq!(doc.nodes().len(), 1);
        assert_eq!(doc.nodes()[0].node, Node::Chart { data: expected });
        assert_eq!(doc.text(), "Sales");
    }

    #[test]
    fn chart_parse_failure_leaves_document_unchanged() {
        let mut doc = TextDocument::new("Quarterly numbers").with_selection(0, 9);
        let err = route(Some(Mode::Chart), "not json at all", &mut doc).unwrap_err();

        assert!(matches!(err, AiError::ChartParse(_)));
        assert_eq!(err.user_message(), crate::CHART_FAILURE_MESSAGE);
        assert_eq!(doc.text(), "Quarterly numbers");
        assert_eq!(doc.selection(), Selection::new(0, 9));
        assert!(doc.nodes().is_empty());
    }
}
