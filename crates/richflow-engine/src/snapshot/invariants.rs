use crate::editing::resolver;
use crate::error::EditError;
use crate::model::Flow;

/// Validates the structural invariants operations must preserve.
///
/// Checks that:
/// - The flow has at least one paragraph
/// - No run has empty text, except the single placeholder run of an empty
///   paragraph (the empty-document shape)
/// - Paragraph extents tile `[0, flow.len())` with no gaps or overlaps
///
/// A paragraph without runs is accepted: delete may leave one behind.
pub fn check(flow: &Flow) -> Result<(), EditError> {
    if flow.num_children() == 0 {
        return Err(EditError::StructuralInvariant(
            "flow has no paragraphs".to_string(),
        ));
    }

    for (index, paragraph) in flow.children().iter().enumerate() {
        let placeholder = paragraph.num_children() == 1 && paragraph.len() == 0;
        if !placeholder
            && let Some(run) = paragraph.children().iter().position(|run| run.is_empty())
        {
            return Err(EditError::StructuralInvariant(format!(
                "run {run} of paragraph {index} has empty text"
            )));
        }
    }

    let mut expected_start = 0;
    for extent in resolver::paragraph_extents(flow) {
        if extent.start != expected_start {
            return Err(EditError::StructuralInvariant(format!(
                "paragraph {} starts at {} instead of {}",
                extent.index, extent.start, expected_start
            )));
        }
        expected_start = extent.end();
    }
    if expected_start != flow.len() {
        return Err(EditError::StructuralInvariant(format!(
            "paragraph extents cover {} offsets, flow length is {}",
            expected_start,
            flow.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, Run};

    #[test]
    fn test_well_formed_flow_passes() {
        let flow = Flow::from_paragraphs([Paragraph::plain("AB"), Paragraph::plain("CD")]);
        assert_eq!(check(&flow), Ok(()));
    }

    #[test]
    fn test_empty_document_placeholder_passes() {
        let flow = Flow::from_paragraphs([Paragraph::from_runs([Run::plain("")])]);
        assert_eq!(check(&flow), Ok(()));
    }

    #[test]
    fn test_empty_run_next_to_text_fails() {
        let flow = Flow::from_paragraphs([Paragraph::from_runs([Run::plain("A"), Run::plain("")])]);
        assert!(matches!(
            check(&flow),
            Err(EditError::StructuralInvariant(_))
        ));
    }

    #[test]
    fn test_flow_without_paragraphs_fails() {
        assert!(check(&Flow::new()).is_err());
    }
}
