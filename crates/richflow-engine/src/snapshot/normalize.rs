use std::fmt;

use serde::Serialize;

use crate::editing::resolver;
use crate::model::Flow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snap {
    pub paragraphs: Vec<ParagraphSnap>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphSnap {
    /// Global span of the paragraph text, terminator excluded
    pub span: (usize, usize),
    pub style: Option<String>,
    pub runs: Vec<RunSnap>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSnap {
    pub span: (usize, usize),
    pub text: String,
    pub style: Option<String>,
}

pub fn normalize(flow: &Flow) -> Snap {
    let paragraphs = resolver::paragraph_extents(flow)
        .zip(flow.children())
        .map(|(extent, paragraph)| {
            let mut run_start = extent.start;
            let runs = paragraph
                .children()
                .iter()
                .map(|run| {
                    let span = (run_start, run_start + run.len());
                    run_start = span.1;
                    RunSnap {
                        span,
                        text: run.text().to_string(),
                        style: run.compose_style().map(ToString::to_string),
                    }
                })
                .collect();

            ParagraphSnap {
                span: (extent.start, extent.terminator()),
                style: paragraph.compose_style().map(ToString::to_string),
                runs,
            }
        })
        .collect();

    Snap { paragraphs }
}

/// One line per paragraph, one indented line per run:
///
/// ```text
/// paragraph [0, 3) {textAlign: left}
///   run [0, 2) "AB"
///   run [2, 3) "C" {fontWeight: bold}
/// ```
impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "paragraph [{}, {})", paragraph.span.0, paragraph.span.1)?;
            if let Some(style) = &paragraph.style {
                write!(f, " {style}")?;
            }
            for run in &paragraph.runs {
                write!(f, "\n  run [{}, {}) {:?}", run.span.0, run.span.1, run.text)?;
                if let Some(style) = &run.style {
                    write!(f, " {style}")?;
                }
            }
        }
        Ok(())
    }
}
