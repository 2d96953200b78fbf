// Helpers shared by the integration test binaries; not every binary uses all of them.
#![allow(dead_code)]

use richflow_engine::{Flow, Paragraph, Run, Style};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One paragraph per slice entry, one unstyled run per string
pub fn flow_of(paragraphs: &[&[&str]]) -> Flow {
    let mut flow = Flow::new();
    for runs in paragraphs {
        let mut paragraph = Paragraph::new();
        for text in *runs {
            paragraph.add_child(Run::plain(*text));
        }
        flow.add_child(paragraph);
    }
    flow
}

pub fn bold() -> Style {
    Style::single("fontWeight", "bold")
}

pub fn italic() -> Style {
    Style::single("fontStyle", "italic")
}

pub fn run_text(flow: &Flow, paragraph: usize, run: usize) -> &str {
    flow.child_at(paragraph).unwrap().child_at(run).unwrap().text()
}

pub fn run_style(flow: &Flow, paragraph: usize, run: usize) -> Option<&Style> {
    flow.child_at(paragraph)
        .unwrap()
        .child_at(run)
        .unwrap()
        .compose_style()
}
