// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use richflow_engine::{Flow, Paragraph, Run, Style};

#[allow(dead_code)]
pub fn generate_flow(paragraphs: usize, runs_per_paragraph: usize) -> Flow {
    let mut flow = Flow::new();
    for p in 0..paragraphs {
        let mut paragraph = Paragraph::new();
        for r in 0..runs_per_paragraph {
            let text = format!("Paragraph {p} run {r} with some words. ");
            if r % 3 == 0 {
                paragraph.add_child(Run::styled(text, Style::single("fontWeight", "bold")));
            } else {
                paragraph.add_child(Run::plain(text));
            }
        }
        flow.add_child(paragraph);
    }
    flow
}

#[allow(dead_code)]
pub fn generate_large_flow() -> Flow {
    generate_flow(500, 8)
}
