//! Shared helpers and whole-crate property checks.


use crate::style::Style;

/// Route `log` output through the test harness; `RUST_LOG=trace` shows splits and merges
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn bold() -> Style {
    Style::single("fontWeight", "bold")
}

pub fn italic() -> Style {
    Style::single("fontStyle", "italic")
}
