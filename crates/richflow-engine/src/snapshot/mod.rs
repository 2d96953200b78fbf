//! # Snapshot Support
//!
//! Read-only views of a [`Flow`](crate::model::Flow) for hosts and tests.
//!
//! ## Modules
//!
//! - **`normalize`**: converts a flow into a stable, serializable `Snap` with
//!   global spans for every paragraph and run, plus a compact outline rendering
//!   used by `insta` snapshot tests
//! - **`invariants`**: checks the structural guarantees every operation must
//!   leave behind (no empty runs, contiguous offsets)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{ParagraphSnap, RunSnap, Snap, normalize};
