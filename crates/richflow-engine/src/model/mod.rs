//! Document tree: [`Flow`] → [`Paragraph`] → [`Run`].
//!
//! Ownership is purely structural. The flow owns its paragraphs and each
//! paragraph owns its runs through an ordered `Vec`; splitting a run replaces
//! one entry with up to three, merging paragraphs moves the donor's runs and
//! drops the donor. Nothing outside the tree holds references to nodes, so a
//! node removed from its parent is simply gone.

pub mod flow;
pub mod paragraph;
pub mod run;

pub use flow::Flow;
pub use paragraph::Paragraph;
pub use run::Run;
