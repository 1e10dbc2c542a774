//! # Atlassian Document Format
//!
//! Builds and validates ADF node trees for Jira comments and descriptions,
//! and provides read-only tree helpers for splitting documents by heading and
//! deciding whether content is empty. Nothing in this crate talks to a
//! network.

mod builder;
mod compose;
mod empty;
mod error;
pub mod marks;
pub mod node;
mod split;

pub use builder::{
  check_children, doc, hard_break, heading, paragraph, table, table_cell, table_header, table_row, text,
};
pub use compose::{TableComment, comment_from_text, table_from_records, text_paragraph};
pub use empty::is_empty;
pub use error::AdfError;
pub use marks::{Mark, MarkType, apply_mark};
pub use node::{ADF_VERSION, CellAttrs, HeadingAttrs, Node, NodeType, TableAttrs};
pub use split::{DEFAULT_SPLIT_LEVEL, SplitGroup, split_by_headings};
