//! # ADF Node Builders
//!
//! Constructors for the node types this crate validates. Builders that take
//! children check them against the parent's allow-list; on a mismatch they
//! log the rejected types and return `None` instead of an invalid node.

use tracing::error;

use crate::error::AdfError;
use crate::node::{ADF_VERSION, CellAttrs, HeadingAttrs, Node, NodeType, TableAttrs};

/// Check every immediate child of a would-be `parent` node against its
/// allow-list, reporting the rejected child types in order.
pub fn check_children(parent: NodeType, children: &[Node]) -> Result<(), AdfError> {
  let rejected: Vec<NodeType> = children
    .iter()
    .map(Node::node_type)
    .filter(|child| !parent.accepts(*child))
    .collect();

  if rejected.is_empty() {
    Ok(())
  } else {
    Err(AdfError::InvalidChildren { parent, rejected })
  }
}

fn validated(parent: NodeType, content: Vec<Node>, build: impl FnOnce(Vec<Node>) -> Node) -> Option<Node> {
  match check_children(parent, &content) {
    Ok(()) => Some(build(content)),
    Err(err) => {
      error!("{err}");
      None
    }
  }
}

/// A `doc` node holding top-level blocks
///
/// API Documentation: <https://developer.atlassian.com/cloud/jira/platform/apis/document/nodes/doc/>
pub fn doc(content: Vec<Node>) -> Option<Node> {
  validated(NodeType::Doc, content, |content| Node::Doc {
    version: ADF_VERSION,
    content,
  })
}

/// A `heading` node with a single text child. The level is not range-checked.
pub fn heading(text: &str, level: u8) -> Node {
  Node::Heading {
    attrs: HeadingAttrs { level },
    content: vec![self::text(text)],
  }
}

/// A `paragraph` node holding inline content
pub fn paragraph(content: Vec<Node>) -> Option<Node> {
  validated(NodeType::Paragraph, content, |content| Node::Paragraph { content })
}

pub fn text(value: &str) -> Node {
  Node::Text {
    text: value.to_string(),
    marks: Vec::new(),
  }
}

pub const fn hard_break() -> Node {
  Node::HardBreak
}

/// A `table` node holding `tableRow` children
pub fn table(rows: Vec<Node>) -> Option<Node> {
  validated(NodeType::Table, rows, |content| Node::Table {
    attrs: TableAttrs::default(),
    content,
  })
}

/// A `tableRow` node holding `tableHeader` and `tableCell` children
pub fn table_row(cells: Vec<Node>) -> Option<Node> {
  validated(NodeType::TableRow, cells, |content| Node::TableRow { content })
}

pub fn table_header(content: Vec<Node>, attrs: CellAttrs) -> Option<Node> {
  validated(NodeType::TableHeader, content, |content| Node::TableHeader { attrs, content })
}

pub fn table_cell(content: Vec<Node>, attrs: CellAttrs) -> Option<Node> {
  validated(NodeType::TableCell, content, |content| Node::TableCell { attrs, content })
}
