//! Ready-made documents for Jira comments and descriptions.

use std::fmt::Display;

use crate::builder::{doc, heading, table, table_cell, table_header, table_row, text};
use crate::node::{CellAttrs, Node};

/// A paragraph holding `value`, or an empty paragraph when `value` is empty.
///
/// Empty text nodes are invalid inside table cells, so they are never
/// emitted.
pub fn text_paragraph(value: &str) -> Node {
  let content = if value.is_empty() { Vec::new() } else { vec![text(value)] };
  Node::Paragraph { content }
}

/// A document holding a single paragraph of plain text
pub fn comment_from_text(value: &str) -> Option<Node> {
  doc(vec![text_paragraph(value)])
}

/// Build a `table` node from tabular data.
///
/// The first row holds one `tableHeader` per column; each record becomes a
/// row of `tableCell`s. Every value is rendered through [`Display`].
pub fn table_from_records<C, V>(columns: &[C], rows: &[Vec<V>]) -> Option<Node>
where
  C: Display,
  V: Display,
{
  let headers = columns
    .iter()
    .map(|column| table_header(vec![text_paragraph(&column.to_string())], CellAttrs::default()))
    .collect::<Option<Vec<_>>>()?;

  let mut table_rows = vec![table_row(headers)?];
  for record in rows {
    let cells = record
      .iter()
      .map(|value| table_cell(vec![text_paragraph(&value.to_string())], CellAttrs::default()))
      .collect::<Option<Vec<_>>>()?;
    table_rows.push(table_row(cells)?);
  }

  table(table_rows)
}

/// Layout of a comment built around a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableComment {
  pub heading: Option<String>,
  pub heading_level: u8,
  pub pre_table_text: Option<String>,
  pub post_table_text: Option<String>,
}

impl Default for TableComment {
  fn default() -> Self {
    Self {
      heading: None,
      heading_level: 1,
      pre_table_text: None,
      post_table_text: None,
    }
  }
}

impl TableComment {
  /// Assemble the document: heading, leading paragraph, `table`, trailing
  /// paragraph. Blank optional parts are skipped.
  pub fn build(&self, table: Node) -> Option<Node> {
    let mut content = Vec::new();

    if let Some(title) = non_blank(&self.heading) {
      content.push(heading(title, self.heading_level));
    }
    if let Some(pre) = non_blank(&self.pre_table_text) {
      content.push(text_paragraph(pre));
    }
    content.push(table);
    if let Some(post) = non_blank(&self.post_table_text) {
      content.push(text_paragraph(post));
    }

    doc(content)
  }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::empty::is_empty;
  use crate::node::NodeType;

  #[test]
  fn test_comment_from_text() {
    let node = comment_from_text("Deployed to staging").unwrap();

    assert_eq!(
      serde_json::to_value(&node).unwrap(),
      json!({
          "version": 1,
          "type": "doc",
          "content": [
              {"type": "paragraph", "content": [{"type": "text", "text": "Deployed to staging"}]}
          ]
      })
    );
  }

  #[test]
  fn test_empty_text_paragraph_has_no_text_node() {
    assert_eq!(text_paragraph(""), Node::Paragraph { content: vec![] });
  }

  #[test]
  fn test_table_from_records_stringifies_cells() {
    let columns = ["sprint", "points", "velocity"];
    let rows = vec![vec![14.0, 21.0, 1.5], vec![15.0, 0.0, 0.25]];

    let node = table_from_records(&columns, &rows).unwrap();
    let value = serde_json::to_value(&node).unwrap();

    assert_eq!(node.content().len(), 3);
    assert_eq!(node.content()[0].content()[0].node_type(), NodeType::TableHeader);
    assert_eq!(node.content()[1].content()[0].node_type(), NodeType::TableCell);
    assert_eq!(
      value["content"][0]["content"][1]["content"][0]["content"][0]["text"],
      json!("points")
    );
    assert_eq!(value["content"][1]["content"][0]["content"][0]["content"][0]["text"], json!("14"));
    assert_eq!(value["content"][2]["content"][2]["content"][0]["content"][0]["text"], json!("0.25"));
  }

  #[test]
  fn test_table_from_records_with_blank_values() {
    let node = table_from_records(&["a", "b"], &[vec!["", "x"]]).unwrap();

    let first_cell = &node.content()[1].content()[0];
    assert_eq!(first_cell.content()[0], Node::Paragraph { content: vec![] });
    assert!(is_empty(first_cell));
  }

  #[test]
  fn test_header_only_table() {
    let rows: Vec<Vec<String>> = Vec::new();
    let node = table_from_records(&["only"], &rows).unwrap();

    assert_eq!(node.content().len(), 1);
    assert!(!is_empty(&node));
  }

  #[test]
  fn test_table_comment_layout() {
    let table = table_from_records(&["k"], &[vec!["v"]]).unwrap();
    let layout = TableComment {
      heading: Some("Weekly report".to_string()),
      heading_level: 2,
      pre_table_text: Some("Numbers below".to_string()),
      post_table_text: Some(String::new()),
    };

    let node = layout.build(table).unwrap();
    let types: Vec<NodeType> = node.content().iter().map(Node::node_type).collect();

    assert_eq!(types, vec![NodeType::Heading, NodeType::Paragraph, NodeType::Table]);
    assert_eq!(node.content()[0].heading_level(), Some(2));
  }

  #[test]
  fn test_table_comment_defaults_to_table_only() {
    let table = table_from_records(&["k"], &[vec!["v"]]).unwrap();
    let node = TableComment::default().build(table.clone()).unwrap();

    assert_eq!(node.content(), &[table]);
  }

  #[test]
  fn test_table_comment_rejects_non_block_content() {
    assert!(TableComment::default().build(text("not a table")).is_none());
  }
}
