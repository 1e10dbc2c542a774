//! Emptiness checks for ADF trees.

use crate::node::Node;

/// Whether a node contributes no visible content.
///
/// `hardBreak` and `rule` never count as content, while `emoji`,
/// `inlineCard`, `mention` and `media` always do. Containers are empty when
/// every child is empty, so a table holding only a header row with text is
/// not empty.
pub fn is_empty(node: &Node) -> bool {
  match node {
    Node::Emoji { .. } | Node::InlineCard { .. } | Node::Mention { .. } | Node::Media { .. } => false,
    Node::HardBreak | Node::Rule => true,
    Node::Text { text, .. } => text.is_empty(),
    Node::Heading { .. } => node.heading_text().is_empty(),
    Node::Blockquote { .. }
    | Node::BulletList { .. }
    | Node::CodeBlock { .. }
    | Node::Doc { .. }
    | Node::ListItem { .. }
    | Node::MediaGroup { .. }
    | Node::MediaSingle { .. }
    | Node::OrderedList { .. }
    | Node::Panel { .. }
    | Node::Paragraph { .. }
    | Node::Table { .. }
    | Node::TableCell { .. }
    | Node::TableHeader { .. }
    | Node::TableRow { .. } => node.content().iter().all(is_empty),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::{Map, json};

  use super::*;
  use crate::builder::{doc, hard_break, heading, paragraph, table, table_cell, table_header, table_row, text};
  use crate::node::CellAttrs;

  fn para(value: &str) -> Node {
    paragraph(vec![text(value)]).unwrap()
  }

  #[test]
  fn test_empty_doc_is_empty() {
    assert!(is_empty(&doc(vec![]).unwrap()));
  }

  #[test]
  fn test_leaf_rules() {
    assert!(is_empty(&hard_break()));
    assert!(is_empty(&Node::Rule));
    assert!(is_empty(&text("")));
    assert!(!is_empty(&text("x")));
    assert!(!is_empty(&Node::Emoji { attrs: Map::new() }));
    assert!(!is_empty(&Node::Media { attrs: Map::new() }));
    assert!(is_empty(&heading("", 1)));
    assert!(!is_empty(&heading("Title", 1)));
  }

  #[test]
  fn test_paragraph_of_breaks_is_empty() {
    let node = paragraph(vec![text(""), hard_break(), hard_break()]).unwrap();
    assert!(is_empty(&node));

    let node = paragraph(vec![hard_break(), text("content")]).unwrap();
    assert!(!is_empty(&node));
  }

  #[test]
  fn test_header_only_table_is_not_empty() {
    let headers = vec![
      table_header(vec![para("Name")], CellAttrs::default()).unwrap(),
      table_header(vec![para("Owner")], CellAttrs::default()).unwrap(),
    ];
    let node = table(vec![table_row(headers).unwrap()]).unwrap();

    assert!(!is_empty(&node));
  }

  #[test]
  fn test_table_of_blank_cells_is_empty() {
    let cells = vec![
      table_cell(vec![paragraph(vec![]).unwrap()], CellAttrs::default()).unwrap(),
      table_cell(vec![Node::Rule], CellAttrs::default()).unwrap(),
    ];
    let node = table(vec![table_row(cells).unwrap()]).unwrap();

    assert!(is_empty(&node));
  }

  #[test]
  fn test_nested_list_content() {
    let node: Node = serde_json::from_value(json!({
        "type": "doc",
        "version": 1,
        "content": [
            {
                "type": "bulletList",
                "content": [
                    {"type": "listItem", "content": [{"type": "paragraph", "content": []}]},
                    {"type": "listItem", "content": [
                        {"type": "paragraph", "content": [{"type": "mention", "attrs": {"id": "1"}}]}
                    ]}
                ]
            }
        ]
    }))
    .unwrap();

    assert!(!is_empty(&node));
  }
}
