//! Splitting documents into sections by heading level.

use serde::Serialize;
use tracing::debug;

use crate::node::Node;

/// Heading level at which [`split_by_headings`] splits when callers have no
/// preference
pub const DEFAULT_SPLIT_LEVEL: u8 = 1;

/// A section of a document produced by [`split_by_headings`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SplitGroup {
  pub heading: Option<Node>,
  pub heading_text: String,
  pub content: Vec<Node>,
}

impl SplitGroup {
  fn is_blank(&self) -> bool {
    self.heading.is_none() && self.content.is_empty()
  }
}

/// Split a document's top-level content into sections.
///
/// Heading levels compare numerically: a heading whose level is at most
/// `smallest_heading_level` starts a new section, so with a threshold of 3
/// levels 1 through 3 split and levels 4 through 6 stay as content. Content
/// before the first splitting heading lands in a section without a heading.
/// A document without content yields no sections.
pub fn split_by_headings(document: &Node, smallest_heading_level: u8) -> Vec<SplitGroup> {
  let content = document.content();
  if content.is_empty() {
    return Vec::new();
  }

  let mut groups = Vec::new();
  let mut current = SplitGroup::default();

  for node in content {
    match node.heading_level() {
      Some(level) if level <= smallest_heading_level => {
        if !current.is_blank() {
          debug!("Closing section '{}'", current.heading_text);
          groups.push(std::mem::take(&mut current));
        }
        current.heading_text = node.heading_text().to_string();
        current.heading = Some(node.clone());
      }
      _ => current.content.push(node.clone()),
    }
  }

  groups.push(current);
  groups
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::builder::{doc, heading, paragraph, text};

  fn para(value: &str) -> Node {
    paragraph(vec![text(value)]).unwrap()
  }

  #[test]
  fn test_empty_document_yields_no_groups() {
    let document = doc(vec![]).unwrap();
    assert!(split_by_headings(&document, DEFAULT_SPLIT_LEVEL).is_empty());
  }

  #[test]
  fn test_document_without_qualifying_heading() {
    let document = doc(vec![para("one"), heading("Minor", 3), para("two")]).unwrap();

    let groups = split_by_headings(&document, 2);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].heading, None);
    assert_eq!(groups[0].heading_text, "");
    assert_eq!(groups[0].content, document.content().to_vec());
  }

  #[test]
  fn test_split_at_top_level_headings_only() {
    let document = doc(vec![
      heading("First", 1),
      para("a"),
      heading("Sub", 2),
      para("b"),
      heading("Second", 1),
      para("c"),
    ])
    .unwrap();

    let groups = split_by_headings(&document, 1);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].heading, Some(heading("First", 1)));
    assert_eq!(groups[0].heading_text, "First");
    assert_eq!(groups[0].content, vec![para("a"), heading("Sub", 2), para("b")]);
    assert_eq!(groups[1].heading_text, "Second");
    assert_eq!(groups[1].content, vec![para("c")]);
  }

  #[test]
  fn test_leading_content_gets_its_own_group() {
    let document = doc(vec![para("intro"), heading("Body", 1), para("text")]).unwrap();

    let groups = split_by_headings(&document, 1);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].heading, None);
    assert_eq!(groups[0].content, vec![para("intro")]);
    assert_eq!(groups[1].heading_text, "Body");
  }

  #[test]
  fn test_trailing_heading_is_flushed() {
    let document = doc(vec![heading("A", 1), para("a"), heading("B", 1)]).unwrap();

    let groups = split_by_headings(&document, 1);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].heading_text, "B");
    assert!(groups[1].content.is_empty());
  }

  #[test]
  fn test_higher_threshold_splits_on_more_levels() {
    let document = doc(vec![heading("A", 1), heading("B", 2), heading("C", 3), para("c")]).unwrap();

    let groups = split_by_headings(&document, 2);

    let titles: Vec<&str> = groups.iter().map(|g| g.heading_text.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
    assert_eq!(groups[1].content, vec![heading("C", 3), para("c")]);
  }
}
