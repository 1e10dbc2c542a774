//! # ADF Marks
//!
//! Formatting marks for `text` nodes and the rules that decide which marks
//! may be combined on the same node.
//!
//! API Documentation: <https://developer.atlassian.com/cloud/jira/platform/apis/document/marks/em/>

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::node::{Attrs, Node};

/// A mark attached to a `text` node.
///
/// Attribute maps are carried as given; nothing checks them against the
/// document schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
  Code,
  Em,
  Link { attrs: Attrs },
  Strike,
  Strong,
  Subsup { attrs: Attrs },
  TextColor { attrs: Attrs },
  Underline,
}

/// The `type` tag of a [`Mark`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkType {
  Code,
  Em,
  Link,
  Strike,
  Strong,
  Subsup,
  TextColor,
  Underline,
}

impl MarkType {
  pub const fn as_str(self) -> &'static str {
    match self {
      MarkType::Code => "code",
      MarkType::Em => "em",
      MarkType::Link => "link",
      MarkType::Strike => "strike",
      MarkType::Strong => "strong",
      MarkType::Subsup => "subsup",
      MarkType::TextColor => "textColor",
      MarkType::Underline => "underline",
    }
  }

  /// Marks that cannot be created without attributes
  pub const fn requires_attrs(self) -> bool {
    matches!(self, MarkType::Link | MarkType::Subsup | MarkType::TextColor)
  }
}

impl fmt::Display for MarkType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Mark {
  pub const fn mark_type(&self) -> MarkType {
    match self {
      Mark::Code => MarkType::Code,
      Mark::Em => MarkType::Em,
      Mark::Link { .. } => MarkType::Link,
      Mark::Strike => MarkType::Strike,
      Mark::Strong => MarkType::Strong,
      Mark::Subsup { .. } => MarkType::Subsup,
      Mark::TextColor { .. } => MarkType::TextColor,
      Mark::Underline => MarkType::Underline,
    }
  }

  /// Attributes of a `link`, `subsup` or `textColor` mark
  pub fn attrs(&self) -> Option<&Attrs> {
    match self {
      Mark::Link { attrs } | Mark::Subsup { attrs } | Mark::TextColor { attrs } => Some(attrs),
      _ => None,
    }
  }

  /// `href` of a link mark
  pub fn href(&self) -> Option<&str> {
    self.attr_str(MarkType::Link, "href")
  }

  /// `type` of a subsup mark, usually `sub` or `sup`
  pub fn subsup_type(&self) -> Option<&str> {
    self.attr_str(MarkType::Subsup, "type")
  }

  /// `color` of a text color mark
  pub fn color(&self) -> Option<&str> {
    self.attr_str(MarkType::TextColor, "color")
  }

  fn attr_str(&self, mark: MarkType, key: &str) -> Option<&str> {
    if self.mark_type() != mark {
      return None;
    }
    self.attrs()?.get(key)?.as_str()
  }
}

/// Add a mark to a `text` node and return the resulting node.
///
/// The node comes back unchanged, with a warning logged, when it is not a
/// `text` node, already carries the mark, the combination is not allowed, or
/// the mark needs attributes that were not supplied. `attr_map` wins over
/// `attr_value`; a bare value is the `href` of a link, the `type` of a subsup
/// and the `color` of a text color.
pub fn apply_mark(node: Node, mark: MarkType, attr_value: Option<&str>, attr_map: Option<Map<String, Value>>) -> Node {
  match node {
    Node::Text { text, marks } => {
      let marks = with_mark(marks, mark, attr_value, attr_map);
      Node::Text { text, marks }
    }
    other => {
      warn!("Cannot add {mark} mark to {} node", other.node_type());
      other
    }
  }
}

fn with_mark(
  mut marks: Vec<Mark>,
  mark: MarkType,
  attr_value: Option<&str>,
  attr_map: Option<Map<String, Value>>,
) -> Vec<Mark> {
  let existing: Vec<MarkType> = marks.iter().map(Mark::mark_type).collect();

  if let Some(reason) = combination_conflict(&existing, mark) {
    warn!("{reason}");
    return marks;
  }

  match build_mark(mark, attr_value, attr_map) {
    Ok(new_mark) => marks.push(new_mark),
    Err(reason) => warn!("{reason}"),
  }
  marks
}

/// Explain why `mark` cannot join `existing`, if it cannot.
///
/// `code` only combines with `link`, in either order. `textColor` cannot be
/// added next to `code` or `link`, though a `link` may still be added to a
/// node that already has a color.
fn combination_conflict(existing: &[MarkType], mark: MarkType) -> Option<String> {
  if existing.contains(&mark) {
    return Some(format!("{mark} mark already in node"));
  }

  match mark {
    MarkType::TextColor if existing.iter().any(|m| matches!(m, MarkType::Code | MarkType::Link)) => {
      Some(format!("{mark} mark cannot be combined with code or link marks"))
    }
    MarkType::Code if existing.iter().any(|m| *m != MarkType::Link) => {
      Some(format!("{mark} mark can only be combined with link marks"))
    }
    _ if mark != MarkType::Link && existing.contains(&MarkType::Code) => Some(format!(
      "code mark can only be combined with link marks, not {mark} marks"
    )),
    _ => None,
  }
}

fn build_mark(mark: MarkType, attr_value: Option<&str>, attr_map: Option<Map<String, Value>>) -> Result<Mark, String> {
  let attr_map = attr_map.filter(|map| !map.is_empty());
  let attr_value = attr_value.filter(|value| !value.is_empty());

  if mark.requires_attrs() && attr_map.is_none() && attr_value.is_none() {
    return Err(format!(
      "{mark} marks need additional values provided via attr_value or attr_map"
    ));
  }

  // The map is used as given; a bare value fills the one key the mark needs
  let attrs = move |key: &str| match (attr_map, attr_value) {
    (Some(map), _) => map,
    (None, value) => {
      let mut map = Map::new();
      map.insert(key.to_string(), Value::String(value.unwrap_or_default().to_string()));
      map
    }
  };

  let built = match mark {
    MarkType::Code => Mark::Code,
    MarkType::Em => Mark::Em,
    MarkType::Strike => Mark::Strike,
    MarkType::Strong => Mark::Strong,
    MarkType::Underline => Mark::Underline,
    MarkType::Link => Mark::Link { attrs: attrs("href") },
    MarkType::Subsup => Mark::Subsup { attrs: attrs("type") },
    MarkType::TextColor => Mark::TextColor { attrs: attrs("color") },
  };

  Ok(built)
}
