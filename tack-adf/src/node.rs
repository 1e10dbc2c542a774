//! # ADF Node Model
//!
//! Typed representation of Atlassian Document Format nodes. Every node type
//! is a variant of [`Node`], serialized with the `type` tag and the `attrs`,
//! `content`, `text` and `marks` keys used by the public ADF schema.
//!
//! API Documentation: <https://developer.atlassian.com/cloud/jira/platform/apis/document/structure/>

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::marks::Mark;

/// ADF schema version written on every `doc` node
pub const ADF_VERSION: u32 = 1;

/// Free-form attributes carried by node types that are passed through
/// without validation
pub type Attrs = Map<String, Value>;

/// A single ADF node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
  Doc {
    version: u32,
    content: Vec<Node>,
  },
  Heading {
    attrs: HeadingAttrs,
    #[serde(default)]
    content: Vec<Node>,
  },
  Paragraph {
    #[serde(default)]
    content: Vec<Node>,
  },
  Text {
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    marks: Vec<Mark>,
  },
  HardBreak,
  Table {
    attrs: TableAttrs,
    content: Vec<Node>,
  },
  TableRow {
    content: Vec<Node>,
  },
  TableHeader {
    #[serde(default)]
    attrs: CellAttrs,
    content: Vec<Node>,
  },
  TableCell {
    #[serde(default)]
    attrs: CellAttrs,
    content: Vec<Node>,
  },
  Blockquote {
    #[serde(default)]
    content: Vec<Node>,
  },
  BulletList {
    #[serde(default)]
    content: Vec<Node>,
  },
  CodeBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attrs: Option<Attrs>,
    #[serde(default)]
    content: Vec<Node>,
  },
  ListItem {
    #[serde(default)]
    content: Vec<Node>,
  },
  MediaGroup {
    #[serde(default)]
    content: Vec<Node>,
  },
  MediaSingle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attrs: Option<Attrs>,
    #[serde(default)]
    content: Vec<Node>,
  },
  Media {
    #[serde(default)]
    attrs: Attrs,
  },
  OrderedList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attrs: Option<Attrs>,
    #[serde(default)]
    content: Vec<Node>,
  },
  Panel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attrs: Option<Attrs>,
    #[serde(default)]
    content: Vec<Node>,
  },
  Rule,
  Emoji {
    #[serde(default)]
    attrs: Attrs,
  },
  InlineCard {
    #[serde(default)]
    attrs: Attrs,
  },
  Mention {
    #[serde(default)]
    attrs: Attrs,
  },
}

/// Attributes of a `heading` node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
  pub level: u8,
}

/// Attributes of a `table` node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAttrs {
  pub is_number_column_enabled: bool,
  pub layout: String,
}

impl Default for TableAttrs {
  fn default() -> Self {
    Self {
      is_number_column_enabled: false,
      layout: "default".to_string(),
    }
  }
}

/// Attributes of `tableHeader` and `tableCell` nodes.
///
/// All keys are optional; an empty set serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellAttrs {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub background: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub colspan: Option<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub colwidth: Option<Vec<u32>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rowspan: Option<u32>,
}

/// The `type` tag of a [`Node`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
  Doc,
  Heading,
  Paragraph,
  Text,
  HardBreak,
  Table,
  TableRow,
  TableHeader,
  TableCell,
  Blockquote,
  BulletList,
  CodeBlock,
  ListItem,
  MediaGroup,
  MediaSingle,
  Media,
  OrderedList,
  Panel,
  Rule,
  Emoji,
  InlineCard,
  Mention,
}

impl NodeType {
  /// The tag as it appears in ADF JSON
  pub const fn as_str(self) -> &'static str {
    match self {
      NodeType::Doc => "doc",
      NodeType::Heading => "heading",
      NodeType::Paragraph => "paragraph",
      NodeType::Text => "text",
      NodeType::HardBreak => "hardBreak",
      NodeType::Table => "table",
      NodeType::TableRow => "tableRow",
      NodeType::TableHeader => "tableHeader",
      NodeType::TableCell => "tableCell",
      NodeType::Blockquote => "blockquote",
      NodeType::BulletList => "bulletList",
      NodeType::CodeBlock => "codeBlock",
      NodeType::ListItem => "listItem",
      NodeType::MediaGroup => "mediaGroup",
      NodeType::MediaSingle => "mediaSingle",
      NodeType::Media => "media",
      NodeType::OrderedList => "orderedList",
      NodeType::Panel => "panel",
      NodeType::Rule => "rule",
      NodeType::Emoji => "emoji",
      NodeType::InlineCard => "inlineCard",
      NodeType::Mention => "mention",
    }
  }

  /// Top-level block types allowed directly under `doc`
  pub const fn is_block(self) -> bool {
    matches!(
      self,
      NodeType::Blockquote
        | NodeType::BulletList
        | NodeType::CodeBlock
        | NodeType::Heading
        | NodeType::MediaGroup
        | NodeType::MediaSingle
        | NodeType::OrderedList
        | NodeType::Panel
        | NodeType::Paragraph
        | NodeType::Rule
        | NodeType::Table
    )
  }

  /// Inline types allowed under `paragraph` and `heading`
  pub const fn is_inline(self) -> bool {
    matches!(
      self,
      NodeType::Emoji | NodeType::HardBreak | NodeType::InlineCard | NodeType::Mention | NodeType::Text
    )
  }

  /// Types allowed inside `tableHeader` and `tableCell`. Tables cannot nest.
  pub const fn is_cell_content(self) -> bool {
    matches!(
      self,
      NodeType::Blockquote
        | NodeType::BulletList
        | NodeType::CodeBlock
        | NodeType::Heading
        | NodeType::MediaGroup
        | NodeType::OrderedList
        | NodeType::Panel
        | NodeType::Paragraph
        | NodeType::Rule
    )
  }

  /// Whether a node of this type may hold a child of type `child`.
  ///
  /// Passthrough types are not validated and accept anything.
  pub const fn accepts(self, child: NodeType) -> bool {
    match self {
      NodeType::Doc => child.is_block(),
      NodeType::Heading | NodeType::Paragraph => child.is_inline(),
      NodeType::Table => matches!(child, NodeType::TableRow),
      NodeType::TableRow => matches!(child, NodeType::TableHeader | NodeType::TableCell),
      NodeType::TableHeader | NodeType::TableCell => child.is_cell_content(),
      _ => true,
    }
  }
}

impl fmt::Display for NodeType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Node {
  /// The `type` tag of this node
  pub const fn node_type(&self) -> NodeType {
    match self {
      Node::Doc { .. } => NodeType::Doc,
      Node::Heading { .. } => NodeType::Heading,
      Node::Paragraph { .. } => NodeType::Paragraph,
      Node::Text { .. } => NodeType::Text,
      Node::HardBreak => NodeType::HardBreak,
      Node::Table { .. } => NodeType::Table,
      Node::TableRow { .. } => NodeType::TableRow,
      Node::TableHeader { .. } => NodeType::TableHeader,
      Node::TableCell { .. } => NodeType::TableCell,
      Node::Blockquote { .. } => NodeType::Blockquote,
      Node::BulletList { .. } => NodeType::BulletList,
      Node::CodeBlock { .. } => NodeType::CodeBlock,
      Node::ListItem { .. } => NodeType::ListItem,
      Node::MediaGroup { .. } => NodeType::MediaGroup,
      Node::MediaSingle { .. } => NodeType::MediaSingle,
      Node::Media { .. } => NodeType::Media,
      Node::OrderedList { .. } => NodeType::OrderedList,
      Node::Panel { .. } => NodeType::Panel,
      Node::Rule => NodeType::Rule,
      Node::Emoji { .. } => NodeType::Emoji,
      Node::InlineCard { .. } => NodeType::InlineCard,
      Node::Mention { .. } => NodeType::Mention,
    }
  }

  /// Child nodes, or an empty slice for leaf types
  pub fn content(&self) -> &[Node] {
    match self {
      Node::Doc { content, .. }
      | Node::Heading { content, .. }
      | Node::Paragraph { content }
      | Node::Table { content, .. }
      | Node::TableRow { content }
      | Node::TableHeader { content, .. }
      | Node::TableCell { content, .. }
      | Node::Blockquote { content }
      | Node::BulletList { content }
      | Node::CodeBlock { content, .. }
      | Node::ListItem { content }
      | Node::MediaGroup { content }
      | Node::MediaSingle { content, .. }
      | Node::OrderedList { content, .. }
      | Node::Panel { content, .. } => content,
      Node::Text { .. }
      | Node::HardBreak
      | Node::Media { .. }
      | Node::Rule
      | Node::Emoji { .. }
      | Node::InlineCard { .. }
      | Node::Mention { .. } => &[],
    }
  }

  /// The string of a `text` node
  pub fn text(&self) -> Option<&str> {
    match self {
      Node::Text { text, .. } => Some(text),
      _ => None,
    }
  }

  /// The marks of a `text` node, empty for every other type
  pub fn marks(&self) -> &[Mark] {
    match self {
      Node::Text { marks, .. } => marks,
      _ => &[],
    }
  }

  /// The level of a `heading` node
  pub const fn heading_level(&self) -> Option<u8> {
    match self {
      Node::Heading { attrs, .. } => Some(attrs.level),
      _ => None,
    }
  }

  /// The text of a heading's first text child, or `""`
  pub fn heading_text(&self) -> &str {
    self.content().first().and_then(Node::text).unwrap_or_default()
  }
}
