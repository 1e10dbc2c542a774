use thiserror::Error;

use crate::node::NodeType;

/// Errors raised while validating ADF structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdfError {
  /// A node was given children outside its allow-list
  #[error("{parent} nodes may not have any of the following as children nodes: [{}]", join_types(.rejected))]
  InvalidChildren { parent: NodeType, rejected: Vec<NodeType> },
}

fn join_types(types: &[NodeType]) -> String {
  types.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
}
