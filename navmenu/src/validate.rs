//! Schema validation of generic JSON trees.
//!
//! Every node is checked against both shapes of the active [`MenuSchema`].
//! A node must match exactly one of them: matching neither is a document
//! error, matching both means the schema itself is contradictory.

use serde_json::Value;
use thiserror::Error;

use crate::{
    menu::{Leaf, MenuNode, Parent},
    schema::{CLASS_LIST, DISABLED, Diagnostic, DiagnosticStyle, ID, MenuSchema, NODES, TEXT},
};

/// Outcome of checking one node against both shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Leaf,
    Parent,
    /// Both shapes accept the node. The schema is broken, not the document.
    Both,
    Neither { leaf: Diagnostic, parent: Diagnostic },
}

/// Why a tree failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A node matched both shapes.
    #[error("internal error: {node} matches both the leaf and the parent shape")]
    InternalError { node: String },
    /// A node matched neither shape. The reasons are `None` under
    /// [`DiagnosticStyle::Silent`].
    #[error("{node} is neither a valid leaf nor a valid parent")]
    Mismatch {
        node: String,
        leaf: Option<Diagnostic>,
        parent: Option<Diagnostic>,
    },
}

impl SchemaError {
    /// Lines printed to the user before the final verdict.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            SchemaError::InternalError { .. } => vec!["Internal error.".to_string()],
            SchemaError::Mismatch { leaf, parent, .. } => {
                let mut lines = Vec::new();
                if let Some(d) = leaf {
                    lines.push(format!("Attempting to parse as a leaf: {d}"));
                }
                if let Some(d) = parent {
                    lines.push(format!("Attempting to parse as a parent: {d}"));
                }
                lines
            }
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, SchemaError::InternalError { .. })
    }
}

/// Returns `None` if `node` is a valid leaf, otherwise the first reason it is not.
pub fn classify_leaf(node: &Value, schema: &MenuSchema) -> Option<Diagnostic> {
    schema.leaf.check(node).err()
}

/// Returns `None` if `node` is a valid parent, otherwise the first reason it is not.
///
/// Only the node itself is checked; children are left to [`validate`].
pub fn classify_parent(node: &Value, schema: &MenuSchema) -> Option<Diagnostic> {
    schema.parent.check(node).err()
}

pub fn classify(node: &Value, schema: &MenuSchema) -> Classification {
    match (classify_leaf(node, schema), classify_parent(node, schema)) {
        (None, None) => Classification::Both,
        (None, Some(_)) => Classification::Leaf,
        (Some(_), None) => Classification::Parent,
        (Some(leaf), Some(parent)) => Classification::Neither { leaf, parent },
    }
}

/// Validates the whole tree rooted at `node` and builds its typed form.
///
/// Children are validated in document order and the walk stops at the
/// first failing child.
pub fn validate(node: &Value, schema: &MenuSchema) -> Result<MenuNode, SchemaError> {
    match classify(node, schema) {
        Classification::Both => {
            error!("node matches both shapes, the schema is contradictory");
            Err(SchemaError::InternalError {
                node: node.to_string(),
            })
        }
        Classification::Neither { leaf, parent } => {
            debug!("rejected node: leaf: {leaf} parent: {parent}");
            let (leaf, parent) = match schema.style {
                DiagnosticStyle::Detailed => (Some(leaf), Some(parent)),
                DiagnosticStyle::Silent => (None, None),
            };
            Err(SchemaError::Mismatch {
                node: node.to_string(),
                leaf,
                parent,
            })
        }
        Classification::Leaf => Ok(MenuNode::Leaf(build_leaf(node, schema))),
        Classification::Parent => {
            let nodes = node
                .get(NODES)
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
                .map(|child| validate(child, schema))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MenuNode::Parent(Parent {
                text: string(node, TEXT).unwrap_or_default(),
                id: string(node, ID),
                class_list: strings(node, CLASS_LIST),
                nodes,
            }))
        }
    }
}

/// Whether the tree rooted at `node` is a valid menu.
pub fn is_valid(node: &Value, schema: &MenuSchema) -> bool {
    validate(node, schema).is_ok()
}

// Field readers below run on nodes that already passed a shape check.
fn build_leaf(node: &Value, schema: &MenuSchema) -> Leaf {
    Leaf {
        text: string(node, TEXT).unwrap_or_default(),
        action: string(node, schema.action.key()).unwrap_or_default(),
        id: string(node, ID),
        class_list: strings(node, CLASS_LIST),
        disabled: node.get(DISABLED).and_then(Value::as_bool).unwrap_or(false),
    }
}

fn string(node: &Value, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).map(str::to_string)
}

fn strings(node: &Value, key: &str) -> Vec<String> {
    node.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
