//! Node shape definitions.
//!
//! A menu document is made of two node shapes: leaves (actionable entries)
//! and parents (submenu containers). Each shape is plain data, a list of
//! allowed keys with their value types plus the subset that is required, so
//! adding an optional attribute never touches the checking loop.
//!
//! Three ready-made schemes exist, selected through [`Variant`]:
//!
//! | variant      | leaf keys                             | parent keys                    |
//! |--------------|---------------------------------------|--------------------------------|
//! | `class-list` | `text`, `href`, `id?`, `class_list?`  | `text`, `nodes`, `id?`, `class_list?` |
//! | `disabled`   | `text`, `href`, `id?`, `disabled?`    | `text`, `nodes`, `id?`         |
//! | `action`     | exactly `text`, `func`                | exactly `text`, `nodes`        |

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const TEXT: &str = "text";
pub const HREF: &str = "href";
pub const FUNC: &str = "func";
pub const ID: &str = "id";
pub const CLASS_LIST: &str = "class_list";
pub const DISABLED: &str = "disabled";
pub const NODES: &str = "nodes";

/// Expected value type of a node key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// A JSON string.
    String,
    /// A JSON boolean.
    Boolean,
    /// A JSON array with entries of any type.
    List,
    /// A JSON array whose entries are all strings.
    StringList,
}

impl KeyType {
    /// Whether `value` has this type.
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (KeyType::String, Value::String(_)) => true,
            (KeyType::Boolean, Value::Bool(_)) => true,
            (KeyType::List, Value::Array(_)) => true,
            (KeyType::StringList, Value::Array(items)) => items.iter().all(Value::is_string),
            _ => false,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::String => "string",
            KeyType::Boolean => "boolean",
            KeyType::List => "list",
            KeyType::StringList => "list of strings",
        };
        f.write_str(name)
    }
}

/// First reason a node does not fit a shape.
///
/// `node` is the compact JSON text of the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("{node} isn't a dict.")]
    NotAMapping { node: String },
    #[error("Key \"{key}\" isn't allowed in {node}.")]
    DisallowedKey { key: String, node: String },
    #[error("Required key \"{key}\" not found in {node}.")]
    MissingKey { key: String, node: String },
    #[error("{key} must be a/an {expected} in {node}.")]
    WrongType {
        key: String,
        expected: KeyType,
        node: String,
    },
}

/// Allowed keys, required keys and matching mode of one node shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSchema {
    /// Allowed keys in declaration order.
    pub keys: Vec<(String, KeyType)>,
    /// Keys that must be present.
    pub required: Vec<String>,
    /// The present key set must equal the allowed key set.
    pub exact: bool,
}

impl ShapeSchema {
    /// An empty shape using subset matching.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            required: Vec::new(),
            exact: false,
        }
    }

    /// An empty shape using exact key-set matching.
    pub fn exact() -> Self {
        Self {
            exact: true,
            ..Self::new()
        }
    }

    /// Adds a required key.
    pub fn required(mut self, key: &str, ty: KeyType) -> Self {
        self.keys.push((key.to_string(), ty));
        self.required.push(key.to_string());
        self
    }

    /// Adds an optional key. On an exact shape every key is required.
    pub fn optional(mut self, key: &str, ty: KeyType) -> Self {
        if self.exact {
            return self.required(key, ty);
        }
        self.keys.push((key.to_string(), ty));
        self
    }

    /// Expected type of `key`, or `None` when the key is not allowed.
    pub fn key_type(&self, key: &str) -> Option<KeyType> {
        self.keys
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, ty)| *ty)
    }

    /// Checks `node` against this shape.
    ///
    /// The checks run in a fixed order and the first failure is returned:
    /// mapping-ness, disallowed keys (document order), missing required keys
    /// (declaration order), then value types (document order).
    pub fn check(&self, node: &Value) -> Result<(), Diagnostic> {
        let Some(map) = node.as_object() else {
            return Err(Diagnostic::NotAMapping {
                node: node.to_string(),
            });
        };

        if let Some(key) = map.keys().find(|k| self.key_type(k).is_none()) {
            return Err(Diagnostic::DisallowedKey {
                key: key.clone(),
                node: node.to_string(),
            });
        }

        if let Some(key) = self.required.iter().find(|k| !map.contains_key(*k)) {
            return Err(Diagnostic::MissingKey {
                key: key.clone(),
                node: node.to_string(),
            });
        }

        for (key, value) in map {
            // every key is allowed at this point
            let Some(expected) = self.key_type(key) else {
                continue;
            };
            if !expected.matches(value) {
                return Err(Diagnostic::WrongType {
                    key: key.clone(),
                    expected,
                    node: node.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for ShapeSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu flavour: which keys are accepted and which markup is produced.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Link menu with a freeform `class_list` on leaves and parents.
    #[default]
    ClassList,
    /// Link menu where leaves carry a boolean `disabled` flag.
    Disabled,
    /// Action menu: leaves name a client-side handler in `func`.
    Action,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::ClassList => "class-list",
            Variant::Disabled => "disabled",
            Variant::Action => "action",
        };
        f.write_str(name)
    }
}

/// Leaf key carrying the action target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKey {
    Href,
    Func,
}

impl ActionKey {
    pub fn key(self) -> &'static str {
        match self {
            ActionKey::Href => HREF,
            ActionKey::Func => FUNC,
        }
    }
}

/// How much a failed match explains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticStyle {
    /// Report the first disqualifying reason for each shape.
    Detailed,
    /// Report only that the node failed to match.
    Silent,
}

/// The leaf and parent shapes active for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSchema {
    pub leaf: ShapeSchema,
    pub parent: ShapeSchema,
    pub action: ActionKey,
    pub style: DiagnosticStyle,
}

impl MenuSchema {
    /// Link menu with `class_list` styling.
    pub fn class_list() -> Self {
        Self {
            leaf: ShapeSchema::new()
                .required(TEXT, KeyType::String)
                .required(HREF, KeyType::String)
                .optional(ID, KeyType::String)
                .optional(CLASS_LIST, KeyType::StringList),
            parent: ShapeSchema::new()
                .required(TEXT, KeyType::String)
                .required(NODES, KeyType::List)
                .optional(ID, KeyType::String)
                .optional(CLASS_LIST, KeyType::StringList),
            action: ActionKey::Href,
            style: DiagnosticStyle::Detailed,
        }
    }

    /// Link menu with the boolean `disabled` shortcut on leaves.
    pub fn disabled_flag() -> Self {
        Self {
            leaf: ShapeSchema::new()
                .required(TEXT, KeyType::String)
                .required(HREF, KeyType::String)
                .optional(ID, KeyType::String)
                .optional(DISABLED, KeyType::Boolean),
            parent: ShapeSchema::new()
                .required(TEXT, KeyType::String)
                .required(NODES, KeyType::List)
                .optional(ID, KeyType::String),
            action: ActionKey::Href,
            style: DiagnosticStyle::Detailed,
        }
    }

    /// Action menu with exact key sets and boolean-only matching.
    pub fn action() -> Self {
        Self {
            leaf: ShapeSchema::exact()
                .required(TEXT, KeyType::String)
                .required(FUNC, KeyType::String),
            parent: ShapeSchema::exact()
                .required(TEXT, KeyType::String)
                .required(NODES, KeyType::List),
            action: ActionKey::Func,
            style: DiagnosticStyle::Silent,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::ClassList => Self::class_list(),
            Variant::Disabled => Self::disabled_flag(),
            Variant::Action => Self::action(),
        }
    }

    /// Accepts both optional styling schemes on link menus.
    ///
    /// Leaves gain whichever of `class_list` and `disabled` they lack, and
    /// parents gain `class_list`. Exact shapes are left untouched.
    pub fn with_superset(mut self) -> Self {
        if !self.leaf.exact {
            if self.leaf.key_type(CLASS_LIST).is_none() {
                self.leaf = self.leaf.optional(CLASS_LIST, KeyType::StringList);
            }
            if self.leaf.key_type(DISABLED).is_none() {
                self.leaf = self.leaf.optional(DISABLED, KeyType::Boolean);
            }
        }
        if !self.parent.exact && self.parent.key_type(CLASS_LIST).is_none() {
            self.parent = self.parent.optional(CLASS_LIST, KeyType::StringList);
        }
        self
    }
}

impl Default for MenuSchema {
    fn default() -> Self {
        Self::class_list()
    }
}
