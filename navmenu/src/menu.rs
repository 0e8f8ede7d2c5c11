//! Typed menu tree produced by validation.

/// A validated menu node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Leaf(Leaf),
    Parent(Parent),
}

/// Clickable menu entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaf {
    /// Display label.
    pub text: String,
    /// Link target (`href`) or handler name (`func`).
    pub action: String,
    /// HTML element id.
    pub id: Option<String>,
    /// Extra CSS classes.
    pub class_list: Vec<String>,
    /// Renders the `disabled` class.
    pub disabled: bool,
}

/// Submenu container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parent {
    /// Label of the expandable trigger.
    pub text: String,
    pub id: Option<String>,
    pub class_list: Vec<String>,
    pub nodes: Vec<MenuNode>,
}

impl MenuNode {
    pub fn text(&self) -> &str {
        match self {
            MenuNode::Leaf(leaf) => &leaf.text,
            MenuNode::Parent(parent) => &parent.text,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MenuNode::Leaf(_))
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        match self {
            MenuNode::Leaf(_) => 1,
            MenuNode::Parent(parent) => 1 + parent.nodes.iter().map(MenuNode::count).sum::<usize>(),
        }
    }

    /// Deepest nesting level below `self`; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            MenuNode::Leaf(_) => 0,
            MenuNode::Parent(parent) => {
                1 + parent
                    .nodes
                    .iter()
                    .map(MenuNode::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}
