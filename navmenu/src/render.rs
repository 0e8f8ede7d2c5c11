//! HTML rendering of validated menus.
//!
//! The renderer is a pure function of `(node, depth)`: depth is threaded
//! through the recursion and only decides indentation and the arrow class of
//! deep submenu triggers.
//!
//! ```text
//! <nav id='nav'>
//! \t<a>Home</a>
//! \t<ul>
//! \t\t<li>
//! \t\t\t\t<a href="/a">A</a>
//! \t\t</li>
//! \t</ul>
//! </nav>
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    menu::{Leaf, MenuNode, Parent},
    schema::Variant,
};

/// Depth at which submenu triggers start carrying an arrow class.
pub const DOWNARROW_DEPTH: usize = 3;

pub const NAV_OPEN: &str = "<nav id='nav'>";
pub const NAV_CLOSE: &str = "</nav>";

/// Attribute slot that receives the depth arrow of a submenu trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowSlot {
    /// `class="downarrow ..."`
    Class,
    /// The target attribute, e.g. `href="downarrow"`.
    ///
    /// This is how disabled-flag menus have always been rendered.
    Target,
}

/// Markup settings for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub variant: Variant,
    pub arrow_slot: ArrowSlot,
    /// Indentation unit, repeated once per depth level.
    pub indent: String,
}

impl RenderOptions {
    /// Defaults for `variant`: tab indentation, and the arrow in the class
    /// slot except for disabled-flag menus.
    pub fn for_variant(variant: Variant) -> Self {
        let arrow_slot = match variant {
            Variant::Disabled => ArrowSlot::Target,
            Variant::ClassList | Variant::Action => ArrowSlot::Class,
        };
        Self {
            variant,
            arrow_slot,
            indent: "\t".to_string(),
        }
    }

    pub fn with_arrow_slot(mut self, arrow_slot: ArrowSlot) -> Self {
        self.arrow_slot = arrow_slot;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    fn tag(&self) -> &'static str {
        match self.variant {
            Variant::ClassList | Variant::Disabled => "a",
            Variant::Action => "span",
        }
    }

    fn target_attr(&self) -> &'static str {
        match self.variant {
            Variant::ClassList | Variant::Disabled => "href",
            Variant::Action => "data-func",
        }
    }

    fn line(&self, depth: usize, content: &str) -> String {
        format!("{}{}", self.indent.repeat(depth), content)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

/// Arrow class for a submenu trigger rendered at `depth`.
pub fn arrow_class(depth: usize) -> Option<&'static str> {
    match depth {
        d if d < DOWNARROW_DEPTH => None,
        DOWNARROW_DEPTH => Some("downarrow"),
        _ => Some("rightarrow"),
    }
}

/// Renders `node` at `depth`, one markup line per element.
pub fn render(node: &MenuNode, depth: usize, opts: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(node, depth, opts, &mut lines);
    lines
}

/// Renders `node` wrapped in the `<nav id='nav'>` container.
pub fn render_nav(node: &MenuNode, opts: &RenderOptions) -> Vec<String> {
    let mut lines = vec![opts.line(0, NAV_OPEN)];
    render_into(node, 1, opts, &mut lines);
    lines.push(opts.line(0, NAV_CLOSE));
    lines
}

fn render_into(node: &MenuNode, depth: usize, opts: &RenderOptions, out: &mut Vec<String>) {
    match node {
        MenuNode::Leaf(leaf) => out.push(opts.line(depth + 1, &leaf_element(leaf, opts))),
        MenuNode::Parent(parent) => {
            out.push(opts.line(depth, &trigger_element(parent, depth, opts)));
            out.push(opts.line(depth, "<ul>"));
            for child in &parent.nodes {
                out.push(opts.line(depth + 1, "<li>"));
                render_into(child, depth + 2, opts, out);
                out.push(opts.line(depth + 1, "</li>"));
            }
            out.push(opts.line(depth, "</ul>"));
        }
    }
}

fn leaf_element(leaf: &Leaf, opts: &RenderOptions) -> String {
    let mut classes: Vec<&str> = leaf.class_list.iter().map(String::as_str).collect();
    if leaf.disabled {
        classes.push("disabled");
    }
    element(
        opts,
        &classes,
        leaf.id.as_deref(),
        Some(leaf.action.as_str()),
        &leaf.text,
    )
}

fn trigger_element(parent: &Parent, depth: usize, opts: &RenderOptions) -> String {
    let arrow = arrow_class(depth);
    let mut classes = Vec::with_capacity(parent.class_list.len() + 1);
    let mut target = None;
    match opts.arrow_slot {
        ArrowSlot::Class => classes.extend(arrow),
        ArrowSlot::Target => target = arrow,
    }
    classes.extend(parent.class_list.iter().map(String::as_str));
    element(opts, &classes, parent.id.as_deref(), target, &parent.text)
}

fn element(
    opts: &RenderOptions,
    classes: &[&str],
    id: Option<&str>,
    target: Option<&str>,
    text: &str,
) -> String {
    let tag = opts.tag();
    let mut html = format!("<{tag}");
    let classes = classes.join(" ");
    if !classes.is_empty() {
        html.push_str(&format!(" class=\"{classes}\""));
    }
    if let Some(id) = id.filter(|s| !s.is_empty()) {
        html.push_str(&format!(" id=\"{id}\""));
    }
    if let Some(target) = target.filter(|s| !s.is_empty()) {
        html.push_str(&format!(" {}=\"{target}\"", opts.target_attr()));
    }
    html.push_str(&format!(">{text}</{tag}>"));
    html
}
