//! # navmenu
//!
//! Schema-checked JSON navigation menus rendered as nested HTML.
//!
//! A menu document is a tree of two node shapes. Leaves are clickable entries
//! (`text` plus an `href` or `func` action); parents are submenus (`text`
//! plus a `nodes` list). The document is validated against a [`MenuSchema`]
//! and, when valid, rendered into indented `<nav>` markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use navmenu::{MenuSchema, RenderOptions, Variant};
//!
//! let value = navmenu::parse_menu(
//!     r#"{"text": "Home", "nodes": [{"text": "A", "href": "/a"}]}"#,
//! ).unwrap();
//!
//! let schema = MenuSchema::for_variant(Variant::ClassList);
//! let menu = navmenu::validate(&value, &schema).unwrap();
//! let lines = navmenu::render_nav(&menu, &RenderOptions::for_variant(Variant::ClassList));
//!
//! assert_eq!(lines[0], "<nav id='nav'>");
//! assert_eq!(lines[4], "\t\t\t\t<a href=\"/a\">A</a>");
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Node shapes, key types and menu variants
//! - [`validate`] - Leaf/parent classification and tree validation
//! - [`menu`] - Typed menu tree
//! - [`render`] - HTML rendering
//! - [`load`] - Reading documents into generic JSON values
//! - [`error`] - Error types and result definitions

#[macro_use]
extern crate log;

/// Error types and result definitions.
pub mod error;

/// Reading menu documents into generic JSON values.
pub mod load;

/// Typed menu tree.
pub mod menu;

/// HTML rendering of validated menus.
pub mod render;

/// Node shapes, key types and menu variants.
pub mod schema;

/// Leaf/parent classification and recursive validation.
pub mod validate;

pub use error::{MenuError, Result};
pub use load::{LoadError, load_menu, parse_menu};
pub use menu::{Leaf, MenuNode, Parent};
pub use render::{ArrowSlot, RenderOptions, arrow_class, render, render_nav};
pub use schema::{Diagnostic, DiagnosticStyle, KeyType, MenuSchema, ShapeSchema, Variant};
pub use validate::{Classification, SchemaError, classify, is_valid, validate};

/// Loads, validates and renders the menu at `path`.
pub fn render_file(
    path: impl AsRef<std::path::Path>,
    schema: &MenuSchema,
    opts: &RenderOptions,
) -> Result<Vec<String>> {
    let value = load_menu(path)?;
    let menu = validate(&value, schema)?;
    info!("validated menu with {} nodes", menu.count());
    Ok(render_nav(&menu, opts))
}
