//! Tool configuration.
//!
//! Settings are read from an optional TOML file, `menumaker.toml` next to the
//! menu document unless `--config` names another one. Command-line flags
//! override whatever the file says.
//!
//! # Configuration File Format
//!
//! ```toml
//! variant = "disabled"
//! arrow_slot = "class"
//! indent = "  "
//! allow_superset = false
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use navmenu::{ArrowSlot, MenuSchema, RenderOptions, Variant};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// File name looked up next to the menu document.
pub const DEFAULT_CONFIG_NAME: &str = "menumaker.toml";

/// Contents of a `menumaker.toml` file.
#[derive(Default, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MenuMakerConfig {
    /// Menu flavour: `class-list`, `disabled` or `action`.
    pub variant: Option<Variant>,
    /// Where the depth arrow of a submenu trigger goes: `class` or `target`.
    ///
    /// Defaults to `target` for disabled-flag menus and `class` otherwise.
    pub arrow_slot: Option<ArrowSlot>,
    /// Indentation unit repeated once per nesting level. Defaults to a tab.
    pub indent: Option<String>,
    /// Accept both `class_list` and `disabled` on link-menu leaves.
    pub allow_superset: bool,
}

/// Config path used when none is given: `menumaker.toml` beside `menu`.
pub fn default_config_path(menu: &Path) -> PathBuf {
    match menu.parent() {
        Some(parent) => parent.join(DEFAULT_CONFIG_NAME),
        None => PathBuf::from(DEFAULT_CONFIG_NAME),
    }
}

impl MenuMakerConfig {
    /// Reads and parses the TOML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolves the config for `menu`.
    ///
    /// An explicit path must exist. The default path is optional and
    /// missing means defaults.
    pub fn resolve(explicit: Option<&Path>, menu: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = default_config_path(menu);
        if path.is_file() {
            debug!("using config {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant.unwrap_or_default()
    }

    pub fn schema(&self) -> MenuSchema {
        let schema = MenuSchema::for_variant(self.variant());
        if self.allow_superset {
            schema.with_superset()
        } else {
            schema
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::for_variant(self.variant());
        if let Some(slot) = self.arrow_slot {
            opts = opts.with_arrow_slot(slot);
        }
        if let Some(indent) = &self.indent {
            opts = opts.with_indent(indent.clone());
        }
        opts
    }

    /// JSON Schema describing this file format, pretty-printed.
    pub fn json_schema() -> anyhow::Result<String> {
        let schema = schemars::schema_for!(MenuMakerConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
