//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use navmenu::{ArrowSlot, Variant};

/// Convert a JSON menu description into nested `<nav>` HTML.
///
/// The document is checked against the leaf/parent schema of the selected
/// variant first; invalid documents produce no markup.
#[derive(Parser, Debug, Clone)]
#[command(name = "menumaker", version, about)]
pub struct Cli {
    /// Menu document (JSON).
    #[arg(value_parser = existing_file, required_unless_present = "print_config_schema")]
    pub file: Option<PathBuf>,

    /// Menu flavour; overrides the config file.
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// Attribute slot for the depth arrow of submenu triggers.
    #[arg(long, value_enum)]
    pub arrow_slot: Option<ArrowSlotArg>,

    /// Config file [default: menumaker.toml next to FILE, if present].
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the markup to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only validate the document, print no markup.
    #[arg(long)]
    pub check: bool,

    /// Print the JSON Schema of the config file and exit.
    #[arg(long)]
    pub print_config_schema: bool,
}

/// Menu flavour selector.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantArg {
    /// Links with a freeform `class_list`.
    ClassList,
    /// Links with a boolean `disabled` flag.
    Disabled,
    /// Spans naming a client-side handler in `func`.
    Action,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::ClassList => Variant::ClassList,
            VariantArg::Disabled => Variant::Disabled,
            VariantArg::Action => Variant::Action,
        }
    }
}

/// Arrow slot selector.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowSlotArg {
    /// `class="downarrow"`
    Class,
    /// `href="downarrow"` (or `data-func` on action menus)
    Target,
}

impl From<ArrowSlotArg> for ArrowSlot {
    fn from(value: ArrowSlotArg) -> Self {
        match value {
            ArrowSlotArg::Class => ArrowSlot::Class,
            ArrowSlotArg::Target => ArrowSlot::Target,
        }
    }
}

fn existing_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if !path.exists() {
        return Err(format!("File '{s}' does not exist."));
    }
    if !path.is_file() {
        return Err(format!("File '{s}' is a directory."));
    }
    Ok(path)
}
