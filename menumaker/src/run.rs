//! The load, validate and render pipeline behind the binary.

use std::{fs, path::Path};

use anyhow::{Context, anyhow};
use navmenu::{MenuError, SchemaError};

use crate::{cli::Cli, config::MenuMakerConfig};

/// Result of one run that did not hit an I/O or parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Markup lines, in output order.
    Rendered(Vec<String>),
    /// `--check` passed.
    Valid,
    /// The document failed schema validation.
    Invalid(SchemaError),
    /// Config JSON Schema requested with `--print-config-schema`.
    ConfigSchema(String),
}

/// Runs the tool for already-parsed arguments.
///
/// # Errors
///
/// Returns errors for unreadable files, malformed JSON and bad configs.
/// Schema violations are not errors; they come back as [`Outcome::Invalid`].
pub fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    if cli.print_config_schema {
        return Ok(Outcome::ConfigSchema(MenuMakerConfig::json_schema()?));
    }
    let file = cli
        .file
        .as_deref()
        .ok_or_else(|| anyhow!("no menu file given"))?;

    let mut config = MenuMakerConfig::resolve(cli.config.as_deref(), file)?;
    if let Some(variant) = cli.variant {
        config.variant = Some(variant.into());
    }
    if let Some(slot) = cli.arrow_slot {
        config.arrow_slot = Some(slot.into());
    }
    info!("rendering {} as a {} menu", file.display(), config.variant());

    let lines = match navmenu::render_file(file, &config.schema(), &config.render_options()) {
        Ok(lines) => lines,
        Err(MenuError::Schema(err)) => {
            debug!("{err}");
            return Ok(Outcome::Invalid(err));
        }
        Err(MenuError::Load(err)) => return Err(err.into()),
    };

    if cli.check {
        return Ok(Outcome::Valid);
    }
    Ok(Outcome::Rendered(lines))
}

/// Writes markup lines, newline-terminated, to `path`.
pub fn write_lines(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
