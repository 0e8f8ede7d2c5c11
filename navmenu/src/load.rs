//! Reading menu documents into generic JSON values.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::{Deserializer, Value, de, error::Category};
use thiserror::Error;

/// Failure to turn menu text into a generic JSON value.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("can not read menu file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The text is not syntactically valid JSON.
    #[error("{0}")]
    Parse(serde_json::Error),
    /// The text is JSON but does not decode to the expected value type.
    #[error("{0}")]
    Type(serde_json::Error),
}

impl LoadError {
    fn from_json(err: serde_json::Error, path: &Path) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => LoadError::Parse(err),
            Category::Data => LoadError::Type(err),
            Category::Io => LoadError::Io {
                path: path.to_path_buf(),
                source: err.into(),
            },
        }
    }
}

/// Parses menu text held in memory.
pub fn parse_menu(text: &str) -> Result<Value, LoadError> {
    read_value(Deserializer::from_str(text))
        .map_err(|e| LoadError::from_json(e, Path::new("<memory>")))
}

/// Opens and parses the menu file at `path`.
///
/// The file handle is dropped on every return path, parse failures included.
pub fn load_menu(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = read_value(Deserializer::from_reader(BufReader::new(file)))
        .map_err(|e| LoadError::from_json(e, path))?;
    debug!("loaded menu document {}", path.display());
    Ok(value)
}

/// Decodes one value with no nesting limit, growing the stack on demand.
fn read_value<'de, R: de::Read<'de>>(
    mut json: Deserializer<R>,
) -> Result<Value, serde_json::Error> {
    json.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(value)
}
