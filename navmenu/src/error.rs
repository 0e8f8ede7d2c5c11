//! Error types for the menu pipeline.

use thiserror::Error;

pub use crate::{load::LoadError, validate::SchemaError};

/// Any failure between reading a menu document and rendering it.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result type used throughout navmenu.
pub type Result<T> = std::result::Result<T, MenuError>;
