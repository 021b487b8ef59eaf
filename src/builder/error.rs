//! Build errors for the options state machine builder.

use crate::core::InvalidCatalog;
use thiserror::Error;

/// Errors that can occur when building an options state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Style catalog not specified. Call .catalog(..) or .styles(..) before .build()")]
    MissingCatalog,

    #[error("Default style not specified. Call .default_style(name) before .build()")]
    MissingDefaultStyle,

    #[error(transparent)]
    InvalidCatalog(#[from] InvalidCatalog),
}
