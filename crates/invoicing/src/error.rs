//! Rendering error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used by the renderer and the PDF surface.
pub type RenderResult<T> = Result<T, RenderError>;

/// Failure while producing the finished document.
///
/// Layout itself cannot fail; only embedding fonts and finalizing the
/// document into bytes or a sink can.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The PDF encoder rejected the document (e.g. a font could not be embedded).
    #[error("pdf encoding failed: {0}")]
    Pdf(String),

    /// Writing the finished document failed.
    #[error("writing document failed: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn pdf(msg: impl std::fmt::Display) -> Self {
        Self::Pdf(msg.to_string())
    }
}

/// Failure while loading the font assets at startup.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font file {path} could not be read: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font file {path} is not a valid TrueType/OpenType font")]
    Invalid { path: PathBuf },
}
