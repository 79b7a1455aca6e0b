use std::path::{Path, PathBuf};
use std::sync::Arc;

use invoicegen_invoicing::{FontError, FontSet};
use thiserror::Error;

use crate::config::{Config, FontSource};

/// Everything a request needs to render: immutable, built once at startup,
/// cloned into every handler.
#[derive(Debug, Clone)]
pub struct RenderContext {
    fonts: Arc<FontSet>,
    output_dir: Arc<PathBuf>,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("loading fonts failed: {0}")]
    Fonts(#[from] FontError),

    #[error("output directory {path} is not usable: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderContext {
    pub fn new(fonts: FontSet, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts: Arc::new(fonts),
            output_dir: Arc::new(output_dir.into()),
        }
    }

    /// Load the fonts and make sure the output directory exists.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let fonts = match &config.fonts {
            FontSource::Directory(dir) => FontSet::load(dir)?,
            FontSource::Builtin => FontSet::builtin(),
        };

        std::fs::create_dir_all(&config.output_dir).map_err(|source| StartupError::OutputDir {
            path: config.output_dir.clone(),
            source,
        })?;

        Ok(Self::new(fonts, config.output_dir.clone()))
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
