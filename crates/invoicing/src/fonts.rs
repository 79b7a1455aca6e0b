//! Font assets, loaded once at startup and shared read-only by every render.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};

use crate::error::{FontError, RenderError, RenderResult};

pub const REGULAR_FILE: &str = "Outfit-Regular.ttf";
pub const SEMIBOLD_FILE: &str = "Outfit-SemiBold.ttf";

/// Immutable set of the two font weights used on the page.
///
/// Cheap to clone; the font programs are reference counted.
#[derive(Clone)]
pub struct FontSet {
    faces: Faces,
}

#[derive(Clone)]
enum Faces {
    Embedded { regular: Arc<[u8]>, semibold: Arc<[u8]> },
    /// PDF standard 14 fonts; nothing is embedded.
    Builtin,
}

impl FontSet {
    /// Read and validate `Outfit-Regular.ttf` and `Outfit-SemiBold.ttf` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, FontError> {
        let dir = dir.as_ref();
        let regular = read_face(dir.join(REGULAR_FILE))?;
        let semibold = read_face(dir.join(SEMIBOLD_FILE))?;
        tracing::debug!(dir = %dir.display(), "loaded font assets");
        Ok(Self {
            faces: Faces::Embedded { regular, semibold },
        })
    }

    /// Helvetica / Helvetica-Bold.
    pub fn builtin() -> Self {
        Self {
            faces: Faces::Builtin,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.faces, Faces::Builtin)
    }

    /// Register both weights with `doc`, returning `(regular, semibold)`.
    pub(crate) fn register(
        &self,
        doc: &PdfDocumentReference,
    ) -> RenderResult<(IndirectFontRef, IndirectFontRef)> {
        match &self.faces {
            Faces::Embedded { regular, semibold } => Ok((
                doc.add_external_font(&regular[..]).map_err(RenderError::pdf)?,
                doc.add_external_font(&semibold[..]).map_err(RenderError::pdf)?,
            )),
            Faces::Builtin => Ok((
                doc.add_builtin_font(BuiltinFont::Helvetica)
                    .map_err(RenderError::pdf)?,
                doc.add_builtin_font(BuiltinFont::HelveticaBold)
                    .map_err(RenderError::pdf)?,
            )),
        }
    }
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.faces {
            Faces::Embedded { regular, semibold } => f
                .debug_struct("FontSet")
                .field("regular_bytes", &regular.len())
                .field("semibold_bytes", &semibold.len())
                .finish(),
            Faces::Builtin => f.debug_struct("FontSet").field("builtin", &true).finish(),
        }
    }
}

fn read_face(path: PathBuf) -> Result<Arc<[u8]>, FontError> {
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) => return Err(FontError::Missing { path, source }),
    };
    if ttf_parser::Face::parse(&bytes, 0).is_err() {
        return Err(FontError::Invalid { path });
    }
    Ok(bytes.into())
}
