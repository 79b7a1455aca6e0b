//! Invoice rendering.
//!
//! This crate turns an [`InvoiceData`] into a single-page PDF. The layout is
//! expressed against the [`DrawingSurface`] trait; [`PdfSurface`] is the
//! `printpdf`-backed implementation. No HTTP, no storage.

use std::io::Write;

use chrono::NaiveDate;

pub mod error;
pub mod fonts;
pub mod format;
pub mod invoice;
pub mod pdf;
pub mod render;
pub mod surface;

pub use error::{FontError, RenderError, RenderResult};
pub use fonts::FontSet;
pub use invoice::{InvoiceData, RowData};
pub use pdf::PdfSurface;
pub use render::render_invoice;
pub use surface::{DrawingSurface, FontWeight, Rgb};

/// Render `invoice` and return the finished document.
pub fn render_pdf(invoice: &InvoiceData, fonts: &FontSet, today: NaiveDate) -> RenderResult<Vec<u8>> {
    let mut surface = PdfSurface::new(&document_title(invoice), fonts)?;
    render_invoice(&mut surface, invoice, today);
    surface.finish()
}

/// Render `invoice` straight into `writer`.
pub fn write_pdf<W: Write>(
    invoice: &InvoiceData,
    fonts: &FontSet,
    today: NaiveDate,
    writer: W,
) -> RenderResult<()> {
    let mut surface = PdfSurface::new(&document_title(invoice), fonts)?;
    render_invoice(&mut surface, invoice, today);
    surface.finish_to(writer)
}

fn document_title(invoice: &InvoiceData) -> String {
    format!("Invoice #{}", invoice.invoice_number)
}
