//! `printpdf`-backed drawing surface.
//!
//! Keeps an fpdf-style cursor measured from the top-left corner of the page
//! and converts to PDF's bottom-left origin when drawing.

use std::io::{BufWriter, Write};

use printpdf::{Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Rect};

use crate::error::{RenderError, RenderResult};
use crate::fonts::FontSet;
use crate::surface::{DrawingSurface, FontWeight, Rgb};

/// A4 portrait.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

const LEFT_MARGIN_MM: f32 = 5.0;
const TOP_MARGIN_MM: f32 = 10.0;
/// Horizontal padding between a cell's edge and its text.
const CELL_MARGIN_MM: f32 = 5.0;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Single-page PDF document under construction.
pub struct PdfSurface {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    semibold: IndirectFontRef,
    weight: FontWeight,
    size_pt: f32,
    text_color: Rgb,
    fill_color: Rgb,
    x: f32,
    y: f32,
}

impl PdfSurface {
    /// Open a document with one blank page and both font weights registered.
    pub fn new(title: &str, fonts: &FontSet) -> RenderResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        let (regular, semibold) = fonts.register(&doc)?;

        Ok(Self {
            doc,
            layer,
            regular,
            semibold,
            weight: FontWeight::Regular,
            size_pt: 12.0,
            text_color: Rgb::BLACK,
            fill_color: Rgb::BLACK,
            x: LEFT_MARGIN_MM,
            y: TOP_MARGIN_MM,
        })
    }

    /// Finalize the document into memory.
    pub fn finish(self) -> RenderResult<Vec<u8>> {
        self.doc.save_to_bytes().map_err(RenderError::pdf)
    }

    /// Finalize the document into `writer`, flushing it before returning.
    pub fn finish_to<W: Write>(self, writer: W) -> RenderResult<()> {
        let mut writer = BufWriter::new(writer);
        self.doc.save(&mut writer).map_err(RenderError::pdf)?;
        writer.flush()?;
        Ok(())
    }

    fn font(&self) -> &IndirectFontRef {
        match self.weight {
            FontWeight::Regular => &self.regular,
            FontWeight::SemiBold => &self.semibold,
        }
    }
}

fn pdf_color(color: Rgb) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}

impl DrawingSurface for PdfSurface {
    fn set_font(&mut self, weight: FontWeight, size_pt: f32) {
        self.weight = weight;
        self.size_pt = size_pt;
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    fn cell(&mut self, width: f32, height: f32, text: &str, fill: bool) {
        if fill {
            self.layer.set_fill_color(pdf_color(self.fill_color));
            self.layer.add_rect(Rect::new(
                Mm(self.x),
                Mm(PAGE_HEIGHT_MM - self.y - height),
                Mm(self.x + width),
                Mm(PAGE_HEIGHT_MM - self.y),
            ));
        }

        if !text.is_empty() {
            // Text is painted with the fill colour in PDF.
            self.layer.set_fill_color(pdf_color(self.text_color));
            let baseline = self.y + 0.5 * height + 0.3 * self.size_pt * MM_PER_PT;
            self.layer.use_text(
                text,
                self.size_pt,
                Mm(self.x + CELL_MARGIN_MM),
                Mm(PAGE_HEIGHT_MM - baseline),
                self.font(),
            );
        }

        self.x += width;
    }

    fn ln(&mut self, height: f32) {
        self.x = LEFT_MARGIN_MM;
        self.y += height;
    }
}
