//! Drawing-surface abstraction the renderer draws onto.
//!
//! The model is a cursor-based page: cells are placed left to right at the
//! cursor, `ln` returns to the left margin and moves down. Units are
//! millimetres, font sizes are points.

/// Font weight within the single family used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    SemiBold,
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Components scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

/// Capability to lay text out on a single page.
pub trait DrawingSurface {
    fn set_font(&mut self, weight: FontWeight, size_pt: f32);

    fn set_text_color(&mut self, color: Rgb);

    fn set_fill_color(&mut self, color: Rgb);

    /// Draw `text` in a `width` x `height` cell at the cursor, then move the
    /// cursor right by `width`. With `fill`, the cell background is painted
    /// with the current fill colour first.
    fn cell(&mut self, width: f32, height: f32, text: &str, fill: bool);

    /// Move the cursor to the left margin, `height` further down.
    fn ln(&mut self, height: f32);
}
