//! Glyph outlines and font metrics.
//!
//! The sketching pipeline only needs a few things from a font: the overall
//! vertical metrics, the advance width of a glyph and its outline placed at
//! some origin. [`GlyphSource`] captures that, and [`SkrifaSource`] provides
//! it for OpenType fonts.

use skrifa::{
    charmap::Charmap,
    instance::{LocationRef, Size},
    metrics::GlyphMetrics,
    outline::{pen::OutlinePen, DrawError, DrawSettings, OutlineGlyph, OutlineGlyphCollection},
    raw::FontRef,
    MetadataProvider,
};

use crate::{
    error::Error,
    path::{Outline, Point},
};

/// Font wide metrics in font units.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FontMetrics {
    pub units_per_em: u16,
    /// Distance from the baseline to the top of the alignment box.
    pub ascender: f32,
    /// Distance from the baseline to the bottom of the alignment box. Usually
    /// negative.
    pub descender: f32,
}

impl FontMetrics {
    /// Scale factor from font units to the given font size.
    pub fn scale(&self, font_size: f32) -> f32 {
        font_size / self.units_per_em as f32
    }
}

/// Provider of glyphs for characters.
pub trait GlyphSource {
    type Glyph: GlyphOutline;

    fn metrics(&self) -> FontMetrics;

    /// Returns the glyph for `ch`.
    fn glyph(&self, ch: char) -> Result<Self::Glyph, Error>;
}

/// A single glyph that can be drawn at a position.
pub trait GlyphOutline {
    /// Advance width in font units.
    ///
    /// `None` for glyphs without horizontal metrics, such as some combining
    /// marks.
    fn advance_width(&self) -> Option<f32>;

    /// Returns the outline scaled to `font_size` with its origin at `origin`.
    ///
    /// The resulting coordinates are y-down: the y axis of the font grows
    /// towards the top of the page, path space grows towards the bottom.
    fn outline(&self, origin: Point, font_size: f32) -> Result<Outline, Error>;
}

/// Pen that maps font space into path space before forwarding to another
/// pen.
///
/// Coordinates are scaled, flipped vertically and translated to an origin.
pub struct PositioningPen<'a, P> {
    inner: &'a mut P,
    origin: Point,
    scale: f32,
}

impl<'a, P: OutlinePen> PositioningPen<'a, P> {
    pub fn new(inner: &'a mut P, origin: Point, scale: f32) -> Self {
        Self {
            inner,
            origin,
            scale,
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin.x + x * self.scale, self.origin.y - y * self.scale)
    }
}

impl<P: OutlinePen> OutlinePen for PositioningPen<'_, P> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.inner.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.inner.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.inner.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.inner.curve_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.inner.close();
    }
}

/// Glyph source backed by an OpenType font.
///
/// Outlines are loaded unhinted at the default location in variation space.
pub struct SkrifaSource<'a> {
    charmap: Charmap<'a>,
    glyph_metrics: GlyphMetrics<'a>,
    outlines: OutlineGlyphCollection<'a>,
    metrics: FontMetrics,
}

impl<'a> SkrifaSource<'a> {
    /// Returns an error if the font declares zero units per em.
    pub fn new(font: &FontRef<'a>) -> Result<Self, Error> {
        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        if metrics.units_per_em == 0 {
            return Err(Error::ZeroUnitsPerEm);
        }
        Ok(Self {
            charmap: font.charmap(),
            glyph_metrics: font.glyph_metrics(Size::unscaled(), LocationRef::default()),
            outlines: font.outline_glyphs(),
            metrics: FontMetrics {
                units_per_em: metrics.units_per_em,
                ascender: metrics.ascent,
                descender: metrics.descent,
            },
        })
    }

    /// Reads the font at `index` from a font file or collection.
    pub fn from_data(data: &'a [u8], index: u32) -> Result<Self, Error> {
        let font = FontRef::from_index(data, index)?;
        Self::new(&font)
    }
}

impl<'a> GlyphSource for SkrifaSource<'a> {
    type Glyph = SkrifaGlyph<'a>;

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn glyph(&self, ch: char) -> Result<Self::Glyph, Error> {
        let glyph_id = self.charmap.map(ch).ok_or(Error::MissingGlyph(ch))?;
        let outline = self
            .outlines
            .get(glyph_id)
            .ok_or(DrawError::GlyphNotFound(glyph_id))?;
        log::trace!("mapped {ch:?} to glyph {glyph_id}");
        Ok(SkrifaGlyph {
            outline,
            advance_width: self.glyph_metrics.advance_width(glyph_id),
            metrics: self.metrics,
        })
    }
}

/// A glyph loaded from an OpenType font.
pub struct SkrifaGlyph<'a> {
    outline: OutlineGlyph<'a>,
    advance_width: Option<f32>,
    metrics: FontMetrics,
}

impl GlyphOutline for SkrifaGlyph<'_> {
    fn advance_width(&self) -> Option<f32> {
        self.advance_width
    }

    fn outline(&self, origin: Point, font_size: f32) -> Result<Outline, Error> {
        let mut outline = Outline::new();
        let mut pen = PositioningPen::new(&mut outline, origin, self.metrics.scale(font_size));
        let settings = DrawSettings::unhinted(Size::unscaled(), LocationRef::default());
        self.outline.draw(settings, &mut pen)?;
        Ok(outline)
    }
}
