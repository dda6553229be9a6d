//! Turning a character into hand-drawn path data.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::Error,
    jitter::jitter_all,
    params::RandomizationParameters,
    path::{Outline, Point},
    resample::resample,
    source::{GlyphOutline, GlyphSource},
};

/// Number of digits after the decimal point in generated path data.
pub const DEFAULT_PRECISION: usize = 2;

/// Returns the outline for `ch` centered on `anchor`.
///
/// The glyph is centered horizontally using its advance width (zero when
/// absent) and vertically using the midpoint of the font's ascender and
/// descender.
pub fn place_glyph<S: GlyphSource + ?Sized>(
    source: &S,
    ch: char,
    anchor: Point,
    font_size: f32,
) -> Result<Outline, Error> {
    let metrics = source.metrics();
    let scale = metrics.scale(font_size);
    let glyph = source.glyph(ch)?;
    let width = glyph.advance_width().unwrap_or_default() * scale;
    let left = anchor.x - width / 2.0;
    let height = (metrics.ascender + metrics.descender) * scale;
    let top = anchor.y + height / 2.0;
    glyph.outline(Point::new(left, top), font_size)
}

/// Builds the hand-drawn outline for `ch`.
///
/// Places the glyph, jitters every command and runs a single resampling
/// pass. The parameters are checked before anything is drawn from `rng`.
pub fn sketch_outline<S, R>(
    source: &S,
    ch: char,
    anchor: Point,
    font_size: f32,
    params: &RandomizationParameters,
    rng: &mut R,
) -> Result<Outline, Error>
where
    S: GlyphSource + ?Sized,
    R: Rng + ?Sized,
{
    params.validate()?;
    let outline = place_glyph(source, ch, anchor, font_size)?;
    log::debug!("placed {ch:?} with {} commands", outline.len());
    let outline = jitter_all(outline, rng);
    resample(outline, params, rng)
}

/// Builds the hand-drawn outline for `ch` and formats it as SVG path data
/// with [`DEFAULT_PRECISION`] digits.
pub fn sketch_glyph<S, R>(
    source: &S,
    ch: char,
    anchor: Point,
    font_size: f32,
    params: &RandomizationParameters,
    rng: &mut R,
) -> Result<String, Error>
where
    S: GlyphSource + ?Sized,
    R: Rng + ?Sized,
{
    sketch_outline(source, ch, anchor, font_size, params, rng)
        .map(|outline| outline.to_svg(Some(DEFAULT_PRECISION)))
}

/// Reusable sketching state: validated parameters and an owned random
/// stream.
///
/// Successive calls continue the same stream, so a seeded sketcher produces
/// the same sequence of outlines every run.
#[derive(Clone, Debug)]
pub struct Sketcher<R> {
    params: RandomizationParameters,
    rng: R,
    precision: Option<usize>,
}

impl Sketcher<StdRng> {
    /// Creates a sketcher with a deterministic random stream.
    pub fn seeded(params: RandomizationParameters, seed: u64) -> Result<Self, Error> {
        Self::new(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Sketcher<R> {
    pub fn new(params: RandomizationParameters, rng: R) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self {
            params,
            rng,
            precision: Some(DEFAULT_PRECISION),
        })
    }

    /// Sets the number of digits after the decimal point, or `None` for the
    /// shortest representation.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn params(&self) -> &RandomizationParameters {
        &self.params
    }

    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    pub fn sketch_outline<S: GlyphSource + ?Sized>(
        &mut self,
        source: &S,
        ch: char,
        anchor: Point,
        font_size: f32,
    ) -> Result<Outline, Error> {
        sketch_outline(source, ch, anchor, font_size, &self.params, &mut self.rng)
    }

    pub fn sketch<S: GlyphSource + ?Sized>(
        &mut self,
        source: &S,
        ch: char,
        anchor: Point,
        font_size: f32,
    ) -> Result<String, Error> {
        let precision = self.precision;
        self.sketch_outline(source, ch, anchor, font_size)
            .map(|outline| outline.to_svg(precision))
    }
}
