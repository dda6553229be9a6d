//! Helpers for unit testing

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    error::Error,
    path::{Outline, PathCommand, Point},
    source::{FontMetrics, GlyphOutline, GlyphSource, PositioningPen},
};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Asserts that both coordinates of `actual` are within `tolerance` of
/// `expected`, with some slack for f32 rounding.
#[track_caller]
pub fn assert_within(actual: Point, expected: Point, tolerance: f32) {
    let limit = tolerance + 1e-4;
    assert!(
        (actual.x - expected.x).abs() <= limit && (actual.y - expected.y).abs() <= limit,
        "{actual:?} is not within {tolerance} of {expected:?}"
    );
}

pub const UNITS_PER_EM: u16 = 1000;

/// A tiny font with three glyphs.
///
/// * `l`: a rectangle made of lines
/// * `o`: a diamond made of quadratic curves
/// * U+0301 (combining acute): a triangle with no advance
pub struct TestFont;

pub struct TestGlyph {
    advance_width: Option<f32>,
    commands: &'static [PathCommand],
}

const L_GLYPH: &[PathCommand] = &[
    PathCommand::MoveTo { x: 100.0, y: 0.0 },
    PathCommand::LineTo { x: 400.0, y: 0.0 },
    PathCommand::LineTo { x: 400.0, y: 700.0 },
    PathCommand::LineTo { x: 100.0, y: 700.0 },
    PathCommand::LineTo { x: 100.0, y: 0.0 },
    PathCommand::Close,
];

const O_GLYPH: &[PathCommand] = &[
    PathCommand::MoveTo { x: 300.0, y: 0.0 },
    PathCommand::QuadTo {
        cx0: 550.0,
        cy0: 0.0,
        x: 550.0,
        y: 250.0,
    },
    PathCommand::QuadTo {
        cx0: 550.0,
        cy0: 500.0,
        x: 300.0,
        y: 500.0,
    },
    PathCommand::LineTo { x: 50.0, y: 250.0 },
    PathCommand::QuadTo {
        cx0: 50.0,
        cy0: 0.0,
        x: 300.0,
        y: 0.0,
    },
    PathCommand::Close,
];

const ACUTE_GLYPH: &[PathCommand] = &[
    PathCommand::MoveTo { x: -100.0, y: 600.0 },
    PathCommand::LineTo { x: 0.0, y: 750.0 },
    PathCommand::LineTo { x: -50.0, y: 600.0 },
    PathCommand::Close,
];

impl GlyphSource for TestFont {
    type Glyph = TestGlyph;

    fn metrics(&self) -> FontMetrics {
        FontMetrics {
            units_per_em: UNITS_PER_EM,
            ascender: 800.0,
            descender: -200.0,
        }
    }

    fn glyph(&self, ch: char) -> Result<TestGlyph, Error> {
        let (advance_width, commands) = match ch {
            'l' => (Some(500.0), L_GLYPH),
            'o' => (Some(600.0), O_GLYPH),
            '\u{301}' => (None, ACUTE_GLYPH),
            _ => return Err(Error::MissingGlyph(ch)),
        };
        Ok(TestGlyph {
            advance_width,
            commands,
        })
    }
}

impl GlyphOutline for TestGlyph {
    fn advance_width(&self) -> Option<f32> {
        self.advance_width
    }

    fn outline(&self, origin: Point, font_size: f32) -> Result<Outline, Error> {
        let mut outline = Outline::new();
        let scale = font_size / UNITS_PER_EM as f32;
        let mut pen = PositioningPen::new(&mut outline, origin, scale);
        for command in self.commands {
            command.draw(&mut pen);
        }
        Ok(outline)
    }
}
