//! Hand-drawn variants of glyph outlines.
//!
//! Skissa takes the outline of a single glyph and roughens it so that it
//! looks sketched by hand. Each path command is nudged by a small random
//! offset, then a single pass over the outline inserts wobbly midpoints
//! between straight segments and randomly splits or drops quadratic curves.
//!
//! All randomness comes from a caller supplied [`rand::Rng`], so a seeded
//! generator always produces the same path data for the same input.
//!
//! ```no_run
//! use skissa::{Point, RandomizationParameters, SkrifaSource, Sketcher};
//!
//! # fn main() -> Result<(), skissa::Error> {
//! let data = std::fs::read("font.ttf").unwrap();
//! let font = SkrifaSource::from_data(&data, 0)?;
//! let mut sketcher = Sketcher::seeded(RandomizationParameters::default(), 42)?;
//! let path_data = sketcher.sketch(&font, 'a', Point::new(50.0, 50.0), 72.0)?;
//! println!("<path d=\"{path_data}\"/>");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;
pub mod jitter;
mod params;
pub mod path;
pub mod resample;
pub mod sketch;
pub mod source;
pub mod subdivide;

#[cfg(test)]
mod testing;

pub use error::{ConfigError, Error};
pub use params::RandomizationParameters;
pub use path::{Outline, PathCommand, Point};
pub use sketch::{sketch_glyph, sketch_outline, Sketcher};
pub use source::{FontMetrics, GlyphOutline, GlyphSource, SkrifaSource};
