//! The stochastic resampling pass.
//!
//! A single left-to-right walk over an outline that randomly inserts wobbly
//! midpoints between consecutive lines, and splits or drops quadratic curves
//! that start at an on-curve anchor. Newly inserted segments are never
//! revisited.

use rand::Rng;

use crate::{
    error::Error,
    jitter::random_offset,
    params::RandomizationParameters,
    path::{Outline, PathCommand, Point},
    subdivide::split_quad,
};

/// Counts of the rewrites made by one pass, for logging.
#[derive(Copy, Clone, Default, Debug)]
struct Tally {
    midpoints: usize,
    splits: usize,
    dropped: usize,
}

/// Runs the resampling pass over `outline`.
///
/// The final command of the input is not visited and, unless
/// [`keep_final_command`](RandomizationParameters::keep_final_command) is
/// set, does not appear in the output.
///
/// The parameters are validated before any random value is drawn.
pub fn resample<R: Rng + ?Sized>(
    outline: Outline,
    params: &RandomizationParameters,
    rng: &mut R,
) -> Result<Outline, Error> {
    params.validate()?;
    let commands = outline.into_commands();
    let mut result = Outline::new();
    let mut tally = Tally::default();
    for i in 0..commands.len().saturating_sub(1) {
        let command = commands[i];
        match command {
            PathCommand::LineTo { x, y } => {
                result.push(command);
                if let PathCommand::LineTo { x: next_x, y: next_y } = commands[i + 1] {
                    if rng.gen::<f32>() > params.truncate_line_probability {
                        let mid = Point::new(x, y)
                            .midpoint(Point::new(next_x, next_y))
                            .offset(random_offset(rng));
                        log::trace!("inserting midpoint {mid:?} after command {i}");
                        result.push(PathCommand::line_to(mid));
                        tally.midpoints += 1;
                    }
                }
            }
            PathCommand::QuadTo { .. } if i >= 1 => {
                let anchor = match commands[i - 1] {
                    PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                        Point::new(x, y)
                    }
                    _ => {
                        result.push(command);
                        continue;
                    }
                };
                if rng.gen::<f32>() > params.truncate_curve_probability {
                    split_anchored_curve(anchor, command, params, rng, &mut result)?;
                    tally.splits += 1;
                } else if params.keep_unsplit_curves {
                    result.push(command);
                } else {
                    log::trace!("dropping curve at command {i}");
                    tally.dropped += 1;
                }
            }
            _ => result.push(command),
        }
    }
    if params.keep_final_command {
        if let Some(last) = commands.last() {
            result.push(*last);
        }
    }
    log::debug!(
        "resampled {} commands into {}: {} midpoints, {} curves split, {} curves dropped",
        commands.len(),
        result.len(),
        tally.midpoints,
        tally.splits,
        tally.dropped
    );
    Ok(result)
}

/// Splits `curve`, which starts at `anchor`, at a random position and emits
/// each half followed by a line restating its end point.
fn split_anchored_curve<R: Rng + ?Sized>(
    anchor: Point,
    curve: PathCommand,
    params: &RandomizationParameters,
    rng: &mut R,
    result: &mut Outline,
) -> Result<(), Error> {
    let (Some(control), Some(end)) = (curve.quad_control(), curve.end_point()) else {
        result.push(curve);
        return Ok(());
    };
    let r = random_offset(rng);
    let t = rng.gen_range(params.truncate_curve_position_min..=params.truncate_curve_position_max);
    let split = split_quad(t, anchor, control.offset(r), end.offset(r))?;
    result.push(split.first());
    result.push(PathCommand::line_to(split.mid));
    result.push(split.second());
    result.push(PathCommand::line_to(split.end));
    Ok(())
}
