//! Small random displacement of path commands.

use rand::Rng;

use crate::path::{Outline, PathCommand};

/// Largest displacement (exclusive) applied by a single draw.
pub const MAX_OFFSET: f32 = 0.1;

/// Draws one offset uniformly from `[-MAX_OFFSET, MAX_OFFSET)`.
pub fn random_offset<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(-MAX_OFFSET..MAX_OFFSET)
}

/// Returns the command with all of its coordinates shifted by a single random
/// offset.
///
/// The same offset is used for both axes and for every control point, so
/// the whole command moves diagonally. `Close` is returned as is and does not
/// consume a draw.
pub fn jitter<R: Rng + ?Sized>(command: PathCommand, rng: &mut R) -> PathCommand {
    match command {
        PathCommand::Close => PathCommand::Close,
        PathCommand::MoveTo { .. }
        | PathCommand::LineTo { .. }
        | PathCommand::QuadTo { .. }
        | PathCommand::CurveTo { .. } => command.offset(random_offset(rng)),
    }
}

/// Jitters every command of the outline, in drawing order.
pub fn jitter_all<R: Rng + ?Sized>(outline: Outline, rng: &mut R) -> Outline {
    outline
        .into_iter()
        .map(|command| jitter(command, rng))
        .collect()
}
