//! Points, path commands and outlines.

use skrifa::outline::pen::{OutlinePen, SvgPen};

/// A point in path space.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` towards `other`.
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns the point moved by `delta` along both axes.
    pub fn offset(self, delta: f32) -> Point {
        Point::new(self.x + delta, self.y + delta)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Single drawing command of an outline.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    /// Begin a new subpath at (x, y).
    MoveTo { x: f32, y: f32 },
    /// Draw a line from the current point to (x, y).
    LineTo { x: f32, y: f32 },
    /// Draw a quadratic bezier from the current point with a control point at
    /// (cx0, cy0) and ending at (x, y).
    QuadTo { cx0: f32, cy0: f32, x: f32, y: f32 },
    /// Draw a cubic bezier from the current point with control points at
    /// (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    CurveTo {
        cx0: f32,
        cy0: f32,
        cx1: f32,
        cy1: f32,
        x: f32,
        y: f32,
    },
    /// Close the current subpath.
    Close,
}

impl PathCommand {
    pub fn move_to(p: Point) -> Self {
        Self::MoveTo { x: p.x, y: p.y }
    }

    pub fn line_to(p: Point) -> Self {
        Self::LineTo { x: p.x, y: p.y }
    }

    pub fn quad_to(control: Point, end: Point) -> Self {
        Self::QuadTo {
            cx0: control.x,
            cy0: control.y,
            x: end.x,
            y: end.y,
        }
    }

    /// Returns the point where this command leaves the pen.
    ///
    /// `Close` has no coordinates of its own and returns `None`.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo { x, y }
            | Self::LineTo { x, y }
            | Self::QuadTo { x, y, .. }
            | Self::CurveTo { x, y, .. } => Some(Point::new(x, y)),
            Self::Close => None,
        }
    }

    /// Returns the off-curve point of a quadratic segment.
    pub fn quad_control(&self) -> Option<Point> {
        match *self {
            Self::QuadTo { cx0, cy0, .. } => Some(Point::new(cx0, cy0)),
            _ => None,
        }
    }

    /// Returns a copy of this command with every coordinate moved by `delta`
    /// along both axes.
    pub fn offset(self, delta: f32) -> Self {
        match self {
            Self::MoveTo { x, y } => Self::MoveTo {
                x: x + delta,
                y: y + delta,
            },
            Self::LineTo { x, y } => Self::LineTo {
                x: x + delta,
                y: y + delta,
            },
            Self::QuadTo { cx0, cy0, x, y } => Self::QuadTo {
                cx0: cx0 + delta,
                cy0: cy0 + delta,
                x: x + delta,
                y: y + delta,
            },
            Self::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => Self::CurveTo {
                cx0: cx0 + delta,
                cy0: cy0 + delta,
                cx1: cx1 + delta,
                cy1: cy1 + delta,
                x: x + delta,
                y: y + delta,
            },
            Self::Close => Self::Close,
        }
    }

    /// Replays this command into the given pen.
    pub fn draw(&self, pen: &mut impl OutlinePen) {
        match *self {
            Self::MoveTo { x, y } => pen.move_to(x, y),
            Self::LineTo { x, y } => pen.line_to(x, y),
            Self::QuadTo { cx0, cy0, x, y } => pen.quad_to(cx0, cy0, x, y),
            Self::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => pen.curve_to(cx0, cy0, cx1, cy1, x, y),
            Self::Close => pen.close(),
        }
    }
}

/// Ordered sequence of path commands describing a glyph.
///
/// A well formed outline begins with a `MoveTo` and every segment starts
/// where the previous command ended.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outline {
    commands: Vec<PathCommand>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Replays the full outline into the given pen.
    pub fn draw(&self, pen: &mut impl OutlinePen) {
        for command in &self.commands {
            command.draw(pen);
        }
    }

    /// Formats the outline as SVG path data.
    ///
    /// When `precision` is set, every coordinate is printed with that many
    /// digits after the decimal point.
    pub fn to_svg(&self, precision: Option<usize>) -> String {
        let mut pen = match precision {
            Some(prec) => SvgPen::with_precision(prec),
            None => SvgPen::new(),
        };
        self.draw(&mut pen);
        pen.into()
    }
}

impl FromIterator<PathCommand> for Outline {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self::from_commands(iter.into_iter().collect())
    }
}

impl IntoIterator for Outline {
    type Item = PathCommand;
    type IntoIter = std::vec::IntoIter<PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl OutlinePen for Outline {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PathCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PathCommand::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push(PathCommand::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(PathCommand::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(PathCommand::Close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Outline {
        let mut outline = Outline::new();
        outline.move_to(0.0, 0.0);
        outline.line_to(10.0, 0.0);
        outline.quad_to(15.0, 5.0, 10.0, 10.0);
        outline.curve_to(8.0, 12.0, 2.0, 12.0, 0.0, 10.0);
        outline.close();
        outline
    }

    #[test]
    fn pen_records_commands() {
        use PathCommand::*;
        assert_eq!(
            square().commands(),
            &[
                MoveTo { x: 0.0, y: 0.0 },
                LineTo { x: 10.0, y: 0.0 },
                QuadTo {
                    cx0: 15.0,
                    cy0: 5.0,
                    x: 10.0,
                    y: 10.0
                },
                CurveTo {
                    cx0: 8.0,
                    cy0: 12.0,
                    cx1: 2.0,
                    cy1: 12.0,
                    x: 0.0,
                    y: 10.0
                },
                Close,
            ]
        );
    }

    #[test]
    fn svg_path_data() {
        assert_eq!(
            square().to_svg(None),
            "M0,0 L10,0 Q15,5 10,10 C8,12 2,12 0,10 Z"
        );
        assert_eq!(
            square().to_svg(Some(1)),
            "M0.0,0.0 L10.0,0.0 Q15.0,5.0 10.0,10.0 C8.0,12.0 2.0,12.0 0.0,10.0 Z"
        );
    }

    #[test]
    fn end_points() {
        let commands = square().into_commands();
        assert_eq!(commands[2].end_point(), Some(Point::new(10.0, 10.0)));
        assert_eq!(commands[2].quad_control(), Some(Point::new(15.0, 5.0)));
        assert_eq!(commands[1].quad_control(), None);
        assert_eq!(commands[4].end_point(), None);
    }

    #[test]
    fn offset_moves_every_coordinate() {
        let curve = PathCommand::CurveTo {
            cx0: 1.0,
            cy0: 2.0,
            cx1: 3.0,
            cy1: 4.0,
            x: 5.0,
            y: 6.0,
        };
        assert_eq!(
            curve.offset(0.5),
            PathCommand::CurveTo {
                cx0: 1.5,
                cy0: 2.5,
                cx1: 3.5,
                cy1: 4.5,
                x: 5.5,
                y: 6.5,
            }
        );
        assert_eq!(PathCommand::Close.offset(0.5), PathCommand::Close);
    }

    #[test]
    fn lerp_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, -2.0);
        assert_eq!(a.lerp(b, 0.25), Point::new(1.0, -0.5));
        assert_eq!(a.midpoint(b), Point::new(2.0, -1.0));
    }
}
