use std::{fmt, path::PathBuf, process::ExitCode};

use skissa::{Outline, PathCommand, Point, RandomizationParameters, Sketcher, SkrifaSource};

#[derive(clap::Parser, Debug)]
#[command(about = "Draws a single glyph as if sketched by hand")]
struct Args {
    /// Path to a font file (may be a collection)
    #[arg(long)]
    font: PathBuf,
    /// Index of the font in a collection
    #[arg(long, default_value_t = 0)]
    index: u32,
    /// Horizontal center of the glyph
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f32,
    /// Vertical center of the glyph
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f32,
    /// Font size in path units per em
    #[arg(long, default_value_t = 72.0)]
    size: f32,
    /// Threshold for inserting midpoints between consecutive lines
    #[arg(long, default_value_t = 0.5)]
    line_probability: f32,
    /// Threshold for splitting curves
    #[arg(long, default_value_t = 0.5)]
    curve_probability: f32,
    /// Lower bound for the curve split position
    #[arg(long, default_value_t = 0.3)]
    position_min: f32,
    /// Upper bound for the curve split position
    #[arg(long, default_value_t = 0.7)]
    position_max: f32,
    /// Keep the last command of the outline
    #[arg(long)]
    keep_final_command: bool,
    /// Keep curves that are not split instead of dropping them
    #[arg(long)]
    keep_unsplit_curves: bool,
    /// Seed for the random generator; chosen at random when absent
    #[arg(long)]
    seed: Option<u64>,
    /// Digits after the decimal point
    #[arg(long, default_value_t = skissa::sketch::DEFAULT_PRECISION)]
    precision: usize,
    /// Print a complete SVG document instead of bare path data
    #[arg(long)]
    svg: bool,
    /// The character to draw
    character: char,
}

impl Args {
    fn params(&self) -> RandomizationParameters {
        RandomizationParameters::new(
            self.line_probability,
            self.curve_probability,
            self.position_min,
            self.position_max,
        )
        .with_keep_final_command(self.keep_final_command)
        .with_keep_unsplit_curves(self.keep_unsplit_curves)
    }
}

#[derive(Debug)]
enum CliError {
    Io(PathBuf, std::io::Error),
    Sketch(skissa::Error),
}

impl From<skissa::Error> for CliError {
    fn from(value: skissa::Error) -> Self {
        Self::Sketch(value)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "failed to read {}: {e}", path.display()),
            Self::Sketch(e) => write!(f, "{e}"),
        }
    }
}

fn main() -> ExitCode {
    use clap::Parser as _;
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let params = args.params();
    params.validate().map_err(skissa::Error::from)?;
    let data = std::fs::read(&args.font).map_err(|e| CliError::Io(args.font.clone(), e))?;
    let font = SkrifaSource::from_data(&data, args.index)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("sketching {:?} with seed {seed}", args.character);
    let mut sketcher = Sketcher::seeded(params, seed)?.with_precision(Some(args.precision));
    let anchor = Point::new(args.x, args.y);
    if !args.svg {
        return Ok(sketcher.sketch(&font, args.character, anchor, args.size)?);
    }
    let outline = sketcher.sketch_outline(&font, args.character, anchor, args.size)?;
    Ok(svg_document(&outline, &outline.to_svg(sketcher.precision())))
}

/// Wraps path data in a standalone SVG document sized to the outline.
fn svg_document(outline: &Outline, path_data: &str) -> String {
    const MARGIN: f32 = 4.0;
    let (min, max) = bounds(outline).unwrap_or_default();
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            r#"<path d="{}" fill="none" stroke="black"/></svg>"#
        ),
        min.x - MARGIN,
        min.y - MARGIN,
        max.x - min.x + 2.0 * MARGIN,
        max.y - min.y + 2.0 * MARGIN,
        path_data
    )
}

/// Returns the minimum and maximum of all on and off curve points.
fn bounds(outline: &Outline) -> Option<(Point, Point)> {
    let mut points = Vec::with_capacity(outline.len());
    for command in outline.commands() {
        match *command {
            PathCommand::QuadTo { cx0, cy0, .. } => points.push(Point::new(cx0, cy0)),
            PathCommand::CurveTo {
                cx0, cy0, cx1, cy1, ..
            } => {
                points.push(Point::new(cx0, cy0));
                points.push(Point::new(cx1, cy1));
            }
            _ => {}
        }
        points.extend(command.end_point());
    }
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold((*first, *first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["skissa", "--font", "a.ttf", "g"]).unwrap();
        assert_eq!(args.character, 'g');
        assert_eq!(args.params(), RandomizationParameters::default());
        assert_eq!(args.precision, 2);
        assert!(args.seed.is_none());
    }

    #[test]
    fn negative_anchor() {
        let args = Args::try_parse_from([
            "skissa", "--font", "a.ttf", "--x", "-10", "--y", "-2.5", "--seed", "3", "g",
        ])
        .unwrap();
        assert_eq!((args.x, args.y), (-10.0, -2.5));
        assert_eq!(args.seed, Some(3));
    }

    #[test]
    fn inverted_range_is_reported_before_reading_the_font() {
        let args = Args::try_parse_from([
            "skissa",
            "--font",
            "does/not/exist.ttf",
            "--position-min",
            "0.6",
            "--position-max",
            "0.4",
            "g",
        ])
        .unwrap();
        let err = run(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Sketch(skissa::Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn missing_font_file() {
        let args = Args::try_parse_from(["skissa", "--font", "does/not/exist.ttf", "g"]).unwrap();
        assert!(matches!(run(&args), Err(CliError::Io(..))));
    }

    #[test]
    fn bounds_include_control_points() {
        let outline = Outline::from_commands(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::QuadTo {
                cx0: 5.0,
                cy0: -5.0,
                x: 10.0,
                y: 0.0,
            },
            PathCommand::Close,
        ]);
        assert_eq!(
            bounds(&outline),
            Some((Point::new(0.0, -5.0), Point::new(10.0, 0.0)))
        );
        assert_eq!(bounds(&Outline::new()), None);
    }

    #[test]
    fn svg_document_embeds_path() {
        let outline = Outline::from_commands(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 10.0, y: 20.0 },
        ]);
        let doc = svg_document(&outline, "M0,0 L10,20");
        assert_eq!(
            doc,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-4 -4 18 28">"#,
                r#"<path d="M0,0 L10,20" fill="none" stroke="black"/></svg>"#
            )
        );
    }

    fn font_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("skissa-{}-{name}", std::process::id()));
        std::fs::write(&path, font_test_data::VAZIRMATN_VAR).unwrap();
        path
    }

    #[test]
    fn path_data_uses_requested_precision() {
        let path = font_file("precision.ttf");
        let font = path.to_str().unwrap();
        let args = Args::try_parse_from([
            "skissa", "--font", font, "--seed", "11", "--precision", "0", "A",
        ])
        .unwrap();
        let output = run(&args).unwrap();
        let data = std::fs::read(&path).unwrap();
        let source = SkrifaSource::from_data(&data, 0).unwrap();
        let expected = Sketcher::seeded(RandomizationParameters::default(), 11)
            .unwrap()
            .with_precision(Some(0))
            .sketch(&source, 'A', Point::new(0.0, 0.0), 72.0)
            .unwrap();
        assert_eq!(output, expected);
        assert!(!output.contains('.'));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn svg_output_wraps_same_path() {
        let path = font_file("svg.ttf");
        let font = path.to_str().unwrap();
        let bare = Args::try_parse_from(["skissa", "--font", font, "--seed", "4", "A"]).unwrap();
        let wrapped =
            Args::try_parse_from(["skissa", "--font", font, "--seed", "4", "--svg", "A"]).unwrap();
        let path_data = run(&bare).unwrap();
        let doc = run(&wrapped).unwrap();
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(&format!(r#"<path d="{path_data}""#)));
        let _ = std::fs::remove_file(path);
    }
}
