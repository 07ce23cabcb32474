use chalkmark::render::raster::{self, RasterError, RasterOptions};
use chalkmark::render::{RenderError, SvgRenderOptions, render_mark_svg, sanitize_svg_id};
use chalkmark::{
    ContentBox, GeneratedPath, Mark, RibbonStyle, StrokeStyle, Viewport, generate, seeded_rng,
};
use serde::Serialize;
use std::io::{Read, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Style(chalkmark::Error),
    Render(RenderError),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Style(err) => write!(f, "invalid style: {err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<chalkmark::Error> for CliError {
    fn from(value: chalkmark::Error) -> Self {
        Self::Style(value)
    }
}

impl From<RenderError> for CliError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum MarkKind {
    #[default]
    Ring,
    Layered,
    Ribbon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum OutputFormat {
    #[default]
    Svg,
    Json,
    Png,
    Jpeg,
    Pdf,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    kind: MarkKind,
    width: f64,
    height: f64,
    style: Option<String>,
    seed: Option<u64>,
    format: OutputFormat,
    scale: f32,
    background: Option<String>,
    filters: bool,
    id: Option<String>,
    pretty: bool,
    out: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeometryOut<'a> {
    mark: &'a Mark,
    content: ContentBox,
    viewport: Viewport,
    path: &'a GeneratedPath,
    path_data: Vec<String>,
}

fn usage() -> &'static str {
    "chalkmark-cli\n\
\n\
USAGE:\n\
  chalkmark-cli [ring|layered|ribbon] [--width <w>] [--height <h>] [--style <json>|<path>|-] [--seed <n>] [--format svg|json|png|jpg|pdf] [--scale <n>] [--background <css-color>] [--id <svg-id>] [--no-filter] [--pretty] [--out <path>]\n\
\n\
NOTES:\n\
  - The mark kind defaults to ring; the content box defaults to 100x40.\n\
  - --style takes an inline JSON object or a path to one; keys missing from it keep the preset\n\
    values (StrokeStyle for ring/layered, RibbonStyle for ribbon).\n\
  - Without --seed every run draws fresh randomness.\n\
  - svg and json are printed to stdout by default; use --out to write a file.\n\
  - png/jpg/pdf default to ./out.<ext>; pass --out - to write the bytes to stdout.\n\
  - Set RUST_LOG=chalkmark_core=debug to see style clamping and degenerate input.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        width: 100.0,
        height: 40.0,
        scale: 1.0,
        filters: true,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "ring" => args.kind = MarkKind::Ring,
            "layered" => args.kind = MarkKind::Layered,
            "ribbon" => args.kind = MarkKind::Ribbon,
            "--pretty" => args.pretty = true,
            "--no-filter" => args.filters = false,
            "--width" | "--height" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let v = v.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(v.is_finite() && v >= 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                if a == "--width" {
                    args.width = v;
                } else {
                    args.height = v;
                }
            }
            "--style" => {
                let Some(style) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.style = Some(style.clone());
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.scale.is_finite() && args.scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

/// Inline JSON when the argument looks like an object, otherwise a file path (`-` for stdin).
fn read_style_text(arg: &str) -> Result<String, CliError> {
    if arg.trim_start().starts_with('{') {
        return Ok(arg.to_string());
    }
    match arg {
        "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        path => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_mark(kind: MarkKind, style: Option<&str>) -> Result<Mark, CliError> {
    let text = style.map(read_style_text).transpose()?;
    let mark = match (kind, text) {
        (MarkKind::Ring, None) => Mark::ring(),
        (MarkKind::Layered, None) => Mark::layered_ring(),
        (MarkKind::Ribbon, None) => Mark::ribbon(),
        (MarkKind::Ring, Some(text)) => {
            Mark::Ring(StrokeStyle::from_json_with_preset(&text, &StrokeStyle::ring())?)
        }
        (MarkKind::Layered, Some(text)) => Mark::LayeredRing(StrokeStyle::from_json_with_preset(
            &text,
            &StrokeStyle::layered(),
        )?),
        (MarkKind::Ribbon, Some(text)) => Mark::Ribbon(RibbonStyle::from_json(&text)?),
    };
    Ok(mark)
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    write_text(&text, out)
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_raster_out_path(format: OutputFormat) -> std::path::PathBuf {
    std::path::PathBuf::from(format!("out.{}", format.extension()))
}

fn run(args: Args) -> Result<(), CliError> {
    let mark = load_mark(args.kind, args.style.as_deref())?;
    let content = ContentBox::new(args.width, args.height);
    let viewport = mark.viewport(content);
    let mut rng = seeded_rng(args.seed);
    tracing::debug!(
        kind = ?args.kind,
        width = viewport.width,
        height = viewport.height,
        seed = ?args.seed,
        "drawing mark"
    );

    if args.format == OutputFormat::Json {
        let path = generate(content, &mark, &mut rng);
        let out = GeometryOut {
            mark: &mark,
            content,
            viewport,
            path: &path,
            path_data: path.contours().map(|c| c.to_svg_path_data()).collect(),
        };
        return write_json(&out, args.pretty, args.out.as_deref());
    }

    let svg_options = SvgRenderOptions {
        id: args
            .id
            .as_deref()
            .map(sanitize_svg_id)
            .unwrap_or_else(|| SvgRenderOptions::default().id),
        filters: args.filters,
        ..Default::default()
    };
    let svg = render_mark_svg(content, &mark, &mut rng, &svg_options)?;

    let raster_options = RasterOptions {
        scale: args.scale,
        background: args.background.clone(),
        ..Default::default()
    };
    let bytes = match args.format {
        OutputFormat::Svg | OutputFormat::Json => {
            return write_text(&svg, args.out.as_deref());
        }
        OutputFormat::Png => raster::svg_to_png(&svg, &raster_options)?,
        OutputFormat::Jpeg => raster::svg_to_jpeg(&svg, &raster_options)?,
        OutputFormat::Pdf => raster::svg_to_pdf(&svg)?,
    };
    let out = args.out.clone().unwrap_or_else(|| {
        default_raster_out_path(args.format)
            .to_string_lossy()
            .to_string()
    });
    write_bytes(&bytes, &out)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
