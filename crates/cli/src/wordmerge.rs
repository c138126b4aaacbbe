//! wordmerge - Group a positioned glyph dump into words and lines
//!
//! Reads a JSON dump of glyphs and vertical rulings per page, as written by
//! an extraction stage, and prints the merged text runs.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use wordmerge_core::high_level::{PageGlyphs, merge_pages};
use wordmerge_core::layout::{FontRegistry, Glyph, MergeParams, Rectangle, Ruling, TextRun};
use wordmerge_core::utils::HasBounds;

/// Output type for the merged runs.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// One run per line, pages separated by a form feed (default)
    #[default]
    Text,
    /// JSON array of pages, each an array of runs with bounds
    Json,
}

/// Group a positioned glyph dump into words and line-level text runs.
#[derive(Parser, Debug)]
#[command(name = "wordmerge")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON glyph dump ("-" for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Output file name (default: stdout)
    #[arg(short = 'o', long)]
    outfile: Option<PathBuf>,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value_t = OutputType::Text)]
    output_type: OutputType,

    // === Merge options ===
    /// Overlap fraction above which identical glyphs are duplicates
    #[arg(long = "duplicate-overlap", default_value = "0.5")]
    duplicate_overlap: f64,

    /// Word gap as a fraction of the font's space width
    #[arg(long = "space-tolerance", default_value = "0.5")]
    space_tolerance: f64,

    /// Word gap as a fraction of the average character width
    #[arg(long = "char-tolerance", default_value = "0.3")]
    average_char_tolerance: f64,

    /// Tolerance of the same-line test
    #[arg(long = "line-variance", default_value = "0.1")]
    line_variance: f64,

    /// Float equality tolerance for positions and font sizes
    #[arg(long, default_value = "0.01")]
    epsilon: f64,
}

#[derive(Debug, Deserialize)]
struct Dump {
    pages: Vec<DumpPage>,
}

#[derive(Debug, Deserialize)]
struct DumpPage {
    #[serde(default)]
    glyphs: Vec<DumpGlyph>,
    #[serde(default)]
    rulings: Vec<DumpRuling>,
}

#[derive(Debug, Deserialize)]
struct DumpGlyph {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    text: String,
    font: String,
    font_size: f64,
    /// Missing or null means unknown
    #[serde(default)]
    width_of_space: Option<f64>,
    #[serde(default)]
    direction: f64,
}

#[derive(Debug, Deserialize)]
struct DumpRuling {
    x: f64,
    top: f64,
    bottom: f64,
}

#[derive(Debug, Serialize)]
struct RunOut {
    text: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    glyphs: usize,
}

impl From<&TextRun> for RunOut {
    fn from(run: &TextRun) -> Self {
        let b = run.bounds();
        Self {
            text: run.text(),
            x: b.left(),
            y: b.top(),
            width: b.width(),
            height: b.height(),
            glyphs: run.glyph_count(),
        }
    }
}

fn to_pages(dump: Dump) -> Result<Vec<PageGlyphs>> {
    let mut fonts = FontRegistry::new();
    let mut pages = Vec::with_capacity(dump.pages.len());
    for (pageno, page) in dump.pages.into_iter().enumerate() {
        let glyphs = page
            .glyphs
            .into_iter()
            .map(|g| -> Result<Glyph> {
                let rect = Rectangle::try_new(g.x, g.y, g.width, g.height)
                    .with_context(|| format!("page {}: glyph {:?}", pageno + 1, g.text))?;
                Ok(
                    Glyph::builder(rect, &g.text, fonts.intern(&g.font), g.font_size)
                        .width_of_space(g.width_of_space.unwrap_or(f64::NAN))
                        .direction(g.direction)
                        .build(),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        let rulings = page
            .rulings
            .into_iter()
            .map(|r| {
                Ruling::vertical(r.x, r.top, r.bottom)
                    .with_context(|| format!("page {}: bad ruling", pageno + 1))
            })
            .collect::<Result<Vec<_>>>()?;
        pages.push(PageGlyphs::new(glyphs, rulings));
    }
    tracing::debug!(pages = pages.len(), fonts = fonts.len(), "loaded glyph dump");
    Ok(pages)
}

fn read_input(path: &Path) -> Result<Dump> {
    let mut buf = String::new();
    if path.as_os_str() == "-" {
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
    } else {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        BufReader::new(file)
            .read_to_string(&mut buf)
            .with_context(|| format!("reading {}", path.display()))?;
    }
    serde_json::from_str(&buf).context("parsing glyph dump")
}

fn write_output(out: &mut dyn Write, runs: &[Vec<TextRun>], output_type: OutputType) -> Result<()> {
    match output_type {
        OutputType::Text => {
            for (i, page) in runs.iter().enumerate() {
                if i > 0 {
                    writeln!(out, "\x0c")?;
                }
                for run in page {
                    writeln!(out, "{}", run.text())?;
                }
            }
        }
        OutputType::Json => {
            let pages: Vec<Vec<RunOut>> = runs
                .iter()
                .map(|page| page.iter().map(RunOut::from).collect())
                .collect();
            serde_json::to_writer_pretty(&mut *out, &pages)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let params = MergeParams::new(
        args.duplicate_overlap,
        args.space_tolerance,
        args.average_char_tolerance,
        args.line_variance,
        args.epsilon,
    )?;

    let pages = to_pages(read_input(&args.input)?)?;
    let runs = merge_pages(&pages, Some(params))?;

    let mut out: Box<dyn Write> = match &args.outfile {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    write_output(&mut out, &runs, args.output_type)?;
    out.flush()?;
    Ok(())
}
