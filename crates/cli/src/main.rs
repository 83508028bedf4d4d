use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polyfract::api::{
    centroid, draw_polygon_radial, output_len, perimeter, recenter_rescale, signed_area,
    CurveGenerator, Point2, RadialCfg, ReplayToken, Rule, Seams, SequenceCfg,
    DEFAULT_VERTEX_BUDGET,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;
mod state;

use points_io::TableFormat;
use provenance::{CurveParams, Provenance, SampleReplay};
use state::{CurveOutput, CurveRecord};

/// Sample polygons are scaled into this radius so they stay inside [-1, 1]².
const SAMPLE_MAX_RADIUS: f64 = 0.9;

#[derive(Parser)]
#[command(name = "polyfract")]
#[command(about = "Grow Koch and fractal curves from closed polygons")]
struct Cmd {
    /// Log every generation (DEBUG level)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Load a saved record, run its generations and write the curve (.json/.csv/.parquet)
    Iterate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Override the record's curve ("fractal" or "koch")
        #[arg(long)]
        rule: Option<String>,
        /// Override the record's iteration count
        #[arg(long)]
        iterations: Option<usize>,
        /// Drop the duplicated vertex between consecutive edge paths
        #[arg(long)]
        merge_seams: bool,
        /// Refuse generations above this vertex count (0 disables the limit)
        #[arg(long, default_value_t = DEFAULT_VERTEX_BUDGET)]
        max_vertices: usize,
    },
    /// Write a record holding a reproducible sample polygon
    Sample {
        #[arg(long, default_value_t = 5)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value = "koch")]
        rule: String,
        #[arg(long, default_value_t = 3)]
        iterations: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Build a record from a point table (.csv/.parquet with x,y columns)
    Points {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "fractal")]
        rule: String,
        #[arg(long, default_value_t = 3)]
        iterations: usize,
    },
    /// Print a JSON summary of a record or point table
    Report {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Iterate {
            input,
            out,
            rule,
            iterations,
            merge_seams,
            max_vertices,
        } => {
            let opts = IterateOpts {
                rule,
                iterations,
                seams: if merge_seams { Seams::Merge } else { Seams::Keep },
                max_vertices: (max_vertices > 0).then_some(max_vertices),
            };
            iterate(&input, &out, opts)
        }
        Action::Sample {
            vertices,
            seed,
            index,
            rule,
            iterations,
            out,
        } => sample(vertices, ReplayToken { seed, index }, &rule, iterations, &out),
        Action::Points {
            input,
            out,
            rule,
            iterations,
        } => points(&input, &out, &rule, iterations),
        Action::Report { input } => report(&input),
    }
}

struct IterateOpts {
    rule: Option<String>,
    iterations: Option<usize>,
    seams: Seams,
    max_vertices: Option<usize>,
}

fn iterate(input: &Path, out: &Path, opts: IterateOpts) -> Result<()> {
    let record = CurveRecord::load(input)?;
    let mut rule = record
        .rule()
        .with_context(|| format!("curve of {}", input.display()))?;
    if let Some(name) = &opts.rule {
        let requested: Rule = name.parse()?;
        if requested != rule {
            tracing::warn!(saved = %rule, requested = %requested, "overriding saved curve");
        }
        rule = requested;
    }
    let generations = opts.iterations.unwrap_or(record.iter_count);
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        rule = %rule,
        generations,
        side_count = record.side_count(),
        "iterate"
    );

    let cfg = SequenceCfg {
        seams: opts.seams,
        max_vertices: opts.max_vertices,
    };
    let mut gen = CurveGenerator::new(record.polygon(), rule)
        .with_context(|| format!("polygon of {}", input.display()))?
        .with_cfg(cfg);
    for _ in 0..generations {
        let len = gen.step()?.len();
        tracing::debug!(generation = gen.generation(), vertices = len, "generation");
    }
    tracing::info!(vertices = gen.vertices().len(), "done");

    match TableFormat::from_path(out) {
        Some(_) => points_io::write_points(out, gen.vertices())?,
        None => CurveOutput {
            source: record.clone(),
            rule: rule.name().to_string(),
            generation: gen.generation(),
            side_count: gen.side_count(),
            vertices: gen.vertices().iter().map(|p| [p.x, p.y]).collect(),
        }
        .save(out)?,
    }
    Provenance::new("iterate")
        .input(input)
        .curve(CurveParams {
            rule: rule.name().to_string(),
            side_count: gen.side_count(),
            seams: opts.seams.name().to_string(),
            generations,
            max_vertices: opts.max_vertices,
        })
        .vertices(gen.vertices().len())
        .write_next_to(out)?;
    Ok(())
}

fn sample(
    vertices: usize,
    tok: ReplayToken,
    rule: &str,
    iterations: usize,
    out: &Path,
) -> Result<()> {
    let rule: Rule = rule.parse()?;
    if vertices < 3 {
        bail!("a sample polygon needs at least 3 vertices, got {vertices}");
    }
    let cfg = RadialCfg {
        vertices,
        ..RadialCfg::default()
    };
    let raw = draw_polygon_radial(cfg, tok);
    let polygon = recenter_rescale(&raw, SAMPLE_MAX_RADIUS)
        .context("sample polygon is degenerate; try another seed or index")?;
    tracing::info!(
        vertices,
        seed = tok.seed,
        index = tok.index,
        rule = %rule,
        out = %out.display(),
        "sample"
    );
    CurveRecord::new(&polygon, rule, iterations).save(out)?;
    Provenance::new("sample")
        .curve(record_params(rule, vertices, iterations))
        .replay(SampleReplay {
            seed: tok.seed,
            index: tok.index,
        })
        .vertices(vertices)
        .write_next_to(out)?;
    Ok(())
}

fn points(input: &Path, out: &Path, rule: &str, iterations: usize) -> Result<()> {
    let rule: Rule = rule.parse()?;
    let polygon = points_io::read_points(input)?;
    tracing::info!(input = %input.display(), vertices = polygon.len(), rule = %rule, "points");
    if polygon.len() < 3 {
        bail!(
            "{} holds {} points; a closed polygon needs at least 3",
            input.display(),
            polygon.len()
        );
    }
    CurveRecord::new(&polygon, rule, iterations).save(out)?;
    Provenance::new("points")
        .input(input)
        .curve(record_params(rule, polygon.len(), iterations))
        .vertices(polygon.len())
        .write_next_to(out)?;
    Ok(())
}

/// Settings a freshly written record will be grown with by `iterate` defaults.
fn record_params(rule: Rule, side_count: usize, generations: usize) -> CurveParams {
    CurveParams {
        rule: rule.name().to_string(),
        side_count,
        seams: Seams::Keep.name().to_string(),
        generations,
        max_vertices: Some(DEFAULT_VERTEX_BUDGET),
    }
}

fn report(input: &Path) -> Result<()> {
    let summary = summarize(input)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn summarize(input: &Path) -> Result<serde_json::Value> {
    let (polygon, record) = match TableFormat::from_path(input) {
        Some(_) => (points_io::read_points(input)?, None),
        None => {
            let rec = CurveRecord::load(input)?;
            (rec.polygon(), Some(rec))
        }
    };
    let mut summary = shape_summary(&polygon);
    summary["code_rev"] = json!(provenance::git_rev());
    summary["input"] = json!(input.to_string_lossy());
    if let Some(rec) = record {
        let rule = rec.rule()?;
        let mut predicted = polygon.len();
        for _ in 0..rec.iter_count {
            predicted = output_len(predicted, rule, rec.side_count(), Seams::Keep);
        }
        summary["rule"] = json!(rule.name());
        summary["iter_count"] = json!(rec.iter_count);
        summary["predicted_vertices"] = json!(predicted);
    }
    Ok(summary)
}

fn shape_summary(polygon: &[Point2]) -> serde_json::Value {
    json!({
        "vertices": polygon.len(),
        "perimeter": perimeter(polygon),
        "signed_area": signed_area(polygon),
        "centroid": centroid(polygon).map(|c| [c.x, c.y]),
    })
}
