//! Point lists as tables (`x`, `y` columns) via polars.
//!
//! Format follows the file extension: `.csv` or `.parquet`.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use polyfract::api::Point2;
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "parquet" | "pq" => Some(Self::Parquet),
            _ => None,
        }
    }
}

pub fn points_frame(points: &[Point2]) -> PolarsResult<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    df!("x" => xs, "y" => ys)
}

pub fn write_points(path: &Path, points: &[Point2]) -> Result<()> {
    let Some(format) = TableFormat::from_path(path) else {
        bail!("unsupported table extension: {}", path.display());
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut df = points_frame(points)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing csv {}", path.display()))?;
        }
        TableFormat::Parquet => {
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing parquet {}", path.display()))?;
        }
    }
    Ok(())
}

pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let lf = match TableFormat::from_path(path) {
        Some(TableFormat::Csv) => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some(TableFormat::Parquet) => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        None => bail!("unsupported table extension: {}", path.display()),
    };
    let df = lf
        .select([col("x").cast(DataType::Float64), col("y").cast(DataType::Float64)])
        .collect()
        .with_context(|| format!("reading points from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(anyhow!(
                "row {row} of {} has a missing coordinate",
                path.display()
            )),
        })
        .collect()
}
