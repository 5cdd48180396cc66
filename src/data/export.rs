use std::path::Path;

use thiserror::Error;

use super::points::DomainPoint;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk format for saved target points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsFormat {
    Json,
    Csv,
}

impl PointsFormat {
    pub fn extension(self) -> &'static str {
        match self {
            PointsFormat::Json => "json",
            PointsFormat::Csv => "csv",
        }
    }

    pub fn filter_name(self) -> &'static str {
        match self {
            PointsFormat::Json => "JSON",
            PointsFormat::Csv => "CSV",
        }
    }
}

/// Default file stem for exported points, e.g. `targets_20240115_120000`.
pub fn default_file_stem() -> String {
    format!("targets_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

pub fn save_points_csv<P: AsRef<Path>>(path: P, points: &[DomainPoint]) -> Result<(), ExportError> {
    use std::io::Write;
    let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(f, "t,a")?;
    for p in points {
        writeln!(f, "{},{}", p.t, p.a)?;
    }
    f.flush()?;
    Ok(())
}

/// Write points as a JSON array of `{t, a}` objects (the fit request's wire format).
pub fn save_points_json<P: AsRef<Path>>(path: P, points: &[DomainPoint]) -> Result<(), ExportError> {
    let s = serde_json::to_string_pretty(points)?;
    std::fs::write(path, s)?;
    Ok(())
}

pub fn load_points_json<P: AsRef<Path>>(path: P) -> Result<Vec<DomainPoint>, ExportError> {
    let s = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&s)?)
}
