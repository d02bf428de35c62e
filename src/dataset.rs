//! # CSV Loading and Aggregation
//!
//! Parses the colony impact CSV and collapses it into one record per
//! (state, ansi, factor, year, state_code) group, averaging the observed
//! impact percentages within each group. The resulting [`Dataset`] is built
//! once at startup and shared read-only by all request handlers.

use crate::factors::Factor;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;
use thiserror::Error;

/// The exact header line the CSV must carry, in this column order.
pub const EXPECTED_HEADER: &str =
    "state,ansi,affected_by,year,state_code,pct_of_colonies_impacted";

/// Schema errors that abort loading. Any of these is fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing header line")]
    MissingHeader,
    #[error("unexpected header `{0}` (expected `{EXPECTED_HEADER}`)")]
    BadHeader(String),
    #[error("line {line}: expected 6 columns, got {got}")]
    ColumnCount { line: usize, got: usize },
    #[error("line {line}: unknown factor `{value}`")]
    UnknownFactor { line: usize, value: String },
    #[error("line {line}: invalid year `{value}`")]
    BadYear { line: usize, value: String },
    #[error("line {line}: invalid percentage `{value}`")]
    BadPct { line: usize, value: String },
}

/// One raw observation row from the CSV, before aggregation.
#[derive(Debug, Clone, PartialEq)]
struct RawRow {
    state: String,
    ansi: String,
    factor: Factor,
    year: i32,
    state_code: String,
    pct: f64,
}

/// One aggregated observation: the mean impact percentage for a
/// (state, ansi, factor, year, state_code) group.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub state: String,
    /// ANSI state code from the source data. Carried through as part of the
    /// grouping key; not used for filtering or display.
    pub ansi: String,
    pub factor: Factor,
    pub year: i32,
    pub state_code: String,
    pub impact_pct: f64,
}

/// The full aggregated record set, immutable after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Reads and aggregates the CSV at `path`. Any I/O or schema problem is
    /// an error; there is no partial load.
    pub fn load(path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Dataset::from_csv(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parses and aggregates CSV text.
    pub fn from_csv(text: &str) -> Result<Dataset, LoadError> {
        Ok(Dataset {
            records: aggregate(parse_csv(text)?),
        })
    }

    /// All aggregated records. No ordering is guaranteed; consumers filter
    /// by equality.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

fn parse_csv(text: &str) -> Result<Vec<RawRow>, LoadError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(LoadError::MissingHeader)?;
    if header.trim() != EXPECTED_HEADER {
        return Err(LoadError::BadHeader(header.trim().to_string()));
    }
    let mut rows = Vec::new();
    for (idx, line) in lines.enumerate() {
        // Header is line 1; data starts at line 2.
        let line_no = idx + 2;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 6 {
            return Err(LoadError::ColumnCount {
                line: line_no,
                got: fields.len(),
            });
        }
        let factor = Factor::from_wire(fields[2]).ok_or_else(|| LoadError::UnknownFactor {
            line: line_no,
            value: fields[2].to_string(),
        })?;
        let year = fields[3].parse().map_err(|_| LoadError::BadYear {
            line: line_no,
            value: fields[3].to_string(),
        })?;
        let pct = fields[5].parse().map_err(|_| LoadError::BadPct {
            line: line_no,
            value: fields[5].to_string(),
        })?;
        rows.push(RawRow {
            state: fields[0].to_string(),
            ansi: fields[1].to_string(),
            factor,
            year,
            state_code: fields[4].to_string(),
            pct,
        });
    }
    Ok(rows)
}

/// Collapses raw rows into one record per grouping key, averaging the
/// observations. A single-row group keeps its value.
fn aggregate(rows: Vec<RawRow>) -> Vec<Record> {
    rows.into_iter()
        .map(|r| ((r.state, r.ansi, r.factor, r.year, r.state_code), r.pct))
        .into_group_map()
        .into_iter()
        .map(|((state, ansi, factor, year, state_code), obs)| {
            let impact_pct = obs.iter().sum::<f64>() / obs.len() as f64;
            Record {
                state,
                ansi,
                factor,
                year,
                state_code,
                impact_pct,
            }
        })
        .collect()
}
