//! CSV loader for batches of estimate inputs, and writer for their results.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter.
//! Header names are case-sensitive.
//!
//! | Column             | Required | Type    | Notes                                         |
//! |--------------------|----------|---------|-----------------------------------------------|
//! | `project_type`     | yes      | string  | `architecture`, `home`, `office`, `retail`, `turnkey` |
//! | `location`         | yes      | string  | `Gurgaon`, `Delhi NCR`, `Other City`, or any other city |
//! | `area`             | yes      | decimal | Built-up square feet                          |
//! | `finish_level`     | yes      | string  | `economy`, `premium`, `luxury`                |
//! | `timeline`         | yes      | string  | `standard`, `fast`                            |
//! | `property_type`    | no       | string  |                                               |
//! | `kitchen`          | no       | bool    | `true`/`false`, empty = false                 |
//! | `bedrooms`         | no       | integer | empty = 0                                     |
//! | `living_dining`    | no       | bool    |                                               |
//! | `wardrobes`        | no       | integer |                                               |
//! | `false_ceiling`    | no       | bool    |                                               |
//! | `flooring_upgrade` | no       | bool    |                                               |
//! | `workstations`     | no       | integer | office only                                   |
//! | `display_units`    | no       | bool    | retail only                                   |
//!
//! ### Minimal example
//!
//! ```csv
//! project_type,location,area,finish_level,timeline
//! retail,Delhi NCR,650,premium,fast
//! ```
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use estimate_core::{
    EstimateInput, EstimateResult, FinishLevel, ParseEnumError, PricingEngine, PricingError,
    ProjectType, Scope, TimelinePreference,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Serde-compatible rows that mirror the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    project_type: String,
    location: String,
    area: Decimal,
    finish_level: String,
    timeline: String,
    property_type: Option<String>,
    kitchen: Option<bool>,
    bedrooms: Option<i32>,
    living_dining: Option<bool>,
    wardrobes: Option<i32>,
    false_ceiling: Option<bool>,
    flooring_upgrade: Option<bool>,
    workstations: Option<i32>,
    display_units: Option<bool>,
}

/// One priced row, as written by [`write_results`].
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    project_type: ProjectType,
    location: &'a str,
    area: Decimal,
    finish_level: FinishLevel,
    timeline: TimelinePreference,
    min: Decimal,
    max: Decimal,
    design: Decimal,
    material: Decimal,
    execution: Decimal,
    timeline_days: u32,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// Bad structure, missing required column, type mismatch, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A project type, finish level or timeline cell held an unknown value.
    /// `row` is 1-based, not counting the header.
    #[error("{source} on row {row}")]
    InvalidValue {
        row: usize,
        #[source]
        source: ParseEnumError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine rejected a row. `row` is 1-based, not counting the header.
    #[error("{source} on row {row}")]
    Pricing {
        row: usize,
        #[source]
        source: PricingError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<EstimateInput, CsvLoadError> {
    let invalid = |source| CsvLoadError::InvalidValue {
        row: row_number,
        source,
    };

    Ok(EstimateInput {
        project_type: row.project_type.parse::<ProjectType>().map_err(invalid)?,
        property_type: row.property_type.unwrap_or_default(),
        location: row.location.trim().to_string(),
        area: row.area,
        scope: Scope {
            kitchen: row.kitchen.unwrap_or_default(),
            bedrooms: row.bedrooms.unwrap_or_default(),
            living_dining: row.living_dining.unwrap_or_default(),
            wardrobes: row.wardrobes.unwrap_or_default(),
            false_ceiling: row.false_ceiling.unwrap_or_default(),
            flooring_upgrade: row.flooring_upgrade.unwrap_or_default(),
            workstations: row.workstations.unwrap_or_default(),
            display_units: row.display_units.unwrap_or_default(),
        },
        finish_level: row.finish_level.parse::<FinishLevel>().map_err(invalid)?,
        timeline: row.timeline.parse::<TimelinePreference>().map_err(invalid)?,
    })
}

/// Parse estimate inputs from any reader.
///
/// Stops at the first bad row.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<EstimateInput>, CsvLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut inputs = Vec::new();
    for (idx, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        inputs.push(convert_row(record?, idx + 1)?);
    }

    tracing::debug!(rows = inputs.len(), "loaded estimate inputs from CSV");
    Ok(inputs)
}

/// Open `path` and parse it.
pub fn load_from_file(path: &Path) -> Result<Vec<EstimateInput>, CsvLoadError> {
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Price every input with `engine`, keeping each input next to its result.
///
/// Locations are passed through as loaded, so a blank cell prices like any
/// other unknown location. Stops at the first row the engine rejects.
pub fn price_all(
    engine: &PricingEngine,
    inputs: Vec<EstimateInput>,
) -> Result<Vec<(EstimateInput, EstimateResult)>, CsvLoadError> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(idx, input)| {
            let result = engine
                .calculate(&input)
                .map_err(|source| CsvLoadError::Pricing {
                    row: idx + 1,
                    source,
                })?;
            Ok((input, result))
        })
        .collect()
}

/// Write inputs alongside their estimates, one row each.
pub fn write_results<W: Write>(
    writer: W,
    rows: &[(EstimateInput, EstimateResult)],
) -> Result<(), CsvLoadError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (input, result) in rows {
        csv_writer.serialize(ResultRow {
            project_type: input.project_type,
            location: &input.location,
            area: input.area,
            finish_level: input.finish_level,
            timeline: input.timeline,
            min: result.min,
            max: result.max,
            design: result.breakup.design,
            material: result.breakup.material,
            execution: result.breakup.execution,
            timeline_days: result.timeline_days,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
