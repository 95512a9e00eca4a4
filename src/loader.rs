//! Loads a city's trip CSV into memory.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::city::City;
use crate::record::TripRecord;

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Which optional columns a dataset carries. Detected once from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Schema {
    pub fn from_headers(headers: &csv::StringRecord) -> Self {
        let has = |name: &str| headers.iter().any(|h| h.trim() == name);
        Schema {
            has_gender: has(GENDER_COLUMN),
            has_birth_year: has(BIRTH_YEAR_COLUMN),
        }
    }

    /// Both demographic columns are present.
    pub fn has_demographics(&self) -> bool {
        self.has_gender && self.has_birth_year
    }
}

/// Every trip for one city, plus the shape of its source file.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    pub schema: Schema,
    pub records: Vec<TripRecord>,
}

/// Reads `<data_dir>/<city file>`.
#[tracing::instrument(skip(data_dir), fields(city = %city))]
pub fn load_city(data_dir: &Path, city: City) -> Result<Dataset> {
    let path = data_dir.join(city.file_name());
    debug!(path = %path.display(), "Opening city dataset");

    let file = File::open(&path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;

    load_from_reader(city, file).with_context(|| format!("failed to read {}", path.display()))
}

/// Parses a city dataset from any CSV source.
pub fn load_from_reader<R: Read>(city: City, reader: R) -> Result<Dataset> {
    let mut rdr = csv::Reader::from_reader(reader);
    let schema = Schema::from_headers(rdr.headers()?);

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize().enumerate() {
        // +2: header line and 1-based numbering
        let record: TripRecord = result.with_context(|| format!("bad row at line {}", idx + 2))?;
        records.push(record);
    }

    info!(
        rows = records.len(),
        has_gender = schema.has_gender,
        has_birth_year = schema.has_birth_year,
        "Dataset loaded"
    );

    Ok(Dataset {
        city,
        schema,
        records,
    })
}
