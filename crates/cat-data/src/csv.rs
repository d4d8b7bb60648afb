//! CSV bundle loader.
//!
//! # CSV formats
//!
//! Three files, person and item ids 1-based as in the study files they come
//! from (internal ids are 0-based; the conversion happens here):
//!
//! ```csv
//! person_id,theta
//! 1,0.42
//! 2,-1.10
//! ```
//!
//! ```csv
//! item,b,a
//! 1,-0.5,1.2
//! 2,0.8,0.9
//! ```
//!
//! The `a` (discrimination) column is optional — omit it for a 1PL pool.
//!
//! ```csv
//! person_id,item,outcome
//! 1,1,1
//! 1,2,0
//! ```
//!
//! The response file must contain exactly one row per (person, item) pair
//! with a 0/1 outcome; anything else is rejected at load time.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use cat_core::params::{DIFFICULTY, DISCRIMINATION, THETA};
use cat_core::{CatError, CatResult, ItemId, ParamTable, PersonId, Response, ResponseUniverse};

use crate::loader::{Bundle, DataLoader};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PersonRecord {
    person_id: u32,
    theta:     f64,
}

#[derive(Deserialize)]
struct ItemRecord {
    item: u32,
    b:    f64,
    a:    Option<f64>,
}

#[derive(Deserialize)]
struct ResponseRecord {
    person_id: u32,
    item:      u32,
    outcome:   u8,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Loads the input bundle from three CSV files.
pub struct CsvLoader {
    persons:   PathBuf,
    items:     PathBuf,
    responses: PathBuf,
}

impl CsvLoader {
    pub fn new(persons: &Path, items: &Path, responses: &Path) -> Self {
        Self {
            persons:   persons.to_path_buf(),
            items:     items.to_path_buf(),
            responses: responses.to_path_buf(),
        }
    }
}

impl DataLoader for CsvLoader {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn load(&self) -> CatResult<Bundle> {
        load_bundle_readers(
            std::fs::File::open(&self.persons)?,
            std::fs::File::open(&self.items)?,
            std::fs::File::open(&self.responses)?,
        )
    }
}

/// Like [`CsvLoader`] but over any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or loading from network
/// streams.
pub fn load_bundle_readers<P, I, R>(persons: P, items: I, responses: R) -> CatResult<Bundle>
where
    P: Read,
    I: Read,
    R: Read,
{
    let person_truth = load_persons(persons)?;
    let item_truth = load_items(items)?;
    let universe = load_universe(responses, person_truth.len(), item_truth.len())?;
    Ok(Bundle { universe, person_truth, item_truth })
}

// ── Per-file loaders ──────────────────────────────────────────────────────────

fn load_persons<P: Read>(reader: P) -> CatResult<ParamTable> {
    let mut rows: Vec<PersonRecord> = Vec::new();
    for result in csv::Reader::from_reader(reader).deserialize::<PersonRecord>() {
        rows.push(result.map_err(|e| CatError::Parse(e.to_string()))?);
    }
    let mut theta = vec![f64::NAN; rows.len()];
    for row in &rows {
        let index = external_index(row.person_id, rows.len(), "person_id")?;
        if !theta[index].is_nan() {
            return Err(CatError::Parse(format!("duplicate person_id {}", row.person_id)));
        }
        theta[index] = row.theta;
    }
    ParamTable::new(rows.len()).with_column(THETA, theta)
}

fn load_items<I: Read>(reader: I) -> CatResult<ParamTable> {
    let mut rows: Vec<ItemRecord> = Vec::new();
    for result in csv::Reader::from_reader(reader).deserialize::<ItemRecord>() {
        rows.push(result.map_err(|e| CatError::Parse(e.to_string()))?);
    }
    let mut b = vec![f64::NAN; rows.len()];
    let mut a = vec![f64::NAN; rows.len()];
    let mut has_a = 0usize;
    for row in &rows {
        let index = external_index(row.item, rows.len(), "item")?;
        if !b[index].is_nan() {
            return Err(CatError::Parse(format!("duplicate item {}", row.item)));
        }
        b[index] = row.b;
        if let Some(value) = row.a {
            a[index] = value;
            has_a += 1;
        }
    }
    let table = ParamTable::new(rows.len()).with_column(DIFFICULTY, b)?;
    match has_a {
        0 => Ok(table),
        n if n == rows.len() => table.with_column(DISCRIMINATION, a),
        _ => Err(CatError::Parse(
            "discrimination column `a` must be present for all items or none".into(),
        )),
    }
}

fn load_universe<R: Read>(
    reader:    R,
    n_persons: usize,
    n_items:   usize,
) -> CatResult<ResponseUniverse> {
    let mut records: Vec<Response> = Vec::with_capacity(n_persons * n_items);
    for result in csv::Reader::from_reader(reader).deserialize::<ResponseRecord>() {
        let row = result.map_err(|e| CatError::Parse(e.to_string()))?;
        records.push(Response {
            person:  PersonId(external_index(row.person_id, n_persons, "person_id")? as u32),
            item:    ItemId(external_index(row.item, n_items, "item")? as u32),
            outcome: row.outcome,
        });
    }
    // Coverage, duplicates, and dichotomy are checked by the universe itself.
    ResponseUniverse::from_records(&records, n_persons, n_items)
}

/// Convert a 1-based file id into a 0-based index, rejecting 0 and overflow.
fn external_index(id: u32, len: usize, what: &str) -> CatResult<usize> {
    if id == 0 || id as usize > len {
        return Err(CatError::Parse(format!(
            "{what} {id} outside the 1..={len} range"
        )));
    }
    Ok(id as usize - 1)
}
