use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, BooleanArray, Float64Array, Int32Array, Int64Array, LargeStringArray, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{Nomination, NominationTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a nomination table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `name`, `film`, `category`, `year_film`, `winner`
/// * `.json`    – `[{ "name": ..., "film": ..., "category": ..., ... }, ...]`
/// * `.parquet` – columns of the same names
///
/// `year_ceremony` and `ceremony` are read when present.
pub fn load_file(path: &Path) -> Result<NominationTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let rows = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    NominationTable::from_rows(rows).context("dataset contains no nominations")
}

// ---------------------------------------------------------------------------
// Shared record shape
// ---------------------------------------------------------------------------

/// Winner column as found in the wild: `1`/`0`, `true`/`false`, `True`/`False`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WinnerFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl WinnerFlag {
    fn to_bool(&self) -> Option<bool> {
        match self {
            WinnerFlag::Bool(b) => Some(*b),
            WinnerFlag::Int(0) => Some(false),
            WinnerFlag::Int(1) => Some(true),
            WinnerFlag::Int(_) => None,
            WinnerFlag::Text(s) => parse_winner(s),
        }
    }
}

fn parse_winner(s: &str) -> Option<bool> {
    match s.trim() {
        "1" | "1.0" | "true" | "True" | "TRUE" => Some(true),
        "0" | "0.0" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// One row before validation. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    year_film: Option<i32>,
    #[serde(default)]
    year_ceremony: Option<i32>,
    #[serde(default)]
    ceremony: Option<u32>,
    category: Option<String>,
    name: Option<String>,
    film: Option<String>,
    winner: WinnerFlag,
}

impl RawRecord {
    fn into_nomination(self, row: usize) -> Result<Nomination> {
        let year_film = self
            .year_film
            .with_context(|| format!("Row {row}: missing 'year_film'"))?;
        let category = self
            .category
            .filter(|c| !c.trim().is_empty())
            .with_context(|| format!("Row {row}: missing 'category'"))?;
        let winner = self
            .winner
            .to_bool()
            .with_context(|| format!("Row {row}: unrecognised 'winner' value {:?}", self.winner))?;

        Ok(Nomination {
            year_film,
            year_ceremony: self.year_ceremony,
            ceremony: self.ceremony,
            category,
            name: non_empty(self.name),
            film: non_empty(self.film),
            winner,
        })
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one nomination per record.
/// Empty cells are read as missing values.
fn load_csv(path: &Path) -> Result<Vec<Nomination>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in ["name", "film", "category", "year_film", "winner"] {
        if !headers.iter().any(|h| h == required) {
            bail!("CSV missing '{required}' column");
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRecord>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(raw.into_nomination(row_no)?);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "year_film": 1927, "category": "ACTOR", "name": "Emil Jannings",
///     "film": "The Last Command", "winner": true },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<Nomination>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON records")?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_nomination(i))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by **Pandas** (`df.to_parquet()`) or
/// **Polars** (`df.write_parquet()`) with the same column names as the CSV.
///
/// Integer columns containing nulls are commonly stored as Float64 by Pandas;
/// those are accepted when the value is integral.
fn load_parquet(path: &Path) -> Result<Vec<Nomination>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut rows)?;
    }
    Ok(rows)
}

fn read_batch(batch: &RecordBatch, rows: &mut Vec<Nomination>) -> Result<()> {
    let year_film = column(batch, "year_film")?;
    let category = column(batch, "category")?;
    let name = column(batch, "name")?;
    let film = column(batch, "film")?;
    let winner = column(batch, "winner")?;
    let year_ceremony = batch.column_by_name("year_ceremony");
    let ceremony = batch.column_by_name("ceremony");

    let offset = rows.len();
    for row in 0..batch.num_rows() {
        let row_no = offset + row;
        let ctx = |col: &str| format!("Row {row_no}: failed to read '{col}'");

        let raw = RawRecord {
            year_film: int_at(year_film, row)
                .with_context(|| ctx("year_film"))?
                .map(i32::try_from)
                .transpose()
                .with_context(|| ctx("year_film"))?,
            year_ceremony: match year_ceremony {
                Some(col) => int_at(col, row)
                    .with_context(|| ctx("year_ceremony"))?
                    .map(i32::try_from)
                    .transpose()
                    .with_context(|| ctx("year_ceremony"))?,
                None => None,
            },
            ceremony: match ceremony {
                Some(col) => int_at(col, row)
                    .with_context(|| ctx("ceremony"))?
                    .map(u32::try_from)
                    .transpose()
                    .with_context(|| ctx("ceremony"))?,
                None => None,
            },
            category: string_at(category, row).with_context(|| ctx("category"))?,
            name: string_at(name, row).with_context(|| ctx("name"))?,
            film: string_at(film, row).with_context(|| ctx("film"))?,
            winner: winner_at(winner, row).with_context(|| ctx("winner"))?,
        };
        rows.push(raw.into_nomination(row_no)?);
    }
    Ok(())
}

// -- Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    batch
        .column_by_name(name)
        .with_context(|| format!("Parquet file missing '{name}' column"))
}

fn downcast<'a, T: 'static>(col: &'a Arc<dyn Array>) -> Result<&'a T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array for {:?}", col.data_type()))
}

fn string_at(col: &Arc<dyn Array>, row: usize) -> Result<Option<String>> {
    if col.is_null(row) {
        return Ok(None);
    }
    match col.data_type() {
        DataType::Utf8 => Ok(Some(downcast::<StringArray>(col)?.value(row).to_string())),
        DataType::LargeUtf8 => Ok(Some(
            downcast::<LargeStringArray>(col)?.value(row).to_string(),
        )),
        other => bail!("expected string column, got {other:?}"),
    }
}

fn int_at(col: &Arc<dyn Array>, row: usize) -> Result<Option<i64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    match col.data_type() {
        DataType::Int32 => Ok(Some(downcast::<Int32Array>(col)?.value(row) as i64)),
        DataType::Int64 => Ok(Some(downcast::<Int64Array>(col)?.value(row))),
        DataType::Float64 => {
            let v = downcast::<Float64Array>(col)?.value(row);
            if v.is_nan() {
                Ok(None)
            } else if v.fract() == 0.0 {
                Ok(Some(v as i64))
            } else {
                bail!("{v} is not an integer")
            }
        }
        other => bail!("expected integer column, got {other:?}"),
    }
}

fn winner_at(col: &Arc<dyn Array>, row: usize) -> Result<WinnerFlag> {
    if col.is_null(row) {
        bail!("null winner flag");
    }
    match col.data_type() {
        DataType::Boolean => Ok(WinnerFlag::Bool(downcast::<BooleanArray>(col)?.value(row))),
        DataType::Utf8 | DataType::LargeUtf8 => Ok(WinnerFlag::Text(
            string_at(col, row)?.unwrap_or_default(),
        )),
        _ => int_at(col, row)?
            .map(WinnerFlag::Int)
            .context("null winner flag"),
    }
}
