//! CSV column conversion: polars ingestion, bulk codec, JSON output.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use hexbind::{validity, HexBuf};
use polars::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Int,
    Str,
}

/// Load one column of a CSV file as a buffer of identifiers.
///
/// String columns go through the codec; numeric columns are cast to `u64`.
/// Nulls are rejected with their row index.
pub fn load_column(input: &Path, column: &str, validate: bool) -> Result<HexBuf> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .select([col(column)])
        .collect()
        .with_context(|| format!("reading column {column:?} from {}", input.display()))?;
    let series = df.column(column)?;
    tracing::info!(rows = df.height(), dtype = %series.dtype(), "loaded column");

    let buf = if series.dtype() == &DataType::String {
        let values = series
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.with_context(|| format!("null identifier at row {row}")))
            .collect::<Result<Vec<&str>>>()?;
        let buf = HexBuf::from_strings(values)?;
        if validate {
            validity::check_all(&buf)?;
        }
        buf
    } else {
        let cast = series.cast(&DataType::UInt64)?;
        let values = cast
            .u64()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.with_context(|| format!("null identifier at row {row}")))
            .collect::<Result<Vec<u64>>>()?;
        HexBuf::from_ints(values, validate)?
    };
    Ok(buf)
}

/// JSON array of the buffer in the requested representation.
pub fn render(buf: &HexBuf, to: Target) -> Value {
    match to {
        Target::Int => Value::from(buf.to_array_view().to_vec()),
        Target::Str => Value::from(buf.to_strings()),
    }
}

pub fn write_json(out: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    if out.is_dir() {
        bail!("output path {} is a directory", out.display());
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexbind::{HexError, InvalidIdentifier, MalformedIdentifier};
    use tempfile::tempdir;

    fn csv(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("cells.csv");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn string_column_converts_to_ints() {
        let dir = tempdir().unwrap();
        let path = csv(dir.path(), "name,h3\na,8928308280fffff\nb,8928308280bffff\n");
        let buf = load_column(&path, "h3", true).unwrap();
        assert_eq!(buf.to_array_view(), &[0x8928308280fffff, 0x8928308280bffff]);
        assert_eq!(
            render(&buf, Target::Int),
            serde_json::json!([0x8928308280fffff_u64, 0x8928308280bffff_u64])
        );
    }

    #[test]
    fn integer_column_converts_to_strings() {
        let dir = tempdir().unwrap();
        let id = 0x8928308280fffff_u64;
        let path = csv(dir.path(), &format!("h3\n{id}\n{id}\n"));
        let buf = load_column(&path, "h3", false).unwrap();
        assert_eq!(
            render(&buf, Target::Str),
            serde_json::json!(["8928308280fffff", "8928308280fffff"])
        );
    }

    #[test]
    fn malformed_row_aborts_with_position() {
        let dir = tempdir().unwrap();
        let path = csv(dir.path(), "h3\n8928308280fffff\nnot-hex\n");
        let err = load_column(&path, "h3", false).unwrap_err();
        let malformed = err.downcast_ref::<MalformedIdentifier>().unwrap();
        assert_eq!(malformed.position, Some(1));
    }

    #[test]
    fn validation_applies_to_string_columns() {
        let dir = tempdir().unwrap();
        let path = csv(dir.path(), "h3\n8928308280fffff\nfff\n");
        assert!(load_column(&path, "h3", false).is_ok());
        let err = load_column(&path, "h3", true).unwrap_err();
        let invalid = err.downcast_ref::<InvalidIdentifier>().unwrap();
        assert_eq!(invalid.position, Some(1));
        assert!(HexError::from(invalid.clone()).is_input_error());
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/out.json");
        write_json(&out, &serde_json::json!([1, 2])).unwrap();
        let back: Value = serde_json::from_slice(&std::fs::read(out).unwrap()).unwrap();
        assert_eq!(back, serde_json::json!([1, 2]));
    }
}
