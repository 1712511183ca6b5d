use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int16Array, Int32Array, Int64Array, Int8Array,
    StringArray, UInt8Array,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Source column names.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – the dashboard export with a header row (recommended)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – same column names, numeric columns may be ints or floats
///
/// Rows that cannot be parsed are skipped with a warning; a missing file or a
/// missing required column is an error.
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening CSV {}", path.display()))?;
            read_csv(file)?
        }
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    log::info!(
        "Loaded {} launches from {} (sites {:?}, payload {}..{} kg)",
        dataset.len(),
        path.display(),
        dataset.sites,
        dataset.min_payload,
        dataset.max_payload
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Row schema shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

/// One source row. Extra columns (flight number, booster version, …) are ignored.
#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl TryFrom<RawLaunchRow> for LaunchRecord {
    type Error = anyhow::Error;

    fn try_from(raw: RawLaunchRow) -> Result<Self> {
        Ok(LaunchRecord {
            site: raw.site.trim().to_string(),
            payload_mass: check_payload(raw.payload_mass)?,
            outcome: Outcome::from_class(raw.class.round() as i64),
            booster_category: raw.booster_category.trim().to_string(),
        })
    }
}

/// Payload mass must be a finite, non-negative number of kilograms.
fn check_payload(mass: f64) -> Result<f64> {
    if !mass.is_finite() || mass < 0.0 {
        bail!("payload mass {mass} is not a finite non-negative number");
    }
    Ok(mass)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV launch data from any reader.
///
/// The header row must contain the four required columns; any order, any
/// additional columns (including pandas' unnamed index column).
pub fn read_csv<R: Read>(source: R) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Skipping unreadable CSV row: {e}");
                continue;
            }
        };
        let line = csv_line(&row);
        let parsed = row
            .deserialize::<RawLaunchRow>(Some(&headers))
            .map_err(anyhow::Error::from)
            .and_then(LaunchRecord::try_from);
        match parsed {
            Ok(rec) => records.push(rec),
            Err(e) => log::warn!("Skipping CSV line {line}: {e}"),
        }
    }

    Ok(LaunchDataset::from_records(records))
}

/// 1-based line in the file, header included.
fn csv_line(row: &csv::StringRecord) -> u64 {
    row.position().map_or(0, |p| p.line())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 0.0,
///     "class": 0, "Booster Version Category": "v1.0" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

/// Parse records-oriented JSON launch data.
pub fn parse_json(text: &str) -> Result<LaunchDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = match root {
        JsonValue::Array(rows) => rows,
        _ => bail!("Expected top-level JSON array"),
    };

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        let parsed = serde_json::from_value::<RawLaunchRow>(row)
            .map_err(anyhow::Error::from)
            .and_then(LaunchRecord::try_from);
        match parsed {
            Ok(rec) => records.push(rec),
            Err(e) => log::warn!("Skipping JSON row {i}: {e}"),
        }
    }

    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the launch columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): text columns may be Utf8 or LargeUtf8,
/// numeric columns any common integer or float type.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut row_base = 0usize;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let columns = [
            column(&batch, COL_SITE)?,
            column(&batch, COL_PAYLOAD)?,
            column(&batch, COL_CLASS)?,
            column(&batch, COL_BOOSTER)?,
        ];

        for row in 0..batch.num_rows() {
            match parquet_row(&columns, row) {
                Ok(rec) => records.push(rec),
                Err(e) => log::warn!("Skipping parquet row {}: {e:#}", row_base + row),
            }
        }
        row_base += batch.num_rows();
    }

    Ok(LaunchDataset::from_records(records))
}

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

/// Columns in `[site, payload, class, booster]` order.
fn parquet_row(columns: &[&Arc<dyn Array>; 4], row: usize) -> Result<LaunchRecord> {
    let [site, payload, class, booster] = columns;
    Ok(LaunchRecord {
        site: extract_string(site, row).context("site")?,
        payload_mass: check_payload(extract_f64(payload, row).context("payload")?)?,
        outcome: Outcome::from_class(extract_f64(class, row).context("class")?.round() as i64),
        booster_category: extract_string(booster, row).context("booster")?,
    })
}

// -- Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).trim().to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).trim().to_string()),
        other => bail!("expected a text column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }

    macro_rules! cast {
        ($ty:ty) => {
            col.as_any()
                .downcast_ref::<$ty>()
                .map(|arr| arr.value(row) as f64)
                .context(concat!("expected ", stringify!($ty)))
        };
    }

    match col.data_type() {
        DataType::Float64 => cast!(Float64Array),
        DataType::Float32 => cast!(Float32Array),
        DataType::Int64 => cast!(Int64Array),
        DataType::Int32 => cast!(Int32Array),
        DataType::Int16 => cast!(Int16Array),
        DataType::Int8 => cast!(Int8Array),
        DataType::UInt8 => cast!(UInt8Array),
        other => bail!("expected a numeric column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,5,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
5,6,KSC LC-39A,1,not-a-number,F9 FT B1032.1,FT
6,7,CCAFS SLC-40,1,9600.0,F9 B5 B1046.1,B5
";

    #[test]
    fn csv_parses_and_skips_malformed_rows() {
        let ds = read_csv(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 6);
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 9600.0);
        assert_eq!(
            ds.sites,
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        assert_eq!(ds.booster_categories, vec!["v1.0", "v1.1", "FT", "B5"]);

        let ksc = &ds.records[4];
        assert_eq!(ksc.site, "KSC LC-39A");
        assert_eq!(ksc.payload_mass, 2490.0);
        assert_eq!(ksc.outcome, Outcome::Success);
        assert_eq!(ksc.booster_category, "FT");
    }

    #[test]
    fn non_finite_and_negative_payloads_are_skipped() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,500,v1.0
KSC LC-39A,1,inf,FT
KSC LC-39A,1,NaN,FT
KSC LC-39A,1,-20,FT
KSC LC-39A,0,3000,FT
";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.min_payload, 500.0);
        assert_eq!(ds.max_payload, 3000.0);
        assert!(ds.records.iter().all(|r| r.payload_mass.is_finite()));
    }

    #[test]
    fn negative_json_payload_is_skipped() {
        // JSON has no NaN or inf literal; a negative mass is the malformed case here.
        let json = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": -1.0, "class": 1, "Booster Version Category": "FT"},
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 2000.0, "class": 1, "Booster Version Category": "FT"}
        ]"#;
        let ds = parse_json(json).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.min_payload, 2000.0);
    }

    #[test]
    fn csv_line_counts_the_header() {
        let text = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                    KSC LC-39A,500,1,FT\n\
                    KSC LC-39A,oops,1,FT\n";
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let lines: Vec<u64> = reader.records().map(|r| csv_line(&r.unwrap())).collect();
        assert_eq!(lines, vec![2, 3]);
    }

    #[test]
    fn payload_check() {
        assert!(check_payload(0.0).is_ok());
        assert!(check_payload(f64::INFINITY).is_err());
        assert!(check_payload(f64::NAN).is_err());
        assert!(check_payload(-0.5).is_err());
    }

    #[test]
    fn csv_missing_column_is_an_error() {
        let csv = "Launch Site,class,Booster Version Category\nCCAFS LC-40,1,v1.0\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Payload Mass (kg)"));
    }

    #[test]
    fn json_records_are_parsed() {
        let json = r#"[
            {"Launch Site": "KSC LC-39A", "Payload Mass (kg)": 3000, "class": 1, "Booster Version Category": "FT"},
            {"Launch Site": "KSC LC-39A", "class": 0},
            {"Launch Site": "VAFB SLC-4E", "Payload Mass (kg)": 9600.5, "class": 0, "Booster Version Category": "B4"}
        ]"#;
        let ds = parse_json(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.max_payload, 9600.5);
    }

    #[test]
    fn json_must_be_an_array() {
        assert!(parse_json("{}").is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_file(Path::new("launches.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn parquet_accepts_integer_and_float_columns() {
        use arrow::datatypes::{Field, Schema};
        use parquet::arrow::ArrowWriter;

        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD, DataType::Float64, true),
            Field::new(COL_CLASS, DataType::Int64, false),
            Field::new(COL_BOOSTER, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"])),
                Arc::new(Float64Array::from(vec![Some(500.0), None, Some(9600.0)])),
                Arc::new(Int64Array::from(vec![1, 0, 0])),
                Arc::new(StringArray::from(vec!["v1.0", "FT", "B4"])),
            ],
        )
        .unwrap();

        let path = std::env::temp_dir().join(format!("launch-dash-{}.parquet", std::process::id()));
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        // The row with a null payload is skipped.
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].outcome, Outcome::Success);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.max_payload, 9600.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_file(Path::new("does/not/exist.csv")).is_err());
    }
}
