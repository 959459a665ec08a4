use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Writer};

use crate::error::{Error, Result};
use crate::sample::{CellValue, TabularSample};

/// Read a CSV file into a sample.
///
/// Cells that parse as floats become numbers, empty cells become nulls,
/// anything else is kept as text. Without a header row, columns are named
/// `column_0`, `column_1`, and so on. Short rows are padded with nulls so
/// the shape invariant holds.
pub fn read_csv<P: AsRef<Path>>(path: P, has_header: bool) -> Result<TabularSample> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut columns: Vec<String> = Vec::new();
    if has_header {
        columns = rdr
            .headers()
            .map_err(Error::Csv)?
            .iter()
            .map(|h| h.to_string())
            .collect();
    }

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(Error::Csv)?;

        // Without a header, infer column names from the first record
        if columns.is_empty() {
            columns = (0..record.len()).map(|i| format!("column_{}", i)).collect();
        }

        let mut row: Vec<CellValue> = record.iter().map(parse_cell).collect();
        row.resize(columns.len(), CellValue::Null);
        row.truncate(columns.len());
        rows.push(row);
    }

    TabularSample::from_rows(columns, rows)
}

/// Write a sample to a CSV file. Null cells become empty fields.
pub fn write_csv<P: AsRef<Path>>(sample: &TabularSample, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(&sample.columns).map_err(Error::Csv)?;
    for row in &sample.rows {
        let record: Vec<String> = row.iter().map(format_cell).collect();
        wtr.write_record(&record).map_err(Error::Csv)?;
    }
    wtr.flush().map_err(Error::Io)?;

    Ok(())
}

fn parse_cell(field: &str) -> CellValue {
    if field.is_empty() {
        CellValue::Null
    } else if let Ok(v) = field.parse::<f64>() {
        if v.is_finite() {
            CellValue::Number(v)
        } else {
            CellValue::Text(field.to_string())
        }
    } else {
        CellValue::Text(field.to_string())
    }
}

fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(v) => v.to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::Null => String::new(),
    }
}
