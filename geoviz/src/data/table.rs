use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use super::incident::{Incident, CATEGORY_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN};
use crate::error::GeovizError;

/// Number of rows the incident maps are built from.
pub const DEFAULT_ROW_LIMIT: usize = 100;

/// In-memory CSV table: a header record and the rows in file order.
///
/// Cells are kept as text with surrounding whitespace removed. Typed views are produced on demand
/// with [`Table::column`] and [`Table::incidents`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Creates a table from its parts. Headers and cells are trimmed.
    pub fn new(mut headers: StringRecord, mut rows: Vec<StringRecord>) -> Self {
        headers.trim();
        rows.iter_mut().for_each(StringRecord::trim);
        Self { headers, rows }
    }

    /// Reads a CSV document with a header row.
    ///
    /// All rows must have the same number of fields as the header.
    pub fn from_reader(reader: impl Read) -> Result<Self, GeovizError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self { headers, rows })
    }

    /// Reads a CSV file with a header row.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GeovizError> {
        let file = std::fs::File::open(path.as_ref()).map_err(|err| {
            GeovizError::FsIo(format!("failed to open {:?}: {err}", path.as_ref()))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Header record.
    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.headers.iter()
    }

    /// Position of the column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of rows, not counting the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    /// Row by its position.
    pub fn row(&self, index: usize) -> Option<&StringRecord> {
        self.rows.get(index)
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &StringRecord> + '_ {
        self.rows.iter()
    }

    /// Keeps the first `limit` rows and drops the rest. Columns are unchanged.
    pub fn limit(mut self, limit: usize) -> Self {
        self.rows.truncate(limit);
        self
    }

    /// Copy of the first `count` rows.
    pub fn head(&self, count: usize) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(count).cloned().collect(),
        }
    }

    /// Parses every cell of a column into `T`.
    pub fn column<T: FromStr>(&self, name: &str) -> Result<Vec<T>, GeovizError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| GeovizError::MissingColumn(name.to_string()))?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let value = record.get(index).unwrap_or_default();
                value.parse().map_err(|_| GeovizError::InvalidValue {
                    column: name.to_string(),
                    row,
                    value: value.to_string(),
                })
            })
            .collect()
    }

    /// Converts the rows into incident records.
    ///
    /// The table must have `X`, `Y` and `Category` columns.
    pub fn incidents(&self) -> Result<Vec<Incident>, GeovizError> {
        for required in [LONGITUDE_COLUMN, LATITUDE_COLUMN, CATEGORY_COLUMN] {
            if self.column_index(required).is_none() {
                return Err(GeovizError::MissingColumn(required.to_string()));
            }
        }

        self.rows
            .iter()
            .map(|record| {
                record
                    .deserialize(Some(&self.headers))
                    .map_err(GeovizError::from)
            })
            .collect()
    }

    /// Writes the table as CSV, header first.
    pub fn write_csv(&self, writer: impl Write) -> Result<(), GeovizError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}
