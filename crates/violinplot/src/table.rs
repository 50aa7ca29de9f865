//! Tabular input for violin figures.
//!
//! ## Purpose
//!
//! This module reads long-format tables (one observation per row) from CSV or
//! TSV and hands out the value, category and hue columns a figure needs. It
//! also writes tables back out, which the demo programs use to export their
//! synthetic datasets.
//!
//! ## Design notes
//!
//! * **By header name**: Columns are looked up by their header, never by index.
//! * **Missing values**: Rows whose value cell is blank, `NA` or `NaN` are
//!   dropped and counted; every other unparsable cell is an error naming its
//!   row and column.
//! * **Strict labels**: A blank category or hue cell on a kept row is an error.
//!
//! ## Invariants
//!
//! * All rows have as many cells as the header.
//! * Extracted columns are aligned: row `i` of each column is one observation.
//!
//! ## Non-goals
//!
//! * This module does not infer column types or parse dates.
//! * This module does not reshape wide tables into long format.

// External dependencies
use num_traits::Float;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

// Export dependencies from violin crate
use violin::internals::primitives::errors::ViolinError;

// Internal dependencies
use crate::errors::{PlotError, PlotResult};

// ============================================================================
// Extracted Columns
// ============================================================================

/// Value, category and hue columns of one figure, row-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns<T> {
    /// Observations.
    pub values: Vec<T>,

    /// Category label of each observation.
    pub categories: Vec<String>,

    /// Hue label of each observation, if a hue column was requested.
    pub hues: Option<Vec<String>>,

    /// Rows dropped because their value cell was missing.
    pub dropped: usize,
}

// ============================================================================
// Data Table
// ============================================================================

/// A long-format table of string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create an empty table with the given header.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from row-aligned columns.
    pub fn from_columns<T: Float + ToString, S: AsRef<str>>(
        value_name: &str,
        values: &[T],
        category_name: &str,
        categories: &[S],
        hue: Option<(&str, &[S])>,
    ) -> PlotResult<Self> {
        let label_lens = core::iter::once(categories.len()).chain(hue.map(|(_, h)| h.len()));
        for labels_len in label_lens {
            if labels_len != values.len() {
                return Err(ViolinError::MismatchedInputs {
                    values_len: values.len(),
                    labels_len,
                }
                .into());
            }
        }

        let mut headers = vec![value_name.to_string(), category_name.to_string()];
        if let Some((name, _)) = hue {
            headers.push(name.to_string());
        }
        let mut table = Self::new(headers);

        for (i, (v, c)) in values.iter().zip(categories.iter()).enumerate() {
            let mut row = vec![v.to_string(), c.as_ref().to_string()];
            if let Some((_, hues)) = hue {
                row.push(hues[i].as_ref().to_string());
            }
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Read a table from any reader.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> PlotResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(rows = rows.len(), columns = headers.len(), "read table");
        Ok(Self { headers, rows })
    }

    /// Read a CSV file (or TSV, when the extension is `.tsv`).
    pub fn read_csv<P: AsRef<Path>>(path: P) -> PlotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(file, delimiter_for(path))
    }

    /// Write the table as CSV to any writer.
    pub fn to_writer<W: Write>(&self, writer: W) -> PlotResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the table to a CSV (or TSV) file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> PlotResult<()> {
        let path = path.as_ref();
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter_for(path))
            .from_path(path)?;
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<String>) -> PlotResult<()> {
        if row.len() != self.headers.len() {
            return Err(ViolinError::InvalidInput(format!(
                "row has {} cells, header has {}",
                row.len(),
                self.headers.len()
            ))
            .into());
        }
        self.rows.push(row);
        Ok(())
    }

    /// Header names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column.
    pub fn column_index(&self, name: &str) -> PlotResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PlotError::MissingColumn {
                name: name.to_string(),
                available: self.headers.join(", "),
            })
    }

    /// Extract the value, category and (optional) hue columns.
    pub fn columns<T: Float>(
        &self,
        value: &str,
        category: &str,
        hue: Option<&str>,
    ) -> PlotResult<Columns<T>> {
        let vi = self.column_index(value)?;
        let ci = self.column_index(category)?;
        let hi = hue.map(|h| self.column_index(h)).transpose()?;

        let mut out = Columns {
            values: Vec::with_capacity(self.rows.len()),
            categories: Vec::with_capacity(self.rows.len()),
            hues: hi.map(|_| Vec::with_capacity(self.rows.len())),
            dropped: 0,
        };

        for (r, row) in self.rows.iter().enumerate() {
            let cell = row[vi].as_str();
            if is_missing(cell) {
                out.dropped += 1;
                continue;
            }
            let v: f64 = cell.parse().map_err(|_| PlotError::NonNumericCell {
                row: r + 1,
                column: value.to_string(),
                value: cell.to_string(),
            })?;
            let v = T::from(v).ok_or_else(|| PlotError::NonNumericCell {
                row: r + 1,
                column: value.to_string(),
                value: cell.to_string(),
            })?;

            out.values.push(v);
            out.categories.push(label(row, ci, r, category)?);
            if let (Some(hi), Some(hues), Some(name)) = (hi, out.hues.as_mut(), hue) {
                hues.push(label(row, hi, r, name)?);
            }
        }

        if out.dropped > 0 {
            debug!(dropped = out.dropped, column = value, "dropped rows with missing values");
        }
        Ok(out)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Field delimiter for a path: tab for `.tsv`, comma otherwise.
fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

/// Cell texts read as a missing observation.
fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("nan")
}

/// Non-empty label cell.
fn label(row: &[String], index: usize, r: usize, column: &str) -> PlotResult<String> {
    let cell = &row[index];
    if cell.is_empty() {
        return Err(PlotError::EmptyLabel {
            row: r + 1,
            column: column.to_string(),
        });
    }
    Ok(cell.clone())
}
