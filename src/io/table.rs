//! Delimited table reader for the instrument and station inputs.
//!
//! Format:
//!   header row (ignored)
//!   one record per line, fields separated by a single delimiter
//!
//! Blank lines are skipped. A field wrapped in double quotes has the quotes
//! removed and `""` collapsed to `"`. Input must be UTF-8; anything else is a
//! `DataFormat` error on the offending line.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PipelineError, Result};

/// A table file read fully into memory
#[derive(Debug, Clone)]
pub struct Table {
    path: PathBuf,
    text: String,
    delimiter: char,
}

impl Table {
    /// Read a table from disk. A missing file maps to `MissingFile`.
    pub fn read(path: &Path, delimiter: char) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                PipelineError::MissingFile {
                    path: path.to_path_buf(),
                }
            } else {
                PipelineError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let text = String::from_utf8(bytes).map_err(|err| {
            let valid = err.utf8_error().valid_up_to();
            let bytes = err.as_bytes();
            let line = bytes[..valid].iter().filter(|&&b| b == b'\n').count() + 1;
            PipelineError::data_format(
                path,
                line,
                format!("invalid UTF-8 at byte {}: 0x{:02x}", valid, bytes[valid]),
            )
        })?;
        Ok(Self::from_text(path, text, delimiter))
    }

    /// Wrap text that is already in memory; `path` is used for error messages
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>, delimiter: char) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            delimiter,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Data records in file order, header excluded
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.text
            .lines()
            .enumerate()
            .skip(1)
            .filter(|(_, line)| !line.trim().is_empty())
            .map(move |(idx, line)| Record {
                path: &self.path,
                line: idx + 1,
                fields: line
                    .trim_end_matches('\r')
                    .split(self.delimiter)
                    .map(unquote)
                    .collect(),
            })
    }
}

/// One data row with its 1-based line number
#[derive(Debug, Clone)]
pub struct Record<'a> {
    path: &'a Path,
    line: usize,
    fields: Vec<Cow<'a, str>>,
}

impl<'a> Record<'a> {
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fail unless the row has exactly `columns.len()` fields
    pub fn expect_columns(&self, columns: &[&str]) -> Result<()> {
        if self.fields.len() != columns.len() {
            return Err(self.error(format!(
                "expected {} columns ({}), found {}",
                columns.len(),
                columns.join(", "),
                self.fields.len()
            )));
        }
        Ok(())
    }

    /// Unquoted field text, or "" past the end of the row
    pub fn text(&self, column: usize) -> &str {
        self.fields.get(column).map_or("", |field| field.as_ref())
    }

    /// Parse a trimmed field, reporting the column name on failure
    pub fn parse<T: FromStr>(&self, column: usize, name: &str) -> Result<T> {
        let raw = self.text(column).trim();
        raw.parse::<T>().map_err(|_| {
            self.error(format!(
                "column {} ({name}): cannot parse '{raw}' as {}",
                column + 1,
                short_type_name::<T>()
            ))
        })
    }

    pub fn error(&self, message: impl Into<String>) -> PipelineError {
        PipelineError::data_format(self.path, self.line, message)
    }
}

fn unquote(field: &str) -> Cow<'_, str> {
    let trimmed = field.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        let inner = &trimmed[1..trimmed.len() - 1];
        if inner.contains("\"\"") {
            Cow::Owned(inner.replace("\"\"", "\""))
        } else {
            Cow::Borrowed(inner)
        }
    } else {
        Cow::Borrowed(field)
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
