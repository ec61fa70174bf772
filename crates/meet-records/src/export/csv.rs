//! Minimal comma-separated text.
//!
//! No quoting: cells may not contain commas, double quotes or line breaks.
//! Text written through [`csv_string`] is made safe by substitution.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    #[error("the header row is empty")]
    EmptyHeader,

    #[error("line {line} has {found} fields, expected {expected}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("double quotes are not supported (line {line})")]
    Quoted { line: usize },
}

/// A table of string cells under a row of field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Csv {
    pub fieldnames: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Csv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column index of `fieldname`.
    pub fn index(&self, fieldname: &str) -> Option<usize> {
        self.fieldnames.iter().position(|f| f == fieldname)
    }

    /// Add columns at the end. Existing rows are padded with empty cells.
    pub fn append_columns<S: AsRef<str>>(&mut self, fieldnames: &[S]) {
        self.fieldnames
            .extend(fieldnames.iter().map(|f| f.as_ref().to_string()));
        let width = self.fieldnames.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }

    /// Append a row of empty cells, returning it for filling in.
    pub fn push_empty_row(&mut self) -> &mut Vec<String> {
        self.rows.push(vec![String::new(); self.fieldnames.len()]);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }
}

impl FromStr for Csv {
    type Err = CsvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((header_index, header)) = lines.next() else {
            return Err(CsvError::EmptyHeader);
        };
        let fieldnames = split_line(header, header_index + 1)?;

        let mut rows = Vec::new();
        for (i, line) in lines {
            let row = split_line(line, i + 1)?;
            if row.len() != fieldnames.len() {
                return Err(CsvError::RowWidth {
                    line: i + 1,
                    expected: fieldnames.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        Ok(Self { fieldnames, rows })
    }
}

fn split_line(line: &str, line_number: usize) -> Result<Vec<String>, CsvError> {
    if line.contains('"') {
        return Err(CsvError::Quoted { line: line_number });
    }
    Ok(line.split(',').map(|cell| cell.trim().to_string()).collect())
}

impl fmt::Display for Csv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.fieldnames.join(","))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join(","))?;
        }
        Ok(())
    }
}

/// Make arbitrary text safe to store in a cell.
pub fn csv_string(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ',' | '\n' | '\r' | '\t' => ' ',
            '"' => '\'',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
