use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::input::InputError;

#[derive(Debug, Clone)]
pub struct TsvTable {
    pub columns: Vec<String>,
    /// Data rows with their 1-based source line numbers.
    pub rows: Vec<(usize, Vec<String>)>,
}

impl TsvTable {
    pub fn column(&self, name: &str) -> Result<usize, InputError> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .ok_or_else(|| InputError::MissingColumn(name.to_string()))
    }
}

pub fn read_tsv(path: &Path) -> Result<TsvTable, InputError> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = String::new();

    let mut line_no = 0usize;
    let columns = loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(InputError::InvalidInput(format!(
                "{} has no header line",
                path.display()
            )));
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        break line
            .split('\t')
            .map(|s| s.trim().to_string())
            .collect::<Vec<_>>();
    };

    let mut rows = Vec::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<String> = line.split('\t').map(|s| s.trim().to_string()).collect();
        if fields.len() < columns.len() {
            return Err(InputError::Parse {
                line: line_no,
                msg: format!("expected {} fields, found {}", columns.len(), fields.len()),
            });
        }
        rows.push((line_no, fields));
    }

    Ok(TsvTable { columns, rows })
}

pub fn parse_f64(value: &str, line: usize, column: &str) -> Result<f64, InputError> {
    let v: f64 = value.parse().map_err(|_| InputError::Parse {
        line,
        msg: format!("column {column}: '{value}' is not a number"),
    })?;
    if !v.is_finite() {
        return Err(InputError::Parse {
            line,
            msg: format!("column {column}: value is not finite"),
        });
    }
    Ok(v)
}
