use std::fs;
use std::path::Path;

use tracing::info;

use crate::input::table::{parse_f64, read_tsv};
use crate::input::{InputError, InputFormat, detect_format};
use crate::model::samples::Samples;
use crate::stats::fit::MIN_FIT_SAMPLES;

pub fn load_samples(path: &Path) -> Result<Samples, InputError> {
    let samples = match detect_format(path) {
        InputFormat::Json => {
            let text = fs::read_to_string(path)?;
            let raw: Samples = serde_json::from_str(&text)?;
            Samples::new(raw.x, raw.y)?
        }
        InputFormat::Tsv => {
            let table = read_tsv(path)?;
            let x_col = table.column("x")?;
            let y_col = table.column("y")?;
            let mut x = Vec::with_capacity(table.rows.len());
            let mut y = Vec::with_capacity(table.rows.len());
            for (line, fields) in &table.rows {
                x.push(parse_f64(&fields[x_col], *line, "x")?);
                y.push(parse_f64(&fields[y_col], *line, "y")?);
            }
            Samples::new(x, y)?
        }
    };

    if samples.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{} contains no samples",
            path.display()
        )));
    }
    if samples.len() < MIN_FIT_SAMPLES {
        return Err(InputError::InvalidInput(format!(
            "{} needs at least {MIN_FIT_SAMPLES} samples, found {}",
            path.display(),
            samples.len()
        )));
    }
    info!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
