use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::input::table::{parse_f64, read_tsv};
use crate::input::{InputError, InputFormat, detect_format};
use crate::model::kpi::KpiRecord;

const RANGE_COLUMNS: [&str; 3] = ["range1", "range2", "range3"];
const MEASURE_COLUMNS: [&str; 2] = ["measure1", "measure2"];

pub fn load_kpi_records(path: &Path) -> Result<Vec<KpiRecord>, InputError> {
    let records = match detect_format(path) {
        InputFormat::Json => {
            let text = fs::read_to_string(path)?;
            serde_json::from_str::<Vec<KpiRecord>>(&text)?
        }
        InputFormat::Tsv => parse_kpi_tsv(path)?,
    };

    if records.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{} contains no records",
            path.display()
        )));
    }
    for record in &records {
        if !record.ranges_ascending() {
            warn!(
                "thresholds for '{}' are not ascending: {:?}",
                record.title, record.ranges
            );
        }
    }
    info!("loaded {} KPI records from {}", records.len(), path.display());
    Ok(records)
}

fn parse_kpi_tsv(path: &Path) -> Result<Vec<KpiRecord>, InputError> {
    let table = read_tsv(path)?;
    let title_col = table.column("title")?;
    let subtitle_col = table.column("subtitle")?;
    let range_cols = [
        table.column(RANGE_COLUMNS[0])?,
        table.column(RANGE_COLUMNS[1])?,
        table.column(RANGE_COLUMNS[2])?,
    ];
    let measure_cols = [
        table.column(MEASURE_COLUMNS[0])?,
        table.column(MEASURE_COLUMNS[1])?,
    ];
    let marker_col = table.column("marker")?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (line, fields) in &table.rows {
        let line = *line;
        let mut ranges = [0.0; 3];
        for (slot, (&col, name)) in ranges
            .iter_mut()
            .zip(range_cols.iter().zip(RANGE_COLUMNS))
        {
            *slot = parse_f64(&fields[col], line, name)?;
        }
        let mut measures = [0.0; 2];
        for (slot, (&col, name)) in measures
            .iter_mut()
            .zip(measure_cols.iter().zip(MEASURE_COLUMNS))
        {
            *slot = parse_f64(&fields[col], line, name)?;
        }
        let title = fields[title_col].clone();
        if title.is_empty() {
            return Err(InputError::Parse {
                line,
                msg: "empty title".to_string(),
            });
        }
        records.push(KpiRecord {
            title,
            subtitle: fields[subtitle_col].clone(),
            ranges,
            measures,
            marker: parse_f64(&fields[marker_col], line, "marker")?,
        });
    }
    Ok(records)
}
