use serde::Serialize;

use crate::chart::{Data, FieldDef, Mark, MarkType, Scale, Spec, encoding};
use crate::model::samples::Samples;
use crate::stats::bootstrap::BootstrapOutput;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandRow {
    pub x: f64,
    pub y: f64,
    pub fit: f64,
    pub lo: f64,
    pub hi: f64,
}

/// One row per input sample, in input order.
pub fn band_rows(samples: &Samples, output: &BootstrapOutput) -> Vec<BandRow> {
    samples
        .x
        .iter()
        .zip(samples.y.iter())
        .enumerate()
        .map(|(i, (&x, &y))| BandRow {
            x,
            y,
            fit: output.fit.predict(x),
            lo: output.band.lo[i],
            hi: output.band.hi[i],
        })
        .collect()
}

pub fn band_spec(rows: &[BandRow], title: &str) -> serde_json::Result<Spec> {
    let y_scale = || Scale {
        nice: None,
        zero: Some(false),
    };

    let area = Spec::layer_with(
        Mark::new(MarkType::Area).color("steelblue").opacity(0.3),
        encoding([
            ("x", FieldDef::quantitative("x")),
            ("y", FieldDef::quantitative("lo").title("y").scale(y_scale())),
            ("y2", FieldDef::quantitative("hi")),
        ]),
    );
    let points = Spec::layer_with(
        Mark::new(MarkType::Circle).color("black").size(20.0),
        encoding([
            ("x", FieldDef::quantitative("x")),
            ("y", FieldDef::quantitative("y").scale(y_scale())),
        ]),
    );
    let line = Spec::layer_with(
        Mark::new(MarkType::Line).color("firebrick").stroke_width(2.0),
        encoding([
            ("x", FieldDef::quantitative("x")),
            ("y", FieldDef::quantitative("fit").scale(y_scale())),
        ]),
    );

    Ok(Spec {
        title: Some(title.to_string()),
        data: Some(Data::from_rows(rows)?),
        width: Some(500),
        height: Some(300),
        layer: vec![area, points, line],
        ..Spec::top_level()
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/band.rs"]
mod tests;
