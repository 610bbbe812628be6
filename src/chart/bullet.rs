use std::collections::BTreeMap;

use crate::chart::{
    Channel, Data, Facet, FieldDef, FieldType, Header, Mark, MarkType, Resolution, Resolve,
    Scale, Spec, encoding,
};
use crate::model::kpi::KpiRecord;
use crate::model::params::BulletParams;

/// Back-to-front layer order: widest range first so narrower ranges stay visible.
const RANGE_LAYERS: [(&str, &str); 3] = [
    ("ranges[2]", "#eee"),
    ("ranges[1]", "#ddd"),
    ("ranges[0]", "#ccc"),
];
const MEASURE_LAYERS: [(&str, &str); 2] = [
    ("measures[1]", "lightsteelblue"),
    ("measures[0]", "steelblue"),
];
const MARKER_FIELD: &str = "marker";

pub fn bullet_spec(records: &[KpiRecord], params: &BulletParams) -> serde_json::Result<Spec> {
    let tooltip = Channel::Many(vec![
        FieldDef::field("title", FieldType::Nominal),
        FieldDef::field("subtitle", FieldType::Nominal),
    ]);

    let layer = |field: &str, mark: Mark| {
        let x = FieldDef::quantitative(field)
            .scale(Scale {
                nice: Some(false),
                zero: None,
            })
            .no_title();
        let mut enc = encoding([("x", x)]);
        enc.insert("tooltip".to_string(), tooltip.clone());
        Spec::layer_with(mark, enc)
    };

    let mut layers = Vec::with_capacity(RANGE_LAYERS.len() + MEASURE_LAYERS.len() + 1);
    for (field, color) in RANGE_LAYERS {
        layers.push(layer(field, Mark::new(MarkType::Bar).color(color)));
    }
    for (field, color) in MEASURE_LAYERS {
        layers.push(layer(
            field,
            Mark::new(MarkType::Bar).color(color).size(params.bar_size),
        ));
    }
    layers.push(layer(
        MARKER_FIELD,
        Mark::new(MarkType::Tick).color("black").size(params.tick_size),
    ));

    let inner = Spec {
        width: Some(params.width),
        layer: layers,
        ..Spec::default()
    };

    let mut row = FieldDef::field("title", FieldType::Ordinal).title("");
    row.header = Some(Header {
        label_angle: Some(0.0),
        label_align: Some("left".to_string()),
    });

    let mut scale = BTreeMap::new();
    scale.insert("x".to_string(), Resolution::Independent);

    Ok(Spec {
        description: Some("KPI bullet charts: threshold ranges, measures and target".to_string()),
        data: Some(Data::from_rows(records)?),
        facet: Some(Facet {
            row: Some(row),
            column: None,
        }),
        spec: Some(Box::new(inner)),
        resolve: Some(Resolve { scale }),
        ..Spec::top_level()
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/bullet.rs"]
mod tests;
