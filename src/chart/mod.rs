//! Serializable subset of the Vega-Lite v5 grammar.
//!
//! Only the pieces the bullet and band charts need are modelled; anything
//! omitted is left to Vega-Lite defaults by skipping `None` fields.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

pub mod band;
pub mod bullet;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, Default, Serialize)]
pub struct Spec {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    #[serde(skip_serializing_if = "Encoding::is_empty")]
    pub encoding: Encoding,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub layer: Vec<Spec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<Facet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<Box<Spec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Resolve>,
}

impl Spec {
    pub fn top_level() -> Self {
        Self {
            schema: Some(VEGA_LITE_SCHEMA.to_string()),
            ..Self::default()
        }
    }

    pub fn layer_with(mark: Mark, encoding: Encoding) -> Self {
        Self {
            mark: Some(mark),
            encoding,
            ..Self::default()
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Data {
    pub values: Vec<Value>,
}

impl Data {
    pub fn from_rows<T: Serialize>(rows: &[T]) -> serde_json::Result<Self> {
        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    Bar,
    Tick,
    Circle,
    Line,
    Area,
}

#[derive(Debug, Clone, Serialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(rename = "strokeWidth", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

impl Mark {
    pub fn new(kind: MarkType) -> Self {
        Self {
            kind,
            color: None,
            size: None,
            opacity: None,
            stroke_width: None,
        }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Quantitative,
    Ordinal,
    Nominal,
}

/// Channel name to definition, e.g. `"x"`, `"y2"`, `"tooltip"`.
pub type Encoding = BTreeMap<String, Channel>;

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Channel {
    Field(FieldDef),
    Many(Vec<FieldDef>),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldDef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldType>,
    /// `Some(Value::Null)` hides the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
}

impl FieldDef {
    pub fn field(name: &str, kind: FieldType) -> Self {
        Self {
            field: Some(name.to_string()),
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn quantitative(name: &str) -> Self {
        Self::field(name, FieldType::Quantitative)
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(Value::String(title.to_string()));
        self
    }

    pub fn no_title(mut self) -> Self {
        self.title = Some(Value::Null);
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Scale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nice: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_align: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Facet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<FieldDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<FieldDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Independent,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Resolve {
    pub scale: BTreeMap<String, Resolution>,
}

pub fn encoding<const N: usize>(channels: [(&str, FieldDef); N]) -> Encoding {
    channels
        .into_iter()
        .map(|(name, def)| (name.to_string(), Channel::Field(def)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/mod.rs"]
mod tests;
