use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiRecord {
    pub title: String,
    pub subtitle: String,
    pub ranges: [f64; 3],
    pub measures: [f64; 2],
    pub marker: f64,
}

impl KpiRecord {
    pub fn new(
        title: &str,
        subtitle: &str,
        ranges: [f64; 3],
        measures: [f64; 2],
        marker: f64,
    ) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            ranges,
            measures,
            marker,
        }
    }

    /// Range bars are drawn widest first, so unsorted thresholds hide the narrower bands.
    pub fn ranges_ascending(&self) -> bool {
        self.ranges.windows(2).all(|w| w[0] <= w[1])
    }
}

pub fn default_records() -> Vec<KpiRecord> {
    vec![
        KpiRecord::new(
            "Revenue",
            "US$, in thousands",
            [150.0, 225.0, 300.0],
            [220.0, 270.0],
            250.0,
        ),
        KpiRecord::new("Profit", "%", [20.0, 25.0, 30.0], [21.0, 23.0], 26.0),
        KpiRecord::new(
            "Order Size",
            "US$, average",
            [350.0, 500.0, 600.0],
            [100.0, 320.0],
            550.0,
        ),
        KpiRecord::new(
            "New Customers",
            "count",
            [1400.0, 2000.0, 2500.0],
            [1000.0, 1650.0],
            2100.0,
        ),
        KpiRecord::new(
            "Satisfaction",
            "out of 5",
            [3.5, 4.25, 5.0],
            [3.2, 4.7],
            4.4,
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/kpi.rs"]
mod tests;
