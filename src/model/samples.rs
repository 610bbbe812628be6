use serde::{Deserialize, Serialize};

use crate::input::InputError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Samples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Samples {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InputError> {
        if x.len() != y.len() {
            return Err(InputError::InvalidInput(format!(
                "x and y lengths differ ({} vs {})",
                x.len(),
                y.len()
            )));
        }
        if let Some(idx) = x
            .iter()
            .zip(y.iter())
            .position(|(a, b)| !a.is_finite() || !b.is_finite())
        {
            return Err(InputError::InvalidInput(format!(
                "non-finite sample at index {idx}"
            )));
        }
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn distinct_x(&self) -> usize {
        let mut xs = self.x.clone();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        xs.len()
    }

    pub fn distinct_points(&self) -> usize {
        let mut pairs: Vec<(f64, f64)> =
            self.x.iter().copied().zip(self.y.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        pairs.dedup();
        pairs.len()
    }

    /// Gathers the pairs at `indices`; used to build bootstrap resamples.
    pub fn select(&self, indices: &[usize]) -> Samples {
        Samples {
            x: indices.iter().map(|&i| self.x[i]).collect(),
            y: indices.iter().map(|&i| self.y[i]).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Band {
    pub lo: Vec<f64>,
    pub hi: Vec<f64>,
}

impl Band {
    pub fn widths(&self) -> Vec<f64> {
        self.lo
            .iter()
            .zip(self.hi.iter())
            .map(|(lo, hi)| hi - lo)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/samples.rs"]
mod tests;
