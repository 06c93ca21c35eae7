//! Per-chip accumulated color weights.
//!
//! Every tile touching an intersection adds its value under the color of the
//! corner that lies on that intersection. Weights only grow. The percentage
//! view is derived on demand and holds no state of its own.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::Color;

/// Running per-color sum of contributed tile values for one chip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    weights: BTreeMap<Color, u32>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to `color`, creating the entry on first contribution.
    pub fn add(&mut self, color: Color, value: u8) {
        *self.weights.entry(color).or_insert(0) += u32::from(value);
    }

    /// Copy of this distribution with one more contribution applied.
    pub fn with_contribution(&self, color: Color, value: u8) -> Self {
        let mut next = self.clone();
        next.add(color, value);
        next
    }

    /// Accumulated weight for `color` (0 if it never contributed).
    pub fn weight(&self, color: Color) -> u32 {
        self.weights.get(&color).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.weights.values().sum()
    }

    /// Number of distinct colors that have contributed.
    pub fn contributors(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Contributing colors and their weights, in color order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        self.weights.iter().map(|(&c, &w)| (c, w))
    }

    /// Each color's share of the total, in percent. Empty when nothing contributed.
    pub fn percentages(&self) -> BTreeMap<Color, f64> {
        let total = self.total();
        if total == 0 {
            return BTreeMap::new();
        }
        self.weights
            .iter()
            .map(|(&c, &w)| (c, f64::from(w) * 100.0 / f64::from(total)))
            .collect()
    }
}

impl FromIterator<(Color, u32)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (Color, u32)>>(iter: I) -> Self {
        let mut d = Distribution::new();
        for (c, w) in iter {
            *d.weights.entry(c).or_insert(0) += w;
        }
        d
    }
}
