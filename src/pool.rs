//! Value multisets and the shuffled pool tile values are drawn from.
//!
//! Chips and tiles both carry values in `MIN_VALUE..=MAX_VALUE`. The multiset
//! spreads a requested count evenly over the range; any remainder goes to the
//! lowest values first, so the set leans toward cheap values.

use fastrand::Rng;

use crate::constants::{MAX_VALUE, MIN_VALUE};

/// Build a multiset of `count` values, ordered ascending.
///
/// With 65 values this gives eleven each of 1..=5 and ten sixes.
pub fn value_multiset(count: usize) -> Vec<u8> {
    let span = (MAX_VALUE - MIN_VALUE + 1) as usize;
    let base = count / span;
    let extra = count % span;
    let mut values = Vec::with_capacity(count);
    for (i, v) in (MIN_VALUE..=MAX_VALUE).enumerate() {
        let n = base + usize::from(i < extra);
        values.extend(std::iter::repeat_n(v, n));
    }
    values
}

/// A shuffled, finite pool of values consumed front to back without replacement.
#[derive(Debug, Clone)]
pub struct ValuePool {
    values: Vec<u8>,
    next: usize,
}

impl ValuePool {
    /// Create a pool of `count` values shuffled by `rng`.
    pub fn shuffled(count: usize, rng: &mut Rng) -> Self {
        let mut values = value_multiset(count);
        rng.shuffle(&mut values);
        Self { values, next: 0 }
    }

    /// Take the next value, or `None` when the pool is exhausted.
    pub fn draw(&mut self) -> Option<u8> {
        let v = self.values.get(self.next).copied()?;
        self.next += 1;
        Some(v)
    }

    /// Values not drawn yet.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.next
    }
}
