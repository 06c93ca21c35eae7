//! Chip ownership resolution.
//!
//! A fully surrounded chip is awarded from its accumulated distribution:
//!
//! - one contributing color owns the chip outright;
//! - with two colors the strictly heavier one wins, a tie awards nobody;
//! - with three or more colors, let `top` be the colors at the maximum weight
//!   and `rest` the others. If everybody is at the maximum nobody wins. A
//!   single `rest` color takes the chip. Two `rest` colors are compared with
//!   each other: equal weights award nobody, otherwise the heavier one wins.
//!   Three `rest` colors (a unique leader among four) leave the chip to the
//!   leader.

use crate::color::Color;
use crate::distribution::Distribution;

/// Decide who owns a chip with this distribution. `None` means nobody scores.
pub fn resolve(dist: &Distribution) -> Option<Color> {
    let weights: Vec<(Color, u32)> = dist.iter().collect();
    match weights.as_slice() {
        [] => None,
        [(only, _)] => Some(*only),
        [(a, wa), (b, wb)] => match wa.cmp(wb) {
            std::cmp::Ordering::Greater => Some(*a),
            std::cmp::Ordering::Less => Some(*b),
            std::cmp::Ordering::Equal => None,
        },
        _ => resolve_crowded(&weights),
    }
}

fn resolve_crowded(weights: &[(Color, u32)]) -> Option<Color> {
    let max = weights.iter().map(|&(_, w)| w).max()?;
    let (top, rest): (Vec<_>, Vec<_>) = weights.iter().copied().partition(|&(_, w)| w == max);

    match rest.as_slice() {
        [] => None,
        [(only, _)] => Some(*only),
        [(a, wa), (b, wb)] => match wa.cmp(wb) {
            std::cmp::Ordering::Greater => Some(*a),
            std::cmp::Ordering::Less => Some(*b),
            std::cmp::Ordering::Equal => None,
        },
        _ => match top.as_slice() {
            [(leader, _)] => Some(*leader),
            _ => None,
        },
    }
}
