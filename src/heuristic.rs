//! Distance estimates that steer the search towards the goal.
//!
//! A [Heuristic] must be *admissible*: it may never overestimate the true remaining cost,
//! otherwise the first path found to the goal is not guaranteed to be a shortest one.
//! On a 4-connected grid with unit step cost the [Manhattan] distance is exact for open
//! terrain and therefore the tightest admissible choice.
use grid_util::point::Point;

use crate::error::{GridError, Result};
use crate::{Cost, UNIT_COST};

pub trait Heuristic {
    /// Estimated cost of moving from `from` to `to`.
    fn estimate(&self, from: &Point, to: &Point) -> Cost;
}

/// Sum of absolute row and column differences.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        from.manhattan_distance(to) as Cost * UNIT_COST
    }
}

/// Always zero, which turns A* into Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _: &Point, _: &Point) -> Cost {
        0
    }
}

/// Scales another heuristic by `factor`. Factors above 1.0 make the estimate inadmissible:
/// fewer cells are expanded but the returned path may be longer than the shortest one.
#[derive(Clone, Copy, Debug)]
pub struct Weighted<H> {
    pub inner: H,
    factor: f32,
}

impl<H: Heuristic> Weighted<H> {
    /// Fails if `factor` is negative or not finite.
    pub fn new(inner: H, factor: f32) -> Result<Weighted<H>> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(GridError::InvalidArgument {
                name: "factor",
                reason: format!("{factor} is not a finite, non-negative weight"),
            });
        }
        Ok(Weighted { inner, factor })
    }
    pub fn factor(&self) -> f32 {
        self.factor
    }
}

impl<H: Heuristic> Heuristic for Weighted<H> {
    fn estimate(&self, from: &Point, to: &Point) -> Cost {
        (self.inner.estimate(from, to) as f32 * self.factor) as Cost
    }
}
