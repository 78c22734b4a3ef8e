//! Geometric collision strategies.

use crate::board::ports::{CollisionStrategy, Droppable, Rect};

/// Picks the droppable whose corners are closest to the dragged rectangle's
/// corners.
///
/// Each candidate scores the sum of the distances between matching corners
/// (top-left to top-left, and so on). The lowest score wins; ties go to the
/// droppable registered first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosestCorners;

impl ClosestCorners {
    /// Returns the corner distance score between two rectangles.
    #[must_use]
    pub fn score(active: &Rect, candidate: &Rect) -> u64 {
        active
            .corners()
            .iter()
            .zip(candidate.corners().iter())
            .map(|(&(ax, ay), &(bx, by))| distance(ax.abs_diff(bx), ay.abs_diff(by)))
            .fold(0_u64, u64::saturating_add)
    }
}

/// Euclidean distance rounded down, in integer arithmetic.
fn distance(dx: u64, dy: u64) -> u64 {
    dx.saturating_mul(dx)
        .saturating_add(dy.saturating_mul(dy))
        .isqrt()
}

impl CollisionStrategy for ClosestCorners {
    fn detect<'a>(&self, active: &Rect, droppables: &'a [Droppable]) -> Option<&'a str> {
        droppables
            .iter()
            .enumerate()
            .min_by_key(|(position, droppable)| (Self::score(active, &droppable.rect), *position))
            .map(|(_, droppable)| droppable.id.as_str())
    }
}
