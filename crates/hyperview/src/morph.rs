//! Morph buffer: a growable arena of working vertices easing toward a target.
//!
//! Purpose
//! - Let shapes with different vertex counts replace each other without
//!   recreating anything: slot `i` of the buffer always feeds vertex `i` of the
//!   current target, and slots past the target's length ("ghosts") ease back to
//!   the origin instead of disappearing.
//!
//! Invariants
//! - `len()` never decreases; after `step(target)`, `len() >= target.len()`.
//! - New slots are created at the origin, so spawned vertices grow out of the center.
//! - Each step moves every slot `MORPH_EASE` of the way to its goal
//!   (exponential approach, never exact arrival).

use crate::cfg::{GHOST_COLLAPSE_EPS_SQ, MORPH_EASE};
use crate::Point4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MorphBuffer {
    slots: Vec<Point4>,
    /// Vertex count of the target of the most recent `step`.
    active: usize,
}

impl MorphBuffer {
    /// Empty buffer; the first `step` spawns every vertex at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer that already shows `vertices` (no morph on the first frame).
    pub fn seeded(vertices: &[Point4]) -> Self {
        Self {
            slots: vertices.to_vec(),
            active: vertices.len(),
        }
    }

    /// Grow to fit `target`, then ease every slot one step toward its goal:
    /// the matching target vertex, or the origin for ghost slots.
    pub fn step(&mut self, target: &[Point4]) -> &[Point4] {
        if self.slots.len() < target.len() {
            self.slots.resize(target.len(), Point4::zeros());
        }
        self.active = target.len();
        for (i, v) in self.slots.iter_mut().enumerate() {
            let goal = target.get(i).copied().unwrap_or_else(Point4::zeros);
            *v += (goal - *v) * MORPH_EASE;
        }
        &self.slots
    }

    #[inline]
    pub fn vertices(&self) -> &[Point4] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Target vertex count seen by the last `step`.
    #[inline]
    pub fn active_len(&self) -> usize {
        self.active
    }

    /// Slot `i` has no counterpart in the current target.
    #[inline]
    pub fn is_ghost(&self, i: usize) -> bool {
        i >= self.active
    }

    /// Ghost slot that has shrunk into the origin and is no longer drawn.
    #[inline]
    pub fn is_collapsed(&self, i: usize) -> bool {
        self.is_ghost(i)
            && self
                .slots
                .get(i)
                .is_some_and(|v| v.norm_squared() < GHOST_COLLAPSE_EPS_SQ)
    }

    /// Largest per-coordinate distance of any slot from its goal: the matching
    /// `target` vertex for active slots, the origin for ghosts.
    pub fn max_deviation(&self, target: &[Point4]) -> f64 {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let goal = target.get(i).copied().unwrap_or_else(Point4::zeros);
                (goal - v).amax()
            })
            .fold(0.0, f64::max)
    }
}
