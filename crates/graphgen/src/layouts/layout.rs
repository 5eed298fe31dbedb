use egui::{Pos2, Rect};
use rand::Rng;

use crate::graph::LayoutGraph;

use super::{Circular, ForceDirected, ForceDirectedState, Line};

/// Graphs with fewer nodes than this are placed on a single line.
pub const SMALL_GRAPH_THRESHOLD: usize = 5;

/// Places the nodes of a graph inside a canvas.
///
/// The returned vector is indexed by `NodeIndex::index()`.
pub trait Layout {
    fn place<R: Rng>(&mut self, g: &LayoutGraph, canvas: Rect, rng: &mut R) -> Vec<Pos2>;
}

/// Layout picked by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutKind {
    /// Force-directed placement, or a line for tiny graphs.
    #[default]
    Spring,
    Circular,
}

impl LayoutKind {
    /// Runs the selected layout. `iterations` only affects the spring layout.
    pub fn place<R: Rng>(
        self,
        g: &LayoutGraph,
        canvas: Rect,
        iterations: usize,
        rng: &mut R,
    ) -> Vec<Pos2> {
        match self {
            Self::Spring if g.node_count() < SMALL_GRAPH_THRESHOLD => {
                Line::default().place(g, canvas, rng)
            }
            Self::Spring => {
                let state = ForceDirectedState::default().with_iterations(iterations);
                ForceDirected::from_state(state).place(g, canvas, rng)
            }
            Self::Circular => Circular::default().place(g, canvas, rng),
        }
    }
}

/// Scales `positions` so their bounding box fills `canvas` shrunk by `padding`.
///
/// Each axis is scaled independently; an axis with no extent is centered.
pub fn fit_to_canvas(positions: &mut [Pos2], canvas: Rect, padding: f32) {
    if positions.is_empty() {
        return;
    }
    let target = canvas.shrink(padding.min(canvas.width() / 2.0).min(canvas.height() / 2.0));
    let bounds = Rect::from_points(positions);

    let map_axis = |value: f32, lo: f32, hi: f32, t_lo: f32, t_hi: f32| -> f32 {
        let span = hi - lo;
        if span <= f32::EPSILON || !span.is_finite() {
            (t_lo + t_hi) / 2.0
        } else {
            t_lo + (value - lo) / span * (t_hi - t_lo)
        }
    };

    for p in positions.iter_mut() {
        p.x = map_axis(p.x, bounds.min.x, bounds.max.x, target.min.x, target.max.x);
        p.y = map_axis(p.y, bounds.min.y, bounds.max.y, target.min.y, target.max.y);
    }
}
