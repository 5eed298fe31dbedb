use egui::{pos2, Pos2, Rect, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::graph::LayoutGraph;

use super::{fit_to_canvas, Layout};

/// Parameters of the Fruchterman-Reingold simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceDirectedState {
    pub iterations: usize,
    pub dt: f32,
    pub epsilon: f32,
    /// Initial per-step displacement cap, as a fraction of the canvas width.
    /// The cap cools linearly to zero over the run.
    pub temperature: f32,
    pub k_scale: f32,
    pub c_attract: f32,
    pub c_repulse: f32,
    /// Margin kept free when the result is fitted to the canvas.
    pub padding: f32,
}

impl Default for ForceDirectedState {
    fn default() -> Self {
        ForceDirectedState {
            iterations: 100,
            dt: 0.1,
            epsilon: 1e-3,
            temperature: 0.1,
            k_scale: 1.0,
            c_attract: 1.0,
            c_repulse: 1.0,
            padding: 30.0,
        }
    }
}

impl ForceDirectedState {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Spring layout: nodes start at random positions, then repel each other
/// while edges pull their endpoints together.
#[derive(Debug, Default)]
pub struct ForceDirected {
    state: ForceDirectedState,
    // Reusable displacement buffer
    scratch_disp: Vec<Vec2>,
}

impl ForceDirected {
    pub fn from_state(state: ForceDirectedState) -> Self {
        Self {
            state,
            scratch_disp: Vec::new(),
        }
    }

    /// Advances the simulation by one step with displacement capped at
    /// `max_step`.
    pub fn step(&mut self, g: &LayoutGraph, positions: &mut [Pos2], canvas: Rect, max_step: f32) {
        let Some(k) = prepare_constants(canvas, positions.len(), self.state.k_scale) else {
            return;
        };

        if self.scratch_disp.len() == positions.len() {
            self.scratch_disp.fill(Vec2::ZERO);
        } else {
            self.scratch_disp.clear();
            self.scratch_disp.resize(positions.len(), Vec2::ZERO);
        }

        let params = &self.state;
        compute_repulsion(
            positions,
            &mut self.scratch_disp,
            k,
            params.epsilon,
            params.c_repulse,
        );
        compute_attraction(
            g,
            positions,
            &mut self.scratch_disp,
            k,
            params.epsilon,
            params.c_attract,
        );
        apply_displacements(positions, &self.scratch_disp, params.dt, max_step);
    }
}

impl Layout for ForceDirected {
    fn place<R: Rng>(&mut self, g: &LayoutGraph, canvas: Rect, rng: &mut R) -> Vec<Pos2> {
        let mut positions: Vec<Pos2> = g
            .node_indices()
            .map(|_| {
                pos2(
                    rng.random_range(canvas.min.x..=canvas.max.x),
                    rng.random_range(canvas.min.y..=canvas.max.y),
                )
            })
            .collect();
        if positions.len() < 2 {
            fit_to_canvas(&mut positions, canvas, self.state.padding);
            return positions;
        }

        let iterations = self.state.iterations;
        let start = canvas.width() * self.state.temperature;
        for i in 0..iterations {
            let cooled = start * (1.0 - i as f32 / iterations as f32);
            self.step(g, &mut positions, canvas, cooled);
        }

        fit_to_canvas(&mut positions, canvas, self.state.padding);
        positions
    }
}

/// Ideal edge length `k = sqrt(area / n)`; the canvas analogue of `1/sqrt(n)`
/// on the unit square.
pub(crate) fn prepare_constants(canvas: Rect, node_count: usize, k_scale: f32) -> Option<f32> {
    if node_count == 0 {
        return None;
    }
    let n = node_count as f32;
    let area = canvas.area().max(1.0);
    let k = (area / n).sqrt() * k_scale;
    if !k.is_finite() {
        return None;
    }
    Some(k)
}

pub(crate) fn compute_repulsion(
    positions: &[Pos2],
    disp: &mut [Vec2],
    k: f32,
    epsilon: f32,
    c_repulse: f32,
) {
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let delta = positions[i] - positions[j];
            let distance = delta.length().max(epsilon);
            let force = c_repulse * (k * k) / distance;
            let dir = delta / distance;
            disp[i] += dir * force;
            disp[j] -= dir * force;
        }
    }
}

pub(crate) fn compute_attraction(
    g: &LayoutGraph,
    positions: &[Pos2],
    disp: &mut [Vec2],
    k: f32,
    epsilon: f32,
    c_attract: f32,
) {
    for idx in g.node_indices() {
        let i = idx.index();
        let loc = positions[i];
        for nbr in g.neighbors_undirected(idx) {
            let delta = positions[nbr.index()] - loc;
            let distance = delta.length().max(epsilon);
            let force = c_attract * (distance * distance) / k;
            disp[i] += (delta / distance) * force;
        }
    }
}

pub(crate) fn apply_displacements(positions: &mut [Pos2], disp: &[Vec2], dt: f32, max_step: f32) {
    for (loc, d) in positions.iter_mut().zip(disp) {
        let mut step = *d * dt;
        if step.length() > max_step {
            step = step.normalized() * max_step;
        }
        let new_loc = *loc + step;
        if !new_loc.x.is_finite() || !new_loc.y.is_finite() {
            continue;
        }
        *loc = new_loc;
    }
}
