use egui::{pos2, Pos2, Rect};
use rand::Rng;

use crate::graph::LayoutGraph;

use super::Layout;

/// Nodes evenly spaced on a circle, starting at the top and going clockwise
/// in index order.
#[derive(Debug, Clone)]
pub struct Circular {
    /// Gap between the circle and the canvas border.
    pub padding: f32,
}

impl Default for Circular {
    fn default() -> Self {
        Self { padding: 30.0 }
    }
}

impl Circular {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

impl Layout for Circular {
    fn place<R: Rng>(&mut self, g: &LayoutGraph, canvas: Rect, _rng: &mut R) -> Vec<Pos2> {
        let node_count = g.node_count();
        if node_count == 0 {
            return Vec::new();
        }
        let center = canvas.center();
        let radius = (canvas.width().min(canvas.height()) / 2.0 - self.padding).max(0.0);

        g.node_indices()
            .map(|idx| {
                let angle = -std::f32::consts::FRAC_PI_2
                    + idx.index() as f32 * std::f32::consts::TAU / node_count as f32;
                pos2(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn first_node_sits_at_top() {
        let mut g = LayoutGraph::default();
        for i in 0..8 {
            g.add_node(i);
        }
        let canvas = Rect::from_min_max(pos2(0.0, 0.0), pos2(200.0, 200.0));
        let pts = Circular::new()
            .with_padding(0.0)
            .place(&g, canvas, &mut StdRng::seed_from_u64(0));
        assert!((pts[0].x - 100.0).abs() < 1e-3);
        assert!(pts[0].y.abs() < 1e-3);
        for p in &pts {
            let d = (*p - canvas.center()).length();
            assert!((d - 100.0).abs() < 1e-3);
        }
    }
}
