use egui::{pos2, Pos2, Rect};
use rand::Rng;

use crate::graph::LayoutGraph;

use super::Layout;

/// Evenly spaced nodes along the horizontal center line, in index order.
#[derive(Debug, Clone, Default)]
pub struct Line;

impl Layout for Line {
    fn place<R: Rng>(&mut self, g: &LayoutGraph, canvas: Rect, _rng: &mut R) -> Vec<Pos2> {
        let n = g.node_count();
        let step = canvas.width() / n.max(1) as f32;
        let y = canvas.center().y;
        g.node_indices()
            .map(|idx| pos2(canvas.min.x + step * (idx.index() as f32 + 0.5), y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn spacing_is_even() {
        let mut g = LayoutGraph::default();
        for i in 0..4 {
            g.add_node(i);
        }
        let canvas = Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 100.0));
        let pts = Line.place(&g, canvas, &mut StdRng::seed_from_u64(0));
        let xs: Vec<f32> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![50.0, 150.0, 250.0, 350.0]);
        assert!(pts.iter().all(|p| p.y == 50.0));
    }
}
