use egui::{pos2, vec2, Color32, Pos2, Rect, Stroke, Vec2};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::caption::{connections_text, wrap_text};
use crate::error::RenderError;
use crate::graph::{DiGraph, NodeId};
use crate::params::RenderParameters;

const TITLE_BAND: f32 = 40.0;
/// Share of the remaining height given to the graph; the rest holds the caption.
const GRAPH_SHARE: f32 = 0.8;
const CAPTION_MARGIN: f32 = 12.0;
const LINE_SPACING: f32 = 1.35;
const TIP_ANGLE: f32 = std::f32::consts::PI / 6.0;
const TIP_BASE: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub center: Pos2,
    pub label: String,
}

/// An edge clipped to the node borders, with its arrow head.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub start: Pos2,
    /// Where the line stops and the arrow head begins.
    pub end: Pos2,
    /// Arrow head: the point touching the target border, then both barbs.
    pub tip: [Pos2; 3],
    pub color: Color32,
}

/// Backend-neutral drawing of a graph in figure pixels, origin at the top
/// left. Every renderer paints the same scene.
#[derive(Debug, Clone)]
pub struct Scene {
    pub size: Vec2,
    pub title: String,
    pub title_size: f32,
    pub graph_rect: Rect,
    pub caption_rect: Rect,
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    pub caption: Vec<String>,
    pub node_radius: f32,
    pub node_fill: Color32,
    pub node_stroke: Stroke,
    pub edge_width: f32,
    pub label_size: f32,
    pub caption_size: f32,
    pub background: Color32,
}

impl Scene {
    /// Lays out `graph` and assigns edge colors, both driven by
    /// `params.seed`.
    ///
    /// # Errors
    /// Returns [`RenderError::InvalidParameter`] when `params` fail
    /// validation.
    pub fn build(graph: &DiGraph, params: &RenderParameters) -> Result<Self, RenderError> {
        params.validate()?;
        let style = &params.style;
        let side = params.figure_pixels();

        let graph_height = (side - TITLE_BAND).max(0.0) * GRAPH_SHARE;
        let graph_rect = Rect::from_min_size(pos2(0.0, TITLE_BAND), vec2(side, graph_height));

        let caption = wrap_text(&connections_text(graph), style.caption_width);
        let line_height = style.caption_size * LINE_SPACING;
        let caption_top = graph_rect.max.y + CAPTION_MARGIN;
        let caption_height = caption.len() as f32 * line_height;
        let height = side.max(caption_top + caption_height + CAPTION_MARGIN);
        let caption_rect = Rect::from_min_max(
            pos2(CAPTION_MARGIN, caption_top),
            pos2(side - CAPTION_MARGIN, caption_top + caption_height),
        );

        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut canvas = graph_rect.shrink(style.node_radius + params.edge_thickness);
        if !canvas.is_positive() {
            canvas = Rect::from_center_size(graph_rect.center(), Vec2::ZERO);
        }
        let positions = params.layout.place(
            &graph.to_stable_graph(),
            canvas,
            style.spring_iterations,
            &mut rng,
        );

        let nodes: Vec<SceneNode> = graph
            .nodes()
            .zip(positions.iter())
            .map(|(id, &center)| SceneNode {
                id,
                center,
                label: id.to_string(),
            })
            .collect();

        let palette = style.palette_colors();
        let tip_size = TIP_BASE + params.edge_thickness * 2.0;
        let edges = graph
            .edges()
            .iter()
            .map(|edge| {
                let color = palette.choose(&mut rng).copied().unwrap_or(Color32::GRAY);
                let (start, end, tip) = edge_geometry(
                    positions[edge.source],
                    positions[edge.target],
                    style.node_radius,
                    tip_size,
                );
                SceneEdge {
                    source: edge.source,
                    target: edge.target,
                    start,
                    end,
                    tip,
                    color,
                }
            })
            .collect();

        debug!(
            "scene {}x{} with {} nodes, {} edges, {} caption lines",
            side,
            height,
            graph.node_count(),
            graph.edge_count(),
            caption.len()
        );

        Ok(Self {
            size: vec2(side, height),
            title: style.title.clone(),
            title_size: style.label_size * 1.5,
            graph_rect,
            caption_rect,
            nodes,
            edges,
            caption,
            node_radius: style.node_radius,
            node_fill: style.node_fill_color(),
            node_stroke: Stroke::new(params.edge_thickness, style.node_stroke_color()),
            edge_width: params.edge_thickness,
            label_size: style.label_size,
            caption_size: style.caption_size,
            background: style.background_color(),
        })
    }

    pub fn caption_line_height(&self) -> f32 {
        self.caption_size * LINE_SPACING
    }
}

/// Clips the segment `from -> to` to both node circles and builds the arrow
/// head at the target end.
fn edge_geometry(from: Pos2, to: Pos2, radius: f32, tip_size: f32) -> (Pos2, Pos2, [Pos2; 3]) {
    let delta = to - from;
    let length = delta.length();
    let dir = if length > f32::EPSILON {
        delta / length
    } else {
        Vec2::X
    };

    let start = from + dir * radius.min(length / 2.0);
    let tip_point = to - dir * radius.min(length / 2.0);
    let tip_len = tip_size.min((tip_point - start).length());

    let barb_1 = tip_point - rotate_vector(dir, TIP_ANGLE) * tip_len;
    let barb_2 = tip_point - rotate_vector(dir, -TIP_ANGLE) * tip_len;
    let end = tip_point - dir * tip_len;

    (start, end, [tip_point, barb_1, barb_2])
}

fn rotate_vector(vec: Vec2, angle: f32) -> Vec2 {
    let cos = angle.cos();
    let sin = angle.sin();
    Vec2::new(cos * vec.x - sin * vec.y, sin * vec.x + cos * vec.y)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::graph::Edge;

    fn triangle() -> DiGraph {
        DiGraph::from_parts(
            3,
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)],
            BTreeSet::new(),
        )
    }

    #[test]
    fn geometry_stops_at_node_borders() {
        let (start, end, tip) = edge_geometry(pos2(0.0, 0.0), pos2(100.0, 0.0), 10.0, 8.0);
        assert_eq!(start, pos2(10.0, 0.0));
        assert_eq!(tip[0], pos2(90.0, 0.0));
        assert_eq!(end, pos2(82.0, 0.0));
        assert!(tip[1].y > 0.0 || tip[2].y > 0.0);
        assert!((tip[1].x - tip[2].x).abs() < 1e-4);
    }

    #[test]
    fn scene_is_deterministic_for_a_seed() {
        let params = RenderParameters::new().with_seed(17);
        let a = Scene::build(&triangle(), &params).expect("scene");
        let b = Scene::build(&triangle(), &params).expect("scene");
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.edges, b.edges);
        assert_eq!(a.nodes.len(), 3);
        assert_eq!(a.edges.len(), 3);
    }

    #[test]
    fn nodes_sit_inside_graph_area() {
        let params = RenderParameters::new().with_fig_size(4.0);
        let scene = Scene::build(&triangle(), &params).expect("scene");
        assert_eq!(scene.size.x, 400.0);
        for node in &scene.nodes {
            assert!(scene.graph_rect.contains(node.center));
        }
        assert!(scene.caption_rect.min.y > scene.graph_rect.max.y);
        assert_eq!(scene.caption, vec!["• 0 -> [1] • 1 -> [2] • 2 -> [0]"]);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let params = RenderParameters::new().with_edge_thickness(-2.0);
        assert!(matches!(
            Scene::build(&triangle(), &params),
            Err(RenderError::InvalidParameter {
                parameter: "edge_thickness",
                ..
            })
        ));
    }
}
