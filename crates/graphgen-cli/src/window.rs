use eframe::{run_native, App, CreationContext, Frame, NativeOptions};
use egui::{
    Align2, CentralPanel, Color32, Context, FontFamily, FontId, Pos2, Rect, Sense, Shape, Stroke,
    Ui, Vec2, ViewportBuilder,
};
use graphgen::{DiGraph, RenderError, RenderOutcome, RenderParameters, Renderer, Scene};
use log::info;

const APP_NAME: &str = "graphgen";

/// Shows the scene in a native window and blocks until it is closed.
#[derive(Debug, Default)]
pub struct WindowRenderer;

impl WindowRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for WindowRenderer {
    fn draw(
        &mut self,
        graph: &DiGraph,
        params: &RenderParameters,
    ) -> Result<RenderOutcome, RenderError> {
        let scene = Scene::build(graph, params)?;
        let native_options = NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(scene.title.clone())
                .with_inner_size([scene.size.x, scene.size.y]),
            ..Default::default()
        };

        info!("opening window, close it to exit");
        run_native(
            APP_NAME,
            native_options,
            Box::new(move |cc| Ok::<Box<dyn App>, _>(Box::new(SceneApp::new(cc, scene)))),
        )
        .map_err(|err| RenderError::Display(err.to_string()))?;
        Ok(RenderOutcome::Displayed)
    }
}

struct SceneApp {
    scene: Scene,
}

impl SceneApp {
    fn new(_: &CreationContext<'_>, scene: Scene) -> Self {
        Self { scene }
    }
}

impl App for SceneApp {
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        CentralPanel::default()
            .frame(egui::Frame::default().fill(self.scene.background))
            .show(ctx, |ui| paint_scene(ui, &self.scene));
    }
}

/// Uniform scale from figure pixels into the available rect, centered.
struct FigureTransform {
    origin: Pos2,
    scale: f32,
}

impl FigureTransform {
    fn fit(size: Vec2, target: Rect) -> Self {
        let scale = (target.width() / size.x)
            .min(target.height() / size.y)
            .max(f32::EPSILON);
        Self {
            origin: target.center() - size * scale / 2.0,
            scale,
        }
    }

    fn pos(&self, p: Pos2) -> Pos2 {
        self.origin + p.to_vec2() * self.scale
    }

    fn scaled(&self, v: f32) -> f32 {
        v * self.scale
    }
}

fn paint_scene(ui: &mut Ui, scene: &Scene) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let t = FigureTransform::fit(scene.size, response.rect);

    painter.text(
        t.pos(Pos2::new(scene.size.x / 2.0, scene.graph_rect.min.y / 2.0)),
        Align2::CENTER_CENTER,
        &scene.title,
        FontId::proportional(t.scaled(scene.title_size)),
        Color32::BLACK,
    );

    let edge_width = t.scaled(scene.edge_width);
    for edge in &scene.edges {
        painter.line_segment(
            [t.pos(edge.start), t.pos(edge.end)],
            Stroke::new(edge_width, edge.color),
        );
        painter.add(Shape::convex_polygon(
            edge.tip.iter().map(|p| t.pos(*p)).collect(),
            edge.color,
            Stroke::NONE,
        ));
    }

    let node_stroke = Stroke::new(t.scaled(scene.node_stroke.width), scene.node_stroke.color);
    for node in &scene.nodes {
        let center = t.pos(node.center);
        painter.circle(center, t.scaled(scene.node_radius), scene.node_fill, node_stroke);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            &node.label,
            FontId::proportional(t.scaled(scene.label_size)),
            Color32::BLACK,
        );
    }

    let line_height = scene.caption_line_height();
    let font = FontId::new(t.scaled(scene.caption_size), FontFamily::Monospace);
    for (i, line) in scene.caption.iter().enumerate() {
        let at = Pos2::new(
            scene.caption_rect.min.x,
            scene.caption_rect.min.y + line_height * i as f32,
        );
        painter.text(t.pos(at), Align2::LEFT_TOP, line, font.clone(), Color32::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use egui::pos2;

    use super::*;

    #[test]
    fn transform_keeps_aspect_and_centers() {
        let target = Rect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 200.0));
        let t = FigureTransform::fit(Vec2::new(100.0, 100.0), target);
        assert_eq!(t.scale, 2.0);
        assert_eq!(t.pos(pos2(0.0, 0.0)), pos2(100.0, 0.0));
        assert_eq!(t.pos(pos2(100.0, 100.0)), pos2(300.0, 200.0));
        assert_eq!(t.scaled(1.5), 3.0);
    }
}
