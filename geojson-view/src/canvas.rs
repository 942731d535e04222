//! Canvas widget: paints one document and handles pan, zoom and pointer
//! tracking for it.

use geojson_core::{
    config::RenderConfig,
    document::Document,
    shape::Shape,
    style::Color,
    view::ViewTransform,
};
use glam::DVec2;
use lyon::{
    math::point,
    path::Path,
    tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers},
};

/// Smallest on-screen size for strokes and point radii, in pixels.
const MIN_PIXELS: f32 = 1.0;

pub fn to_pos(v: DVec2) -> egui::Pos2 {
    egui::pos2(v.x as f32, v.y as f32)
}

pub fn to_dvec(p: egui::Pos2) -> DVec2 {
    DVec2::new(p.x as f64, p.y as f64)
}

pub fn to_color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.red, c.green, c.blue, c.alpha)
}

/// Converts a world-space length to pixels, never thinner than one pixel.
fn to_pixels(len: f64, zoom: f64) -> f32 {
    ((len * zoom) as f32).max(MIN_PIXELS)
}

/// Triangulates a simple or self-intersecting ring for filling.
///
/// egui only fills convex paths itself, so rings are tessellated with lyon
/// using the non-zero rule.
///
/// ### Returns
/// `None` for fewer than three points or if tessellation fails.
pub fn fill_mesh(points: &[egui::Pos2], color: egui::Color32) -> Option<egui::Mesh> {
    let (first, rest) = points.split_first()?;
    if rest.len() < 2 {
        return None;
    }

    let mut builder = Path::builder();
    builder.begin(point(first.x, first.y));
    for p in rest {
        builder.line_to(point(p.x, p.y));
    }
    builder.end(true);
    let path = builder.build();

    let mut buffers: VertexBuffers<egui::Pos2, u32> = VertexBuffers::new();
    let result = FillTessellator::new().tessellate_path(
        &path,
        &FillOptions::non_zero(),
        &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
            let p = v.position();
            egui::pos2(p.x, p.y)
        }),
    );
    if let Err(e) = result {
        log::debug!("polygon fill skipped: {e:?}");
        return None;
    }

    let mut mesh = egui::Mesh::default();
    for pos in buffers.vertices {
        mesh.colored_vertex(pos, color);
    }
    mesh.indices = buffers.indices;
    Some(mesh)
}

/// Paints one shape with the given view.
fn paint_shape(painter: &egui::Painter, shape: &Shape, view: &ViewTransform, center: DVec2) {
    let project = |p: &DVec2| to_pos(view.world_to_screen(*p, center));

    match shape {
        Shape::Circle(c) => {
            painter.circle_filled(
                project(&c.center),
                to_pixels(c.radius, view.zoom),
                to_color32(c.fill),
            );
        }

        Shape::Polyline(line) => {
            let points: Vec<egui::Pos2> = line.points.iter().map(project).collect();
            let stroke = egui::Stroke::new(to_pixels(line.width, view.zoom), to_color32(line.stroke));
            painter.add(egui::Shape::line(points, stroke));
        }

        Shape::Polygon(poly) => {
            let points: Vec<egui::Pos2> = poly.points.iter().map(project).collect();
            if let Some(fill) = poly.fill
                && let Some(mesh) = fill_mesh(&points, to_color32(fill))
            {
                painter.add(egui::Shape::mesh(mesh));
            }
            let stroke = egui::Stroke::new(to_pixels(poly.width, view.zoom), to_color32(poly.stroke));
            painter.add(egui::Shape::closed_line(points, stroke));
        }
    }
}

/// Shows `doc` in the remaining space of `ui`.
///
/// Per frame this:
/// 1. Fits the view to the document if a fit is pending.
/// 2. Pans on drag and zooms around the pointer on scroll.
/// 3. Paints all shapes.
///
/// ### Returns
/// The world position under the pointer, if the pointer is over the canvas.
pub fn show(ui: &mut egui::Ui, doc: &mut Document, cfg: &RenderConfig) -> Option<DVec2> {
    let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
    let rect = response.rect;
    let center = to_dvec(rect.center());
    let painter = ui.painter_at(rect);

    doc.fit_if_needed(DVec2::new(rect.width() as f64, rect.height() as f64), cfg);

    // Pan with drag.
    if response.dragged() {
        let delta = response.drag_delta();
        doc.view.pan_by(DVec2::new(delta.x as f64, delta.y as f64));
    }

    // Zoom around the mouse cursor.
    if response.hovered() {
        let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            let anchor = response.hover_pos().unwrap_or(rect.center());
            let factor = (1.0 + scroll as f64 * 0.001).clamp(0.5, 2.0);
            doc.view.zoom_at(to_dvec(anchor), center, factor, cfg);
        }
    }

    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    for shape in &doc.shapes {
        paint_shape(&painter, shape, &doc.view, center);
    }

    response
        .hover_pos()
        .map(|p| doc.view.screen_to_world(to_dvec(p), center))
}
