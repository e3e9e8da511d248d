use eframe::egui::{self, Align2, Color32, FontId, Mesh, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::color::{viridis, ColorScale};

const SEGMENTS: usize = 48;
const TICKS: usize = 5;
/// Room to the right of the strip for tick labels.
const LABEL_SPACE: f32 = 64.0;

/// Total width taken by [`color_bar`] for a strip of `strip_width`.
pub fn color_bar_width(strip_width: f32) -> f32 {
    strip_width + LABEL_SPACE
}

/// Vertical viridis strip with a title on top and value ticks on the right.
pub fn color_bar(ui: &mut Ui, title: &str, scale: &ColorScale, strip_width: f32, height: f32) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(egui::RichText::new(title).strong());
        let bar_height = (height - ui.spacing().interact_size.y - 16.0).max(40.0);
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(color_bar_width(strip_width), bar_height),
            Sense::hover(),
        );
        let strip = Rect::from_min_size(
            rect.min + Vec2::new(0.0, 8.0),
            Vec2::new(strip_width, bar_height - 16.0),
        );

        let painter = ui.painter_at(rect);
        painter.add(Shape::mesh(gradient_mesh(strip)));
        painter.rect_stroke(
            strip,
            0.0,
            Stroke::new(1.0, ui.visuals().text_color()),
            egui::StrokeKind::Outside,
        );

        let font = FontId::proportional(11.0);
        for (i, value) in tick_values(scale).into_iter().enumerate() {
            let y = strip.bottom() - strip.height() * i as f32 / (TICKS - 1) as f32;
            painter.line_segment(
                [Pos2::new(strip.right(), y), Pos2::new(strip.right() + 4.0, y)],
                Stroke::new(1.0, ui.visuals().text_color()),
            );
            painter.text(
                Pos2::new(strip.right() + 6.0, y),
                Align2::LEFT_CENTER,
                format_tick(value),
                font.clone(),
                ui.visuals().text_color(),
            );
        }
    });
}

/// Low end at the bottom, high end at the top.
fn gradient_mesh(strip: Rect) -> Mesh {
    let mut mesh = Mesh::default();
    for i in 0..=SEGMENTS {
        let t = i as f32 / SEGMENTS as f32;
        let y = strip.bottom() - strip.height() * t;
        let color: Color32 = viridis(t);
        mesh.colored_vertex(Pos2::new(strip.left(), y), color);
        mesh.colored_vertex(Pos2::new(strip.right(), y), color);
    }
    for i in 0..SEGMENTS as u32 {
        let base = i * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    mesh
}

/// Evenly spaced values from `min` (first) to `max` (last).
fn tick_values(scale: &ColorScale) -> Vec<f64> {
    (0..TICKS)
        .map(|i| scale.min + (scale.max - scale.min) * i as f64 / (TICKS - 1) as f64)
        .collect()
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e5).contains(&magnitude) {
        format!("{value:.2e}")
    } else {
        format!("{value:.3}")
    }
}
