use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use nalgebra::Point3;

use crate::color::ColorScale;
use crate::data::model::PointTable;
use crate::data::series::intensity;
use crate::settings::ViewSettings;
use crate::ui::camera::OrbitCamera;
use crate::ui::colorbar::{color_bar, color_bar_width};

const BACKGROUND: Color32 = Color32::from_rgb(24, 26, 32);
/// Radians of orbit per screen point dragged.
const ORBIT_SPEED: f32 = 0.01;
/// Zoom exponent per scroll point.
const ZOOM_SPEED: f32 = 0.002;

// ---------------------------------------------------------------------------
// 3D point cloud view
// ---------------------------------------------------------------------------

/// A marker ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub pos: Pos2,
    pub depth: f32,
    pub color: Color32,
}

/// Interactive view of a point table, coloured by intensity.
pub struct CloudView {
    /// Positions relative to the bounding-box centre, so large survey
    /// coordinates keep their precision as `f32`.
    points: Vec<Point3<f32>>,
    colors: Vec<Color32>,
    scale: ColorScale,
    camera: OrbitCamera,
    settings: ViewSettings,
}

impl CloudView {
    pub fn new(table: &PointTable, settings: &ViewSettings) -> Self {
        let values = intensity(table);
        let scale = ColorScale::from_values(&values);
        let colors = values.iter().map(|&v| scale.color_for(v)).collect();

        let (lo, hi) = table.positions().fold(
            ([f64::INFINITY; 3], [f64::NEG_INFINITY; 3]),
            |(mut lo, mut hi), p| {
                for axis in 0..3 {
                    if p[axis].is_finite() {
                        lo[axis] = lo[axis].min(p[axis]);
                        hi[axis] = hi[axis].max(p[axis]);
                    }
                }
                (lo, hi)
            },
        );
        let center: [f64; 3] = std::array::from_fn(|axis| {
            if lo[axis] <= hi[axis] {
                (lo[axis] + hi[axis]) / 2.0
            } else {
                0.0
            }
        });
        let radius = (0..3)
            .filter(|&axis| lo[axis] <= hi[axis])
            .map(|axis| (hi[axis] - lo[axis]).powi(2))
            .sum::<f64>()
            .sqrt()
            / 2.0;

        let points = table
            .positions()
            .map(|p| {
                Point3::new(
                    (p[0] - center[0]) as f32,
                    (p[1] - center[1]) as f32,
                    (p[2] - center[2]) as f32,
                )
            })
            .collect();

        Self {
            points,
            colors,
            scale,
            camera: OrbitCamera::framing(Point3::origin(), radius as f32),
            settings: *settings,
        }
    }

    /// Visible points projected into `rect`, farthest first.
    pub fn markers(&self, rect: Rect) -> Vec<Marker> {
        let vp = self.camera.view_projection(rect.aspect_ratio());
        let mut markers: Vec<Marker> = self
            .points
            .iter()
            .zip(&self.colors)
            .filter_map(|(p, &color)| {
                let projected = self.camera.project(&vp, p, rect)?;
                Some(Marker {
                    pos: projected.pos,
                    depth: projected.depth,
                    color,
                })
            })
            .collect();
        markers.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        markers
    }

    /// Render the canvas and its colour bar into the available space.
    pub fn ui(&mut self, ui: &mut Ui) {
        let available = ui.available_size();
        let legend_width = color_bar_width(self.settings.colorbar_width);
        let canvas_size = Vec2::new((available.x - legend_width - 12.0).max(64.0), available.y);

        ui.horizontal_top(|ui: &mut Ui| {
            let (response, painter) = ui.allocate_painter(canvas_size, Sense::click_and_drag());

            if response.dragged() {
                let delta = response.drag_delta();
                self.camera.orbit(delta.x * ORBIT_SPEED, delta.y * ORBIT_SPEED);
            }
            if response.hovered() {
                let scroll = ui.input(|i| i.smooth_scroll_delta.y);
                if scroll != 0.0 {
                    self.camera.zoom((-scroll * ZOOM_SPEED).exp());
                }
            }
            if response.double_clicked() {
                log::debug!("Camera reset");
                self.camera.reset();
            }

            let rect = response.rect;
            painter.rect_filled(rect, 0.0, BACKGROUND);

            let r = self.settings.point_radius;
            for marker in self.markers(rect) {
                // Shaded disc: darker rim and an off-centre highlight.
                painter.circle(
                    marker.pos,
                    r,
                    marker.color,
                    Stroke::new(1.0, marker.color.lerp_to_gamma(Color32::BLACK, 0.35)),
                );
                painter.circle_filled(
                    marker.pos + Vec2::splat(-r * 0.3),
                    r * 0.35,
                    marker.color.lerp_to_gamma(Color32::WHITE, 0.45),
                );
            }

            painter.text(
                rect.left_top() + Vec2::new(8.0, 8.0),
                Align2::LEFT_TOP,
                format!(
                    "{} points · drag to orbit, scroll to zoom, double-click to reset",
                    self.points.len()
                ),
                FontId::proportional(12.0),
                Color32::LIGHT_GRAY,
            );

            color_bar(
                ui,
                "Intensity",
                &self.scale,
                self.settings.colorbar_width,
                available.y,
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::viridis;
    use crate::data::loader::parse_pts;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(640.0, 480.0))
    }

    #[test]
    fn colours_follow_intensity() {
        let table = parse_pts("X Y Z I\n0 0 0 5\n1 1 1 9\n2 2 2 7\n").unwrap();
        let view = CloudView::new(&table, &ViewSettings::default());
        assert_eq!(view.points.len(), 3);
        assert_eq!(view.scale, ColorScale { min: 5.0, max: 9.0 });
        assert_eq!(view.colors[0], viridis(0.0));
        assert_eq!(view.colors[1], viridis(1.0));
        assert_eq!(view.colors[2], viridis(0.5));
    }

    #[test]
    fn positions_are_centred_on_the_bounding_box() {
        let table = parse_pts("h\n500000 4000000 10\n500002 4000004 14\n").unwrap();
        let view = CloudView::new(&table, &ViewSettings::default());
        assert_eq!(view.points[0], Point3::new(-1.0, -2.0, -2.0));
        assert_eq!(view.points[1], Point3::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn markers_are_painted_far_to_near() {
        let table = parse_pts("h\n-1 -1 -1\n1 1 1\n0 0 0\n1 -1 0\n").unwrap();
        let view = CloudView::new(&table, &ViewSettings::default());
        let markers = view.markers(viewport());
        assert_eq!(markers.len(), 4);
        assert!(markers.windows(2).all(|w| w[0].depth >= w[1].depth));
    }

    #[test]
    fn single_point_is_visible_at_centre() {
        let table = parse_pts("h\n3 4 5\n").unwrap();
        let mut view = CloudView::new(&table, &ViewSettings::default());
        view.camera.orbit(0.7, -0.2);
        let markers = view.markers(viewport());
        assert_eq!(markers.len(), 1);
        assert!((markers[0].pos.x - 320.0).abs() < 1e-3);
        assert!((markers[0].pos.y - 240.0).abs() < 1e-3);
    }
}
