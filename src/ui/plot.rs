use eframe::egui::{Color32, Ui, Vec2};
use egui_plot::{Legend, Line, Plot, PlotPoint, Points};

use crate::color::{viridis, ColorScale, INVALID_COLOR};
use crate::data::series::changes;
use crate::settings::ViewSettings;
use crate::ui::colorbar::{color_bar, color_bar_width};

pub const CHART_TITLE: &str = "Changes in Pattern";
pub const LINE_NAME: &str = "Change in Pattern";
pub const X_LABEL: &str = "Point Index";
pub const Y_LABEL: &str = "Change Intensity";

// ---------------------------------------------------------------------------
// Change chart
// ---------------------------------------------------------------------------

/// Scatter points sharing one colour step.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub color: Color32,
    pub points: Vec<PlotPoint>,
}

/// Line + coloured scatter of the change between consecutive intensities.
pub struct ChangePlot {
    line: Vec<PlotPoint>,
    scale: ColorScale,
    groups: Vec<ScatterGroup>,
    settings: ViewSettings,
}

impl ChangePlot {
    pub fn new(intensity: &[f64], settings: &ViewSettings) -> Self {
        let changes = changes(intensity);
        let scale = ColorScale::from_values(&changes);
        let groups = scatter_groups(&changes, &scale, settings.scatter_buckets);
        let line = changes
            .iter()
            .enumerate()
            .map(|(i, &v)| PlotPoint::new(i as f64, v))
            .collect();
        Self {
            line,
            scale,
            groups,
            settings: *settings,
        }
    }

    #[cfg(test)]
    pub(crate) fn changes(&self) -> Vec<f64> {
        self.line.iter().map(|p| p.y).collect()
    }

    /// Render title, chart and colour bar.
    pub fn ui(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(CHART_TITLE);
        });

        let available = ui.available_size();
        let legend_width = color_bar_width(self.settings.colorbar_width);
        let plot_size = Vec2::new((available.x - legend_width - 12.0).max(64.0), available.y);

        ui.horizontal_top(|ui: &mut Ui| {
            Plot::new("change_plot")
                .legend(Legend::default())
                .x_axis_label(X_LABEL)
                .y_axis_label(Y_LABEL)
                .width(plot_size.x)
                .height(plot_size.y)
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    let line = Line::new(self.line.as_slice())
                        .name(LINE_NAME)
                        .color(Color32::BLUE)
                        .width(1.5);
                    plot_ui.line(line);

                    // Unnamed, so the scatter stays out of the legend.
                    for group in &self.groups {
                        plot_ui.points(
                            Points::new(group.points.as_slice())
                                .color(group.color)
                                .radius(self.settings.scatter_radius)
                                .filled(true),
                        );
                    }
                });

            color_bar(
                ui,
                Y_LABEL,
                &self.scale,
                self.settings.colorbar_width,
                available.y,
            );
        });
    }
}

/// Bucket `(index, value)` points by their quantised colour. Non-finite
/// values land in a trailing grey group.
fn scatter_groups(values: &[f64], scale: &ColorScale, buckets: usize) -> Vec<ScatterGroup> {
    let steps = buckets.max(2);
    let mut binned: Vec<Vec<PlotPoint>> = vec![Vec::new(); steps];
    let mut invalid = Vec::new();

    for (i, &v) in values.iter().enumerate() {
        let point = PlotPoint::new(i as f64, v);
        match scale.normalize(v) {
            Some(t) => {
                let bin = (t * (steps - 1) as f32).round() as usize;
                binned[bin.min(steps - 1)].push(point);
            }
            None => invalid.push(point),
        }
    }

    let mut groups: Vec<ScatterGroup> = binned
        .into_iter()
        .enumerate()
        .filter(|(_, points)| !points.is_empty())
        .map(|(bin, points)| ScatterGroup {
            color: viridis(bin as f32 / (steps - 1) as f32),
            points,
        })
        .collect();
    if !invalid.is_empty() {
        groups.push(ScatterGroup {
            color: INVALID_COLOR,
            points: invalid,
        });
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_holds_the_change_series() {
        let plot = ChangePlot::new(&[0.0, 1.0, 0.0], &ViewSettings::default());
        assert_eq!(plot.changes(), vec![0.0, 1.0, -1.0]);
        assert_eq!(plot.scale, ColorScale { min: -1.0, max: 1.0 });
        assert_eq!(
            plot.line,
            vec![
                PlotPoint::new(0.0, 0.0),
                PlotPoint::new(1.0, 1.0),
                PlotPoint::new(2.0, -1.0),
            ]
        );
    }

    #[test]
    fn every_point_lands_in_one_group() {
        let plot = ChangePlot::new(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0], &ViewSettings::default());
        let total: usize = plot.groups.iter().map(|g| g.points.len()).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn extremes_take_the_scale_ends() {
        let scale = ColorScale { min: -1.0, max: 1.0 };
        let groups = scatter_groups(&[0.0, 1.0, -1.0], &scale, 3);
        assert_eq!(
            groups,
            vec![
                ScatterGroup {
                    color: viridis(0.0),
                    points: vec![PlotPoint::new(2.0, -1.0)],
                },
                ScatterGroup {
                    color: viridis(0.5),
                    points: vec![PlotPoint::new(0.0, 0.0)],
                },
                ScatterGroup {
                    color: viridis(1.0),
                    points: vec![PlotPoint::new(1.0, 1.0)],
                },
            ]
        );
    }

    #[test]
    fn nan_changes_are_grey() {
        let scale = ColorScale::from_values(&[0.0, f64::NAN, 2.0]);
        let groups = scatter_groups(&[0.0, f64::NAN, 2.0], &scale, 8);
        let last = groups.last().unwrap();
        assert_eq!(last.color, INVALID_COLOR);
        assert_eq!(last.points.len(), 1);
    }
}
