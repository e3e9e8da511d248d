use anyhow::Result;
use eframe::egui::{self, ViewportBuilder, ViewportClass, ViewportId};

use crate::data::model::PointTable;
use crate::data::series::intensity;
use crate::settings::ViewSettings;
use crate::ui::cloud::CloudView;
use crate::ui::plot::{ChangePlot, CHART_TITLE};

// ---------------------------------------------------------------------------
// Plot windows
// ---------------------------------------------------------------------------

/// Which of the two plots to build from a loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Cloud3d,
    Changes1d,
}

/// A built plot, ready to be shown in its own window.
pub enum PlotView {
    Cloud(CloudView),
    Changes(ChangePlot),
}

impl PlotView {
    pub fn build(kind: PlotKind, table: &PointTable, settings: &ViewSettings) -> Self {
        match kind {
            PlotKind::Cloud3d => PlotView::Cloud(CloudView::new(table, settings)),
            PlotKind::Changes1d => PlotView::Changes(ChangePlot::new(&intensity(table), settings)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PlotView::Cloud(_) => "Point Cloud – Intensity",
            PlotView::Changes(_) => CHART_TITLE,
        }
    }

    fn inner_size(&self, settings: &ViewSettings) -> [f32; 2] {
        match self {
            PlotView::Cloud(_) => settings.cloud_window_size,
            PlotView::Changes(_) => settings.chart_window_size,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        match self {
            PlotView::Cloud(view) => view.ui(ui),
            PlotView::Changes(plot) => plot.ui(ui),
        }
    }

    fn viewport(&self, settings: &ViewSettings) -> ViewportBuilder {
        ViewportBuilder::default()
            .with_title(self.title())
            .with_inner_size(self.inner_size(settings))
            .with_min_inner_size([320.0, 200.0])
    }
}

// ---------------------------------------------------------------------------
// Standalone window (blocks until closed)
// ---------------------------------------------------------------------------

struct PlotWindowApp {
    view: PlotView,
}

impl eframe::App for PlotWindowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.ui(ui);
        });
    }
}

/// Open `view` in its own native window and return once the user closes it.
pub fn run_blocking(view: PlotView, settings: &ViewSettings) -> Result<()> {
    let title = view.title();
    let options = eframe::NativeOptions {
        viewport: view.viewport(settings),
        ..Default::default()
    };

    log::info!("Opening window: {title}");
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(PlotWindowApp { view }))),
    )
    .map_err(|e| anyhow::anyhow!("{title} window failed: {e}"))?;
    log::info!("Closed window: {title}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Child viewport of a running app
// ---------------------------------------------------------------------------

/// Draw `view` in a second native window owned by `ctx`. Returns `false`
/// once the user has closed it.
pub fn show_viewport(ctx: &egui::Context, view: &mut PlotView, settings: &ViewSettings) -> bool {
    let title = view.title();
    let id = ViewportId::from_hash_of(title);
    let builder = view.viewport(settings);
    let size = view.inner_size(settings);
    let mut open = true;

    ctx.show_viewport_immediate(id, builder, |ctx, class| {
        if class == ViewportClass::Embedded {
            // Backend without multi-window support: fall back to a floating window.
            egui::Window::new(title)
                .open(&mut open)
                .default_size(size)
                .show(ctx, |ui| view.ui(ui));
        } else {
            egui::CentralPanel::default().show(ctx, |ui| view.ui(ui));
            if ctx.input(|i| i.viewport().close_requested()) {
                open = false;
            }
        }
    });

    if !open {
        log::info!("Closed window: {title}");
    }
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_pts;

    #[test]
    fn build_matches_kind() {
        let table = parse_pts("X Y Z\n0 0 0\n1 0 0\n").unwrap();
        let settings = ViewSettings::default();
        assert!(matches!(
            PlotView::build(PlotKind::Cloud3d, &table, &settings),
            PlotView::Cloud(_)
        ));
        assert!(matches!(
            PlotView::build(PlotKind::Changes1d, &table, &settings),
            PlotView::Changes(_)
        ));
    }

    #[test]
    fn windows_use_their_own_size() {
        let table = parse_pts("X Y Z\n0 0 0\n").unwrap();
        let settings = ViewSettings::default();
        let chart = PlotView::build(PlotKind::Changes1d, &table, &settings);
        assert_eq!(chart.title(), "Changes in Pattern");
        assert_eq!(chart.inner_size(&settings), settings.chart_window_size);
        let cloud = PlotView::build(PlotKind::Cloud3d, &table, &settings);
        assert_eq!(cloud.inner_size(&settings), settings.cloud_window_size);
    }
}
