use eframe::egui;
use pts_plotter::app::PtsPlotterApp;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 200.0])
            .with_min_inner_size([320.0, 160.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PTS File Plotter",
        options,
        Box::new(|_cc| Ok(Box::new(PtsPlotterApp::default()))),
    )
}
