use eframe::egui;

use crate::state::Shell;
use crate::ui::panels::{self, NativeDialogs};
use crate::viewer;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PtsPlotterApp {
    pub shell: Shell,
    dialogs: NativeDialogs,
}

impl eframe::App for PtsPlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Launcher: label + plot buttons ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::launcher(ui, &mut self.shell, &mut self.dialogs);
        });

        // ---- Plot window, while one is open ----
        let settings = *self.shell.settings();
        let still_open = match self.shell.view_mut() {
            Some(view) => viewer::show_viewport(ctx, view, &settings),
            None => true,
        };
        if !still_open {
            self.shell.close_view();
        }
    }
}
