use std::path::PathBuf;

use eframe::egui::{Button, Ui, Vec2};
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::state::{Dialogs, Shell};
use crate::viewer::PlotKind;

const BUTTON_SIZE: Vec2 = Vec2::new(120.0, 28.0);

// ---------------------------------------------------------------------------
// Launcher panel
// ---------------------------------------------------------------------------

/// Label and the two plot buttons. Buttons are disabled while a plot is open.
pub fn launcher(ui: &mut Ui, shell: &mut Shell, dialogs: &mut impl Dialogs) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(16.0);
        ui.label("Select a PTS file to plot:");
        ui.add_space(12.0);
    });

    let enabled = shell.is_idle();
    ui.columns(2, |columns| {
        columns[0].vertical_centered(|ui: &mut Ui| {
            if ui
                .add_enabled(enabled, Button::new("Plot 3D").min_size(BUTTON_SIZE))
                .clicked()
            {
                shell.request_plot(PlotKind::Cloud3d, dialogs);
            }
        });
        columns[1].vertical_centered(|ui: &mut Ui| {
            if ui
                .add_enabled(enabled, Button::new("Plot 1D").min_size(BUTTON_SIZE))
                .clicked()
            {
                shell.request_plot(PlotKind::Changes1d, dialogs);
            }
        });
    });

    if let Some(view) = shell.view_mut() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.weak(format!("{} open – close it to plot again", view.title()));
        });
    }
}

// ---------------------------------------------------------------------------
// Native dialogs
// ---------------------------------------------------------------------------

/// [`Dialogs`] backed by the platform's file and message boxes.
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_pts_file(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open PTS file")
            .add_filter("PTS files", &["pts"])
            .pick_file()
    }

    fn show_error(&mut self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title("Error")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

