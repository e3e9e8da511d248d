use std::path::PathBuf;

use crate::data::loader::load_pts;
use crate::settings::ViewSettings;
use crate::viewer::{PlotKind, PlotView};

// ---------------------------------------------------------------------------
// Dialog seam
// ---------------------------------------------------------------------------

/// Modal dialogs the launcher needs. Both calls block until dismissed.
pub trait Dialogs {
    /// Ask for a `.pts` file; `None` when the user cancels.
    fn pick_pts_file(&mut self) -> Option<PathBuf>;

    /// Report a failure and wait for the user to acknowledge it.
    fn show_error(&mut self, message: &str);
}

// ---------------------------------------------------------------------------
// Launcher state machine
// ---------------------------------------------------------------------------

/// Where the launcher is in its cycle.
enum ShellState {
    /// Waiting for a button press.
    Idle,
    /// The file dialog is open.
    Busy,
    /// A plot window is open; the buttons stay disabled until it closes.
    Viewing(PlotView),
}

/// The launcher, independent of rendering.
pub struct Shell {
    state: ShellState,
    settings: ViewSettings,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ViewSettings::default())
    }
}

impl Shell {
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            state: ShellState::Idle,
            settings,
        }
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, ShellState::Idle)
    }

    /// Pick a file, load it, and open the requested plot.
    ///
    /// Ignored unless idle. Cancelling the dialog returns to idle silently;
    /// a load failure is reported through [`Dialogs::show_error`] and also
    /// returns to idle. The file is read afresh on every call.
    pub fn request_plot(&mut self, kind: PlotKind, dialogs: &mut impl Dialogs) {
        if !self.is_idle() {
            log::debug!("Ignoring {kind:?} request while busy");
            return;
        }

        self.state = ShellState::Busy;
        let Some(path) = dialogs.pick_pts_file() else {
            log::debug!("File dialog cancelled");
            self.state = ShellState::Idle;
            return;
        };

        self.state = match load_pts(&path) {
            Ok(table) => {
                log::info!("Showing {kind:?} for {}", path.display());
                ShellState::Viewing(PlotView::build(kind, &table, &self.settings))
            }
            Err(e) => {
                log::error!("Failed to read {}: {e}", path.display());
                dialogs.show_error(&format!("Failed to read the PTS file: {e}"));
                ShellState::Idle
            }
        };
    }

    /// The open plot, if any.
    pub fn view_mut(&mut self) -> Option<&mut PlotView> {
        match &mut self.state {
            ShellState::Viewing(view) => Some(view),
            _ => None,
        }
    }

    /// The plot window was closed.
    pub fn close_view(&mut self) {
        if matches!(self.state, ShellState::Viewing(_)) {
            self.state = ShellState::Idle;
        }
    }
}
