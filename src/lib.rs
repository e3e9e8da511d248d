//! Read PTS point-cloud files and plot them: a 3D view coloured by intensity
//! and a 1D chart of the intensity change between consecutive points.

pub mod app;
pub mod color;
pub mod data;
pub mod settings;
pub mod state;
pub mod ui;
pub mod viewer;

pub use data::error::{LoadError, ParseError};
pub use data::loader::{load_pts, parse_pts};
pub use data::model::PointTable;
pub use data::series::{changes, intensity};
pub use settings::ViewSettings;
pub use viewer::{PlotKind, PlotView};
