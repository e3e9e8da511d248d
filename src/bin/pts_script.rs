use std::path::Path;

use anyhow::{Context, Result};
use pts_plotter::{load_pts, PlotKind, PlotView, ViewSettings};
use pts_plotter::viewer::run_blocking;

/// File to plot. Edit to point at another scan.
const PTS_PATH: &str = "pts/sample.pts";

fn main() -> Result<()> {
    env_logger::init();

    let path = Path::new(PTS_PATH);
    let table = load_pts(path).with_context(|| format!("loading {}", path.display()))?;
    let settings = ViewSettings::default();

    run_blocking(PlotView::build(PlotKind::Cloud3d, &table, &settings), &settings)?;
    run_blocking(PlotView::build(PlotKind::Changes1d, &table, &settings), &settings)?;
    Ok(())
}
