// ---------------------------------------------------------------------------
// View settings
// ---------------------------------------------------------------------------

/// Tuning shared by the plot windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    /// Radius of a point marker in the 3D view, in screen points.
    pub point_radius: f32,
    /// Width of the colour-bar strip.
    pub colorbar_width: f32,
    /// Colour steps used for the scatter overlay of the change chart.
    pub scatter_buckets: usize,
    /// Scatter marker radius in the change chart.
    pub scatter_radius: f32,
    /// Initial inner size of the 3D window.
    pub cloud_window_size: [f32; 2],
    /// Initial inner size of the change chart window.
    pub chart_window_size: [f32; 2],
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            point_radius: 5.0,
            colorbar_width: 18.0,
            scatter_buckets: 64,
            scatter_radius: 3.0,
            cloud_window_size: [1024.0, 768.0],
            chart_window_size: [1000.0, 400.0],
        }
    }
}
