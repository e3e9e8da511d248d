pub mod camera;
pub mod cloud;
pub mod colorbar;
pub mod panels;
pub mod plot;
