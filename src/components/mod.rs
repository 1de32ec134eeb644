pub mod app;
pub mod flavor_wheel;
pub mod tooltip_overlay;
