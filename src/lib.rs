pub mod components;
pub mod geom;
pub mod gesture;
pub mod palette;
pub mod state;
pub mod taxonomy;
pub mod tooltip;

pub use components::app::App;
