pub mod display;
pub mod frame;
pub mod quadrant_controller;

pub use display::create_display;
pub use quadrant_controller::QuadrantController;
