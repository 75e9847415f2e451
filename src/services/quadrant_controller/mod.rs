mod controller;
mod key_bindings;

pub use self::controller::QuadrantController;
