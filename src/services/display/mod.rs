//! Display service: responsibility and boundaries
//!
//! This module and its submodules own the drawing surface and the platform
//! event queue ONLY. They translate platform events into `InputEvent`s and
//! paint ready-made `Frame`s. They MUST NOT decide what a key means or which
//! quadrant is active: that belongs to QuadrantController.

mod dry_run;
#[cfg(feature = "sdl")]
mod sdl_display;
mod r#trait;

pub use self::r#trait::{create_display, DisplayTrait};

#[cfg(test)]
pub use self::dry_run::DryRunDisplay;
#[cfg(test)]
pub use self::r#trait::EventBatch;
