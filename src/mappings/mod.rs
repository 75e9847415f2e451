pub mod key_name_to_key;
#[cfg(feature = "sdl")]
pub mod sdl_to_key;

pub use key_name_to_key::KeyNameToKey;
#[cfg(feature = "sdl")]
pub use sdl_to_key::SdlToKey;
