pub mod buffer;
pub mod keyboard;
