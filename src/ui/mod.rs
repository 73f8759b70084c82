pub mod banner;
pub mod color_demo;
pub mod help;
pub mod messages;
pub mod palette;
pub mod text;

pub use palette::{Palette, TermColor, Tone};
