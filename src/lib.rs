pub mod canvas;
pub mod color;
pub mod constants;
pub mod utils;

pub use canvas::Canvas;
pub use color::{Color, ColorError};
pub use constants::{CANVAS_SIZE, KEYBOARD_LEDS, MOUSE_LEDS};
