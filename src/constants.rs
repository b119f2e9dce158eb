/// Addressable light-elements on the keyboard zone.
pub const KEYBOARD_LEDS: usize = 144;
/// Addressable light-elements on the mouse zone.
pub const MOUSE_LEDS: usize = 36;

/// Total light-element count of one canvas. External submission code reads
/// this to know the expected color-sequence length for the daemon.
pub const CANVAS_SIZE: usize = KEYBOARD_LEDS + MOUSE_LEDS;
