use thiserror::Error;

/// Errors from parsing a color out of a hex string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Expected 6 or 8 hex digits, got {len}")]
    InvalidLength { len: usize },
    #[error("Invalid hex digits in {text:?}")]
    InvalidDigit { text: String },
}

/// One RGBA color value. Channels are 8-bit, equality is per-channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the initial state of every canvas slot.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color, alpha 255.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional). The 6-digit
    /// form is opaque.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.is_ascii() {
            return Err(ColorError::InvalidDigit {
                text: s.to_string(),
            });
        }

        let channels: Vec<u8> = match digits.len() {
            6 | 8 => (0..digits.len() / 2)
                .map(|i| {
                    u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| {
                        ColorError::InvalidDigit {
                            text: s.to_string(),
                        }
                    })
                })
                .collect::<Result<_, _>>()?,
            len => return Err(ColorError::InvalidLength { len }),
        };

        let a = channels.get(3).copied().unwrap_or(255);
        Ok(Self::new(channels[0], channels[1], channels[2], a))
    }

    /// Channel order r, g, b, a (the order the daemon expects).
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_transparent() {
        assert_eq!(Color::default(), Color::new(0, 0, 0, 0));
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(10, 20, 30), Color::new(10, 20, 30, 255));
    }

    #[test]
    fn from_hex_six_digits() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hex("00ff7f").unwrap(), Color::rgb(0, 255, 127));
    }

    #[test]
    fn from_hex_eight_digits() {
        assert_eq!(
            Color::from_hex("#336699cc").unwrap(),
            Color::new(0x33, 0x66, 0x99, 0xcc)
        );
    }

    #[test]
    fn from_hex_rejects_bad_length() {
        assert_eq!(
            Color::from_hex("#fff").unwrap_err(),
            ColorError::InvalidLength { len: 3 }
        );
        assert_eq!(
            Color::from_hex("").unwrap_err(),
            ColorError::InvalidLength { len: 0 }
        );
    }

    #[test]
    fn from_hex_rejects_bad_digits() {
        assert!(matches!(
            Color::from_hex("#gg0000").unwrap_err(),
            ColorError::InvalidDigit { .. }
        ));
    }

    #[test]
    fn to_array_channel_order() {
        assert_eq!(Color::new(1, 2, 3, 4).to_array(), [1, 2, 3, 4]);
    }
}
