use crate::color::Color;

/// creates a random opaque color
pub fn random_color() -> Color {
    let r = rand::random_range(0..255);
    let g = rand::random_range(0..255);
    let b = rand::random_range(0..255);

    Color::rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_color_is_opaque() {
        for _ in 0..32 {
            assert_eq!(random_color().a, 255);
        }
    }
}
