#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Quantises linear channel values in `[0, 1]` to bytes. Out of range
    /// values are clamped, NaN becomes 0.
    #[must_use]
    pub fn from_unit_rgb(rgb: [f64; 3]) -> Self {
        Self {
            r: unit_to_byte(rgb[0]),
            g: unit_to_byte(rgb[1]),
            b: unit_to_byte(rgb[2]),
        }
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unit_rgb_maps_extremes() {
        assert_eq!(Colour::from_unit_rgb([0.0, 0.0, 0.0]), Colour::BLACK);
        assert_eq!(
            Colour::from_unit_rgb([1.0, 1.0, 1.0]),
            Colour { r: 255, g: 255, b: 255 }
        );
    }

    #[test]
    fn from_unit_rgb_rounds_and_clamps() {
        let colour = Colour::from_unit_rgb([0.5, -0.2, 1.7]);

        assert_eq!(colour, Colour { r: 128, g: 0, b: 255 });
    }

    #[test]
    fn from_unit_rgb_treats_nan_as_zero() {
        assert_eq!(Colour::from_unit_rgb([f64::NAN, 1.0, 0.0]).r, 0);
    }
}
