#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    /// Linearly interpolates each channel towards `other` by `t`.
    ///
    /// `t` is clamped to [0, 1]; a non-finite `t` is treated as 0 so the
    /// result is always a valid colour. Channels round to nearest.
    #[must_use]
    pub fn lerp(self, other: Colour, t: f64) -> Colour {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        Colour {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) + t * (f64::from(to) - f64::from(from));
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_at_zero_returns_first_colour() {
        let a = Colour { r: 10, g: 20, b: 30 };
        let b = Colour {
            r: 200,
            g: 100,
            b: 0,
        };

        assert_eq!(a.lerp(b, 0.0), a);
    }

    #[test]
    fn test_lerp_at_one_returns_second_colour() {
        let a = Colour { r: 10, g: 20, b: 30 };
        let b = Colour {
            r: 200,
            g: 100,
            b: 0,
        };

        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_halfway_rounds_to_nearest() {
        let a = Colour { r: 0, g: 0, b: 0 };
        let b = Colour {
            r: 255,
            g: 101,
            b: 1,
        };
        let mid = a.lerp(b, 0.5);

        assert_eq!(mid, Colour { r: 128, g: 51, b: 1 });
    }

    #[test]
    fn test_lerp_clamps_t_above_one() {
        let a = Colour { r: 10, g: 10, b: 10 };
        let b = Colour {
            r: 250,
            g: 250,
            b: 250,
        };

        assert_eq!(a.lerp(b, 7.5), b);
    }

    #[test]
    fn test_lerp_clamps_negative_t() {
        let a = Colour { r: 10, g: 10, b: 10 };
        let b = Colour {
            r: 250,
            g: 250,
            b: 250,
        };

        assert_eq!(a.lerp(b, -3.0), a);
    }

    #[test]
    fn test_lerp_with_nan_t_returns_first_colour() {
        let a = Colour { r: 10, g: 20, b: 30 };
        let b = Colour {
            r: 200,
            g: 100,
            b: 0,
        };

        assert_eq!(a.lerp(b, f64::NAN), a);
    }

    #[test]
    fn test_lerp_interpolates_downwards() {
        let a = Colour {
            r: 200,
            g: 200,
            b: 200,
        };
        let b = Colour { r: 0, g: 0, b: 0 };

        assert_eq!(
            a.lerp(b, 0.25),
            Colour {
                r: 150,
                g: 150,
                b: 150
            }
        );
    }
}
