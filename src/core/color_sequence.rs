use rand::{Rng, RngCore};

use crate::core::types::ColorScheme;

/// Step added to the active channel after every chart element, modulo 255.
pub const CHANNEL_STEP: u16 = 226;

/// 8-bit RGB triple produced by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb8 {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Running color cursor for the elements of one chart.
///
/// Single-channel schemes cycle the channel through
/// `(channel + 226) % 255`; `Random` draws every channel from `[0, 255)`.
pub struct ColorSequencer<'a> {
    scheme: ColorScheme,
    current: Rgb8,
    rng: &'a mut dyn RngCore,
}

impl<'a> ColorSequencer<'a> {
    pub fn new(scheme: ColorScheme, rng: &'a mut dyn RngCore) -> Self {
        Self::with_start_channel(scheme, u8::MAX, rng)
    }

    /// Starts single-channel schemes at `start` instead of 255.
    pub fn with_start_channel(scheme: ColorScheme, start: u8, rng: &'a mut dyn RngCore) -> Self {
        let current = match scheme {
            ColorScheme::Random => random_rgb(rng),
            ColorScheme::Red => Rgb8::new(start, 0, 0),
            ColorScheme::Green => Rgb8::new(0, start, 0),
            ColorScheme::Blue => Rgb8::new(0, 0, start),
        };
        Self {
            scheme,
            current,
            rng,
        }
    }

    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    #[must_use]
    pub fn current(&self) -> Rgb8 {
        self.current
    }

    /// Moves to the color of the next element and returns it.
    pub fn advance(&mut self) -> Rgb8 {
        self.current = match self.scheme {
            ColorScheme::Random => random_rgb(self.rng),
            ColorScheme::Red => Rgb8 {
                red: step_channel(self.current.red),
                ..self.current
            },
            ColorScheme::Green => Rgb8 {
                green: step_channel(self.current.green),
                ..self.current
            },
            ColorScheme::Blue => Rgb8 {
                blue: step_channel(self.current.blue),
                ..self.current
            },
        };
        self.current
    }

    /// Returns the current color, then advances.
    pub fn next_color(&mut self) -> Rgb8 {
        let color = self.current;
        self.advance();
        color
    }
}

#[must_use]
pub fn step_channel(channel: u8) -> u8 {
    // Result is < 255, so the narrowing is lossless.
    ((u16::from(channel) + CHANNEL_STEP) % 255) as u8
}

fn random_rgb(rng: &mut dyn RngCore) -> Rgb8 {
    Rgb8::new(
        rng.gen_range(0..255),
        rng.gen_range(0..255),
        rng.gen_range(0..255),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_channel_schemes_cycle_with_fixed_step() {
        let mut rng = StdRng::seed_from_u64(1);
        for scheme in [ColorScheme::Red, ColorScheme::Green, ColorScheme::Blue] {
            let mut colors = ColorSequencer::new(scheme, &mut rng);
            let channel = |color: Rgb8| match scheme {
                ColorScheme::Red => (color.red, color.green, color.blue),
                ColorScheme::Green => (color.green, color.red, color.blue),
                _ => (color.blue, color.red, color.green),
            };
            assert_eq!(channel(colors.current()), (255, 0, 0));
            assert_eq!(channel(colors.advance()), (226, 0, 0));
            assert_eq!(channel(colors.advance()), (197, 0, 0));
        }
    }

    #[test]
    fn explicit_start_channel_overrides_default() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut colors = ColorSequencer::with_start_channel(ColorScheme::Red, 100, &mut rng);
        assert_eq!(colors.next_color(), Rgb8::new(100, 0, 0));
        assert_eq!(colors.current(), Rgb8::new(71, 0, 0));
    }

    #[test]
    fn random_scheme_stays_below_255() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut colors = ColorSequencer::new(ColorScheme::Random, &mut rng);
        for _ in 0..256 {
            let color = colors.advance();
            assert!(color.red < 255 && color.green < 255 && color.blue < 255);
        }
    }

    #[test]
    fn step_wraps_modulo_255() {
        assert_eq!(step_channel(0), 226);
        assert_eq!(step_channel(29), 0);
        assert_eq!(step_channel(254), 225);
    }
}
