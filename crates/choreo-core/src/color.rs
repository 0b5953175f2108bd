use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Linear per-channel blend between two colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRamp {
    pub from: Rgb,
    pub to: Rgb,
}

impl ColorRamp {
    pub const WHITE_TO_BLACK: ColorRamp = ColorRamp {
        from: Rgb::WHITE,
        to: Rgb::BLACK,
    };

    /// Color at sub-progress `t`. Each channel is `round(from*(1-t) + to*t)`,
    /// which for white to black is exactly `round(255*(1-t))`.
    pub fn at(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f64 * (1.0 - t) + b as f64 * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.from.r, self.to.r),
            g: mix(self.from.g, self.to.g),
            b: mix(self.from.b, self.to.b),
        }
    }
}
