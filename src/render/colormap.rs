use plotters::style::RGBColor;

/// Red: model price below the purchase price (overvalued).
pub const NEON_RED: RGBColor = RGBColor(0xff, 0x07, 0x3a);
/// Yellow: model price at the purchase price.
pub const NEON_YELLOW: RGBColor = RGBColor(0xff, 0xff, 0x00);
/// Green: model price above the purchase price (undervalued).
pub const NEON_GREEN: RGBColor = RGBColor(0x39, 0xff, 0x14);

const STOPS: [RGBColor; 3] = [NEON_RED, NEON_YELLOW, NEON_GREEN];

/// Diverging red-yellow-green scale centred on a reference value.
///
/// Values are normalised over `[center - span, center + span]` where `span` is
/// the larger distance from the centre to either end of the data, so the centre
/// always maps to yellow and the scale is symmetric around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    center: f64,
    span: f64,
}

impl ColorScale {
    /// Scale for data in `[min, max]`. Without a `center` the midpoint is used.
    pub fn new(min: f64, max: f64, center: Option<f64>) -> Self {
        let center = center.unwrap_or(0.5 * (min + max));
        let span = (max - center).max(center - min);
        Self { center, span }
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    /// Position of `value` on the scale in `[0, 1]`; 0.5 is the centre.
    pub fn position(&self, value: f64) -> f64 {
        if self.span.is_nan() || self.span <= 0.0 || !value.is_finite() {
            return 0.5;
        }
        (0.5 + (value - self.center) / (2.0 * self.span)).clamp(0.0, 1.0)
    }

    /// Interpolated colour channels for `value`.
    pub fn rgb(&self, value: f64) -> (u8, u8, u8) {
        let t = self.position(value);
        let (from, to, u) = if t <= 0.5 {
            (STOPS[0], STOPS[1], t * 2.0)
        } else {
            (STOPS[1], STOPS[2], (t - 0.5) * 2.0)
        };
        (
            lerp(from.0, to.0, u),
            lerp(from.1, to.1, u),
            lerp(from.2, to.2, u),
        )
    }

    pub fn color(&self, value: f64) -> RGBColor {
        let (r, g, b) = self.rgb(value);
        RGBColor(r, g, b)
    }
}

fn lerp(a: u8, b: u8, u: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * u).round() as u8
}
