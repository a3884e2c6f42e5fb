//! Color math: direct HSV conversions on floating-point channels.
//!
//! Channels are in 0.0–1.0; hue is in degrees (0.0–360.0) unless a function
//! says otherwise.

/// HSV → RGB. Hue in degrees, saturation and value in 0.0–1.0.
pub(crate) fn hsv_to_rgb(hue: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    // Sector boundaries fall on whole degrees, so 120 and 240 stay exact.
    let h6 = hue.rem_euclid(360.0) / 60.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. Returns hue in degrees, saturation and value in 0.0–1.0.
///
/// Accepts channels on any common scale (0–1 or 0–255); hue and saturation
/// are ratios, and value is returned on the input scale.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    (h, s, max)
}

/// Hue, saturation and brightness of the selection surface, all 0.0–1.0.
///
/// Kept as one value so the surface never publishes a half-updated triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub(crate) fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Unit-range RGB of this triple.
    pub(crate) fn to_rgb(self) -> (f64, f64, f64) {
        hsv_to_rgb(self.hue * 360.0, self.saturation, self.brightness)
    }
}
