//! RgbColor, the single source of truth for the picker, and its textual
//! representations.
//!
//! Stores exact 8-bit channels. HSV uses whole degrees for hue and 0–255 for
//! saturation and value; hex is lowercase `#rrggbb`; the engine triplet is
//! each channel divided by 255 with 14 fractional digits.

use crate::config::RangePolicy;
use crate::error::ColorParseError;
use crate::field::FieldId;
use crate::math::{self, Hsb};

/// Fractional digits of an engine channel.
pub const ENGINE_DIGITS: usize = 14;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    r: u8,
    g: u8,
    b: u8,
}

/// HSV triple: hue in whole degrees (0–359), saturation and value in 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

impl RgbColor {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(&self) -> u8 {
        self.r
    }
    pub fn g(&self) -> u8 {
        self.g
    }
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Channels as a `(r, g, b)` tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Build from unchecked integers, applying `policy` to values outside 0–255.
    pub fn from_channels(r: i64, g: i64, b: i64, policy: RangePolicy) -> Result<Self, ColorParseError> {
        let channel = |field: FieldId, value: i64| {
            policy
                .apply(field, value as f64, 0.0, 255.0)
                .map(|v| v as u8)
        };
        Ok(Self::new(
            channel(FieldId::Red, r)?,
            channel(FieldId::Green, g)?,
            channel(FieldId::Blue, b)?,
        ))
    }

    /// Convert to HSV.
    ///
    /// Hue is rounded to hundredths of a degree, then truncated to whole
    /// degrees. Achromatic colors get hue 0.
    pub fn to_hsv(&self) -> Hsv {
        let (h, s, v) = math::rgb_to_hsv(self.r as f64, self.g as f64, self.b as f64);
        let centi = (h * 100.0).round() as u32;
        Hsv {
            hue: (centi / 100 % 360) as u16,
            saturation: (s * 255.0).round() as u8,
            value: v as u8,
        }
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        let (r, g, b) = math::hsv_to_rgb(
            hsv.hue as f64,
            hsv.saturation as f64 / 255.0,
            hsv.value as f64 / 255.0,
        );
        Self::from_unit(r, g, b)
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb`, `rrggbb`, or the 3-digit shorthand, in either case.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(hex.to_string());
        let trimmed = hex.trim();
        let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digit = |i: usize, len: usize| {
            u8::from_str_radix(&stripped[i * len..(i + 1) * len], 16).map_err(|_| invalid())
        };
        match stripped.len() {
            3 => Ok(Self::new(digit(0, 1)? * 17, digit(1, 1)? * 17, digit(2, 1)? * 17)),
            6 => Ok(Self::new(digit(0, 2)?, digit(1, 2)?, digit(2, 2)?)),
            _ => Err(invalid()),
        }
    }

    /// Channels divided by 255.
    pub fn engine_channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| c as f64 / 255.0)
    }

    /// Engine channels with exactly [`ENGINE_DIGITS`] fractional digits.
    pub fn engine_strings(&self) -> [String; 3] {
        self.engine_channels().map(format_engine)
    }

    /// Build from engine channels, applying `policy` to values outside 0–1.
    pub fn from_engine(channels: [f64; 3], policy: RangePolicy) -> Result<Self, ColorParseError> {
        let fields = [FieldId::EngineRed, FieldId::EngineGreen, FieldId::EngineBlue];
        let mut out = [0u8; 3];
        for ((slot, field), value) in out.iter_mut().zip(fields).zip(channels) {
            *slot = (policy.apply(field, value, 0.0, 1.0)? * 255.0).round() as u8;
        }
        Ok(Self::new(out[0], out[1], out[2]))
    }

    /// Hue, saturation and brightness for the selection surface.
    pub(crate) fn to_hsb(&self) -> Hsb {
        let (h, s, v) = math::rgb_to_hsv(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        );
        Hsb::new(h / 360.0, s, v)
    }

    pub(crate) fn from_hsb(hsb: Hsb) -> Self {
        let (r, g, b) = hsb.to_rgb();
        Self::from_unit(r, g, b)
    }

    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(quantize(r), quantize(g), quantize(b))
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Hsv {
    /// Build from unchecked integers, applying `policy` to out-of-range values.
    pub fn from_components(hue: i64, saturation: i64, value: i64, policy: RangePolicy) -> Result<Self, ColorParseError> {
        Ok(Self {
            hue: policy.apply(FieldId::Hue, hue as f64, 0.0, 359.0)? as u16,
            saturation: policy.apply(FieldId::Saturation, saturation as f64, 0.0, 255.0)? as u8,
            value: policy.apply(FieldId::Value, value as f64, 0.0, 255.0)? as u8,
        })
    }
}

/// Format one engine channel. Fixed-precision formatting rounds to the
/// nearest representable 14-digit decimal.
pub(crate) fn format_engine(channel: f64) -> String {
    format!("{:.*}", ENGINE_DIGITS, channel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn all_colors_sampled() -> impl Iterator<Item = RgbColor> {
        let steps = [0u8, 1, 17, 64, 127, 128, 200, 254, 255];
        steps.into_iter().flat_map(move |r| {
            steps
                .into_iter()
                .flat_map(move |g| steps.into_iter().map(move |b| RgbColor::new(r, g, b)))
        })
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(RgbColor::new(0, 10, 255).to_hex(), "#000aff");
        assert_eq!(RgbColor::BLACK.to_hex().len(), 7);
    }

    #[test]
    fn hex_round_trips() {
        for c in all_colors_sampled() {
            assert_eq!(RgbColor::from_hex(&c.to_hex()), Ok(c));
        }
    }

    #[test]
    fn hex_accepts_bare_upper_and_shorthand() {
        assert_eq!(RgbColor::from_hex("C86432"), Ok(RgbColor::new(200, 100, 50)));
        assert_eq!(RgbColor::from_hex(" #fA0 "), Ok(RgbColor::new(255, 170, 0)));
    }

    #[test]
    fn hex_rejects_garbage() {
        for bad in ["", "#", "#12345", "#1234567", "#gg0000", "#ff00ff00", "#+f0"] {
            assert!(
                matches!(RgbColor::from_hex(bad), Err(ColorParseError::InvalidHex(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn engine_strings_have_fourteen_digits() {
        let strings = RgbColor::new(255, 128, 0).engine_strings();
        assert_eq!(strings, ["1.00000000000000", "0.50196078431373", "0.00000000000000"]);
    }

    #[test]
    fn engine_channels_are_fractions_of_255() {
        let [r, g, b] = RgbColor::new(51, 102, 204).engine_channels();
        assert_abs_diff_eq!(r, 0.2);
        assert_abs_diff_eq!(g, 0.4);
        assert_abs_diff_eq!(b, 0.8);
    }

    #[test]
    fn engine_round_trips() {
        for c in all_colors_sampled() {
            assert_eq!(RgbColor::from_engine(c.engine_channels(), RangePolicy::Reject), Ok(c));
        }
    }

    #[test]
    fn engine_range_follows_policy() {
        assert!(RgbColor::from_engine([1.5, 0.0, 0.0], RangePolicy::Reject).is_err());
        assert_eq!(
            RgbColor::from_engine([1.5, -0.1, 0.5], RangePolicy::Clamp),
            Ok(RgbColor::new(255, 0, 128))
        );
    }

    #[test]
    fn hsv_of_known_colors() {
        let cases = [
            (RgbColor::new(200, 100, 50), (20, 191, 200)),
            (RgbColor::new(10, 20, 30), (210, 170, 30)),
            (RgbColor::new(255, 128, 0), (30, 255, 255)),
            (RgbColor::new(0, 10, 255), (237, 255, 255)),
            (RgbColor::new(255, 0, 1), (359, 255, 255)),
            (RgbColor::new(128, 128, 128), (0, 0, 128)),
        ];
        for (color, (hue, saturation, value)) in cases {
            assert_eq!(
                color.to_hsv(),
                Hsv {
                    hue,
                    saturation,
                    value
                },
                "{color:?}"
            );
        }
    }

    #[test]
    fn hsv_round_trips_exactly_on_boundaries() {
        let exact = [
            RgbColor::BLACK,
            RgbColor::WHITE,
            RgbColor::new(128, 128, 128),
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
            RgbColor::new(255, 255, 0),
            RgbColor::new(0, 255, 255),
            RgbColor::new(255, 0, 255),
            RgbColor::new(200, 100, 50),
        ];
        for c in exact {
            assert_eq!(RgbColor::from_hsv(c.to_hsv()), c);
        }
    }

    #[test]
    fn hsv_round_trips_within_tolerance() {
        for c in all_colors_sampled() {
            let back = RgbColor::from_hsv(c.to_hsv());
            // Hue is truncated to whole degrees; at full chroma one degree
            // spans a little over four channel steps.
            for (a, b) in [(c.r, back.r), (c.g, back.g), (c.b, back.b)] {
                assert!(a.abs_diff(b) <= 5, "{c:?} came back as {back:?}");
            }
        }
    }

    #[test]
    fn hsb_round_trips_exactly() {
        for c in all_colors_sampled() {
            assert_eq!(RgbColor::from_hsb(c.to_hsb()), c);
        }
    }

    #[test]
    fn channels_follow_range_policy() {
        assert_eq!(
            RgbColor::from_channels(10, 20, 30, RangePolicy::Reject),
            Ok(RgbColor::new(10, 20, 30))
        );
        assert!(matches!(
            RgbColor::from_channels(10, 999, 30, RangePolicy::Reject),
            Err(ColorParseError::OutOfRange {
                field: FieldId::Green,
                ..
            })
        ));
        assert_eq!(
            RgbColor::from_channels(-5, 999, 30, RangePolicy::Clamp),
            Ok(RgbColor::new(0, 255, 30))
        );
    }

    #[test]
    fn hsv_components_are_range_checked() {
        assert!(Hsv::from_components(360, 0, 0, RangePolicy::Reject).is_err());
        assert_eq!(
            Hsv::from_components(400, 300, 12, RangePolicy::Clamp),
            Ok(Hsv {
                hue: 359,
                saturation: 255,
                value: 12
            })
        );
    }
}
