//! Picker configuration.
//!
//! Built in code with [`PickerConfig::default`] and the `with_*` methods;
//! nothing is read from disk.

use crate::color::RgbColor;
use crate::field::{FieldGroup, FieldId};

/// What to do with a number typed outside its field's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Treat it like unparseable text: the edit is discarded.
    #[default]
    Reject,
    /// Clamp it into range and commit.
    Clamp,
}

impl RangePolicy {
    /// Apply the policy to `value` for a field accepting `min..=max`.
    pub fn apply(self, field: FieldId, value: f64, min: f64, max: f64) -> Result<f64, crate::ColorParseError> {
        if (min..=max).contains(&value) {
            return Ok(value);
        }
        match self {
            RangePolicy::Clamp if !value.is_nan() => Ok(value.clamp(min, max)),
            _ => Err(crate::ColorParseError::OutOfRange {
                field,
                value,
                min,
                max,
            }),
        }
    }
}

/// Which fields turn edits into a new color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditableFields {
    /// Only R, G and B; the other fields are display-only.
    #[default]
    Rgb,
    /// Every field, including HSV, hex and the engine triplet.
    All,
}

impl EditableFields {
    pub fn is_trigger(self, field: FieldId) -> bool {
        match self {
            EditableFields::Rgb => field.group() == FieldGroup::Rgb,
            EditableFields::All => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Color shown at startup.
    pub initial_color: RgbColor,
    pub range_policy: RangePolicy,
    pub editable: EditableFields,
    pub window_title: String,
    /// Logical window size (width, height).
    pub window_size: (f64, f64),
    /// Default log level; `RUST_LOG` overrides it.
    pub log_level: log::LevelFilter,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: RgbColor::WHITE,
            range_policy: RangePolicy::default(),
            editable: EditableFields::default(),
            window_title: "Unreal Color Picker".to_string(),
            window_size: (560.0, 380.0),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl PickerConfig {
    pub fn with_initial_color(mut self, color: RgbColor) -> Self {
        self.initial_color = color;
        self
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    pub fn with_editable(mut self, editable: EditableFields) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_log_level(mut self, level: log::LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorParseError;

    #[test]
    fn defaults_match_observed_behaviour() {
        let config = PickerConfig::default();
        assert_eq!(config.initial_color, RgbColor::WHITE);
        assert_eq!(config.range_policy, RangePolicy::Reject);
        assert_eq!(config.editable, EditableFields::Rgb);
        assert_eq!(config.window_title, "Unreal Color Picker");
    }

    #[test]
    fn rgb_only_triggers_on_channel_fields() {
        let triggers: Vec<FieldId> = FieldId::ALL
            .into_iter()
            .filter(|f| EditableFields::Rgb.is_trigger(*f))
            .collect();
        assert_eq!(triggers, vec![FieldId::Red, FieldId::Green, FieldId::Blue]);
        assert!(FieldId::ALL.iter().all(|f| EditableFields::All.is_trigger(*f)));
    }

    #[test]
    fn reject_reports_range() {
        let err = RangePolicy::Reject
            .apply(FieldId::Red, 999.0, 0.0, 255.0)
            .unwrap_err();
        assert_eq!(
            err,
            ColorParseError::OutOfRange {
                field: FieldId::Red,
                value: 999.0,
                min: 0.0,
                max: 255.0,
            }
        );
        assert_eq!(err.to_string(), "R: 999 is outside 0..=255");
    }

    #[test]
    fn clamp_pulls_into_range() {
        assert_eq!(RangePolicy::Clamp.apply(FieldId::Red, 999.0, 0.0, 255.0), Ok(255.0));
        assert_eq!(RangePolicy::Clamp.apply(FieldId::Red, -4.0, 0.0, 255.0), Ok(0.0));
        assert!(RangePolicy::Clamp
            .apply(FieldId::EngineRed, f64::NAN, 0.0, 1.0)
            .is_err());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = PickerConfig::default()
            .with_initial_color(RgbColor::BLACK)
            .with_range_policy(RangePolicy::Clamp)
            .with_editable(EditableFields::All)
            .with_window_title("Picker")
            .with_log_level(log::LevelFilter::Debug);
        assert_eq!(config.initial_color, RgbColor::BLACK);
        assert_eq!(config.range_policy, RangePolicy::Clamp);
        assert_eq!(config.editable, EditableFields::All);
        assert_eq!(config.window_title, "Picker");
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }
}
