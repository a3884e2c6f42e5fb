//! ColorSync keeps one authoritative color and the ten text fields derived
//! from it consistent.
//!
//! The selection surface reports colors through
//! [`ColorSync::on_selector_color_changed`], which returns the refreshed field
//! texts for the caller to dispatch. Field edits go through
//! [`ColorSync::on_text_field_edited`]; a successful parse yields
//! [`EditOutcome::Commit`] and the caller pushes that color into the surface,
//! which echoes it back as a selector change.

use std::num::IntErrorKind;

use crate::color::{format_engine, Hsv, RgbColor};
use crate::config::{EditableFields, PickerConfig, RangePolicy};
use crate::error::ColorParseError;
use crate::field::{FieldGroup, FieldId, FieldTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Every field shows the current color (or was left stale by a
    /// discarded edit).
    Idle,
    /// A field holds text that has not been reconciled yet.
    Editing(FieldId),
}

/// Result of feeding a field edit to [`ColorSync::on_text_field_edited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit parsed to a new color; push it into the selection surface.
    Commit(RgbColor),
    /// Nothing to do: the text is an echo of our own update, or it parses to
    /// the current color.
    Unchanged,
    /// The group did not parse; the edit is dropped silently.
    Discarded,
    /// The field is display-only under the current configuration.
    Ignored,
}

/// New text for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: FieldId,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ColorSync {
    color: RgbColor,
    texts: FieldTable<String>,
    state: SyncState,
    /// Field whose edit was committed, and the color it committed, until the
    /// surface echoes that color back.
    pending: Option<(FieldId, RgbColor)>,
    range_policy: RangePolicy,
    editable: EditableFields,
}

impl ColorSync {
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            color: config.initial_color,
            texts: render_fields(config.initial_color),
            state: SyncState::Idle,
            pending: None,
            range_policy: config.range_policy,
            editable: config.editable,
        }
    }

    pub fn color(&self) -> RgbColor {
        self.color
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Text currently held for `field`.
    pub fn text(&self, field: FieldId) -> &str {
        &self.texts[field]
    }

    /// The selection surface reports `color`. Every field is rewritten, even
    /// ones whose text would not change, except the field whose commit this
    /// color echoes: it keeps the text being typed.
    pub fn on_selector_color_changed(&mut self, color: RgbColor) -> Vec<FieldUpdate> {
        log::trace!("selector color changed to {}", color.to_hex());
        let kept = self
            .pending
            .take()
            .filter(|(_, committed)| *committed == color)
            .map(|(field, _)| field);
        let mut texts = render_fields(color);
        if let Some(field) = kept {
            texts[field] = std::mem::take(&mut self.texts[field]);
        }
        self.color = color;
        self.texts = texts;
        self.state = SyncState::Idle;
        self.texts
            .iter()
            .filter(|(field, _)| Some(*field) != kept)
            .map(|(field, text)| FieldUpdate {
                field,
                text: text.clone(),
            })
            .collect()
    }

    /// The user changed the text of `field`.
    pub fn on_text_field_edited(&mut self, field: FieldId, text: &str) -> EditOutcome {
        if self.texts[field] == text {
            return EditOutcome::Unchanged;
        }
        self.texts[field] = text.to_string();
        self.state = SyncState::Editing(field);
        self.pending = None;

        if !self.editable.is_trigger(field) {
            self.state = SyncState::Idle;
            return EditOutcome::Ignored;
        }

        match self.parse_group(field.group()) {
            Ok(color) if color == self.color => {
                self.state = SyncState::Idle;
                EditOutcome::Unchanged
            }
            Ok(color) => {
                log::debug!("{field} edit commits {}", color.to_hex());
                self.pending = Some((field, color));
                EditOutcome::Commit(color)
            }
            Err(e) => {
                log::debug!("discarding {field} edit: {e}");
                self.state = SyncState::Idle;
                EditOutcome::Discarded
            }
        }
    }

    /// Text a copy button for `group` puts on the clipboard.
    pub fn clipboard_text(&self, group: FieldGroup) -> String {
        let c = self.color;
        match group {
            FieldGroup::Rgb => format!("{}, {}, {}", c.r(), c.g(), c.b()),
            FieldGroup::Hsv => {
                let hsv = c.to_hsv();
                format!("{}, {}, {}", hsv.hue, hsv.saturation, hsv.value)
            }
            FieldGroup::Hex => c.to_hex(),
            FieldGroup::Engine => {
                let [r, g, b] = c.engine_strings();
                format!("(R={r},G={g},B={b},A={})", format_engine(1.0))
            }
        }
    }

    fn parse_group(&self, group: FieldGroup) -> Result<RgbColor, ColorParseError> {
        let policy = self.range_policy;
        match group {
            FieldGroup::Rgb => RgbColor::from_channels(
                self.parse_int(FieldId::Red)?,
                self.parse_int(FieldId::Green)?,
                self.parse_int(FieldId::Blue)?,
                policy,
            ),
            FieldGroup::Hsv => {
                let hsv = Hsv::from_components(
                    self.parse_int(FieldId::Hue)?,
                    self.parse_int(FieldId::Saturation)?,
                    self.parse_int(FieldId::Value)?,
                    policy,
                )?;
                Ok(RgbColor::from_hsv(hsv))
            }
            FieldGroup::Hex => RgbColor::from_hex(&self.texts[FieldId::Hex]),
            FieldGroup::Engine => RgbColor::from_engine(
                [
                    self.parse_float(FieldId::EngineRed)?,
                    self.parse_float(FieldId::EngineGreen)?,
                    self.parse_float(FieldId::EngineBlue)?,
                ],
                policy,
            ),
        }
    }

    /// Parse a base-10 integer. Digit strings too long for `i64` saturate, so
    /// the range policy still sees them as out of range.
    fn parse_int(&self, field: FieldId) -> Result<i64, ColorParseError> {
        let text = &self.texts[field];
        match text.trim().parse::<i64>() {
            Ok(value) => Ok(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(ColorParseError::NotANumber {
                    field,
                    text: text.clone(),
                }),
            },
        }
    }

    fn parse_float(&self, field: FieldId) -> Result<f64, ColorParseError> {
        let text = &self.texts[field];
        text.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ColorParseError::NotANumber {
                field,
                text: text.clone(),
            })
    }
}

/// Texts of every field for `color`.
pub fn render_fields(color: RgbColor) -> FieldTable<String> {
    let hsv = color.to_hsv();
    let [er, eg, eb] = color.engine_strings();
    let mut texts = FieldTable::default();
    texts[FieldId::Red] = color.r().to_string();
    texts[FieldId::Green] = color.g().to_string();
    texts[FieldId::Blue] = color.b().to_string();
    texts[FieldId::Hue] = hsv.hue.to_string();
    texts[FieldId::Saturation] = hsv.saturation.to_string();
    texts[FieldId::Value] = hsv.value.to_string();
    texts[FieldId::Hex] = color.to_hex();
    texts[FieldId::EngineRed] = er;
    texts[FieldId::EngineGreen] = eg;
    texts[FieldId::EngineBlue] = eb;
    texts
}
