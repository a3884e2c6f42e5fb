//! # unreal-color-picker
//!
//! A desktop color picker built on [Floem](https://github.com/lapce/floem).
//!
//! A hue/saturation field and value strip sit beside text fields showing the
//! selected color as RGB, HSV, hex, and the normalized 0–1 triplet used by
//! Unreal Engine linear colors. Editing the RGB fields moves the selection;
//! every other field follows.
//!
//! The synchronization logic is independent of the GUI:
//!
//! ```rust
//! use unreal_color_picker::{ColorSync, EditOutcome, FieldId, PickerConfig, RgbColor};
//!
//! let mut sync = ColorSync::new(&PickerConfig::default());
//! sync.on_selector_color_changed(RgbColor::new(255, 128, 0));
//! assert_eq!(sync.text(FieldId::EngineGreen), "0.50196078431373");
//!
//! let outcome = sync.on_text_field_edited(FieldId::Blue, "64");
//! assert_eq!(outcome, EditOutcome::Commit(RgbColor::new(255, 128, 64)));
//! ```
//!
//! ## Configuration
//!
//! The `unreal-color-picker` binary runs with [`PickerConfig::default`]: only
//! the RGB fields are editable and out-of-range numbers are rejected. The
//! other behaviours are reached by building a [`PickerConfig`] and passing it
//! to [`color_picker`] (or [`ColorSync::new`]) from your own code:
//!
//! ```rust
//! use unreal_color_picker::{
//!     ColorSync, EditOutcome, EditableFields, FieldId, PickerConfig, RangePolicy, RgbColor,
//! };
//!
//! let config = PickerConfig::default()
//!     .with_initial_color(RgbColor::BLACK)
//!     .with_range_policy(RangePolicy::Clamp)
//!     .with_editable(EditableFields::All)
//!     .with_log_level(log::LevelFilter::Debug);
//! let mut sync = ColorSync::new(&config);
//!
//! assert_eq!(
//!     sync.on_text_field_edited(FieldId::Red, "999"),
//!     EditOutcome::Commit(RgbColor::new(255, 0, 0)),
//! );
//! assert_eq!(
//!     sync.on_text_field_edited(FieldId::Hex, "#000aff"),
//!     EditOutcome::Commit(RgbColor::new(0, 10, 255)),
//! );
//! ```

mod color;
mod config;
mod error;
mod field;
mod math;
mod sync;

mod color_editor;
mod constants;
mod hue_sat_field;
mod inputs;
mod value_strip;

pub use color::{Hsv, RgbColor, ENGINE_DIGITS};
pub use config::{EditableFields, PickerConfig, RangePolicy};
pub use error::ColorParseError;
pub use field::{FieldGroup, FieldId, FieldTable, FIELD_COUNT};
pub use sync::{render_fields, ColorSync, EditOutcome, FieldUpdate, SyncState};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the picker view.
///
/// `color` is the selection surface's current color: the view reads and
/// writes it, and external writes refresh every field.
pub fn color_picker(config: &PickerConfig, color: RwSignal<RgbColor>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    color_editor::color_editor(config, color)
}
