//! Picker window content: the selection surface (hue/saturation field, value
//! strip, swatch) beside the groups of synchronized text fields.
//!
//! The shared color lives in one signal. The surface writes to it, and an
//! effect reports it to [`ColorSync`] and dispatches the refreshed texts
//! through a [`FieldTable`] of text signals. Each text signal has an effect
//! that feeds edits back to [`ColorSync`] and writes committed colors to the
//! shared signal. `ColorSync` is never borrowed across a signal write, since
//! writes run dependent effects synchronously.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::color::RgbColor;
use crate::config::PickerConfig;
use crate::constants;
use crate::field::{FieldGroup, FieldId, FieldTable};
use crate::hue_sat_field::hue_sat_field;
use crate::inputs::{copy_button, field_row, separator};
use crate::math::Hsb;
use crate::sync::{ColorSync, EditOutcome};
use crate::value_strip::value_strip;

pub(crate) fn color_editor(config: &PickerConfig, color: RwSignal<RgbColor>) -> impl IntoView {
    let sync = Rc::new(RefCell::new(ColorSync::new(config)));
    let texts: FieldTable<RwSignal<String>> =
        FieldTable::from_fn(|field| RwSignal::new(sync.borrow().text(field).to_string()));
    let hsb = RwSignal::new(color.get_untracked().to_hsb());

    // Surface -> color
    create_effect(move |_| {
        let picked = RgbColor::from_hsb(hsb.get());
        if picked != color.get_untracked() {
            color.set(picked);
        }
    });

    // Color -> surface, unless the surface already shows this color
    create_effect(move |_| {
        let c = color.get();
        let current = hsb.get_untracked();
        if RgbColor::from_hsb(current) == c {
            return;
        }
        let mut next = c.to_hsb();
        // Hue is undefined for grays; keep the one the user was on.
        if next.saturation <= 0.001 || next.brightness <= 0.001 {
            next.hue = current.hue;
        }
        if next.brightness <= 0.001 {
            next.saturation = current.saturation;
        }
        hsb.set(next);
    });

    // Color -> fields
    let selector_sync = sync.clone();
    create_effect(move |_| {
        let c = color.get();
        let updates = selector_sync.borrow_mut().on_selector_color_changed(c);
        for update in updates {
            let text = texts[update.field];
            if text.get_untracked() != update.text {
                text.set(update.text);
            }
        }
    });

    // Fields -> color
    for field in FieldId::ALL {
        let edit_sync = sync.clone();
        let text = texts[field];
        create_effect(move |_| {
            let raw = text.get();
            let outcome = edit_sync.borrow_mut().on_text_field_edited(field, &raw);
            if let EditOutcome::Commit(committed) = outcome {
                color.set(committed);
            }
        });
    }

    let group = |group: FieldGroup| {
        let copy_sync = sync.clone();
        let rows: Vec<_> = group
            .fields()
            .iter()
            .map(|field| field_row(*field, texts[*field]))
            .collect();
        h_stack((
            v_stack_from_iter(rows).style(|s| s.gap(4.0)),
            copy_button(move || copy_sync.borrow().clipboard_text(group)),
        ))
        .style(|s| s.gap(constants::GAP / 2.0))
    };

    h_stack((
        // Selection surface
        v_stack((
            h_stack((hue_sat_field(hsb), value_strip(hsb))).style(|s| s.gap(constants::GAP)),
            empty().style(move |s| {
                let c = color.get();
                s.width(constants::FIELD_SIZE)
                    .height(constants::SWATCH_HEIGHT)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgb8(c.r(), c.g(), c.b()))
            }),
        ))
        .style(|s| s.gap(constants::GAP)),
        // Field groups
        v_stack((
            group(FieldGroup::Rgb),
            separator(),
            group(FieldGroup::Hsv),
            separator(),
            group(FieldGroup::Hex),
            separator(),
            group(FieldGroup::Engine),
        ))
        .style(|s| s.justify_center()),
    ))
    .style(|s| {
        s.gap(constants::GAP * 2.0)
            .padding(constants::PADDING)
            .size_full()
            .items_center()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
