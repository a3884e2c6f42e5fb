//! Labeled text fields, group separators, and copy buttons.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;
use crate::field::FieldId;

/// A label followed by a text input bound to `text`.
///
/// Every keystroke updates `text`; the editor reacts to that signal.
pub(crate) fn field_row(field: FieldId, text: RwSignal<String>) -> impl IntoView {
    h_stack((
        label(move || field.label()).style(|s| {
            s.width(constants::LABEL_WIDTH)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(60, 60, 60))
        }),
        text_input(text).style(|s| {
            s.width(constants::INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        }),
    ))
    .style(|s| s.items_center().gap(4.0))
}

/// A sunken horizontal rule between field groups.
pub(crate) fn separator() -> impl IntoView {
    empty().style(|s| {
        s.height(1.0)
            .width(constants::LABEL_WIDTH + constants::INPUT_WIDTH + 4.0)
            .margin_vert(constants::SEPARATOR_MARGIN)
            .background(Color::rgb8(190, 190, 190))
    })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_owned()));
    match result {
        Ok(()) => log::debug!("copied '{text}' to clipboard"),
        Err(e) => log::warn!("clipboard unavailable: {e}"),
    }
}
