//! Hex text field and clipboard button.

use floem::event::EventPropagation;
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::constants;
use crate::picker::ColorPicker;

/// The hex text field.
///
/// Every edit is applied immediately; a rejected edit turns the border red.
/// Focus loss or Enter settles the text to the canonical or last good value.
pub(crate) fn hex_input(picker: ColorPicker) -> impl IntoView {
    let surfaces = picker.surfaces();
    let text = surfaces.hex_text;
    let invalid = surfaces.hex_invalid;

    // Typed text -> store. Text the store wrote itself stops here; anything
    // else is an edit, even when it spells the current value.
    let on_edit = picker.clone();
    create_effect(move |_| {
        let raw = text.get();
        if surfaces.take_hex_echo(&raw) {
            return;
        }
        on_edit.hex_input(&raw);
    });

    let on_blur = picker.clone();
    let on_enter = picker;

    text_input(text)
        .style(move |s| {
            let border = if invalid.get() {
                constants::BORDER_INVALID
            } else {
                constants::BORDER
            };
            s.width(constants::HEX_INPUT_WIDTH)
                .height(constants::CONTROL_HEIGHT)
                .padding_horiz(8.0)
                .padding_vert(4.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(constants::TEXT)
                .background(constants::FIELD_BACKGROUND)
                .border(1.0)
                .border_color(border)
                .border_radius(constants::RADIUS)
        })
        .on_event_stop(floem::event::EventListener::FocusLost, move |_| {
            on_blur.hex_focus_lost();
        })
        .on_event(floem::event::EventListener::KeyDown, move |e| {
            if let floem::event::Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
                {
                    on_enter.hex_focus_lost();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                constants::MUTED_TEXT
            } else {
                constants::TEXT
            };
            s.font_size(constants::ICON_FONT)
                .font_family("lucide".to_string())
                .color(c)
        }),
    )
    .style(|s| {
        s.size(constants::BUTTON_WIDTH, constants::CONTROL_HEIGHT)
            .items_center()
            .justify_center()
            .border(1.0)
            .border_color(constants::BORDER)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
            .background(constants::BUTTON_BACKGROUND)
            .hover(|s| s.background(constants::BUTTON_HOVER))
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
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("copying key color failed: {err}");
            }
        }
        Err(err) => log::warn!("clipboard unavailable: {err}"),
    }
}
