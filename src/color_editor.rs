//! Key color editor: the composite region attached to the node.
//!
//! One row with the hex field, swatch button, eyedropper, copy button and
//! preview; the swatch button folds the swatch picker out underneath.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;
use crate::eyedropper::eyedropper_button;
use crate::inputs::{copy_button, hex_input};
use crate::picker::ColorPicker;
use crate::swatch_picker::swatch_picker;

/// Swatch showing the current color; toggles the swatch picker.
fn swatch_button(picker: &ColorPicker, open: RwSignal<bool>) -> impl IntoView {
    let swatch = picker.surfaces().swatch;
    empty()
        .style(move |s| {
            let c = swatch.get();
            s.size(constants::SWATCH_WIDTH, constants::CONTROL_HEIGHT)
                .border(2.0)
                .border_color(constants::BORDER)
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer)
                .background(c.to_color())
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            open.update(|open| *open = !*open);
        })
}

/// Preview label and square. Never a source of input.
fn preview(picker: &ColorPicker) -> impl IntoView {
    let color = picker.surfaces().preview;
    h_stack((
        label(|| "Preview").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(constants::MUTED_TEXT)
                .margin_left(4.0)
        }),
        empty().style(move |s| {
            let c = color.get();
            s.size(constants::PREVIEW_SIZE, constants::PREVIEW_SIZE)
                .border(1.0)
                .border_color(constants::BORDER)
                .border_radius(3.0)
                .background(c.to_color())
        }),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0))
}

/// Creates the composite editor for `picker`.
pub(crate) fn color_editor(picker: ColorPicker) -> impl IntoView {
    let open = RwSignal::new(false);
    let surfaces = picker.surfaces();

    v_stack((
        h_stack((
            hex_input(picker.clone()),
            swatch_button(&picker, open),
            eyedropper_button(picker.clone()),
            copy_button(move || surfaces.value.get_untracked().to_string()),
            preview(&picker),
        ))
        .style(|s| s.items_center().gap(constants::GAP)),
        swatch_picker(picker.clone()).style(move |s| {
            s.apply_if(!open.get(), |s| s.display(floem::taffy::Display::None))
        }),
    ))
    .style(|s| {
        s.gap(constants::GAP / 2.0)
            .padding(constants::PADDING)
            .width_full()
    })
}
