//! Eyedropper trigger: sampling state and the button that starts a session.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;
use crate::picker::ColorPicker;

/// Trigger state. `Idle -> Sampling` on activation, back to `Idle` however
/// the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyedropperState {
    Idle,
    Sampling,
}

/// Holds the trigger in `Sampling` for as long as it is alive.
///
/// Moved into the sampler's completion, so the state returns to `Idle` when
/// the completion runs or when the sampler drops it unrun.
pub(crate) struct SamplingGuard {
    state: RwSignal<EyedropperState>,
}

impl SamplingGuard {
    pub(crate) fn enter(state: RwSignal<EyedropperState>) -> Self {
        state.set(EyedropperState::Sampling);
        Self { state }
    }
}

impl Drop for SamplingGuard {
    fn drop(&mut self) {
        self.state.set(EyedropperState::Idle);
    }
}

/// A small button that opens the screen color sampler.
///
/// Darkened while a session is open. Styled to match `copy_button`.
pub(crate) fn eyedropper_button(picker: ColorPicker) -> impl IntoView {
    let state = picker.eyedropper_signal();
    container(
        label(|| lucide_icons::Icon::Pipette.unicode().to_string()).style(|s| {
            s.font_size(constants::ICON_FONT)
                .font_family("lucide".to_string())
                .color(constants::TEXT)
        }),
    )
    .style(move |s| {
        let sampling = state.get() == EyedropperState::Sampling;
        s.size(constants::BUTTON_WIDTH, constants::CONTROL_HEIGHT)
            .items_center()
            .justify_center()
            .border(1.0)
            .border_color(constants::BORDER)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
            .background(constants::BUTTON_BACKGROUND)
            .hover(|s| s.background(constants::BUTTON_HOVER))
            .apply_if(sampling, |s| {
                s.background(constants::BUTTON_ACTIVE)
                    .hover(|s| s.background(constants::BUTTON_ACTIVE))
            })
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        picker.activate_eyedropper();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let state = RwSignal::new(EyedropperState::Idle);
        let guard = SamplingGuard::enter(state);
        assert_eq!(state.get_untracked(), EyedropperState::Sampling);
        drop(guard);
        assert_eq!(state.get_untracked(), EyedropperState::Idle);
    }

    #[test]
    fn test_guard_releases_on_unwind() {
        let state = RwSignal::new(EyedropperState::Idle);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = SamplingGuard::enter(state);
            panic!("sampler blew up");
        }));
        assert!(result.is_err());
        assert_eq!(state.get_untracked(), EyedropperState::Idle);
    }
}
