//! The key color store and the synchronization between its surfaces.
//!
//! One canonical [`HexColor`] is mirrored into every surface (hex field,
//! swatch, preview) and into the host widget's value slot. All writes go
//! through [`ColorPicker::apply_color`].

use std::rc::{Rc, Weak};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate};
use log::{debug, trace, warn};

use crate::color::HexColor;
use crate::eyedropper::{EyedropperState, SamplingGuard};
use crate::host::{HostNode, TextWidget, ValueCallback};
use crate::sampler::{ColorSampler, SampleOutcome};

/// Reactive state backing the visible surfaces.
#[derive(Clone, Copy)]
pub(crate) struct Surfaces {
    /// The canonical store.
    pub value: RwSignal<HexColor>,
    /// Live text of the hex field, possibly invalid while typing.
    pub hex_text: RwSignal<String>,
    /// Error affordance on the hex field.
    pub hex_invalid: RwSignal<bool>,
    /// Last text the store wrote into the hex field, until the field sees it.
    pub hex_echo: RwSignal<Option<String>>,
    /// Color behind the swatch button and the swatch picker.
    pub swatch: RwSignal<HexColor>,
    /// Color of the preview square.
    pub preview: RwSignal<HexColor>,
}

impl Surfaces {
    fn new(seed: &HexColor) -> Self {
        Self {
            value: RwSignal::new(seed.clone()),
            hex_text: RwSignal::new(seed.to_string()),
            hex_invalid: RwSignal::new(false),
            hex_echo: RwSignal::new(Some(seed.to_string())),
            swatch: RwSignal::new(seed.clone()),
            preview: RwSignal::new(seed.clone()),
        }
    }

    /// Write `color` into the store and every surface.
    fn show(&self, color: &HexColor) {
        self.value.set(color.clone());
        self.write_hex_text(color.to_string());
        self.hex_invalid.set(false);
        self.swatch.set(color.clone());
        self.preview.set(color.clone());
    }

    /// Replace the hex field text, marked so the field does not take it
    /// for a keystroke.
    fn write_hex_text(&self, text: String) {
        self.hex_echo.set(Some(text.clone()));
        self.hex_text.set(text);
    }

    /// Whether `text` is the store's own write coming back from the hex
    /// field. Clears the mark either way.
    pub(crate) fn take_hex_echo(&self, text: &str) -> bool {
        let echo = self.hex_echo.get_untracked();
        self.hex_echo.set(None);
        echo.as_deref() == Some(text)
    }
}

/// What an eyedropper activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A sampling session was opened.
    Started,
    /// A session is already open; nothing happened.
    AlreadySampling,
    /// No sampler in this environment; the user was notified.
    Unsupported,
}

/// A key color picker bound to one host widget.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct ColorPicker {
    surfaces: Surfaces,
    eyedropper: RwSignal<EyedropperState>,
    widget: Rc<dyn TextWidget>,
    node: Weak<dyn HostNode>,
    sampler: Rc<dyn ColorSampler>,
    unsupported_message: Rc<str>,
}

impl ColorPicker {
    pub(crate) fn new(
        seed: HexColor,
        widget: Rc<dyn TextWidget>,
        node: &Rc<dyn HostNode>,
        sampler: Rc<dyn ColorSampler>,
        unsupported_message: &str,
    ) -> Self {
        Self {
            surfaces: Surfaces::new(&seed),
            eyedropper: RwSignal::new(EyedropperState::Idle),
            widget,
            node: Rc::downgrade(node),
            sampler,
            unsupported_message: Rc::from(unsupported_message),
        }
    }

    /// Validate `raw` and, if accepted, push it everywhere.
    ///
    /// Returns `false` without touching anything when `raw` is not a hex
    /// color; the calling surface shows its own error state. Re-applying the
    /// current value still refreshes the surfaces, fires the host callback
    /// and repaints.
    pub fn apply_color(&self, raw: &str) -> bool {
        let color = match HexColor::normalize(raw) {
            Ok(color) => color,
            Err(err) => {
                trace!("rejected key color input: {err}");
                return false;
            }
        };

        self.surfaces.show(&color);
        self.widget.set_value(color.as_str());
        if let Some(callback) = self.widget.callback() {
            callback(color.as_str());
        }
        if let Some(node) = self.node.upgrade() {
            node.set_dirty_canvas();
        }
        debug!("key color set to {color}");
        true
    }

    /// Hex field edit: apply the live text, flag it when rejected.
    pub fn hex_input(&self, text: &str) {
        if self.surfaces.hex_text.get_untracked() != text {
            self.surfaces.write_hex_text(text.to_string());
        }
        let accepted = self.apply_color(text);
        self.surfaces.hex_invalid.set(!accepted);
    }

    /// Hex field lost focus (or Enter): settle the displayed text.
    ///
    /// Valid text is shown in canonical form, invalid text is replaced by the
    /// last accepted value. The store is never changed here.
    pub fn hex_focus_lost(&self) {
        let text = self.surfaces.hex_text.get_untracked();
        let shown = match HexColor::normalize(&text) {
            Ok(color) => color.to_string(),
            Err(_) => self.surfaces.value.get_untracked().to_string(),
        };
        if shown != text {
            self.surfaces.write_hex_text(shown);
        }
        self.surfaces.hex_invalid.set(false);
    }

    /// Swatch picker change. Always well formed, forwarded as is.
    pub fn swatch_input(&self, color: &HexColor) {
        self.apply_color(color.as_str());
    }

    /// Eyedropper trigger pressed.
    pub fn activate_eyedropper(&self) -> Activation {
        if !self.sampler.is_supported() {
            warn!("screen color sampling is not supported here");
            if let Some(node) = self.node.upgrade() {
                node.alert(&self.unsupported_message);
            }
            return Activation::Unsupported;
        }
        if self.eyedropper.get_untracked() == EyedropperState::Sampling {
            debug!("eyedropper already sampling, ignoring activation");
            return Activation::AlreadySampling;
        }

        let guard = SamplingGuard::enter(self.eyedropper);
        let picker = self.clone();
        self.sampler.sample(Box::new(move |outcome| {
            let _guard = guard;
            match outcome {
                SampleOutcome::Sampled(sampled) => {
                    if !picker.apply_color(&sampled) {
                        warn!("sampler returned unusable color '{sampled}'");
                    }
                }
                SampleOutcome::Cancelled => debug!("eyedropper cancelled"),
                SampleOutcome::Failed(err) => warn!("eyedropper failed: {err}"),
            }
        }));
        Activation::Started
    }

    /// Wrap the host widget's callback so changes made by the host refresh
    /// the surfaces before the previous callback runs.
    pub(crate) fn chain_host_callback(&self) {
        let surfaces = self.surfaces;
        let previous = self.widget.callback();
        let chained: ValueCallback = Rc::new(move |value: &str| {
            match HexColor::normalize(value) {
                Ok(color) => surfaces.show(&color),
                Err(err) => trace!("host set a non-hex key color: {err}"),
            }
            if let Some(previous) = &previous {
                previous(value);
            }
        });
        self.widget.set_callback(Some(chained));
    }

    pub(crate) fn surfaces(&self) -> Surfaces {
        self.surfaces
    }

    pub(crate) fn eyedropper_signal(&self) -> RwSignal<EyedropperState> {
        self.eyedropper
    }

    /// The canonical key color.
    pub fn value(&self) -> HexColor {
        self.surfaces.value.get_untracked()
    }

    /// Text currently shown in the hex field.
    pub fn hex_text(&self) -> String {
        self.surfaces.hex_text.get_untracked()
    }

    /// Whether the hex field shows its error state.
    pub fn hex_invalid(&self) -> bool {
        self.surfaces.hex_invalid.get_untracked()
    }

    /// Color shown by the swatch picker.
    pub fn swatch(&self) -> HexColor {
        self.surfaces.swatch.get_untracked()
    }

    /// Color shown by the preview square.
    pub fn preview(&self) -> HexColor {
        self.surfaces.preview.get_untracked()
    }

    /// Whether the eyedropper is idle or sampling.
    pub fn eyedropper_state(&self) -> EyedropperState {
        self.eyedropper.get_untracked()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use crate::sampler::SampleCompletion;
    use crate::standalone::{StandaloneNode, StandaloneWidget};
    use crate::error::SamplerError;

    /// Sampler double that parks the completion until the test resolves it.
    #[derive(Default)]
    pub(crate) struct ScriptedSampler {
        pub unsupported: bool,
        pub pending: RefCell<Option<SampleCompletion>>,
        pub sessions: Cell<usize>,
    }

    impl ScriptedSampler {
        pub fn resolve(&self, outcome: SampleOutcome) {
            let done = self.pending.borrow_mut().take().expect("no open session");
            done(outcome);
        }
    }

    impl ColorSampler for ScriptedSampler {
        fn is_supported(&self) -> bool {
            !self.unsupported
        }

        fn sample(&self, done: SampleCompletion) {
            self.sessions.set(self.sessions.get() + 1);
            *self.pending.borrow_mut() = Some(done);
        }
    }

    pub(crate) struct Fixture {
        pub node: Rc<StandaloneNode>,
        pub widget: Rc<StandaloneWidget>,
        pub sampler: Rc<ScriptedSampler>,
        pub picker: ColorPicker,
    }

    pub(crate) fn fixture(seed: &str, sampler: ScriptedSampler) -> Fixture {
        fixture_with_callback(seed, sampler, None)
    }

    pub(crate) fn fixture_with_callback(
        seed: &str,
        sampler: ScriptedSampler,
        callback: Option<ValueCallback>,
    ) -> Fixture {
        let widget = Rc::new(StandaloneWidget::new("key", seed));
        widget.set_callback(callback);
        let node = Rc::new(StandaloneNode::new("bg").with_widget(widget.clone()));
        let host: Rc<dyn HostNode> = node.clone();
        let sampler = Rc::new(sampler);
        let picker = ColorPicker::new(
            HexColor::normalize(seed).unwrap(),
            widget.clone(),
            &host,
            sampler.clone(),
            "no eyedropper",
        );
        picker.chain_host_callback();
        Fixture {
            node,
            widget,
            sampler,
            picker,
        }
    }

    fn assert_all_show(f: &Fixture, expected: &str) {
        assert_eq!(f.picker.value().as_str(), expected);
        assert_eq!(f.picker.hex_text(), expected);
        assert_eq!(f.picker.swatch().as_str(), expected);
        assert_eq!(f.picker.preview().as_str(), expected);
        assert_eq!(f.widget.value(), expected);
    }

    #[test]
    fn test_shorthand_input_updates_every_surface() {
        let f = fixture("#ffffff", ScriptedSampler::default());
        f.picker.hex_input("f0a");
        assert_all_show(&f, "#ff00aa");
        assert!(!f.picker.hex_invalid());
        assert_eq!(f.node.redraws(), 1);
    }

    #[test]
    fn test_padded_uppercase_input_is_canonicalized() {
        let f = fixture("#ffffff", ScriptedSampler::default());
        assert!(f.picker.apply_color("  #ABCDEF "));
        assert_all_show(&f, "#abcdef");
    }

    #[test]
    fn test_invalid_input_flags_field_and_keeps_store() {
        let f = fixture("#112233", ScriptedSampler::default());
        f.picker.hex_input("xyz123");
        assert!(f.picker.hex_invalid());
        assert_eq!(f.picker.hex_text(), "xyz123");
        assert_eq!(f.picker.value().as_str(), "#112233");
        assert_eq!(f.widget.value(), "#112233");
        assert_eq!(f.picker.swatch().as_str(), "#112233");
        assert_eq!(f.node.redraws(), 0);
    }

    #[test]
    fn test_focus_lost_reverts_invalid_text() {
        let f = fixture("#112233", ScriptedSampler::default());
        f.picker.hex_input("12");
        assert!(f.picker.hex_invalid());
        f.picker.hex_focus_lost();
        assert_eq!(f.picker.hex_text(), "#112233");
        assert!(!f.picker.hex_invalid());
        assert_eq!(f.picker.value().as_str(), "#112233");
    }

    #[test]
    fn test_focus_lost_keeps_valid_text_canonical() {
        let f = fixture("#112233", ScriptedSampler::default());
        f.picker.hex_input("#AABBCC");
        f.picker.hex_focus_lost();
        assert_eq!(f.picker.hex_text(), "#aabbcc");
        assert_eq!(f.picker.value().as_str(), "#aabbcc");
    }

    #[test]
    fn test_reapplying_same_value_still_refreshes() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let f = fixture_with_callback(
            "#ffffff",
            ScriptedSampler::default(),
            Some(Rc::new(move |_: &str| counter.set(counter.get() + 1))),
        );

        assert!(f.picker.apply_color("#123456"));
        assert!(f.picker.apply_color("#123456"));
        assert_all_show(&f, "#123456");
        assert_eq!(calls.get(), 2);
        assert_eq!(f.node.redraws(), 2);
    }

    #[test]
    fn test_rejected_apply_leaves_everything() {
        let f = fixture("#abcdef", ScriptedSampler::default());
        assert!(!f.picker.apply_color("#abcd"));
        assert_all_show(&f, "#abcdef");
        assert_eq!(f.node.redraws(), 0);
    }

    #[test]
    fn test_host_callback_chain() {
        let widget = Rc::new(StandaloneWidget::new("key", "#000000"));
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = seen.clone();
        widget.set_callback(Some(Rc::new(move |v: &str| sink.borrow_mut().push(v.to_string()))));
        let node = Rc::new(StandaloneNode::new("bg").with_widget(widget.clone()));
        let host: Rc<dyn HostNode> = node.clone();
        let picker = ColorPicker::new(
            HexColor::normalize("#000000").unwrap(),
            widget.clone(),
            &host,
            Rc::new(ScriptedSampler::default()),
            "",
        );
        picker.chain_host_callback();

        // Picker edits reach the previous callback with the canonical value.
        picker.apply_color("ABC");
        // Host edits refresh the surfaces, then reach the previous callback.
        widget.change("#0F0");
        assert_eq!(picker.value().as_str(), "#00ff00");
        assert_eq!(picker.preview().as_str(), "#00ff00");
        assert_eq!(picker.hex_text(), "#00ff00");
        // Garbage from the host is passed on but not shown.
        widget.change("oops");
        assert_eq!(picker.swatch().as_str(), "#00ff00");

        assert_eq!(*seen.borrow(), vec!["#aabbcc", "#0F0", "oops"]);
    }

    #[test]
    fn test_swatch_input_applies() {
        let f = fixture("#ffffff", ScriptedSampler::default());
        f.picker.swatch_input(&HexColor::from_rgb(1, 2, 3));
        assert_all_show(&f, "#010203");
    }

    #[test]
    fn test_eyedropper_sampled_color_is_applied() {
        let f = fixture("#ffffff", ScriptedSampler::default());
        assert_eq!(f.picker.activate_eyedropper(), Activation::Started);
        assert_eq!(f.picker.eyedropper_state(), EyedropperState::Sampling);
        f.sampler.resolve(SampleOutcome::Sampled("#3B82F6".to_string()));
        assert_eq!(f.picker.eyedropper_state(), EyedropperState::Idle);
        assert_all_show(&f, "#3b82f6");
    }

    #[test]
    fn test_eyedropper_cancel_is_a_no_op() {
        let f = fixture("#112233", ScriptedSampler::default());
        f.picker.activate_eyedropper();
        f.sampler.resolve(SampleOutcome::Cancelled);
        assert_eq!(f.picker.eyedropper_state(), EyedropperState::Idle);
        assert_all_show(&f, "#112233");
        assert!(!f.picker.hex_invalid());
        assert!(f.node.alerts().is_empty());
    }

    #[test]
    fn test_eyedropper_failure_returns_to_idle() {
        let f = fixture("#112233", ScriptedSampler::default());
        f.picker.activate_eyedropper();
        f.sampler.resolve(SampleOutcome::Failed(SamplerError::ColorSpace));
        assert_eq!(f.picker.eyedropper_state(), EyedropperState::Idle);
        assert_all_show(&f, "#112233");
    }

    #[test]
    fn test_eyedropper_dropped_completion_returns_to_idle() {
        let f = fixture("#112233", ScriptedSampler::default());
        f.picker.activate_eyedropper();
        drop(f.sampler.pending.borrow_mut().take());
        assert_eq!(f.picker.eyedropper_state(), EyedropperState::Idle);
    }

    #[test]
    fn test_eyedropper_refuses_reentry() {
        let f = fixture("#112233", ScriptedSampler::default());
        assert_eq!(f.picker.activate_eyedropper(), Activation::Started);
        assert_eq!(f.picker.activate_eyedropper(), Activation::AlreadySampling);
        assert_eq!(f.sampler.sessions.get(), 1);
        f.sampler.resolve(SampleOutcome::Cancelled);
        assert_eq!(f.picker.activate_eyedropper(), Activation::Started);
    }

    #[test]
    fn test_eyedropper_unsupported_alerts_without_sampling() {
        let f = fixture(
            "#112233",
            ScriptedSampler {
                unsupported: true,
                ..Default::default()
            },
        );
        assert_eq!(f.picker.activate_eyedropper(), Activation::Unsupported);
        assert_eq!(f.picker.activate_eyedropper(), Activation::Unsupported);
        assert_eq!(f.node.alerts(), vec!["no eyedropper", "no eyedropper"]);
        assert_eq!(f.sampler.sessions.get(), 0);
        assert_eq!(f.picker.eyedropper_state(), EyedropperState::Idle);
    }
}
