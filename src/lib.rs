//! # floem-keycolor
//!
//! Key color picker for the background transparency node of a node editor,
//! built with [Floem](https://github.com/lapce/floem).
//!
//! The node keeps its key color in a plain string widget. This crate hides
//! that widget's text input and attaches a richer editor in its place: a hex
//! field, a swatch that folds out a saturation/brightness area and a hue
//! slider, a screen eyedropper, a copy button and a preview. Every surface
//! is kept in sync with one canonical `#rrggbb` value written back to the
//! widget.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_keycolor::{KeyColorExtension, PickerConfig, StandaloneRegistry};
//!
//! let mut registry = StandaloneRegistry::new();
//! KeyColorExtension::new(PickerConfig::default()).register(&mut registry);
//! // Nodes created through the registry now get the key color editor.
//! ```

mod color;
mod color_editor;
mod config;
mod constants;
mod error;
mod extension;
mod eyedropper;
pub mod host;
mod inputs;
mod math;
mod picker;
mod sampler;
pub mod standalone;
mod swatch_picker;

pub use color::HexColor;
pub use config::PickerConfig;
pub use constants::{NODE_WIDTH, REGION_KIND, REGION_NAME};
pub use error::{ColorError, SamplerError};
pub use extension::KeyColorExtension;
pub use eyedropper::EyedropperState;
pub use host::{DomRegion, DomWidgetOptions, ExtensionRegistry, HostNode, TextWidget};
pub use picker::{Activation, ColorPicker};
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
pub use sampler::ScreenSampler;
pub use sampler::{platform_sampler, ColorSampler, SampleCompletion, SampleOutcome, UnsupportedSampler};
pub use standalone::{StandaloneNode, StandaloneRegistry, StandaloneWidget};

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the key color editor view for `picker`.
///
/// The editor reads from and writes to the picker's store; host-side edits
/// to the widget are reflected through the wrapped widget callback.
pub fn key_color_editor(picker: ColorPicker) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    color_editor::color_editor(picker)
}
