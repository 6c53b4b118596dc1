//! Screen color samplers.
//!
//! A sampler opens a single-shot, asynchronous "pick a pixel" session and
//! reports back through a completion closure. On macOS the system sampler
//! (`NSColorSampler`) is driven through Objective-C FFI; elsewhere sampling
//! is reported as unsupported.

use std::rc::Rc;

use crate::error::SamplerError;

/// How a sampling session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleOutcome {
    /// The user picked a pixel; the color as a hex string.
    Sampled(String),
    /// The user dismissed the sampler (Esc, click-away).
    Cancelled,
    Failed(SamplerError),
}

/// Completion handed to [`ColorSampler::sample`]. Called at most once.
pub type SampleCompletion = Box<dyn FnOnce(SampleOutcome)>;

/// An environment capability for picking a color off the screen.
pub trait ColorSampler {
    /// Whether sampling can be attempted at all.
    fn is_supported(&self) -> bool;

    /// Start a session. `done` is called when it ends; a sampler that gives
    /// up without a result may simply drop it.
    fn sample(&self, done: SampleCompletion);
}

/// Sampler for environments without a screen color picker.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSampler;

impl ColorSampler for UnsupportedSampler {
    fn is_supported(&self) -> bool {
        false
    }

    fn sample(&self, done: SampleCompletion) {
        done(SampleOutcome::Failed(SamplerError::Unavailable(
            "no screen sampler on this platform".to_string(),
        )));
    }
}

/// The best sampler available on this platform.
pub fn platform_sampler() -> Rc<dyn ColorSampler> {
    #[cfg(all(feature = "eyedropper", target_os = "macos"))]
    {
        Rc::new(macos::ScreenSampler)
    }
    #[cfg(not(all(feature = "eyedropper", target_os = "macos")))]
    {
        Rc::new(UnsupportedSampler)
    }
}

#[cfg(all(feature = "eyedropper", target_os = "macos"))]
pub use macos::ScreenSampler;

#[cfg(all(feature = "eyedropper", target_os = "macos"))]
mod macos {
    use std::cell::Cell;

    use block2::RcBlock;
    use objc2::rc::{Allocated, Id};
    use objc2::runtime::{AnyClass, AnyObject};
    use objc2::{msg_send, msg_send_id};

    use super::{ColorSampler, SampleCompletion, SampleOutcome};
    use crate::color::HexColor;
    use crate::error::SamplerError;

    /// macOS system-wide sampler (`NSColorSampler`, macOS 10.15+).
    ///
    /// macOS shows a magnifying-glass overlay; the selection handler fires
    /// with the picked `NSColor`, or with nil when the user cancels.
    /// Must be used from the main thread (Floem event handlers satisfy this).
    #[derive(Debug, Default, Clone, Copy)]
    pub struct ScreenSampler;

    impl ColorSampler for ScreenSampler {
        fn is_supported(&self) -> bool {
            AnyClass::get("NSColorSampler").is_some()
        }

        fn sample(&self, done: SampleCompletion) {
            let cls = match AnyClass::get("NSColorSampler") {
                Some(c) => c,
                None => {
                    done(SampleOutcome::Failed(SamplerError::Unavailable(
                        "NSColorSampler class not found".to_string(),
                    )));
                    return;
                }
            };

            let sampler: Allocated<AnyObject> = unsafe { msg_send_id![cls, alloc] };
            let sampler: Id<AnyObject> = unsafe { msg_send_id![sampler, init] };

            let done: Cell<Option<SampleCompletion>> = Cell::new(Some(done));

            let block = RcBlock::new(move |color_ptr: *mut AnyObject| {
                let Some(done) = done.take() else {
                    return;
                };
                if color_ptr.is_null() {
                    done(SampleOutcome::Cancelled);
                    return;
                }
                match unsafe { to_srgb(color_ptr) } {
                    Some((r, g, b)) => {
                        done(SampleOutcome::Sampled(HexColor::from_rgb_f64(r, g, b).to_string()))
                    }
                    None => done(SampleOutcome::Failed(SamplerError::ColorSpace)),
                }
            });

            unsafe {
                let _: () = msg_send![&*sampler, showSamplerWithSelectionHandler: &*block];
            }
        }
    }

    /// Convert an `NSColor` to sRGB components.
    unsafe fn to_srgb(color_ptr: *mut AnyObject) -> Option<(f64, f64, f64)> {
        let ns_cs_cls = AnyClass::get("NSColorSpace")?;
        let srgb: *const AnyObject = msg_send![ns_cs_cls, sRGBColorSpace];
        if srgb.is_null() {
            return None;
        }
        let srgb_color: *const AnyObject = msg_send![&*color_ptr, colorUsingColorSpace: &*srgb];
        if srgb_color.is_null() {
            return None;
        }
        let mut r: f64 = 0.0;
        let mut g: f64 = 0.0;
        let mut b: f64 = 0.0;
        let mut a: f64 = 0.0;
        let _: () = msg_send![
            &*srgb_color,
            getRed: &mut r,
            green: &mut g,
            blue: &mut b,
            alpha: &mut a
        ];
        Some((r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_unsupported_sampler_reports_failure() {
        let sampler = UnsupportedSampler;
        assert!(!sampler.is_supported());
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        sampler.sample(Box::new(move |outcome| *sink.borrow_mut() = Some(outcome)));
        assert!(matches!(
            seen.borrow().as_ref(),
            Some(SampleOutcome::Failed(SamplerError::Unavailable(_)))
        ));
    }
}
