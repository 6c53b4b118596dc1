//! Swatch picker: a saturation/brightness area over a hue slider.
//!
//! Both are rasterized to RGBA8 images. The area is rebuilt when the hue or
//! the size changes, the hue strip only when the size changes.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::{v_stack, Decorators, Stack};
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::HexColor;
use crate::constants;
use crate::math;
use crate::picker::ColorPicker;

/// HSB coordinates shown by the swatch picker.
///
/// Follows the swatch surface, but keeps its hue while the color is gray or
/// black so the area does not snap back to red.
#[derive(Clone, Copy)]
pub(crate) struct SwatchHsb {
    pub hue: RwSignal<f64>,
    pub saturation: RwSignal<f64>,
    pub brightness: RwSignal<f64>,
}

impl SwatchHsb {
    pub(crate) fn follow(swatch: RwSignal<HexColor>) -> Self {
        let (h, s, b) = swatch.get_untracked().to_hsb();
        let hsb = Self {
            hue: RwSignal::new(h),
            saturation: RwSignal::new(s),
            brightness: RwSignal::new(b),
        };

        create_effect(move |_| {
            let c = swatch.get();
            // Our own pick coming back through the store.
            if hsb.color() == c {
                return;
            }
            let (h, s, b) = c.to_hsb();
            if s > 0.001 && b > 0.001 {
                hsb.hue.set(h);
            }
            hsb.saturation.set(s);
            hsb.brightness.set(b);
        });

        hsb
    }

    /// The color at the current coordinates.
    pub(crate) fn color(&self) -> HexColor {
        HexColor::from_hsb(
            self.hue.get_untracked(),
            self.saturation.get_untracked(),
            self.brightness.get_untracked(),
        )
    }

    /// Hand the current color to `picker` unless it already shows it.
    pub(crate) fn pick(&self, picker: &ColorPicker) {
        let color = self.color();
        if color != picker.swatch() {
            picker.swatch_input(&color);
        }
    }
}

fn rasterize_area(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let wx = (width - 1).max(1) as f64;
    let hy = (height - 1).max(1) as f64;
    for py in 0..height {
        for px in 0..width {
            let (s, v) = math::area_to_sb(px as f64 / wx, py as f64 / hy);
            let (r, g, b) = math::hsb_to_rgb(hue, s, v);
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }
    buf
}

fn rasterize_hue_strip(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let wx = (width - 1).max(1) as f64;
    for px in 0..width {
        let (r, g, b) = math::hsb_to_rgb(px as f64 / wx, 1.0, 1.0);
        let (cr, cg, cb) = (
            (r * 255.0 + 0.5) as u8,
            (g * 255.0 + 0.5) as u8,
            (b * 255.0 + 0.5) as u8,
        );
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}

fn stroke_thumb(cx: &mut PaintCx, center: (f64, f64), radius: f64) {
    let outer = Circle::new(center, radius + 1.0);
    cx.stroke(&outer, Color::rgba8(0, 0, 0, 80), &floem::kurbo::Stroke::new(1.0));
    let ring = Circle::new(center, radius);
    cx.stroke(&ring, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
}

enum AreaUpdate {
    Hue(f64),
    Cursor(f64, f64),
}

pub(crate) struct SaturationBrightnessArea {
    id: ViewId,
    held: bool,
    hue: f64,
    /// Cursor position, both 0.0–1.0.
    pos: (f64, f64),
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64, f64)>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    cached_hue: u32,
    cached_dims: (u32, u32),
}

/// Creates the saturation/brightness area.
///
/// - `hue`: read-only, selects the gradient.
/// - `on_change`: receives `(saturation, brightness)` under the pointer.
pub(crate) fn saturation_brightness_area(
    hsb: SwatchHsb,
    on_change: impl Fn(f64, f64) + 'static,
) -> SaturationBrightnessArea {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(AreaUpdate::Hue(hsb.hue.get()));
    });
    create_effect(move |_| {
        let (x, y) = math::sb_to_area(hsb.saturation.get(), hsb.brightness.get());
        id.update_state(AreaUpdate::Cursor(x, y));
    });

    SaturationBrightnessArea {
        id,
        held: false,
        hue: hsb.hue.get_untracked(),
        pos: math::sb_to_area(
            hsb.saturation.get_untracked(),
            hsb.brightness.get_untracked(),
        ),
        size: Default::default(),
        on_change: Box::new(on_change),
        img: None,
        img_hash: Vec::new(),
        cached_hue: u32::MAX,
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::AREA_HEIGHT)
            .width_full()
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl SaturationBrightnessArea {
    fn update_from_pointer(&mut self, x: f64, y: f64) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.pos = ((x / w).clamp(0.0, 1.0), (y / h).clamp(0.0, 1.0));
        let (s, b) = math::area_to_sb(self.pos.0, self.pos.1);
        (self.on_change)(s, b);
        self.id.request_layout();
    }

    fn ensure_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }
        let hue_key = (self.hue * 3600.0).round() as u32;
        if self.cached_dims == (pw, ph) && self.cached_hue == hue_key {
            return;
        }
        let blob = Blob::new(Arc::new(rasterize_area(pw, ph, self.hue)));
        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, pw, ph));
        self.cached_hue = hue_key;
        self.cached_dims = (pw, ph);
    }
}

impl View for SaturationBrightnessArea {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<AreaUpdate>() {
            match *update {
                AreaUpdate::Hue(hue) => self.hue = hue,
                AreaUpdate::Cursor(x, y) => self.pos = (x, y),
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x, e.pos.y);
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos.x, e.pos.y);
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        self.ensure_image(cx.scale());
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(&rrect, constants::BORDER, &floem::kurbo::Stroke::new(1.0));
        stroke_thumb(cx, (self.pos.0 * w, self.pos.1 * h), constants::CURSOR_RADIUS);
    }
}

pub(crate) struct HueSlider {
    id: ViewId,
    held: bool,
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates a horizontal hue slider, red on both ends.
pub(crate) fn hue_slider(hue: RwSignal<f64>, on_change: impl Fn(f64) + 'static) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(hue.get());
    });

    HueSlider {
        id,
        held: false,
        hue: hue.get_untracked(),
        size: Default::default(),
        on_change: Box::new(on_change),
        img: None,
        img_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .width_full()
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable > 0.0 {
            self.hue = ((x - r) / usable).clamp(0.0, 1.0);
            (self.on_change)(self.hue);
            self.id.request_layout();
        }
    }

    fn ensure_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 || self.cached_dims == (pw, ph) {
            return;
        }
        let blob = Blob::new(Arc::new(rasterize_hue_strip(pw, ph)));
        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, pw, ph));
        self.cached_dims = (pw, ph);
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hue) = state.downcast::<f64>() {
            self.hue = *hue;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        self.ensure_image(cx.scale());
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &floem::kurbo::Stroke::new(1.0));

        let r = constants::THUMB_RADIUS;
        let thumb_x = r + self.hue * (w - 2.0 * r);
        stroke_thumb(cx, (thumb_x, h / 2.0), r - 1.5);
    }
}

/// The fold-out swatch picker bound to `picker`'s swatch surface.
pub(crate) fn swatch_picker(picker: ColorPicker) -> Stack {
    let hsb = SwatchHsb::follow(picker.surfaces().swatch);
    let on_area = picker.clone();
    let on_hue = picker;

    v_stack((
        saturation_brightness_area(hsb, move |s, b| {
            hsb.saturation.set(s);
            hsb.brightness.set(b);
            hsb.pick(&on_area);
        }),
        hue_slider(hsb.hue, move |h| {
            hsb.hue.set(h);
            hsb.pick(&on_hue);
        }),
    ))
    .style(|s| s.gap(constants::GAP / 2.0).width_full())
}
