//! Vertical value (brightness) strip.
//!
//! Shows the current hue and saturation fading from full value at the top to
//! black at the bottom, with an arrow marker on its right edge. The gradient
//! is rasterized and re-rendered only when the base color or size changes.

use std::sync::Arc;

use floem::kurbo::{BezPath, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math::Hsb;

/// Rasterize a vertical gradient: `(r, g, b)` at the top → black at the bottom.
fn rasterize_value_gradient(width: u32, height: u32, base: (f64, f64, f64)) -> Vec<u8> {
    let (r, g, b) = base;
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for py in 0..height {
        let v = 1.0 - py as f64 / (height - 1).max(1) as f64;
        let row = [
            (v * r * 255.0 + 0.5) as u8,
            (v * g * 255.0 + 0.5) as u8,
            (v * b * 255.0 + 0.5) as u8,
            255,
        ];
        for px in 0..width {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset..offset + 4].copy_from_slice(&row);
        }
    }
    buf
}

pub(crate) struct ValueStrip {
    id: ViewId,
    held: bool,
    hsb: Hsb,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_key: ((u8, u8, u8), u32, u32),
}

/// Creates the value strip. Dragging writes brightness into `hsb`.
pub(crate) fn value_strip(hsb: RwSignal<Hsb>) -> ValueStrip {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(hsb.get());
    });

    ValueStrip {
        id,
        held: false,
        hsb: hsb.get_untracked(),
        size: Default::default(),
        on_change: Box::new(move |brightness| {
            let current = hsb.get_untracked();
            hsb.set(Hsb::new(current.hue, current.saturation, brightness));
        }),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_key: ((0, 0, 0), 0, 0),
    }
    .style(|s| {
        s.width(constants::STRIP_WIDTH + constants::STRIP_MARKER as f32 + 2.0)
            .height(constants::FIELD_SIZE)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ValueStrip {
    fn strip_width(&self) -> f64 {
        constants::STRIP_WIDTH as f64
    }

    fn update_from_pointer(&mut self, y: f64) {
        let h = self.size.height as f64;
        if h > 0.0 {
            self.hsb.brightness = 1.0 - (y / h).clamp(0.0, 1.0);
            (self.on_change)(self.hsb.brightness);
        }
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.strip_width() * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let base = Hsb::new(self.hsb.hue, self.hsb.saturation, 1.0).to_rgb();
        let color_key = (
            (base.0 * 255.0 + 0.5) as u8,
            (base.1 * 255.0 + 0.5) as u8,
            (base.2 * 255.0 + 0.5) as u8,
        );
        let key = (color_key, pw, ph);
        if self.grad_img.is_some() && self.cached_key == key {
            return;
        }

        let pixels = rasterize_value_gradient(pw, ph, base);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_key = key;
    }
}

impl View for ValueStrip {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsb) = state.downcast::<Hsb>() {
            if self.held {
                self.hsb.hue = hsb.hue;
                self.hsb.saturation = hsb.saturation;
            } else {
                self.hsb = *hsb;
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.y);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos.y);
                self.id.request_layout();
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
        let w = self.strip_width();
        let h = self.size.height as f64;
        if h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);

        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }
        cx.stroke(
            &rect,
            Color::rgba8(0, 0, 0, 60),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Arrow pointing at the current value from the right
        let y = (1.0 - self.hsb.brightness) * h;
        let m = constants::STRIP_MARKER;
        let mut arrow = BezPath::new();
        arrow.move_to((w + 1.0, y));
        arrow.line_to((w + 1.0 + m, y - m));
        arrow.line_to((w + 1.0 + m, y + m));
        arrow.close_path();
        cx.fill(&arrow, Color::rgb8(60, 60, 60), 0.0);
    }
}
