//! Rectangular hue/saturation field.
//!
//! Hue runs right to left (0° at the right edge, just under 360° at the left)
//! and saturation runs bottom to top. The field is rasterized once at full
//! value; the current value darkens it through a translucent overlay.

use std::sync::Arc;

use floem::kurbo::{Line, Point, Rect};
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
use crate::math::{self, Hsb};

/// Rasterize the field at full value to an RGBA8 buffer.
fn rasterize_field(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let last_x = (width - 1).max(1) as f64;
    let last_y = (height - 1).max(1) as f64;
    for py in 0..height {
        let sat = 1.0 - py as f64 / last_y;
        for px in 0..width {
            let hue = 360.0 * (1.0 - px as f64 / last_x);
            let (r, g, b) = math::hsv_to_rgb(hue, sat, 1.0);
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub(crate) struct HueSatField {
    id: ViewId,
    held: bool,
    hsb: Hsb,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64, f64)>,
    field_img: Option<peniko::Image>,
    field_hash: Vec<u8>,
}

/// Creates the hue/saturation field. Dragging writes hue and saturation into
/// `hsb`, leaving brightness untouched.
pub(crate) fn hue_sat_field(hsb: RwSignal<Hsb>) -> HueSatField {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(hsb.get());
    });

    HueSatField {
        id,
        held: false,
        hsb: hsb.get_untracked(),
        size: Default::default(),
        on_change: Box::new(move |hue, saturation| {
            let current = hsb.get_untracked();
            hsb.set(Hsb::new(hue, saturation, current.brightness));
        }),
        field_img: None,
        field_hash: Vec::new(),
    }
    .style(|s| {
        s.width(constants::FIELD_SIZE)
            .height(constants::FIELD_SIZE)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl HueSatField {
    fn update_from_pointer(&mut self, pos: Point) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let x = (pos.x / w).clamp(0.0, 1.0);
        let y = (pos.y / h).clamp(0.0, 1.0);
        // The left edge is 360°, which wraps to red like the right edge.
        self.hsb.hue = (1.0 - x).rem_euclid(1.0);
        self.hsb.saturation = 1.0 - y;
        (self.on_change)(self.hsb.hue, self.hsb.saturation);
    }

    fn marker_position(&self) -> Point {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        Point::new((1.0 - self.hsb.hue) * w, (1.0 - self.hsb.saturation) * h)
    }

    fn ensure_field_image(&mut self) {
        if self.field_img.is_some() {
            return;
        }
        let size = constants::FIELD_RASTER_SIZE;
        let pixels = rasterize_field(size, size);
        let blob = Blob::new(Arc::new(pixels));
        self.field_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, size, size));
        self.field_hash = b"hue-sat-field".to_vec();
    }
}

impl View for HueSatField {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsb) = state.downcast::<Hsb>() {
            // Keep the marker where it was dropped while the user drags;
            // quantized echoes would otherwise make it jitter.
            if !self.held {
                self.hsb = *hsb;
            } else {
                self.hsb.brightness = hsb.brightness;
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos);
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
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);

        self.ensure_field_image();
        if let Some(ref img) = self.field_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.field_hash,
                },
                rect,
            );
        }

        let overlay_alpha = 1.0 - self.hsb.brightness;
        if overlay_alpha > 0.001 {
            cx.fill(&rect, Color::rgba(0.0, 0.0, 0.0, overlay_alpha), 0.0);
        }

        cx.stroke(
            &rect,
            Color::rgba8(0, 0, 0, 60),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Crosshair, light on dark colors and dark on light ones
        let marker = self.marker_position();
        let ink = if self.hsb.brightness < 0.5 {
            Color::WHITE
        } else {
            Color::rgba8(0, 0, 0, 200)
        };
        let arm = constants::CROSSHAIR_ARM;
        let stroke = floem::kurbo::Stroke::new(2.0);
        cx.stroke(
            &Line::new((marker.x - arm, marker.y), (marker.x + arm, marker.y)),
            ink,
            &stroke,
        );
        cx.stroke(
            &Line::new((marker.x, marker.y - arm), (marker.x, marker.y + arm)),
            ink,
            &stroke,
        );
    }
}
