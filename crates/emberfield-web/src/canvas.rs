//! Canvas 2D implementation of the core drawing seam.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use emberfield_core::{DrawSurface, ParticleColor};

/// Wraps an `HtmlCanvasElement` plus its 2d context. Raster pixel
/// dimensions always equal the logical viewport dimensions; no DPI
/// scaling is applied.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2d context. A missing context is the one fatal mount
    /// condition; the host decides whether to drop the decorative layer.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context not available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("object is not a CanvasRenderingContext2d"))?;

        Ok(Self { canvas, ctx })
    }

    /// Match the raster to the logical viewport size.
    pub fn set_raster_size(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: ParticleColor) {
        self.ctx.begin_path();
        self.ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.ctx
            .set_stroke_style_str(&format!("rgba(255, 107, 0, {})", alpha));
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
