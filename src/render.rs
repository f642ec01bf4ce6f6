use glam::Vec2;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::sphere::{self, SpherePalette};
use crate::core::{stripe, AnimationClock, Variant, VisualConfig};

/// One painter bound to one canvas.
///
/// Created when an orb mounts and rebuilt whenever the variant, size or
/// background changes; it owns the animation clock, so a rebuild restarts
/// the phase at zero. `draw` runs once per frame with the latest published
/// level and has no other inputs.
pub struct Orb {
    ctx: web::CanvasRenderingContext2d,
    style: OrbStyle,
    clock: AnimationClock,
    size: f32,
    background: String,
    band: Vec<stripe::BandPoint>,
}

#[derive(Clone, Copy)]
enum OrbStyle {
    Stripe,
    Sphere(&'static SpherePalette),
}

fn style_for(variant: Variant) -> OrbStyle {
    match variant {
        Variant::Branded => OrbStyle::Stripe,
        Variant::Obsidian => OrbStyle::Sphere(&sphere::OBSIDIAN),
        Variant::Mana => OrbStyle::Sphere(&sphere::MANA),
        Variant::Opal => OrbStyle::Sphere(&sphere::OPAL),
        Variant::Halo => OrbStyle::Sphere(&sphere::HALO),
    }
}

impl Orb {
    /// Bind a painter to the canvas and size the backing store for the
    /// device pixel ratio. Logs and gives up when the 2d context is
    /// unavailable; the page then stays static.
    pub fn create(canvas: &web::HtmlCanvasElement, config: &VisualConfig) -> Result<Orb, ()> {
        let ctx = context_2d(canvas)?;
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let css_px = config.size_px as f64;
        canvas.set_width((css_px * dpr) as u32);
        canvas.set_height((css_px * dpr) as u32);
        let css = canvas.style();
        _ = css.set_property("width", &format!("{}px", config.size_px));
        _ = css.set_property("height", &format!("{}px", config.size_px));
        // Everything below draws in CSS pixels.
        _ = ctx.scale(dpr, dpr);

        let style = style_for(config.variant);
        let clock = match style {
            OrbStyle::Stripe => AnimationClock::new(stripe::BASE_INCREMENT, stripe::LEVEL_GAIN),
            OrbStyle::Sphere(_) => AnimationClock::new(sphere::BASE_INCREMENT, sphere::LEVEL_GAIN),
        };
        Ok(Orb {
            ctx,
            style,
            clock,
            size: config.size_px as f32,
            background: config.background.clone(),
            band: Vec::with_capacity(stripe::BAND_SEGMENTS + 1),
        })
    }

    pub fn draw(&mut self, level: f32) {
        let time = self.clock.advance(level);
        match self.style {
            OrbStyle::Stripe => self.draw_stripes(level, time),
            OrbStyle::Sphere(palette) => self.draw_sphere(level, time, palette),
        }
    }

    fn draw_stripes(&mut self, level: f32, time: f32) {
        let ctx = &self.ctx;
        let size = self.size as f64;
        let center = Vec2::splat(self.size / 2.0);
        let radius = self.size * stripe::RADIUS_RATIO;
        let (cx, cy, r) = (center.x as f64, center.y as f64, radius as f64);

        ctx.clear_rect(0.0, 0.0, size, size);

        // Disc in the page background color; the stripes are clipped to it.
        ctx.begin_path();
        _ = ctx.arc(cx, cy, r, 0.0, PI * 2.0);
        ctx.set_fill_style_str(&self.background);
        ctx.fill();

        ctx.save();
        ctx.begin_path();
        _ = ctx.arc(cx, cy, r, 0.0, PI * 2.0);
        ctx.clip();

        ctx.set_fill_style_str("#ffffff");
        for band in 0..stripe::BAND_OFFSETS.len() {
            stripe::band_points(center, radius, level, time, band, &mut self.band);
            fill_ribbon(&self.ctx, &self.band);
        }

        // Thin rim crescents complete the globe look: an offset arc closed
        // against a reverse arc of the full circle leaves a sliver.
        let offset = stripe::crescent_offset(radius, level) as f64;
        let inner = r * stripe::CRESCENT_INNER_RATIO as f64;

        ctx.begin_path();
        _ = ctx.arc(cx - offset, cy, inner, PI * 0.5, PI * 1.5);
        _ = ctx.arc_with_anticlockwise(cx, cy, r, PI * 1.5, PI * 0.5, true);
        ctx.close_path();
        ctx.fill();

        ctx.begin_path();
        _ = ctx.arc(cx + offset, cy, inner, -PI * 0.5, PI * 0.5);
        _ = ctx.arc_with_anticlockwise(cx, cy, r, PI * 0.5, -PI * 0.5, true);
        ctx.close_path();
        ctx.fill();

        ctx.restore();

        // Soft outer glow once the level clears the threshold.
        if let Some(alpha) = stripe::glow_alpha(level) {
            let reach = r + stripe::GLOW_REACH_PX as f64;
            let Some(glow) = radial_gradient(ctx, cx, cy, r, reach) else {
                return;
            };
            _ = glow.add_color_stop(0.0, &sphere::rgba([255, 255, 255], alpha));
            _ = glow.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
            ctx.begin_path();
            _ = ctx.arc(cx, cy, r + stripe::GLOW_PAD_PX as f64, 0.0, PI * 2.0);
            ctx.set_fill_style_canvas_gradient(&glow);
            ctx.fill();
        }
    }

    fn draw_sphere(&mut self, level: f32, time: f32, palette: &SpherePalette) {
        let ctx = &self.ctx;
        let size = self.size as f64;
        let center = Vec2::splat(self.size / 2.0);
        let radius = self.size * sphere::RADIUS_RATIO;
        let (cx, cy, r) = (center.x as f64, center.y as f64, radius as f64);

        ctx.set_fill_style_str(&self.background);
        ctx.fill_rect(0.0, 0.0, size, size);

        // Drop-shadow disc slightly larger than the orb.
        ctx.begin_path();
        _ = ctx.arc(cx, cy, r + sphere::BACKDROP_PAD_PX as f64, 0.0, PI * 2.0);
        ctx.set_fill_style_str(&sphere::rgba(palette.backdrop, 1.0));
        ctx.fill();

        ctx.save();
        ctx.begin_path();
        _ = ctx.arc(cx, cy, r, 0.0, PI * 2.0);
        ctx.clip();

        ctx.set_fill_style_str(&sphere::rgba(palette.base, 1.0));
        ctx.fill_rect(0.0, 0.0, size, size);

        for blob in &sphere::HIGHLIGHTS {
            let c = sphere::highlight_center(blob, time, center, radius);
            let intensity = sphere::highlight_intensity(blob, level);
            let reach = (radius * blob.size) as f64;
            let Some(g) = radial_gradient(ctx, c.x as f64, c.y as f64, 0.0, reach) else {
                continue;
            };
            for (i, &(offset, factor)) in sphere::HIGHLIGHT_STOPS.iter().enumerate() {
                _ = g.add_color_stop(offset, &sphere::rgba(palette.highlight[i], intensity * factor));
            }
            _ = g.add_color_stop(1.0, &sphere::rgba(palette.base, 0.0));
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.fill_rect(0.0, 0.0, size, size);
        }

        for blob in &sphere::SHADOWS {
            let c = sphere::shadow_center(blob, time, center, radius);
            let intensity = sphere::shadow_intensity(blob, level);
            let reach = (radius * blob.size) as f64;
            let Some(g) = radial_gradient(ctx, c.x as f64, c.y as f64, 0.0, reach) else {
                continue;
            };
            for (i, &(offset, factor)) in sphere::SHADOW_STOPS.iter().enumerate() {
                _ = g.add_color_stop(offset, &sphere::rgba(palette.shadow[i], intensity * factor));
            }
            _ = g.add_color_stop(1.0, &sphere::rgba(palette.base, 0.0));
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.fill_rect(0.0, 0.0, size, size);
        }

        // Edge darkening fakes the falloff of a lit sphere.
        let edge_inner = r * sphere::EDGE_INNER_RATIO as f64;
        if let Some(g) = radial_gradient(ctx, cx, cy, edge_inner, r) {
            for &(offset, alpha) in &sphere::EDGE_STOPS {
                _ = g.add_color_stop(offset, &sphere::rgba([0, 0, 0], alpha));
            }
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.fill_rect(0.0, 0.0, size, size);
        }

        // Fixed top-left ambient highlight.
        let ax = cx - r * sphere::AMBIENT_OFFSET_RATIO as f64;
        let ay = cy - r * sphere::AMBIENT_OFFSET_RATIO as f64;
        let reach = r * sphere::AMBIENT_RADIUS_RATIO as f64;
        if let Some(g) = radial_gradient(ctx, ax, ay, 0.0, reach) {
            for (i, &(offset, alpha)) in sphere::AMBIENT_STOPS.iter().enumerate() {
                _ = g.add_color_stop(offset, &sphere::rgba(palette.ambient[i], alpha));
            }
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.fill_rect(0.0, 0.0, size, size);
        }

        ctx.restore();
    }
}

/// A closed ribbon: top edge forward, bottom edge reversed.
fn fill_ribbon(ctx: &web::CanvasRenderingContext2d, points: &[stripe::BandPoint]) {
    let Some(first) = points.first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.pos.x as f64, (first.pos.y - first.thickness / 2.0) as f64);
    for p in &points[1..] {
        ctx.line_to(p.pos.x as f64, (p.pos.y - p.thickness / 2.0) as f64);
    }
    for p in points.iter().rev() {
        ctx.line_to(p.pos.x as f64, (p.pos.y + p.thickness / 2.0) as f64);
    }
    ctx.close_path();
    ctx.fill();
}

fn radial_gradient(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    r0: f64,
    r1: f64,
) -> Option<web::CanvasGradient> {
    ctx.create_radial_gradient(x, y, r0, x, y, r1).ok()
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Result<web::CanvasRenderingContext2d, ()> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<web::CanvasRenderingContext2d>().map_err(|_| {
            log::error!("canvas returned an unexpected 2d context type");
        }),
        Ok(None) => {
            log::error!("2d context unavailable");
            Err(())
        }
        Err(e) => {
            log::error!("2d context error: {:?}", e);
            Err(())
        }
    }
}
