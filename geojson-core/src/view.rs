//! Per-document camera: zoom, pan and quarter-turn rotation.
//!
//! Screen positions are expressed relative to the canvas, in pixels, with
//! y growing downwards. World positions use y growing upwards.

use glam::DVec2;

use crate::{bounds::Bounds, config::RenderConfig};

/// Maps between world and screen space for one document.
///
/// ### Fields
/// - `zoom` - Screen pixels per world unit.
/// - `pan` - Screen-space offset of the world origin from the canvas centre.
/// - `quarter_turns` - Clockwise rotation in steps of 90 degrees (`0..4`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub zoom: f64,
    pub pan: DVec2,
    pub quarter_turns: u8,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: DVec2::ZERO,
            quarter_turns: 0,
        }
    }
}

/// Rotates a screen-space vector clockwise by `turns` quarter turns.
fn rotate_cw(v: DVec2, turns: u8) -> DVec2 {
    match turns % 4 {
        0 => v,
        1 => DVec2::new(-v.y, v.x),
        2 => DVec2::new(-v.x, -v.y),
        _ => DVec2::new(v.y, -v.x),
    }
}

impl ViewTransform {
    /// Rotation in degrees, clockwise on screen.
    pub fn rotation_degrees(&self) -> u32 {
        u32::from(self.quarter_turns % 4) * 90
    }

    /// Converts a world-space position to screen-space.
    ///
    /// The world point is scaled by `zoom`, its y-axis flipped, rotated, and
    /// offset by `pan` around `center`.
    ///
    /// ### Parameters
    /// - `p` - World-space position.
    /// - `center` - Screen-space centre of the canvas.
    pub fn world_to_screen(&self, p: DVec2, center: DVec2) -> DVec2 {
        let scaled = p * self.zoom;
        let flipped = DVec2::new(scaled.x, -scaled.y);
        center + rotate_cw(flipped, self.quarter_turns) + self.pan
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`ViewTransform::world_to_screen`] up to
    /// floating point rounding.
    pub fn screen_to_world(&self, s: DVec2, center: DVec2) -> DVec2 {
        let local = s - center - self.pan;
        let unrotated = rotate_cw(local, (4 - self.quarter_turns % 4) % 4);
        DVec2::new(unrotated.x, -unrotated.y) / self.zoom
    }

    /// Multiplies the zoom by `factor`, keeping the canvas centre fixed.
    ///
    /// The result is clamped to the configured zoom range; a factor that
    /// would leave the range only moves the zoom as far as the bound.
    pub fn scale_by(&mut self, factor: f64, cfg: &RenderConfig) {
        let new_zoom = (self.zoom * factor).clamp(cfg.min_zoom, cfg.max_zoom);
        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            return;
        }
        self.pan *= new_zoom / self.zoom;
        self.zoom = new_zoom;
    }

    pub fn zoom_in(&mut self, cfg: &RenderConfig) {
        self.scale_by(cfg.zoom_in_factor, cfg);
    }

    pub fn zoom_out(&mut self, cfg: &RenderConfig) {
        self.scale_by(cfg.zoom_out_factor, cfg);
    }

    /// Multiplies the zoom by `factor`, keeping the world point under
    /// `anchor` fixed on screen.
    ///
    /// ### Parameters
    /// - `anchor` - Screen position to zoom around (usually the pointer).
    /// - `center` - Screen-space centre of the canvas.
    pub fn zoom_at(&mut self, anchor: DVec2, center: DVec2, factor: f64, cfg: &RenderConfig) {
        let world_before = self.screen_to_world(anchor, center);

        let new_zoom = (self.zoom * factor).clamp(cfg.min_zoom, cfg.max_zoom);
        if !new_zoom.is_finite() || new_zoom <= 0.0 {
            return;
        }
        self.zoom = new_zoom;

        let screen_after = self.world_to_screen(world_before, center);
        self.pan += anchor - screen_after;
    }

    /// Rotates the view 90 degrees clockwise around the canvas centre.
    pub fn rotate_quarter(&mut self) {
        self.quarter_turns = (self.quarter_turns + 1) % 4;
        self.pan = rotate_cw(self.pan, 1);
    }

    pub fn pan_by(&mut self, delta: DVec2) {
        self.pan += delta;
    }

    /// Scales and centres the view so that `bounds` fills `viewport`.
    ///
    /// Aspect ratio is preserved, so one axis of `bounds` touches the
    /// viewport edges and the other is centred. Under a quarter or three
    /// quarter turn the box's width and height trade places on screen.
    ///
    /// The zoom is clamped to the configured range like any other zoom
    /// change. Does nothing for an empty viewport or a degenerate box.
    ///
    /// ### Parameters
    /// - `bounds` - World-space box to show.
    /// - `viewport` - Canvas size in pixels.
    pub fn fit(&mut self, bounds: Bounds, viewport: DVec2, cfg: &RenderConfig) {
        let mut extent = bounds.size();
        if self.quarter_turns % 2 == 1 {
            extent = DVec2::new(extent.y, extent.x);
        }
        if viewport.x <= 0.0 || viewport.y <= 0.0 || extent.x <= 0.0 || extent.y <= 0.0 {
            return;
        }

        let zoom = (viewport.x / extent.x)
            .min(viewport.y / extent.y)
            .clamp(cfg.min_zoom, cfg.max_zoom);
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        self.zoom = zoom;

        // Put the box centre on the canvas centre.
        let c = bounds.center() * zoom;
        self.pan = -rotate_cw(DVec2::new(c.x, -c.y), self.quarter_turns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn center() -> DVec2 {
        DVec2::new(400.0, 300.0)
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let world_points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, -5.0),
            DVec2::new(-3.5, 8.25),
        ];

        for turns in 0..4 {
            let view = ViewTransform {
                zoom: 2.0,
                pan: DVec2::new(15.0, -7.0),
                quarter_turns: turns,
            };
            for p in world_points {
                let back = view.screen_to_world(view.world_to_screen(p, center()), center());
                assert!(
                    back.abs_diff_eq(p, EPS),
                    "roundtrip mismatch: turns={turns}, p={p:?}, back={back:?}"
                );
            }
        }
    }

    #[test]
    fn world_y_points_up() {
        let view = ViewTransform::default();
        let up = view.world_to_screen(DVec2::new(0.0, 1.0), center());
        assert!(up.y < center().y);
    }

    #[test]
    fn rotate_quarter_is_clockwise_and_wraps() {
        let mut view = ViewTransform::default();
        view.rotate_quarter();

        // World +x (screen right) ends up pointing down the screen.
        let s = view.world_to_screen(DVec2::new(1.0, 0.0), center());
        assert!(s.abs_diff_eq(center() + DVec2::new(0.0, 1.0), EPS));
        assert_eq!(view.rotation_degrees(), 90);

        for _ in 0..3 {
            view.rotate_quarter();
        }
        assert_eq!(view.quarter_turns, 0);
    }

    #[test]
    fn zoom_and_rotate_keep_canvas_centre_fixed() {
        let cfg = RenderConfig::default();
        let mut view = ViewTransform {
            zoom: 3.0,
            pan: DVec2::new(40.0, -12.0),
            quarter_turns: 1,
        };
        let at_center = view.screen_to_world(center(), center());

        view.zoom_in(&cfg);
        assert!((view.zoom - 3.3).abs() < EPS);
        assert!(view.screen_to_world(center(), center()).abs_diff_eq(at_center, EPS));

        view.zoom_out(&cfg);
        assert!(view.screen_to_world(center(), center()).abs_diff_eq(at_center, EPS));

        view.rotate_quarter();
        assert!(view.screen_to_world(center(), center()).abs_diff_eq(at_center, EPS));
    }

    #[test]
    fn zoom_at_keeps_anchor_fixed() {
        let cfg = RenderConfig::default();
        let mut view = ViewTransform::default();
        let anchor = DVec2::new(120.0, 80.0);
        let before = view.screen_to_world(anchor, center());

        view.zoom_at(anchor, center(), 1.5, &cfg);

        assert!((view.zoom - 1.5).abs() < EPS);
        assert!(view.screen_to_world(anchor, center()).abs_diff_eq(before, EPS));
    }

    #[test]
    fn zoom_is_clamped() {
        let cfg = RenderConfig {
            max_zoom: 2.0,
            ..RenderConfig::default()
        };
        let mut view = ViewTransform::default();
        view.scale_by(100.0, &cfg);
        assert_eq!(view.zoom, 2.0);
    }

    #[test]
    fn fit_centres_box_with_aspect_ratio() {
        let mut view = ViewTransform::default();
        let b = Bounds::from_corners(DVec2::new(-1.0, -1.0), DVec2::new(9.0, 4.0));
        let viewport = DVec2::new(800.0, 600.0);
        view.fit(b, viewport, &RenderConfig::default());

        // Width 10 limits: 800 / 10 = 80, height 5 would allow 120.
        assert!((view.zoom - 80.0).abs() < EPS);
        let c = view.world_to_screen(b.center(), center());
        assert!(c.abs_diff_eq(center(), EPS));

        let left = view.world_to_screen(DVec2::new(-1.0, 1.5), center());
        assert!((left.x - 0.0).abs() < EPS);
    }

    #[test]
    fn fit_swaps_extents_when_rotated() {
        let mut view = ViewTransform {
            quarter_turns: 1,
            ..ViewTransform::default()
        };
        let b = Bounds::from_corners(DVec2::new(0.0, 0.0), DVec2::new(10.0, 2.0));
        view.fit(b, DVec2::new(100.0, 100.0), &RenderConfig::default());

        // The 10-unit width now runs vertically: 100 / 10.
        assert!((view.zoom - 10.0).abs() < EPS);
        let c = view.world_to_screen(b.center(), center());
        assert!(c.abs_diff_eq(center(), EPS));
    }

    #[test]
    fn fit_respects_zoom_range() {
        let cfg = RenderConfig::default();
        let mut view = ViewTransform::default();
        let huge = Bounds::from_corners(DVec2::ZERO, DVec2::splat(1e12));
        view.fit(huge, DVec2::new(800.0, 600.0), &cfg);
        assert_eq!(view.zoom, cfg.min_zoom);

        // The next toolbar zoom continues from the clamped value.
        view.zoom_in(&cfg);
        assert!((view.zoom - cfg.min_zoom * cfg.zoom_in_factor).abs() < 1e-18);

        let tiny = Bounds::from_corners(DVec2::ZERO, DVec2::splat(1e-12));
        view.fit(tiny, DVec2::new(800.0, 600.0), &cfg);
        assert_eq!(view.zoom, cfg.max_zoom);
    }

    #[test]
    fn fit_ignores_empty_viewport() {
        let mut view = ViewTransform::default();
        let b = Bounds::from_corners(DVec2::ZERO, DVec2::ONE);
        view.fit(b, DVec2::ZERO, &RenderConfig::default());
        assert_eq!(view, ViewTransform::default());
    }
}
