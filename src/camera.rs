use klotz_geom::Vec2;
use klotz_grid::ViewRect;
use raylib::prelude::Vector2;

/// 2D pan/zoom camera. World space is y-up; screen space is y-down with
/// the origin at the top-left, so the y axis flips in both transforms.
pub struct PanCamera {
    /// World point shown at the screen center.
    pub target: Vec2,
    /// Pixels per world unit.
    pub zoom: f32,
    pub screen_w: i32,
    pub screen_h: i32,
}

impl PanCamera {
    pub const MIN_ZOOM: f32 = 4.0;
    pub const MAX_ZOOM: f32 = 256.0;

    pub fn new(target: Vec2, zoom: f32, screen_w: i32, screen_h: i32) -> Self {
        Self {
            target,
            zoom: zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM),
            screen_w,
            screen_h,
        }
    }

    pub fn pan(&mut self, world_delta: Vec2) {
        self.target += world_delta;
    }

    /// Zoom by a factor while keeping the world point under `anchor`
    /// (screen coords) fixed.
    pub fn zoom_around(&mut self, factor: f32, anchor: Vector2) {
        let before = self.screen_to_world(anchor);
        self.zoom = (self.zoom * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        let after = self.screen_to_world(anchor);
        self.target += before - after;
    }

    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vector2 {
        Vector2::new(
            self.screen_w as f32 / 2.0 + (p.x - self.target.x) * self.zoom,
            self.screen_h as f32 / 2.0 - (p.y - self.target.y) * self.zoom,
        )
    }

    #[inline]
    pub fn screen_to_world(&self, p: Vector2) -> Vec2 {
        Vec2::new(
            self.target.x + (p.x - self.screen_w as f32 / 2.0) / self.zoom,
            self.target.y - (p.y - self.screen_h as f32 / 2.0) / self.zoom,
        )
    }

    /// Visible world rect; feeds automatic grid sizing every frame.
    pub fn view_rect(&self) -> ViewRect {
        let size = Vec2::new(
            self.screen_w as f32 / self.zoom,
            self.screen_h as f32 / self.zoom,
        );
        ViewRect::new(self.target - size / 2.0, size)
    }
}
