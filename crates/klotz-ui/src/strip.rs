use raylib::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl IRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x as f32
            && point.x <= (self.x + self.w) as f32
            && point.y >= self.y as f32
            && point.y <= (self.y + self.h) as f32
    }

    #[inline]
    pub fn to_rl(&self) -> Rectangle {
        Rectangle::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

/// What the pointer is over inside the palette strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRegion {
    None,
    ScrollLeft,
    ScrollRight,
    /// Index into the visible window.
    Entry(usize),
    Panel,
}

#[derive(Clone, Copy, Debug)]
pub struct StripTheme {
    pub panel: Color,
    pub panel_border: Color,
    pub button: Color,
    pub button_hover: Color,
    pub button_disabled: Color,
    pub glyph: Color,
}

impl Default for StripTheme {
    fn default() -> Self {
        Self {
            panel: Color::new(30, 32, 40, 220),
            panel_border: Color::new(90, 95, 110, 255),
            button: Color::new(60, 64, 78, 255),
            button_hover: Color::new(92, 98, 118, 255),
            button_disabled: Color::new(44, 46, 54, 255),
            glyph: Color::new(220, 222, 230, 255),
        }
    }
}

/// Screen-space chrome of the palette strip: the panel and the two scroll
/// arrow buttons. Entry rects come from the caller, which knows the world
/// layout and the camera transform.
#[derive(Clone, Copy, Debug)]
pub struct StripChrome {
    pub panel: IRect,
    pub left_button: IRect,
    pub right_button: IRect,
    pub theme: StripTheme,
}

impl StripChrome {
    /// Lay out arrow buttons flanking an already-positioned panel.
    pub fn around_panel(panel: IRect) -> Self {
        let button_w = 28;
        let button_y = panel.y + (panel.h - button_w) / 2;
        let left_button = IRect::new(panel.x - button_w - 6, button_y, button_w, button_w);
        let right_button = IRect::new(panel.x + panel.w + 6, button_y, button_w, button_w);
        Self {
            panel,
            left_button,
            right_button,
            theme: StripTheme::default(),
        }
    }

    pub fn hit_test(&self, point: Vector2, entries: &[IRect]) -> HitRegion {
        if self.left_button.contains(point) {
            return HitRegion::ScrollLeft;
        }
        if self.right_button.contains(point) {
            return HitRegion::ScrollRight;
        }
        for (i, r) in entries.iter().enumerate() {
            if r.contains(point) {
                return HitRegion::Entry(i);
            }
        }
        if self.panel.contains(point) {
            return HitRegion::Panel;
        }
        HitRegion::None
    }

    pub fn draw(
        &self,
        d: &mut RaylibDrawHandle,
        mouse: Vector2,
        can_scroll_left: bool,
        can_scroll_right: bool,
    ) {
        d.draw_rectangle_rec(self.panel.to_rl(), self.theme.panel);
        d.draw_rectangle_lines_ex(self.panel.to_rl(), 1.0, self.theme.panel_border);
        self.draw_button(d, self.left_button, "<", mouse, can_scroll_left);
        self.draw_button(d, self.right_button, ">", mouse, can_scroll_right);
    }

    fn draw_button(
        &self,
        d: &mut RaylibDrawHandle,
        rect: IRect,
        glyph: &str,
        mouse: Vector2,
        enabled: bool,
    ) {
        let fill = if !enabled {
            self.theme.button_disabled
        } else if rect.contains(mouse) {
            self.theme.button_hover
        } else {
            self.theme.button
        };
        d.draw_rectangle_rec(rect.to_rl(), fill);
        d.draw_rectangle_lines_ex(rect.to_rl(), 1.0, self.theme.panel_border);
        let glyph_color = if enabled {
            self.theme.glyph
        } else {
            self.theme.panel_border
        };
        d.draw_text(glyph, rect.x + rect.w / 2 - 4, rect.y + rect.h / 2 - 8, 16, glyph_color);
    }
}
