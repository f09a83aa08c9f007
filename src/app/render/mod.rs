mod frame;
mod hud;

use raylib::prelude::*;

use super::App;

impl App {
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let grid = self.gs.grid(Some(self.cam.view_rect()));
        let chrome = self.strip_chrome();
        let entries = self.entry_rects();
        let mouse = rl.get_mouse_position();

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::new(18, 20, 26, 255));

        if let Some(grid) = grid.as_ref() {
            self.draw_world(&mut d, grid);
        }
        self.draw_palette(&mut d, &chrome, &entries, mouse);
        let pointer = self.cam.screen_to_world(mouse);
        self.draw_hud(&mut d, grid.as_ref(), pointer);
    }
}
