use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use hashbrown::HashMap;

use crate::camera::PanCamera;
use crate::event::EventQueue;
use crate::gamestate::GameState;

pub struct App {
    pub gs: GameState,
    pub queue: EventQueue,
    pub cam: PanCamera,
    pub debug_stats: DebugStats,
    pub assets_root: PathBuf,
    pub(crate) level_path: PathBuf,
    pub(crate) catalog_path: PathBuf,
    pub(crate) evt_processed_total: usize,
    pub(crate) evt_processed_by: HashMap<String, usize>,
    pub(crate) level_event_rx: Receiver<()>,
    pub(crate) catalog_event_rx: Receiver<()>,
}

impl App {
    /// Screen-space chrome of the palette strip, derived from the strip's
    /// world rect under the current camera.
    pub(crate) fn strip_chrome(&self) -> klotz_ui::StripChrome {
        let accept = self.gs.strip.accept_rect();
        let top_left = self.cam.world_to_screen(klotz_geom::Vec2::new(accept.min.x, accept.max.y));
        let bottom_right =
            self.cam.world_to_screen(klotz_geom::Vec2::new(accept.max.x, accept.min.y));
        let panel = klotz_ui::IRect::new(
            top_left.x as i32,
            top_left.y as i32,
            (bottom_right.x - top_left.x) as i32,
            (bottom_right.y - top_left.y) as i32,
        );
        klotz_ui::StripChrome::around_panel(panel)
    }

    /// Screen rects of the visible palette entries, index-aligned with
    /// `inventory.visible_items()`.
    pub(crate) fn entry_rects(&self) -> Vec<klotz_ui::IRect> {
        let window = self.gs.inventory.window_size();
        let side = (self.gs.strip.height * 0.75 * self.cam.zoom) as i32;
        (0..window)
            .map(|i| {
                let world = self.gs.strip.slot_pos(window, i);
                let center = self.cam.world_to_screen(world);
                klotz_ui::IRect::new(
                    center.x as i32 - side / 2,
                    center.y as i32 - side / 2,
                    side,
                    side,
                )
            })
            .collect()
    }
}

#[derive(Default)]
pub struct DebugStats {
    pub queued_events_total: usize,
    pub queued_events_by: Vec<(String, usize)>,
    pub pieces_drawn: usize,
    pub slots_drawn: usize,
}
