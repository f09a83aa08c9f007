use std::path::PathBuf;

use hashbrown::HashMap;

use klotz_geom::Vec2;
use klotz_grid::GridSizing;

use super::{App, DebugStats, watchers};
use crate::camera::PanCamera;
use crate::event::EventQueue;
use crate::gamestate::GameState;

impl App {
    pub fn new(
        gs: GameState,
        assets_root: PathBuf,
        level_path: PathBuf,
        catalog_path: PathBuf,
        watch: bool,
    ) -> Self {
        // Frame the camera on the grid when it is fixed; otherwise center
        // on the origin and let automatic sizing fill the view.
        let (target, zoom) = match gs.sizing {
            GridSizing::Fixed(spec) => {
                let bounds = spec.bounds();
                let size = bounds.size();
                let zoom = (1280.0 / (size.x * 1.6)).min(720.0 / (size.y * 2.0));
                (bounds.center(), zoom)
            }
            GridSizing::Auto { .. } => (Vec2::ZERO, 48.0),
        };
        let cam = PanCamera::new(target, zoom, 1280, 720);

        let (level_tx, level_rx) = std::sync::mpsc::channel::<()>();
        let (cat_tx, cat_rx) = std::sync::mpsc::channel::<()>();
        if watch {
            watchers::spawn_file_watcher(level_path.clone(), level_tx);
            watchers::spawn_file_watcher(catalog_path.clone(), cat_tx);
        }

        Self {
            gs,
            queue: EventQueue::new(),
            cam,
            debug_stats: DebugStats::default(),
            assets_root,
            level_path,
            catalog_path,
            evt_processed_total: 0,
            evt_processed_by: HashMap::new(),
            level_event_rx: level_rx,
            catalog_event_rx: cat_rx,
        }
    }
}
