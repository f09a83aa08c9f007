use klotz_blocks::BlockCatalog;

use super::App;

impl App {
    /// Rebuild the whole game state from the level file. Drops and window
    /// position survive a reload only as far as the new file allows; an
    /// in-flight drag does not.
    pub(super) fn handle_level_reload(&mut self) {
        match crate::level::load_level(&self.level_path, self.gs.catalog.clone(), self.gs.mode) {
            Ok(mut gs) => {
                gs.show_grid = self.gs.show_grid;
                gs.show_help = self.gs.show_help;
                self.gs = gs;
                log::info!(target: "level", "reloaded level {}", self.level_path.display());
            }
            Err(e) => {
                log::warn!(target: "level", "level reload failed, keeping old state: {}", e);
            }
        }
    }

    /// Swap in a freshly parsed catalog; existing pieces keep their spawn
    /// snapshot (tag, size) and only pick up new definitions on reload.
    pub(super) fn handle_catalog_reload(&mut self) {
        match BlockCatalog::load_from_path(&self.catalog_path) {
            Ok(catalog) => {
                log::info!(
                    target: "level",
                    "reloaded block catalog: {} kind(s)",
                    catalog.kinds.len()
                );
                self.gs.catalog = catalog;
            }
            Err(e) => {
                log::warn!(target: "level", "catalog reload failed, keeping old one: {}", e);
            }
        }
    }
}
