use super::App;

impl App {
    pub(super) fn handle_grid_toggle(&mut self) {
        self.gs.show_grid = !self.gs.show_grid;
    }

    pub(super) fn handle_help_toggle(&mut self) {
        self.gs.show_help = !self.gs.show_help;
    }
}
