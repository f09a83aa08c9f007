use raylib::prelude::*;

use klotz_board::VerifyFailure;
use klotz_geom::Vec2;
use klotz_grid::GridSpec;

use super::App;
use crate::gamestate::Mode;

const HUD_TEXT: Color = Color::new(210, 214, 224, 255);
const HUD_DIM: Color = Color::new(140, 144, 156, 255);
const HUD_OK: Color = Color::new(120, 220, 140, 255);
const HUD_FAIL: Color = Color::new(240, 120, 110, 255);

impl App {
    pub(super) fn draw_hud(
        &mut self,
        d: &mut RaylibDrawHandle,
        grid: Option<&GridSpec>,
        pointer: Vec2,
    ) {
        let mode = match self.gs.mode {
            Mode::Authoring => "authoring",
            Mode::Interactive => "interactive",
        };
        let cell = grid
            .and_then(|g| self.hovered_cell(g, pointer))
            .map(|c| format!("cell ({},{})", c.col, c.row))
            .unwrap_or_else(|| "off grid".to_string());
        let status = format!(
            "{} | tick {} | {} | queued {} | processed {}",
            mode, self.gs.tick, cell, self.debug_stats.queued_events_total, self.evt_processed_total
        );
        d.draw_text(&status, 12, 10, 10, HUD_DIM);

        if let Some(report) = &self.gs.last_verify {
            if report.passed() {
                let line = format!("verify: all {} slot(s) satisfied", report.checked);
                d.draw_text(&line, 12, 26, 10, HUD_OK);
            } else {
                let line = format!(
                    "verify: {}/{} failed",
                    report.failures.len(),
                    report.checked
                );
                d.draw_text(&line, 12, 26, 10, HUD_FAIL);
                for (i, f) in report.failures.iter().take(6).enumerate() {
                    let msg = match f {
                        VerifyFailure::Unfilled { slot } => format!("  slot {:?} unfilled", slot),
                        VerifyFailure::TagMismatch { slot, piece } => {
                            format!("  slot {:?}: wrong piece {:?}", slot, piece)
                        }
                    };
                    d.draw_text(&msg, 12, 40 + i as i32 * 12, 10, HUD_FAIL);
                }
            }
        }

        if self.gs.show_help {
            let mut lines = vec![
                "drag: left mouse   pan: right mouse / WASD   zoom: wheel",
                "arrows: scroll palette   R: cycle variant   V: verify",
                "G: toggle grid   H: toggle this help",
            ];
            if self.gs.mode == Mode::Authoring {
                lines.push("1-9: spawn a catalog kind into the palette");
            }
            let y0 = self.cam.screen_h - 14 * lines.len() as i32 - 10;
            for (i, line) in lines.iter().enumerate() {
                d.draw_text(line, 12, y0 + i as i32 * 14, 10, HUD_TEXT);
            }
        }
    }
}
