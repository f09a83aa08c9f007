use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use klotz_blocks::BlockCatalog;
use klotz_board::{PieceHome, Slot};
use klotz_geom::Vec2;
use klotz_grid::{Cell, CellSize, GridSizing, GridSpec};
use klotz_palette::{Inventory, StripLayout};

use crate::gamestate::{GameState, Mode};

/// On-disk schema of `assets/levels/*.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    pub name: Option<String>,
    pub grid: GridConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    #[serde(default)]
    pub slots: Vec<SlotDef>,
    #[serde(default)]
    pub pieces: Vec<PieceDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    pub cols: i32,
    pub rows: i32,
    /// Cell size in world units; omit to derive from the camera view.
    pub cell: Option<[f32; 2]>,
    #[serde(default)]
    pub origin: [f32; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    pub window: usize,
    pub center: [f32; 2],
    pub width: f32,
    pub height: f32,
    pub side_padding: f32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            window: 4,
            center: [0.0, -2.0],
            width: 10.0,
            height: 1.6,
            side_padding: 0.6,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotDef {
    #[serde(default)]
    pub tag: String,
    pub cell: [i32; 2],
    pub size: Option<[i32; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PieceDef {
    pub kind: String,
    /// Start on the board at this cell; omit to start in the palette.
    pub cell: Option<[i32; 2]>,
}

pub fn load_level(
    path: impl AsRef<Path>,
    catalog: BlockCatalog,
    mode: Mode,
) -> Result<GameState, Box<dyn Error>> {
    let text = fs::read_to_string(&path)?;
    let cfg: LevelConfig = toml::from_str(&text)?;
    build_state(cfg, catalog, mode)
}

pub fn build_state(
    cfg: LevelConfig,
    catalog: BlockCatalog,
    mode: Mode,
) -> Result<GameState, Box<dyn Error>> {
    let sizing = match cfg.grid.cell {
        Some([cw, ch]) => GridSizing::Fixed(GridSpec::new(
            Vec2::new(cw, ch),
            Vec2::new(cfg.grid.origin[0], cfg.grid.origin[1]),
            cfg.grid.cols,
            cfg.grid.rows,
        )),
        None => GridSizing::Auto {
            cols: cfg.grid.cols,
            rows: cfg.grid.rows,
        },
    };
    let strip = StripLayout {
        center: Vec2::new(cfg.palette.center[0], cfg.palette.center[1]),
        width: cfg.palette.width,
        height: cfg.palette.height,
        side_padding: cfg.palette.side_padding,
    };

    let mut gs = GameState::new(mode, sizing, catalog, strip);
    gs.inventory = Inventory::new(cfg.palette.window);

    // Footprint arithmetic for auto-sizing kinds needs a cell size; with a
    // camera-derived grid none exists yet, so fall back to unit cells.
    let cell_size = match sizing {
        GridSizing::Fixed(spec) => spec.cell_size(),
        GridSizing::Auto { .. } => Vec2::ONE,
    };

    for def in &cfg.slots {
        let size = def
            .size
            .map(|[w, h]| CellSize::new(w, h))
            .unwrap_or(CellSize::ONE);
        gs.board.add_slot(Slot {
            tag: klotz_blocks::canonical_tag(&def.tag),
            cell: Cell::new(def.cell[0], def.cell[1]),
            size,
        });
    }

    for def in &cfg.pieces {
        let kind = gs
            .catalog
            .id_by_name(&def.kind)
            .ok_or_else(|| format!("level references unknown block kind '{}'", def.kind))?;
        match def.cell {
            Some([c, r]) => {
                let cell = Cell::new(c, r);
                let pos = match sizing {
                    GridSizing::Fixed(spec) => {
                        let size = gs
                            .catalog
                            .get(kind)
                            .map(|k| k.footprint(0, spec.cell_size()))
                            .unwrap_or(CellSize::ONE);
                        spec.footprint_center(cell, size)
                    }
                    GridSizing::Auto { .. } => Vec2::ZERO,
                };
                gs.spawn_from_kind(kind, cell, pos, PieceHome::World, cell_size)
                    .ok_or_else(|| format!("failed to spawn piece of kind '{}'", def.kind))?;
            }
            None => {
                gs.spawn_from_kind(kind, Cell::ZERO, Vec2::ZERO, PieceHome::Palette, cell_size)
                    .ok_or_else(|| format!("failed to spawn piece of kind '{}'", def.kind))?;
            }
        }
    }

    if let Some(name) = &cfg.name {
        log::info!(target: "level", "loaded level '{}': {} slot(s), {} piece(s)",
            name, gs.board.slot_count(), gs.board.piece_count());
    }
    Ok(gs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use klotz_blocks::CatalogConfig;

    fn catalog() -> BlockCatalog {
        let cfg: CatalogConfig = toml::from_str(
            r#"
            [[kinds]]
            name = "beam"
            tag = "beam"
            size = [2, 1]

            [[kinds]]
            name = "brick"
            tag = "brick"
            "#,
        )
        .unwrap();
        BlockCatalog::from_config(cfg).unwrap()
    }

    const LEVEL: &str = r#"
        name = "test"

        [grid]
        cols = 8
        rows = 6
        cell = [1.0, 1.0]
        origin = [0.0, 0.0]

        [palette]
        window = 3
        center = [4.0, -2.0]
        width = 8.0
        height = 1.5
        side_padding = 0.5

        [[slots]]
        tag = " Beam "
        cell = [2, 3]
        size = [2, 1]

        [[slots]]
        cell = [5, 1]

        [[pieces]]
        kind = "beam"

        [[pieces]]
        kind = "brick"
        cell = [0, 0]
    "#;

    #[test]
    fn builds_board_and_inventory() {
        let gs = build_state(
            toml::from_str(LEVEL).unwrap(),
            catalog(),
            Mode::Interactive,
        )
        .unwrap();
        assert_eq!(gs.board.slot_count(), 2);
        assert_eq!(gs.board.piece_count(), 2);
        assert_eq!(gs.inventory.len(), 1);
        assert_eq!(gs.inventory.window_size(), 3);

        // Slot tags are canonicalized at load.
        let (_, slot) = gs.board.slots().next().unwrap();
        assert_eq!(slot.tag, "beam");

        // The placed brick sits at its cell center.
        let placed = gs
            .board
            .pieces()
            .find(|(_, p)| p.home == PieceHome::World)
            .unwrap()
            .1;
        assert_eq!(placed.pos, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn missing_cell_section_means_auto_sizing() {
        let text = "
            [grid]
            cols = 10
            rows = 5
        ";
        let gs = build_state(toml::from_str(text).unwrap(), catalog(), Mode::Authoring).unwrap();
        assert!(matches!(gs.sizing, GridSizing::Auto { cols: 10, rows: 5 }));
        assert_eq!(gs.grid(None), None);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let text = r#"
            [grid]
            cols = 4
            rows = 4
            cell = [1.0, 1.0]

            [[pieces]]
            kind = "missing"
        "#;
        let err = build_state(toml::from_str(text).unwrap(), catalog(), Mode::Interactive)
            .unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
