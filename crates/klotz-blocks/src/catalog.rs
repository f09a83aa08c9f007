use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use klotz_geom::Vec2;
use klotz_grid::CellSize;

use super::canonical_tag;
use super::config::{CatalogConfig, KindDef, VariantDef};

pub type KindId = u16;

/// Minimum usable cell-size axis for auto-size arithmetic.
const MIN_AUTO_CELL_AXIS: f32 = 1e-3;

/// One visual variant of a block kind. Exactly one is active per piece,
/// tracked as an index into the kind's variant list.
#[derive(Clone, Debug)]
pub struct Variant {
    pub name: String,
    pub bounds: Vec2,
    pub color: [u8; 3],
}

#[derive(Clone, Debug)]
pub struct BlockKind {
    pub id: KindId,
    pub name: String,
    /// Canonical form; compared with `tag_matches`.
    pub tag: String,
    pub size: CellSize,
    pub auto_size: bool,
    pub variants: Vec<Variant>,
}

impl BlockKind {
    /// Clamp an arbitrary index into the variant list. Kinds always have at
    /// least one variant after compilation.
    #[inline]
    pub fn clamp_variant(&self, idx: usize) -> usize {
        idx.min(self.variants.len().saturating_sub(1))
    }

    /// Footprint for a given active variant: the declared size, or the
    /// variant bounds rounded to cells when auto-sizing is on.
    pub fn footprint(&self, variant: usize, cell: Vec2) -> CellSize {
        if self.auto_size {
            let v = &self.variants[self.clamp_variant(variant)];
            cells_for_bounds(v.bounds, cell).unwrap_or(self.size)
        } else {
            self.size
        }
    }
}

/// Per-axis `round(bounds / cell)`, floored at one cell. `None` when a
/// cell axis is too small to divide by.
pub fn cells_for_bounds(bounds: Vec2, cell: Vec2) -> Option<CellSize> {
    if cell.x.abs() <= MIN_AUTO_CELL_AXIS || cell.y.abs() <= MIN_AUTO_CELL_AXIS {
        return None;
    }
    Some(CellSize::new(
        (bounds.x / cell.x).round() as i32,
        (bounds.y / cell.y).round() as i32,
    ))
}

#[derive(Default, Clone, Debug)]
pub struct BlockCatalog {
    pub kinds: Vec<BlockKind>,
    pub by_name: HashMap<String, KindId>,
}

impl BlockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, id: KindId) -> Option<&BlockKind> {
        self.kinds.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<KindId> {
        self.by_name.get(name).copied()
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let cfg: CatalogConfig = toml::from_str(&text)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: CatalogConfig) -> Result<Self, Box<dyn Error>> {
        let mut cat = BlockCatalog::new();
        for def in cfg.kinds.into_iter() {
            let id = def.id.unwrap_or(cat.kinds.len() as u16);
            let kind = compile_kind(id, def)?;
            if cat.kinds.len() <= id as usize {
                cat.kinds
                    .resize_with(id as usize + 1, || placeholder(id));
            }
            cat.kinds[id as usize] = kind;
        }
        cat.by_name = cat
            .kinds
            .iter()
            .filter(|k| !k.name.is_empty())
            .map(|k| (k.name.clone(), k.id))
            .collect();
        Ok(cat)
    }
}

fn compile_kind(id: KindId, def: KindDef) -> Result<BlockKind, Box<dyn Error>> {
    if def.name.is_empty() {
        return Err(format!("block kind {} has an empty name", id).into());
    }
    let size = def
        .size
        .map(|[w, h]| CellSize::new(w, h))
        .unwrap_or(CellSize::ONE);
    let mut variants: Vec<Variant> = def.variants.iter().map(compile_variant).collect();
    if variants.is_empty() {
        // Every kind renders something; synthesize a plain variant sized to
        // the footprint.
        variants.push(Variant {
            name: "default".to_string(),
            bounds: Vec2::new(size.w as f32, size.h as f32),
            color: default_color(id, 0),
        });
    }
    Ok(BlockKind {
        id,
        name: def.name,
        tag: canonical_tag(&def.tag),
        size,
        auto_size: def.auto_size,
        variants,
    })
}

fn compile_variant(def: &VariantDef) -> Variant {
    Variant {
        name: def.name.clone(),
        bounds: Vec2::new(def.bounds[0].max(0.0), def.bounds[1].max(0.0)),
        color: def.color.unwrap_or([180, 180, 190]),
    }
}

fn default_color(id: KindId, variant: usize) -> [u8; 3] {
    // Spread hues deterministically so unstyled kinds stay tellable apart.
    let seed = id as u32 * 97 + variant as u32 * 31;
    [
        (80 + (seed * 53) % 160) as u8,
        (80 + (seed * 101) % 160) as u8,
        (80 + (seed * 197) % 160) as u8,
    ]
}

fn placeholder(id: KindId) -> BlockKind {
    BlockKind {
        id,
        name: String::new(),
        tag: String::new(),
        size: CellSize::ONE,
        auto_size: false,
        variants: vec![Variant {
            name: "default".to_string(),
            bounds: Vec2::ONE,
            color: [128, 128, 128],
        }],
    }
}
