use serde::Deserialize;

/// On-disk schema of `assets/blocks.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub kinds: Vec<KindDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KindDef {
    pub name: String,
    /// Optional explicit id; defaults to declaration index.
    pub id: Option<u16>,
    #[serde(default)]
    pub tag: String,
    /// Footprint in cells, `[w, h]`. Defaults to 1x1.
    pub size: Option<[i32; 2]>,
    /// Derive the footprint from the active variant's bounds instead.
    #[serde(default)]
    pub auto_size: bool,
    #[serde(default)]
    pub variants: Vec<VariantDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantDef {
    pub name: String,
    /// Visual extent in world units, `[w, h]`.
    pub bounds: [f32; 2],
    /// Fill color `[r, g, b]`; a default is assigned when omitted.
    pub color: Option<[u8; 3]>,
}
