pub mod strip;

pub use strip::{HitRegion, IRect, StripChrome, StripTheme};
