//! Palette inventory: ordered piece sequence with a clamped visible window,
//! plus the strip layout math for positioning and drop detection.
#![forbid(unsafe_code)]

use klotz_board::PieceId;
use klotz_geom::{Rect, Vec2};

/// Ordered inventory of not-yet-placed pieces with a sliding window of
/// `visible` entries. Every mutator re-clamps the window start, so
/// `start <= max(0, len - visible)` holds unconditionally.
#[derive(Clone, Debug)]
pub struct Inventory {
    items: Vec<PieceId>,
    start: usize,
    visible: usize,
}

impl Inventory {
    pub fn new(visible: usize) -> Self {
        Self {
            items: Vec::new(),
            start: 0,
            visible: visible.max(1),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.visible
    }

    pub fn contains(&self, piece: PieceId) -> bool {
        self.items.contains(&piece)
    }

    pub fn items(&self) -> &[PieceId] {
        &self.items
    }

    #[inline]
    fn max_start(&self) -> usize {
        self.items.len().saturating_sub(self.visible)
    }

    #[inline]
    fn clamp_window(&mut self) {
        self.start = self.start.min(self.max_start());
    }

    /// Remove a piece from the sequence; later entries shift down to fill
    /// the gap. Returns false if the piece was not present.
    pub fn take(&mut self, piece: PieceId) -> bool {
        let Some(idx) = self.items.iter().position(|&p| p == piece) else {
            return false;
        };
        self.items.remove(idx);
        self.clamp_window();
        true
    }

    /// Append a piece unless it is already present.
    pub fn put_back(&mut self, piece: PieceId) -> bool {
        if self.contains(piece) {
            return false;
        }
        self.items.push(piece);
        self.clamp_window();
        true
    }

    /// Shift the window one entry toward the front. No-op at the boundary;
    /// returns whether it moved.
    pub fn scroll_left(&mut self) -> bool {
        if self.start > 0 {
            self.start -= 1;
            true
        } else {
            false
        }
    }

    /// Shift the window one entry toward the back. No-op when the last
    /// item is already visible.
    pub fn scroll_right(&mut self) -> bool {
        if self.start < self.max_start() {
            self.start += 1;
            true
        } else {
            false
        }
    }

    /// The window contents: exactly `visible` entries, padded with `None`
    /// past the end of the sequence. No item appears twice.
    pub fn visible_items(&self) -> Vec<Option<PieceId>> {
        (0..self.visible)
            .map(|i| self.items.get(self.start + i).copied())
            .collect()
    }
}

/// Geometry of the on-screen strip, in world units.
#[derive(Clone, Copy, Debug)]
pub struct StripLayout {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    pub side_padding: f32,
}

impl StripLayout {
    /// X offsets (relative to the strip center) of the visible window's
    /// entries: the usable width split into equal sections, one entry
    /// centered per section.
    pub fn slot_offsets(&self, visible: usize) -> Vec<f32> {
        let n = visible.max(1);
        let usable = (self.width - 2.0 * self.side_padding).max(0.0);
        let section = usable / n as f32;
        (0..n)
            .map(|i| -usable / 2.0 + section * (i as f32 + 0.5))
            .collect()
    }

    /// World position of visible entry `i`.
    pub fn slot_pos(&self, visible: usize, i: usize) -> Vec2 {
        let offsets = self.slot_offsets(visible);
        let x = offsets.get(i).copied().unwrap_or(0.0);
        Vec2::new(self.center.x + x, self.center.y)
    }

    /// Region that accepts dropped pieces back into the inventory.
    pub fn accept_rect(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::new(self.width, self.height))
    }
}
