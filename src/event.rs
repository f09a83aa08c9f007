use std::collections::{BTreeMap, VecDeque};

use klotz_blocks::KindId;
use klotz_board::{PieceId, SlotId};
use klotz_geom::Vec2;

pub enum Event {
    // Input-derived intents
    DragStarted { piece: PieceId, pointer: Vec2, from_palette: bool },
    DragDropped { pointer: Vec2 },
    PaletteScrolled { right: bool },
    VariantCycleRequested { piece: PieceId },
    VerifyRequested,
    PieceSpawnRequested { kind: KindId },

    // Drop resolution results
    PieceCommitted { piece: PieceId, slot: SlotId },
    PieceReverted { piece: PieceId },
    PieceReturnedToPalette { piece: PieceId },

    // Toggles
    GridToggled,
    HelpToggled,

    // Hot reload
    LevelReloadRequested,
    CatalogReloadRequested,
}

impl Event {
    pub fn label(&self) -> &'static str {
        match self {
            Event::DragStarted { .. } => "DragStarted",
            Event::DragDropped { .. } => "DragDropped",
            Event::PaletteScrolled { .. } => "PaletteScrolled",
            Event::VariantCycleRequested { .. } => "VariantCycleRequested",
            Event::VerifyRequested => "VerifyRequested",
            Event::PieceSpawnRequested { .. } => "PieceSpawnRequested",
            Event::PieceCommitted { .. } => "PieceCommitted",
            Event::PieceReverted { .. } => "PieceReverted",
            Event::PieceReturnedToPalette { .. } => "PieceReturnedToPalette",
            Event::GridToggled => "GridToggled",
            Event::HelpToggled => "HelpToggled",
            Event::LevelReloadRequested => "LevelReloadRequested",
            Event::CatalogReloadRequested => "CatalogReloadRequested",
        }
    }
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope {
            id,
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
        id
    }

    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn emit_after(&mut self, delta: u64, kind: Event) -> u64 {
        self.emit_at(self.now + delta, kind)
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        if let Some((_, q)) = self.by_tick.range_mut(self.now..=self.now).next() {
            if let Some(env) = q.pop_front() {
                return Some(env);
            }
        }
        None
    }

    pub fn advance_tick(&mut self) {
        // clean empty current bucket
        if let Some((tick, q)) = self.by_tick.range(self.now..=self.now).next() {
            if q.is_empty() {
                let key = *tick;
                self.by_tick.remove(&key);
            }
        }
        self.now = self.now.wrapping_add(1);
    }

    /// Total queued events and a per-label tally, across all tick buckets.
    pub fn queued_counts(&self) -> (usize, std::collections::HashMap<&'static str, usize>) {
        let mut total = 0usize;
        let mut by: std::collections::HashMap<&'static str, usize> =
            std::collections::HashMap::new();
        for q in self.by_tick.values() {
            total += q.len();
            for env in q {
                *by.entry(env.kind.label()).or_insert(0) += 1;
            }
        }
        (total, by)
    }

    /// Events sitting in past tick buckets; they will never be processed.
    pub fn count_stale_events(&self) -> usize {
        self.by_tick
            .range(..self.now)
            .map(|(_, q)| q.len())
            .sum()
    }

    pub fn stale_summary(&self) -> Vec<(u64, usize)> {
        self.by_tick
            .range(..self.now)
            .filter(|(_, q)| !q.is_empty())
            .map(|(t, q)| (*t, q.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_within_a_tick() {
        let mut q = EventQueue::new();
        q.emit_now(Event::GridToggled);
        q.emit_now(Event::HelpToggled);
        let a = q.pop_ready().unwrap();
        let b = q.pop_ready().unwrap();
        assert!(a.id < b.id);
        assert!(matches!(a.kind, Event::GridToggled));
        assert!(matches!(b.kind, Event::HelpToggled));
        assert!(q.pop_ready().is_none());
    }

    #[test]
    fn future_events_wait_for_their_tick() {
        let mut q = EventQueue::new();
        q.emit_after(2, Event::VerifyRequested);
        assert!(q.pop_ready().is_none());
        q.advance_tick();
        assert!(q.pop_ready().is_none());
        q.advance_tick();
        assert!(matches!(q.pop_ready().unwrap().kind, Event::VerifyRequested));
    }

    #[test]
    fn unprocessed_past_events_count_as_stale() {
        let mut q = EventQueue::new();
        q.emit_now(Event::GridToggled);
        q.advance_tick();
        assert_eq!(q.count_stale_events(), 1);
        assert_eq!(q.stale_summary(), vec![(0, 1)]);
    }
}
