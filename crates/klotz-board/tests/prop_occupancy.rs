use klotz_board::{Occupancy, PieceId, SlotId};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Occupy(u32, u32),
    VacateSlot(u32),
    ReleasePiece(u32),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..8, 0u32..8).prop_map(|(s, p)| Op::Occupy(s, p)),
        (0u32..8).prop_map(Op::VacateSlot),
        (0u32..8).prop_map(Op::ReleasePiece),
    ]
}

proptest! {
    // Both directions of the relation agree after any operation sequence,
    // and no slot or piece ever appears twice.
    #[test]
    fn relation_stays_bidirectionally_consistent(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut occ = Occupancy::new();
        for op in ops {
            match op {
                Op::Occupy(s, p) => {
                    let _ = occ.occupy(SlotId(s), PieceId(p));
                }
                Op::VacateSlot(s) => occ.vacate_slot(SlotId(s)),
                Op::ReleasePiece(p) => occ.release_piece(PieceId(p)),
            }

            for s in 0..8 {
                let slot = SlotId(s);
                if let Some(piece) = occ.occupant(slot) {
                    prop_assert_eq!(occ.slot_of(piece), Some(slot));
                    prop_assert!(occ.is_occupied(slot));
                }
            }
            for p in 0..8 {
                let piece = PieceId(p);
                if let Some(slot) = occ.slot_of(piece) {
                    prop_assert_eq!(occ.occupant(slot), Some(piece));
                }
            }
        }
    }

    // occupy -> vacate always returns the slot to the free state.
    #[test]
    fn vacate_undoes_occupy(s in 0u32..16, p in 0u32..16) {
        let mut occ = Occupancy::new();
        prop_assert!(occ.occupy(SlotId(s), PieceId(p)));
        occ.vacate_slot(SlotId(s));
        prop_assert!(!occ.is_occupied(SlotId(s)));
        prop_assert_eq!(occ.slot_of(PieceId(p)), None);
        prop_assert!(occ.is_empty());
    }
}
