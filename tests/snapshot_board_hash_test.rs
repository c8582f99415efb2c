use tui_2048::core::{board_hash, GameSnapshot, GameState};
use tui_2048::types::Direction;

#[test]
fn snapshot_into_sets_board_hash() {
    let mut gs: GameState = GameState::new(1);

    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, board_hash(&snap.board));

    for dir in Direction::ALL {
        gs.apply_move(dir);
    }

    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, board_hash(&snap.board));
}

#[test]
fn hash_changes_only_with_board() {
    let mut gs: GameState = GameState::new(9);
    let before = gs.snapshot();

    // Find a direction that changes nothing, if any, and one that does.
    for dir in Direction::ALL {
        let out = gs.apply_move(dir);
        let after = gs.snapshot();
        if out.changed {
            assert_ne!(after.board_hash, before.board_hash);
            return;
        }
        assert_eq!(after.board_hash, before.board_hash);
    }
    panic!("a fresh board always has a changing move");
}
