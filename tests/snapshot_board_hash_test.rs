use blockfall::core::{GameSnapshot, GameState, Grid};
use blockfall::types::Command;

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn fnv1a64_rows(rows: &[[u8; 10]; 20]) -> u64 {
    fnv1a64_bytes(rows.iter().flat_map(|row| row.iter().copied()))
}

#[test]
fn snapshot_into_sets_board_hash() {
    let mut gs = GameState::new(1);
    gs.start();

    let mut snap = GameSnapshot::default();
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_rows(&snap.grid));
    assert_eq!(snap.board_hash, Grid::new().board_hash());

    gs.apply(Command::HardDrop);
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_rows(&snap.grid));
    assert_ne!(snap.board_hash, Grid::new().board_hash());
}

#[test]
fn moving_the_active_piece_keeps_board_hash() {
    let mut gs = GameState::new(1);
    gs.start();

    let before = gs.snapshot();
    assert!(gs.apply(Command::MoveDown));
    gs.apply(Command::MoveLeft);
    let after = gs.snapshot();

    assert_eq!(before.board_hash, after.board_hash);
    assert_ne!(before.display, after.display);
}

#[test]
fn snapshot_into_overwrites_every_field() {
    let mut a = GameState::new(4);
    a.start();
    a.apply(Command::HardDrop);

    let mut b = GameState::new(9);
    b.start();

    let mut reused = a.snapshot();
    b.snapshot_into(&mut reused);
    assert_eq!(reused, b.snapshot());
}
