use crate::types::{Tile, BOARD_SIZE};

/// Read-only copy of a game for presentation layers.
///
/// Snapshots are plain `Copy` data; renderers diff consecutive snapshots
/// (or their `board_hash`) instead of holding references into the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot<const N: usize = BOARD_SIZE> {
    pub board: [[Tile; N]; N],
    /// FNV-1a 64 over the row-major cells (little-endian `u32`s)
    pub board_hash: u64,
    pub score: u32,
    /// Best score known to the session; `GameState` leaves it at 0
    pub high_score: u32,
    pub game_over: bool,
    pub moves: u32,
    pub episode_id: u32,
    pub seed: u32,
    pub max_tile: Tile,
}

impl<const N: usize> GameSnapshot<N> {
    pub fn clear(&mut self) {
        *self = Self {
            board: [[0; N]; N],
            board_hash: 0,
            score: 0,
            high_score: 0,
            game_over: false,
            moves: 0,
            episode_id: 0,
            seed: 0,
            max_tile: 0,
        };
        self.board_hash = board_hash(&self.board);
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl<const N: usize> Default for GameSnapshot<N> {
    fn default() -> Self {
        let mut s = Self {
            board: [[0; N]; N],
            board_hash: 0,
            score: 0,
            high_score: 0,
            game_over: false,
            moves: 0,
            episode_id: 0,
            seed: 0,
            max_tile: 0,
        };
        s.clear();
        s
    }
}

/// FNV-1a 64-bit hash of a board.
pub fn board_hash<const N: usize>(board: &[[Tile; N]; N]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for tile in board.iter().flatten() {
        for b in tile.to_le_bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        }
    }
    h
}
