//! Game state module - one game session's board, score and RNG
//!
//! `GameState` runs the move protocol on top of [`Board`]: slide, and only if
//! the board changed, commit it, spawn a tile and re-evaluate the terminal
//! condition. A no-op move leaves every field untouched.

use crate::board::{Board, Spawn};
use crate::rng::SimpleRng;
use crate::snapshot::{board_hash, GameSnapshot};
use crate::types::{Direction, GameAction, BOARD_SIZE};

/// What a single move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub changed: bool,
    /// Merge points earned (always 0 when `changed` is false)
    pub score_gained: u32,
    /// Tile placed after the move, if any
    pub spawned: Option<Spawn>,
    /// Terminal flag after the move
    pub game_over: bool,
}

impl MoveOutcome {
    fn unchanged(game_over: bool) -> Self {
        Self {
            changed: false,
            score_gained: 0,
            spawned: None,
            game_over,
        }
    }
}

/// What [`GameState::apply_action`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Moved(MoveOutcome),
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<const N: usize = BOARD_SIZE> {
    board: Board<N>,
    rng: SimpleRng,
    /// Seed the RNG was created with (reported in snapshots)
    seed: u32,
    score: u32,
    /// Derived from `board`; refreshed after every mutation
    game_over: bool,
    /// Board-changing moves in the current episode
    moves: u32,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    last_spawn: Option<Spawn>,
}

impl<const N: usize> GameState<N> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::initialize(&mut rng);
        Self::with_parts(board, 0, rng, seed)
    }

    /// Resume from an explicit board and score (puzzles, replays, tests).
    pub fn from_board(board: Board<N>, score: u32, seed: u32) -> Self {
        Self::with_parts(board, score, SimpleRng::new(seed), seed)
    }

    fn with_parts(board: Board<N>, score: u32, rng: SimpleRng, seed: u32) -> Self {
        Self {
            game_over: board.is_game_over(),
            board,
            rng,
            seed,
            score,
            moves: 0,
            episode_id: 0,
            last_spawn: None,
        }
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Tile placed by the most recent board-changing move
    pub fn last_spawn(&self) -> Option<Spawn> {
        self.last_spawn
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::Move(direction) => ActionOutcome::Moved(self.apply_move(direction)),
            GameAction::Restart => {
                self.restart();
                ActionOutcome::Restarted
            }
        }
    }

    /// Slide the board, then spawn and re-check the terminal state if it changed.
    ///
    /// On a terminal board every direction is a no-op, so moves after game
    /// over change nothing until [`GameState::restart`].
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let result = self.board.apply_move(direction);
        if !result.changed {
            return MoveOutcome::unchanged(self.game_over);
        }

        self.board = result.board;
        self.score += result.score;
        self.moves += 1;
        self.last_spawn = self.board.spawn_tile(&mut self.rng);
        self.game_over = self.board.is_game_over();

        MoveOutcome {
            changed: true,
            score_gained: result.score,
            spawned: self.last_spawn,
            game_over: self.game_over,
        }
    }

    /// Discard the board and score and deal a fresh board.
    ///
    /// The RNG keeps its sequence, so a restarted game differs from the first
    /// one but stays reproducible from the original seed.
    pub fn restart(&mut self) {
        let board = Board::initialize(&mut self.rng);
        let episode_id = self.episode_id.wrapping_add(1);
        *self = Self {
            episode_id,
            ..Self::with_parts(board, 0, self.rng.clone(), self.seed)
        };
    }

    /// Fill `out` with the current state (allocation-free).
    pub fn snapshot_into(&self, out: &mut GameSnapshot<N>) {
        out.board = *self.board.rows();
        out.board_hash = board_hash(&out.board);
        out.score = self.score;
        out.game_over = self.game_over;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.max_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot<N> {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
