//! Session - the inbound surface a presentation layer drives.
//!
//! A `Session` owns one [`GameState`] plus a [`HighScoreStore`]. Front ends
//! call [`Session::request_move`] / [`Session::request_restart`] and read
//! snapshots back; the best score is loaded once and written whenever the
//! current score beats it. If that first load fails, the best score is only
//! tracked in memory so an unreadable record is never overwritten.

use log::{debug, info, warn};

use crate::core::{ActionOutcome, Board, GameSnapshot, GameState, MoveOutcome};
use crate::store::HighScoreStore;
use crate::types::{Direction, GameAction, BOARD_SIZE};

pub struct Session<S, const N: usize = BOARD_SIZE> {
    game: GameState<N>,
    store: S,
    high_score: u32,
    /// False when the stored best could not be read
    persist: bool,
}

impl<S: HighScoreStore, const N: usize> Session<S, N> {
    /// Start a fresh game with the given seed
    pub fn new(seed: u32, store: S) -> Self {
        Self::with_game(GameState::new(seed), store)
    }

    /// Wrap an existing game
    pub fn with_game(game: GameState<N>, mut store: S) -> Self {
        let (stored, persist) = match store.load() {
            Ok(best) => (best, true),
            Err(e) => {
                warn!("could not load high score, keeping it in memory only: {e}");
                (0, false)
            }
        };
        info!(
            "session start: seed={} high_score={} size={}x{}",
            game.seed(),
            stored,
            N,
            N
        );

        let mut session = Self {
            game,
            store,
            high_score: stored,
            persist,
        };
        session.record_score();
        session
    }

    pub fn board(&self) -> &Board<N> {
        self.game.board()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.game.game_over()
    }

    pub fn game(&self) -> &GameState<N> {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::Move(direction) => ActionOutcome::Moved(self.request_move(direction)),
            GameAction::Restart => {
                self.request_restart();
                ActionOutcome::Restarted
            }
        }
    }

    pub fn request_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.game.apply_move(direction);
        if !outcome.changed {
            debug!("move {} changed nothing", direction.as_str());
            return outcome;
        }

        debug!(
            "move {}: +{} (score {}), spawned {:?}",
            direction.as_str(),
            outcome.score_gained,
            self.game.score(),
            outcome.spawned
        );
        self.record_score();

        if outcome.game_over {
            info!(
                "game over: score={} max_tile={} moves={}\n{}",
                self.game.score(),
                self.game.board().max_tile(),
                self.game.moves(),
                self.game.board()
            );
        }
        outcome
    }

    /// Throw away the current board and score and start over
    pub fn request_restart(&mut self) {
        info!(
            "restart: episode {} ended with score {}",
            self.game.episode_id(),
            self.game.score()
        );
        self.game.restart();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot<N>) {
        self.game.snapshot_into(out);
        out.high_score = self.high_score;
    }

    pub fn snapshot(&self) -> GameSnapshot<N> {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn record_score(&mut self) {
        let score = self.game.score();
        if score <= self.high_score {
            return;
        }
        self.high_score = score;
        if !self.persist {
            return;
        }
        if let Err(e) = self.store.save(score) {
            warn!("could not save high score {score}: {e}");
        }
    }
}
