//! Game state module - one play session
//!
//! Ties the board, the hand, the piece generator and the score keeper
//! together. All mutation goes through [`GameState::attempt_drop`] and
//! [`GameState::restart`]; everything else is a read.
//!
//! A drop either commits completely (place, clear, score, replenish,
//! terminal check) or is rejected with no state change at all.

use arrayvec::ArrayVec;
use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, ClearResult};
use crate::highscore::{HighScoreStore, MemoryHighScore};
use crate::pieces::Piece;
use crate::rng::{PieceGenerator, RandomSource, SimpleRng};
use crate::scoring::{ScoreKeeper, ScoreUpdate};
use crate::snapshot::{GameSnapshot, HandPieceSnapshot};
use crate::types::{GamePhase, PieceId, HAND_SIZE, MAX_SHAPE_SIDE};

/// Why a drop was rejected. Rejections never change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropError {
    #[error("piece {0} is not in the hand")]
    UnknownPiece(PieceId),
    #[error("piece {piece_id} does not fit at ({row}, {col})")]
    InvalidPlacement { piece_id: PieceId, row: i32, col: i32 },
    #[error("the game is over")]
    GameOver,
}

impl DropError {
    /// Stable short code for status lines and logs
    pub fn code(self) -> &'static str {
        match self {
            DropError::UnknownPiece(_) => "unknown_piece",
            DropError::InvalidPlacement { .. } => "invalid_placement",
            DropError::GameOver => "game_over",
        }
    }
}

/// Everything an accepted drop did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropOutcome {
    pub piece_id: PieceId,
    pub row: i32,
    pub col: i32,
    pub cleared: ClearResult,
    pub score: ScoreUpdate,
    /// The hand ran out and three fresh pieces were dealt
    pub replenished: bool,
    /// No hand piece fits anywhere any more
    pub game_over: bool,
}

/// Hover feedback for a piece held over the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Covered cells that lie on the grid, row-major
    pub cells: ArrayVec<(i32, i32), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>,
    /// Whether dropping here would be accepted
    pub valid: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng, S = MemoryHighScore> {
    board: Board,
    /// Slots keep their order; a placed piece empties its slot.
    hand: [Option<Piece>; HAND_SIZE],
    generator: PieceGenerator<R>,
    scoring: ScoreKeeper<S>,
    phase: GamePhase,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last accepted drop (consumed by the renderer).
    last_event: Option<DropOutcome>,
}

impl GameState {
    /// New session with a seeded RNG and an in-memory high score
    pub fn new(seed: u32) -> Self {
        Self::with_store(seed, MemoryHighScore::default())
    }
}

impl<S: HighScoreStore> GameState<SimpleRng, S> {
    /// New session with a seeded RNG and the given high score store
    pub fn with_store(seed: u32, store: S) -> Self {
        let mut state = Self::with_sources(SimpleRng::new(seed), store);
        state.seed = seed;
        state
    }
}

impl<R: RandomSource, S: HighScoreStore> GameState<R, S> {
    /// New session drawing pieces from `rng`
    pub fn with_sources(rng: R, store: S) -> Self {
        let mut state = Self {
            board: Board::new(),
            hand: [None; HAND_SIZE],
            generator: PieceGenerator::new(rng),
            scoring: ScoreKeeper::new(store),
            phase: GamePhase::Playing,
            seed: 0,
            episode_id: 0,
            last_event: None,
        };
        state.deal_hand();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions. Bypasses the turn
    /// rules; the terminal check runs on the next accepted drop.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn hand(&self) -> &[Option<Piece>; HAND_SIZE] {
        &self.hand
    }

    /// Pieces still in the hand, in slot order
    pub fn hand_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.hand.iter().flatten().copied()
    }

    pub fn hand_len(&self) -> usize {
        self.hand.iter().filter(|slot| slot.is_some()).count()
    }

    /// Slot index and piece for `piece_id`
    pub fn find_piece(&self, piece_id: PieceId) -> Option<(usize, Piece)> {
        self.hand
            .iter()
            .enumerate()
            .find_map(|(slot, p)| p.filter(|p| p.id() == piece_id).map(|p| (slot, p)))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn combo(&self) -> u32 {
        self.scoring.combo()
    }

    pub fn lines(&self) -> u32 {
        self.scoring.lines()
    }

    pub fn high_score(&self) -> u32 {
        self.scoring.high_score()
    }

    pub fn scoring(&self) -> &ScoreKeeper<S> {
        &self.scoring
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Try to drop `piece_id` with its bounding box top-left at (row, col).
    pub fn attempt_drop(
        &mut self,
        piece_id: PieceId,
        row: i32,
        col: i32,
    ) -> Result<DropOutcome, DropError> {
        if self.phase == GamePhase::GameOver {
            return Err(DropError::GameOver);
        }

        let Some((slot, piece)) = self.find_piece(piece_id) else {
            debug!(piece_id, "drop rejected: piece not in hand");
            return Err(DropError::UnknownPiece(piece_id));
        };

        if !self.board.can_place(piece.shape(), row, col) {
            debug!(piece_id, row, col, shape = piece.shape().id(), "drop rejected: does not fit");
            return Err(DropError::InvalidPlacement { piece_id, row, col });
        }

        self.board.place(piece.shape(), piece.gem(), row, col);
        self.hand[slot] = None;

        let cleared = self.board.clear_completed_lines();
        let score = self.scoring.register_clear(cleared.lines());
        debug!(
            piece_id,
            row,
            col,
            rows = ?cleared.rows,
            cols = ?cleared.cols,
            points = score.points,
            combo = score.combo,
            "drop accepted"
        );

        let replenished = self.hand_len() == 0;
        if replenished {
            self.deal_hand();
        }

        if !self.any_move_left() {
            self.phase = GamePhase::GameOver;
            info!(score = self.score(), lines = self.lines(), "game over");
        }

        let outcome = DropOutcome {
            piece_id,
            row,
            col,
            cleared,
            score,
            replenished,
            game_over: self.game_over(),
        };
        self.last_event = Some(outcome.clone());
        Ok(outcome)
    }

    /// Cells `piece_id` would cover at (row, col) and whether the drop is
    /// legal. `None` when the piece is not in the hand.
    pub fn preview(&self, piece_id: PieceId, row: i32, col: i32) -> Option<Preview> {
        let (_, piece) = self.find_piece(piece_id)?;
        let shape = piece.shape();

        let cells = shape
            .cells()
            .map(|(dr, dc)| (row + dr as i32, col + dc as i32))
            .filter(|&(r, c)| self.board.get(r, c).is_some())
            .collect();

        Some(Preview {
            cells,
            valid: self.phase == GamePhase::Playing && self.board.can_place(shape, row, col),
        })
    }

    /// Whether some hand piece fits somewhere
    pub fn any_move_left(&self) -> bool {
        self.hand_pieces()
            .any(|piece| self.board.has_any_valid_placement(piece.shape()))
    }

    /// Start a fresh session: empty board, new hand, zero score.
    ///
    /// The high score and the RNG stream carry over.
    pub fn restart(&mut self) {
        self.board.clear();
        self.scoring.reset();
        self.phase = GamePhase::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        self.deal_hand();
        info!(episode_id = self.episode_id, "restart");
    }

    /// Take and clear the last accepted drop.
    pub fn take_last_event(&mut self) -> Option<DropOutcome> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<&DropOutcome> {
        self.last_event.as_ref()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.grid);
        for (dst, src) in out.hand.iter_mut().zip(self.hand.iter()) {
            *dst = src.map(HandPieceSnapshot::from);
        }
        out.score = self.score();
        out.combo = self.combo();
        out.lines = self.lines();
        out.high_score = self.high_score();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn deal_hand(&mut self) {
        for slot in self.hand.iter_mut() {
            *slot = Some(self.generator.draw());
        }
        info!(
            next_id = self.generator.peek_id(),
            shapes = ?self.hand.iter().flatten().map(|p| p.shape().id()).collect::<ArrayVec<_, HAND_SIZE>>(),
            "dealt hand"
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
