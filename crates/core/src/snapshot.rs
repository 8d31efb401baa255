use crate::pieces::Piece;
use crate::types::{Gem, PieceId, GRID_SIZE, HAND_SIZE};

const SIZE: usize = GRID_SIZE as usize;

/// Read-only view of one hand slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandPieceSnapshot {
    pub id: PieceId,
    pub shape_id: &'static str,
    pub gem: Gem,
}

impl From<Piece> for HandPieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            id: value.id(),
            shape_id: value.shape().id(),
            gem: value.gem(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, otherwise gem index + 1
    pub grid: [[u8; SIZE]; SIZE],
    /// Slots keep their position; a placed piece leaves `None` behind.
    pub hand: [Option<HandPieceSnapshot>; HAND_SIZE],
    pub score: u32,
    pub combo: u32,
    pub lines: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0u8; SIZE]; SIZE];
        self.hand = [None; HAND_SIZE];
        self.score = 0;
        self.combo = 0;
        self.lines = 0;
        self.high_score = 0;
        self.game_over = false;
        self.episode_id = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Gem at (row, col), `None` for empty or out of range
    pub fn gem_at(&self, row: usize, col: usize) -> Option<Gem> {
        let code = *self.grid.get(row)?.get(col)?;
        code.checked_sub(1).and_then(Gem::from_index)
    }

    pub fn hand_len(&self) -> usize {
        self.hand.iter().filter(|slot| slot.is_some()).count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; SIZE]; SIZE],
            hand: [None; HAND_SIZE],
            score: 0,
            combo: 0,
            lines: 0,
            high_score: 0,
            game_over: false,
            episode_id: 0,
            seed: 0,
        }
    }
}
