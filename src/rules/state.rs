//! Game state: the board, whose turn it is, and the game's history.
//!
//! ## GameState
//!
//! A cheap handle (`Arc`) to an immutable snapshot. `apply_move` never
//! mutates; it returns a new state that points back at its parent, so a
//! game is a singly linked chain of snapshots and search trees may share
//! ancestors freely.
//!
//! ## Superko memory
//!
//! Each state carries the set of every (player to move, board hash) pair
//! seen earlier in the game. The set is persistent, so adding the parent's
//! situation shares structure with the parent's set instead of copying it.

use std::hash::BuildHasherDefault;
use std::sync::Arc;

use im::HashSet as ImHashSet;
use rustc_hash::FxHasher;

use super::moves::Move;
use super::scoring::{compute_game_result, GameResult};
use crate::board::Board;
use crate::core::{GameConfig, GoError, Player, ScoringMethod, DEFAULT_KOMI};

/// (player to move, board hash).
pub type Situation = (Player, u64);

type SituationSet = ImHashSet<Situation, BuildHasherDefault<FxHasher>>;

struct Snapshot {
    board: Arc<Board>,
    next_player: Player,
    previous: Option<GameState>,
    last_move: Option<Move>,
    previous_states: SituationSet,
    move_number: u32,
    komi: f32,
    scoring: ScoringMethod,
}

/// An immutable game position with its history.
#[derive(Clone)]
pub struct GameState {
    inner: Arc<Snapshot>,
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("board", self.board())
            .field("next_player", &self.next_player())
            .field("last_move", &self.last_move())
            .field("move_number", &self.move_number())
            .finish()
    }
}

impl GameState {
    /// Start a game on an empty `size x size` board, black to move.
    ///
    /// Uses default komi and area scoring. Panics if `size` is outside
    /// `1..=MAX_BOARD_SIZE`; use [`GameState::from_config`] to validate.
    #[must_use]
    pub fn new_game(size: u8) -> Self {
        Self::start(Board::new(size, size), DEFAULT_KOMI, ScoringMethod::default())
    }

    /// Start a game from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, GoError> {
        config.validate()?;
        Ok(Self::start(
            Board::new(config.rows, config.cols),
            config.komi,
            config.scoring,
        ))
    }

    fn start(board: Board, komi: f32, scoring: ScoringMethod) -> Self {
        Self {
            inner: Arc::new(Snapshot {
                board: Arc::new(board),
                next_player: Player::Black,
                previous: None,
                last_move: None,
                previous_states: SituationSet::default(),
                move_number: 0,
                komi,
                scoring,
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.inner.board
    }

    /// Player whose turn it is.
    #[inline]
    #[must_use]
    pub fn next_player(&self) -> Player {
        self.inner.next_player
    }

    /// The state this one was reached from.
    #[inline]
    #[must_use]
    pub fn previous(&self) -> Option<&GameState> {
        self.inner.previous.as_ref()
    }

    /// The move that produced this state.
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.inner.last_move
    }

    /// Moves played so far, passes and resignations included.
    #[inline]
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.inner.move_number
    }

    #[inline]
    #[must_use]
    pub fn komi(&self) -> f32 {
        self.inner.komi
    }

    #[inline]
    #[must_use]
    pub fn scoring(&self) -> ScoringMethod {
        self.inner.scoring
    }

    /// The current (player to move, board hash) pair.
    #[must_use]
    pub fn situation(&self) -> Situation {
        (self.next_player(), self.board().zobrist_hash())
    }

    /// Apply a move and return the resulting state.
    ///
    /// Legality is not re-checked; call [`GameState::is_valid_move`] first.
    /// Pass and resign share this state's board.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> GameState {
        let board = match mv {
            Move::Play(point) => {
                let mut next = Board::clone(self.board());
                next.place_stone(self.next_player(), point);
                Arc::new(next)
            }
            Move::Pass | Move::Resign => Arc::clone(&self.inner.board),
        };

        GameState {
            inner: Arc::new(Snapshot {
                board,
                next_player: self.next_player().other(),
                previous: Some(self.clone()),
                last_move: Some(mv),
                previous_states: self.inner.previous_states.update(self.situation()),
                move_number: self.inner.move_number + 1,
                komi: self.inner.komi,
                scoring: self.inner.scoring,
            }),
        }
    }

    /// Would `mv` by `player` leave its own string without liberties?
    #[must_use]
    pub fn is_move_self_capture(&self, player: Player, mv: Move) -> bool {
        match mv {
            Move::Play(point) => self.board().is_self_capture(player, point),
            Move::Pass | Move::Resign => false,
        }
    }

    /// Would `mv` by `player` recreate an earlier (player, position) pair?
    ///
    /// Checked on a scratch copy of the board; this state is untouched.
    #[must_use]
    pub fn does_move_violate_ko(&self, player: Player, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };
        let mut next_board = Board::clone(self.board());
        next_board.place_stone(player, point);
        let next_situation = (player.other(), next_board.zobrist_hash());
        let repeated = self.inner.previous_states.contains(&next_situation);
        if repeated {
            tracing::trace!(%point, %player, "move rejected by positional superko");
        }
        repeated
    }

    /// Is `mv` legal for the player to move?
    ///
    /// Pass and resign are always legal while the game is running. A play
    /// must target an empty on-board point, must not be self-capture, and
    /// must not repeat an earlier situation.
    #[must_use]
    pub fn is_valid_move(&self, mv: Move) -> bool {
        if self.is_over() {
            return false;
        }
        match mv {
            Move::Pass | Move::Resign => true,
            Move::Play(point) => {
                let player = self.next_player();
                self.board().is_on_grid(point)
                    && self.board().get(point).is_none()
                    && !self.is_move_self_capture(player, mv)
                    && !self.does_move_violate_ko(player, mv)
            }
        }
    }

    /// Has the game ended by resignation or two consecutive passes?
    #[must_use]
    pub fn is_over(&self) -> bool {
        match self.last_move() {
            None => false,
            Some(Move::Resign) => true,
            Some(Move::Pass) => self
                .previous()
                .and_then(GameState::last_move)
                .map_or(false, |m| m.is_pass()),
            Some(Move::Play(_)) => false,
        }
    }

    /// Every legal move, scanning the whole board.
    ///
    /// Pass and resign are always included. Empty once the game is over.
    /// This speculatively plays every empty point, so avoid it on hot paths.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        let mut moves: Vec<Move> = self
            .board()
            .empty_points()
            .map(Move::Play)
            .filter(|&mv| self.is_valid_move(mv))
            .collect();
        moves.push(Move::Pass);
        moves.push(Move::Resign);
        moves
    }

    /// Score the current board, whether or not the game is over.
    #[must_use]
    pub fn score(&self) -> GameResult {
        compute_game_result(self.board(), self.komi(), self.scoring())
    }

    /// Final scores, if the game ended by two passes.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        match self.last_move() {
            Some(Move::Pass) if self.is_over() => Some(self.score()),
            _ => None,
        }
    }

    /// The winner, or `None` while the game is in progress.
    ///
    /// On resignation the player who did not resign wins; otherwise the
    /// final board is scored.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if !self.is_over() {
            return None;
        }
        match self.last_move() {
            // The resigner was the previous player to move.
            Some(Move::Resign) => Some(self.next_player()),
            _ => Some(self.score().winner()),
        }
    }
}
