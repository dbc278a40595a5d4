//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two sides of a Go game. Black always moves first.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `Player` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First player to move.
    Black,
    /// Second player to move.
    White,
}

impl Player {
    /// Both players, in move order.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// The opponent of this player.
    ///
    /// ```
    /// use rust_go::core::Player;
    ///
    /// assert_eq!(Player::Black.other(), Player::White);
    /// assert_eq!(Player::White.other().other(), Player::White);
    /// ```
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Slot index (black = 0, white = 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Per-player data with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_go::core::{Player, PlayerPair};
///
/// let mut captures: PlayerPair<u32> = PlayerPair::default();
/// captures[Player::White] += 3;
///
/// assert_eq!(captures[Player::Black], 0);
/// assert_eq!(captures[Player::White], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from black's and white's values.
    pub const fn new(black: T, white: T) -> Self {
        Self {
            data: [black, white],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in move order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
