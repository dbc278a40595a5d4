//! Moves a player can make on a turn.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GoError, Point};

/// Exactly one of: place a stone, pass, or resign.
///
/// ```
/// use rust_go::core::Point;
/// use rust_go::rules::Move;
///
/// let mv: Move = "D4".parse().unwrap();
/// assert_eq!(mv, Move::Play(Point::new(4, 4)));
/// assert_eq!("pass".parse::<Move>().unwrap(), Move::Pass);
/// assert_eq!(Move::Resign.to_string(), "resign");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone on the point.
    Play(Point),
    /// Skip the turn.
    Pass,
    /// Concede the game.
    Resign,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn play(point: Point) -> Self {
        Move::Play(point)
    }

    #[inline]
    #[must_use]
    pub const fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    #[inline]
    #[must_use]
    pub const fn is_resign(&self) -> bool {
        matches!(self, Move::Resign)
    }

    /// The target point of a play move.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> Option<Point> {
        match self {
            Move::Play(point) => Some(*point),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Play(point) => write!(f, "{point}"),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}

impl FromStr for Move {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("pass") {
            Ok(Move::Pass)
        } else if text.eq_ignore_ascii_case("resign") {
            Ok(Move::Resign)
        } else {
            Point::from_coords(text)
                .map(Move::Play)
                .map_err(|_| GoError::InvalidMove(s.to_string()))
        }
    }
}
