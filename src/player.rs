//! Players, their hands and the score ledger.

use serde::Serialize;
use tracing::debug;

use crate::chip::Intersection;
use crate::color::{ALL_COLORS, Color};
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{GameError, Result};
use crate::tile::Tile;

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub name: String,
    pub color: Color,
    pub score: u32,
    /// Tiles still in hand; the first one is the selected tile.
    pub hand: Vec<Tile>,
    /// Intersections of the chips this player has won.
    pub collected: Vec<Intersection>,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            score: 0,
            hand: Vec::new(),
            collected: Vec::new(),
        }
    }

    pub fn has_tiles(&self) -> bool {
        !self.hand.is_empty()
    }

    /// The tile this player will place next.
    pub fn current_tile(&self) -> Option<&Tile> {
        self.hand.first()
    }
}

/// Seats 2-4 players, tracks whose turn it is and credits chip points.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerManager {
    players: Vec<Player>,
    current: usize,
}

impl PlayerManager {
    /// Seat `count` players, colored red, blue, green, yellow in that order.
    pub fn new(count: usize) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidPlayerCount(count));
        }
        let players = ALL_COLORS
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, &c)| Player::new(format!("Player {}", i + 1), c))
            .collect();
        Ok(Self {
            players,
            current: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Deal tiles evenly in seat order. Tiles that don't divide evenly stay out of play.
    pub fn deal(&mut self, tiles: Vec<Tile>) {
        let per_player = tiles.len() / self.players.len();
        let mut tiles = tiles.into_iter();
        for player in &mut self.players {
            player.hand.extend(tiles.by_ref().take(per_player).map(|mut t| {
                t.set_owner(player.color);
                t
            }));
            debug!(player = %player.name, tiles = player.hand.len(), "dealt");
        }
    }

    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// Pass the turn to the next seat.
    pub fn advance(&mut self) -> &Player {
        self.current = (self.current + 1) % self.players.len();
        self.current()
    }

    pub fn player_for(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color == color)
    }

    /// Credit `points` to whoever holds `color`. Returns false when no seated
    /// player has that color.
    pub fn credit(&mut self, color: Color, position: Intersection, points: u8) -> bool {
        match self.players.iter_mut().find(|p| p.color == color) {
            Some(p) => {
                p.score += u32::from(points);
                p.collected.push(position);
                true
            }
            None => false,
        }
    }

    pub fn any_tiles_left(&self) -> bool {
        self.players.iter().any(Player::has_tiles)
    }

    /// Players sorted by score, highest first. Equal scores keep seat order.
    pub fn leaderboard(&self) -> Vec<&Player> {
        let mut board: Vec<&Player> = self.players.iter().collect();
        board.sort_by(|a, b| b.score.cmp(&a.score));
        board
    }

    /// The single top scorer, or `None` on a tie for first.
    pub fn winner(&self) -> Option<&Player> {
        let max = self.players.iter().map(|p| p.score).max()?;
        let mut top = self.players.iter().filter(|p| p.score == max);
        match (top.next(), top.next()) {
            (Some(p), None) => Some(p),
            _ => None,
        }
    }
}
