//! Turn-based game built on the board core.
//!
//! A [`Game`] owns the board, the players and the seeded random source. Each
//! turn places the current player's selected tile, credits any chips that
//! resolved and hands the turn to the next seat.

use fastrand::Rng;
use serde::Serialize;
use tracing::{info, instrument};

use crate::ai::RandomAi;
use crate::board::{Board, PlacementOutcome, Preview, check_size};
use crate::color::Color;
use crate::constants::{DEFAULT_BOARD_SIZE, DEFAULT_PLAYERS, DEFAULT_SEED, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::{GameError, Result};
use crate::player::{Player, PlayerManager};
use crate::tile::{Tile, TileSet};

/// Runtime settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    pub board_size: usize,
    pub player_count: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            player_count: DEFAULT_PLAYERS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        check_size(self.board_size)?;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}

/// Points credited to a seated player during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Credit {
    pub color: Color,
    pub points: u8,
}

/// Everything one turn did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub player: Color,
    pub outcome: PlacementOutcome,
    pub credits: Vec<Credit>,
    pub game_over: bool,
}

/// Summary of the game for display or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub current: Color,
    pub scores: Vec<(Color, u32)>,
    pub tiles_placed: usize,
    pub over: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerManager,
    rng: Rng,
    over: bool,
}

impl Game {
    /// Set up chips, tiles and players from `config.seed`.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = Rng::with_seed(config.seed);
        let board = Board::new(config.board_size, &mut rng)?;
        let mut tiles = TileSet::generate(config.board_size, &mut rng)?.into_tiles();
        rng.shuffle(&mut tiles);
        let mut players = PlayerManager::new(config.player_count)?;
        players.deal(tiles);
        info!(
            size = config.board_size,
            players = config.player_count,
            chip_total = board.chips().total_value(),
            "game ready"
        );
        Ok(Self {
            config,
            board,
            players,
            rng,
            over: false,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &PlayerManager {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        self.players.current()
    }

    pub fn selected_tile(&self) -> Option<&Tile> {
        self.players.current().current_tile()
    }

    fn selected_mut(&mut self) -> Result<&mut Tile> {
        self.players
            .current_mut()
            .hand
            .first_mut()
            .ok_or(GameError::NoTileSelected)
    }

    pub fn rotate_selected_clockwise(&mut self) -> Result<Tile> {
        let tile = self.selected_mut()?;
        *tile = tile.rotate_clockwise();
        Ok(*tile)
    }

    pub fn rotate_selected_counter_clockwise(&mut self) -> Result<Tile> {
        let tile = self.selected_mut()?;
        *tile = tile.rotate_counter_clockwise();
        Ok(*tile)
    }

    pub fn valid_positions(&self) -> Vec<(usize, usize)> {
        self.board.valid_positions().into_iter().collect()
    }

    /// What the selected tile would do to the chips around `(row, col)`.
    pub fn preview_selected(&self, row: usize, col: usize) -> Result<Preview> {
        let tile = self.selected_tile().ok_or(GameError::NoTileSelected)?;
        self.board.preview(tile, row, col)
    }

    /// Place the current player's selected tile and finish the turn.
    #[instrument(skip(self), fields(player = %self.players.current().color))]
    pub fn place_selected(&mut self, row: usize, col: usize) -> Result<TurnReport> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let tile = *self.selected_tile().ok_or(GameError::NoTileSelected)?;
        let outcome = self.board.place(tile, row, col)?;

        let player = self.players.current().color;
        self.players.current_mut().hand.remove(0);

        let mut credits = Vec::new();
        for res in &outcome.resolved {
            if let Some(color) = res.owner {
                if self.players.credit(color, res.position, res.points) {
                    credits.push(Credit {
                        color,
                        points: res.points,
                    });
                }
            }
        }

        if !self.players.any_tiles_left() || self.board.valid_positions().is_empty() {
            self.over = true;
            info!(winner = ?self.winner().map(|p| p.color), "game over");
        } else {
            self.players.advance();
        }

        Ok(TurnReport {
            player,
            outcome,
            credits,
            game_over: self.over,
        })
    }

    /// Let the random AI take the current player's turn.
    pub fn play_ai_turn(&mut self) -> Result<TurnReport> {
        if self.over {
            return Err(GameError::GameOver);
        }
        let Some(mv) = RandomAi.choose(&self.board, &mut self.rng) else {
            self.over = true;
            return Err(GameError::GameOver);
        };
        let tile = self.selected_mut()?;
        *tile = tile.with_rotation(mv.rotation);
        self.place_selected(mv.row, mv.col)
    }

    /// Play AI turns until the game ends.
    pub fn play_out(&mut self) -> Result<Vec<TurnReport>> {
        let mut turns = Vec::new();
        while !self.over {
            turns.push(self.play_ai_turn()?);
        }
        Ok(turns)
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn winner(&self) -> Option<&Player> {
        self.players.winner()
    }

    pub fn leaderboard(&self) -> Vec<&Player> {
        self.players.leaderboard()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            current: self.players.current().color,
            scores: self.players.players().iter().map(|p| (p.color, p.score)).collect(),
            tiles_placed: self.board.placed_count(),
            over: self.over,
        }
    }
}
