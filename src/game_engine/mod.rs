//! Game state machine
//!
//! Owns the board and both players, alternates turns, and reports whether
//! the game has been won. Win state is never stored: every query rescans
//! the board.

use log::{debug, info};

use crate::io::OutputWriter;
use crate::models::board::{BoardGrid, WinRules};
use crate::models::errors::{ConfigurationError, InvalidMove};
use crate::models::player::Player;
use crate::ui::presenters::{BoardPresenter, TurnPresenter};

/// Core game engine that manages turn order and victory conditions
pub struct GameEngine {
    board: BoardGrid,
    players: [Player; 2],
    current: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won { winner: String },
    Draw,
}

/// What happened to a single call to [`GameEngine::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed { column: usize, row: usize },
    Won { column: usize, row: usize, winner: String },
    Rejected(InvalidMove),
}

impl GameEngine {
    /// Creates a game with the classic win rules. `player_a` moves first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateMark`] if both players drop the
    /// same colour. No board is created in that case.
    pub fn new(player_a: Player, player_b: Player) -> Result<Self, ConfigurationError> {
        Self::with_rules(player_a, player_b, WinRules::default())
    }

    /// Creates a game with explicit win rules
    ///
    /// # Arguments
    ///
    /// * `player_a` - The player who drops the first disc
    /// * `player_b` - The opponent; must use the other colour
    /// * `rules` - Which orientations count as a winning line
    ///
    /// # Returns
    ///
    /// A new GameEngine on an empty board with `player_a` to move, or
    /// [`ConfigurationError::DuplicateMark`] if both players share a colour
    pub fn with_rules(
        player_a: Player,
        player_b: Player,
        rules: WinRules,
    ) -> Result<Self, ConfigurationError> {
        if player_a.mark() == player_b.mark() {
            return Err(ConfigurationError::DuplicateMark(player_a.mark()));
        }

        Ok(Self {
            board: BoardGrid::with_rules(rules),
            players: [player_a, player_b],
            current: 0,
        })
    }

    /// Returns an immutable reference to the board
    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    /// Returns the player whose disc the next accepted move drops
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Drops the current player's disc into `column`.
    ///
    /// A rejected move writes the reason to `output` and leaves the board and
    /// the turn untouched. An accepted move always passes the turn, including
    /// the move that wins the game. While a winning line is on the board the
    /// board and a win announcement naming the mover are written to `output`,
    /// and the returned [`MoveOutcome::Won`] names the owner of the line.
    pub fn play(&mut self, column: i64, output: &mut dyn OutputWriter) -> MoveOutcome {
        let mover = &self.players[self.current];
        let row = match self.board.place_disc(column, mover.mark()) {
            Ok(row) => row,
            Err(err) => {
                debug!("{} rejected: {}", mover.name(), err);
                TurnPresenter::show_rejected_move(&err.to_string(), output);
                return MoveOutcome::Rejected(err);
            }
        };
        let column = column as usize;
        debug!("{} dropped {} at ({}, {})", mover.name(), mover.mark().name(), column, row);

        let outcome = if let Some(winner) = self.winner() {
            info!("{} moved with {}'s line on the board", mover.name(), winner);
            // The announcement names the mover, as the classic game does.
            BoardPresenter::show_board(&self.board, output);
            TurnPresenter::show_victory(mover, output);
            MoveOutcome::Won { column, row, winner }
        } else {
            MoveOutcome::Placed { column, row }
        };

        self.current = 1 - self.current;
        outcome
    }

    /// True once any winning line exists. A full board without one is not over.
    pub fn is_over(&self) -> bool {
        self.board.has_winning_line()
    }

    /// True when every column is full and nobody has a line.
    pub fn is_draw(&self) -> bool {
        self.board.is_full() && !self.board.has_winning_line()
    }

    /// Rescans the board and classifies the game.
    pub fn state(&self) -> GameState {
        if let Some(winner) = self.winner() {
            return GameState::Won { winner };
        }
        if self.board.is_full() {
            return GameState::Draw;
        }
        GameState::Playing
    }

    /// Name of the player owning the winning line on the board, if any.
    fn winner(&self) -> Option<String> {
        let mark = self.board.winning_mark()?;
        let name = self
            .players
            .iter()
            .find(|p| p.mark() == mark)
            .map(|p| p.name())
            .unwrap_or_else(|| mark.name());
        Some(name.to_string())
    }

    /// Returns the board as display lines, top row first
    pub fn render(&self) -> Vec<String> {
        self.board.render()
    }

    /// Returns the turn line, e.g. `Player 1's turn`
    pub fn describe_current_player(&self) -> String {
        TurnPresenter::describe_turn(self.current_player())
    }
}
