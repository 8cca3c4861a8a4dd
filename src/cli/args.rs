use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::game_engine::GameEngine;
use crate::models::board::WinRules;
use crate::models::constants::Mark;
use crate::models::errors::GameResult;
use crate::models::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiscChoice {
    Red,
    Yellow,
}

impl From<DiscChoice> for Mark {
    fn from(choice: DiscChoice) -> Self {
        match choice {
            DiscChoice::Red => Mark::Red,
            DiscChoice::Yellow => Mark::Yellow,
        }
    }
}

/// Two-player Connect Four in the terminal.
#[derive(Debug, Parser)]
#[command(name = "connect_four", version, about = "Two-player Connect Four in the terminal")]
pub struct Args {
    /// Name of the player who moves first
    #[arg(long, default_value = "Player 1")]
    pub player1: String,

    /// Name of the second player
    #[arg(long, default_value = "Player 2")]
    pub player2: String,

    /// Disc colour of the first player
    #[arg(long, value_enum, default_value_t = DiscChoice::Red)]
    pub player1_disc: DiscChoice,

    /// Disc colour of the second player
    #[arg(long, value_enum, default_value_t = DiscChoice::Yellow)]
    pub player2_disc: DiscChoice,

    /// Also count top-left to bottom-right diagonals as wins
    #[arg(long)]
    pub falling_diagonals: bool,

    /// Increase log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn players(&self) -> (Player, Player) {
        (
            Player::new(self.player1.clone(), self.player1_disc.into()),
            Player::new(self.player2.clone(), self.player2_disc.into()),
        )
    }

    pub fn rules(&self) -> WinRules {
        WinRules {
            falling_diagonals: self.falling_diagonals,
        }
    }

    /// Build the engine these arguments describe. Fails when both players
    /// picked the same disc.
    pub fn engine(&self) -> GameResult<GameEngine> {
        let (player_a, player_b) = self.players();
        Ok(GameEngine::with_rules(player_a, player_b, self.rules())?)
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
