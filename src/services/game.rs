use log::{debug, info};

use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputReader, OutputWriter, TerminalIO};
use crate::models::constants::BOARD_WIDTH;
use crate::models::errors::GameResult;
use crate::ui::presenters::{BoardPresenter, TurnPresenter};

const COLUMN_PROMPT: &str = "Type the column:";
const RETRY_PROMPT: &str = "Invalid column. Try again:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Drop(i64),
    Quit,
}

/// Turn-by-turn terminal loop around a [`GameEngine`].
pub struct Game<I: InputReader, O: OutputWriter> {
    engine: GameEngine,
    input: I,
    output: O,
}

impl Game<TerminalIO, TerminalIO> {
    pub fn terminal(engine: GameEngine) -> Self {
        Game::new(engine, TerminalIO, TerminalIO)
    }
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(engine: GameEngine, input: I, output: O) -> Self {
        Game {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Plays until someone wins, the board fills up, or the player quits.
    /// Returns the state the game was left in.
    pub fn run(&mut self) -> GameResult<GameState> {
        while !self.engine.is_over() && !self.engine.is_draw() {
            BoardPresenter::show_board(self.engine.board(), &mut self.output);
            self.output.writeln(&self.engine.describe_current_player());

            match self.read_command()? {
                Command::Drop(column) => {
                    self.engine.play(column, &mut self.output);
                }
                Command::Quit => {
                    info!("game abandoned");
                    self.output.writeln("Goodbye.");
                    return Ok(GameState::Playing);
                }
            }
        }

        if self.engine.is_draw() {
            info!("board full, game drawn");
            BoardPresenter::show_board(self.engine.board(), &mut self.output);
            TurnPresenter::show_draw(&mut self.output);
        }
        Ok(self.engine.state())
    }

    /// Prompts until the player enters a column on the board or quits.
    fn read_command(&mut self) -> GameResult<Command> {
        let mut prompt = COLUMN_PROMPT;
        loop {
            let line = self.input.read_line(prompt)?;
            let line = line.trim();
            debug!("read {:?}", line);

            if matches!(line, "q" | "Q" | "quit") {
                return Ok(Command::Quit);
            }
            self.output.writeln(&format!("You typed column: {}", line));
            match parse_column(line) {
                Some(column) => return Ok(Command::Drop(column)),
                None => prompt = RETRY_PROMPT,
            }
        }
    }
}

/// Parse a column typed by the player. Only integers naming a board column pass.
pub fn parse_column(input: &str) -> Option<i64> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|column| (0..BOARD_WIDTH as i64).contains(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::constants::{Cell, Mark};
    use crate::models::errors::GameError;
    use crate::models::player::Player;

    fn game(responses: Vec<&str>) -> Game<MockInput, MockOutput> {
        let engine = GameEngine::new(
            Player::new("Player 1", Mark::Red),
            Player::new("Player 2", Mark::Yellow),
        )
        .unwrap();
        Game::new(engine, MockInput::new(responses), MockOutput::new())
    }

    #[test]
    fn parse_column_accepts_only_board_columns() {
        assert_eq!(parse_column("0"), Some(0));
        assert_eq!(parse_column(" 6\n"), Some(6));
        assert_eq!(parse_column("7"), None);
        assert_eq!(parse_column("-1"), None);
        assert_eq!(parse_column("three"), None);
        assert_eq!(parse_column(""), None);
    }

    #[test]
    fn vertical_win_ends_the_loop() {
        let mut game = game(vec!["3", "0", "3", "0", "3", "0", "3"]);
        let state = game.run().unwrap();

        assert_eq!(state, GameState::Won { winner: "Player 1".to_string() });
        assert!(game.engine().is_over());
        for row in 0..4 {
            assert_eq!(game.engine().board().get(3, row), Cell::Red);
        }
        assert!(game.output().text().ends_with("Player 1 has won!\n"));
        assert_eq!(game.input().prompts.len(), 7);
    }

    #[test]
    fn bad_input_reprompts_without_playing() {
        let mut game = game(vec!["x", "9", "", "2", "q"]);
        let state = game.run().unwrap();

        assert_eq!(state, GameState::Playing);
        assert_eq!(
            game.input().prompts,
            vec![COLUMN_PROMPT, RETRY_PROMPT, RETRY_PROMPT, RETRY_PROMPT, COLUMN_PROMPT]
        );
        assert_eq!(game.engine().board().height(2), 1);
        assert_eq!(game.engine().current_player().name(), "Player 2");
        assert!(game.output().text().ends_with("Goodbye.\n"));
    }

    #[test]
    fn full_column_is_reported_and_turn_kept() {
        let mut game = game(vec!["1", "1", "1", "1", "1", "1", "1", "q"]);
        game.run().unwrap();

        let text = game.output().text();
        assert!(text.contains("Column 1 is full\n"));
        assert!(game.engine().board().is_column_full(1));
        assert_eq!(game.engine().current_player().name(), "Player 1");
    }

    #[test]
    fn every_column_entry_is_echoed() {
        let mut game = game(vec!["abc", "5", "q"]);
        game.run().unwrap();

        let echoes: Vec<&String> = game
            .output()
            .messages
            .iter()
            .filter(|m| m.starts_with("You typed column: "))
            .collect();
        assert_eq!(
            echoes,
            vec!["You typed column: abc\n", "You typed column: 5\n"]
        );
        assert_eq!(game.engine().board().height(5), 1);
    }

    #[test]
    fn turn_line_follows_the_board() {
        let mut game = game(vec!["q"]);
        game.run().unwrap();

        let messages = &game.output().messages;
        assert_eq!(messages[12], "Player 1's turn\n");
    }

    #[test]
    fn exhausted_input_is_an_io_error() {
        let mut game = game(vec!["4"]);
        let err = game.run().unwrap_err();
        assert!(matches!(err, GameError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn full_board_ends_in_a_draw() {
        let mut moves = Vec::new();
        for (a, b) in [("0", "2"), ("1", "3"), ("4", "6")] {
            for _ in 0..3 {
                moves.extend([a, b, b, a]);
            }
        }
        moves.extend(["5"; 6]);

        let mut game = game(moves);
        let state = game.run().unwrap();

        assert_eq!(state, GameState::Draw);
        assert!(!game.engine().is_over());
        assert!(game.output().text().ends_with("It's a draw!\n"));
    }
}
