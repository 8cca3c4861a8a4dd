use crate::io::OutputWriter;
use crate::models::board::BoardGrid;
use crate::models::player::Player;

pub struct BoardPresenter;

impl BoardPresenter {
    pub fn show_board(board: &BoardGrid, output: &mut dyn OutputWriter) {
        output.write_lines(&board.render());
    }
}

pub struct TurnPresenter;

impl TurnPresenter {
    pub fn describe_turn(player: &Player) -> String {
        format!("{}'s turn", player.name())
    }

    pub fn show_rejected_move(message: &str, output: &mut dyn OutputWriter) {
        output.writeln(message);
    }

    pub fn show_victory(winner: &Player, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{} has won!", winner.name()));
    }

    pub fn show_draw(output: &mut dyn OutputWriter) {
        output.writeln("It's a draw!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use crate::models::constants::Mark;

    #[test]
    fn board_is_written_line_by_line() {
        let mut output = MockOutput::new();
        BoardPresenter::show_board(&BoardGrid::new(), &mut output);
        assert_eq!(output.messages.len(), 12);
        assert_eq!(output.messages[0], "| | | | | | | |\n");
        assert_eq!(output.messages[1], "---------------\n");
    }

    #[test]
    fn turn_and_victory_lines() {
        let player = Player::new("Player 2", Mark::Yellow);
        assert_eq!(TurnPresenter::describe_turn(&player), "Player 2's turn");

        let mut output = MockOutput::new();
        TurnPresenter::show_victory(&player, &mut output);
        TurnPresenter::show_draw(&mut output);
        assert_eq!(output.text(), "Player 2 has won!\nIt's a draw!\n");
    }
}
