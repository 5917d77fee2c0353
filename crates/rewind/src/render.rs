//! Plain-text rendering of the game read model.

use crate::RewindConfig;
use rewind_tictactoe::Game;

/// Board and status line, then the last move, the winning line or the open
/// cells, and once the game is over the restart hint.
pub fn board(game: &Game, config: &RewindConfig) -> String {
    let status = game.status();
    let mut out = status
        .board()
        .render(config.mark_a_symbol(), config.mark_b_symbol());
    out.push_str("\n\n");
    out.push_str(&status.status_line());

    if let Some(last) = game.moves().last() {
        out.push_str(&format!("\nLast move: {}", last));
    }
    if let Some(line) = status.outcome().winning_line() {
        let cells: Vec<String> = line
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect();
        out.push_str(&format!("\nWinning line: {}", cells.join("-")));
    }
    let open = game.valid_moves();
    if !open.is_empty() {
        let cells: Vec<String> = open
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect();
        out.push_str(&format!("\nOpen cells: {}", cells.join(" ")));
    }
    if status.outcome().is_terminal() {
        out.push_str("\nType 'reset' to restart or 'jump <n>' to rewind.");
    }
    out
}

/// Move list with the move in view marked.
pub fn history(game: &Game) -> String {
    let current = *game.status().move_count();
    game.history_labels()
        .into_iter()
        .map(|(n, label)| {
            let marker = if n == current { '>' } else { ' ' };
            format!("{} {}. {}", marker, n, label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> RewindConfig {
        RewindConfig::default().with_symbols("X", "O")
    }

    #[test]
    fn test_board_new_game_lists_every_cell() {
        assert_eq!(
            board(&Game::new(), &plain()),
            "0|1|2\n-+-+-\n3|4|5\n-+-+-\n6|7|8\n\nPlayer: 1\nOpen cells: 0 1 2 3 4 5 6 7 8"
        );
    }

    #[test]
    fn test_board_in_progress() {
        let mut game = Game::new();
        game.make_move(4).expect("center free");

        assert_eq!(
            board(&game, &plain()),
            "0|1|2\n-+-+-\n3|X|5\n-+-+-\n6|7|8\n\nPlayer: 2\n\
             Last move: Player 1 -> Center\nOpen cells: 0 1 2 3 5 6 7 8"
        );
    }

    #[test]
    fn test_board_after_jump_shows_move_in_view() {
        let mut game = Game::new();
        for cell in [0, 4, 8] {
            game.make_move(cell).expect("free cell");
        }
        game.jump_to(2).expect("move 2 recorded");
        let text = board(&game, &plain());

        assert!(text.contains("Last move: Player 2 -> Center"));
        assert!(text.contains("Open cells: 1 2 3 5 6 7 8"));
    }

    #[test]
    fn test_board_shows_winning_line_and_restart() {
        let mut game = Game::new();
        for cell in [0, 3, 1, 4, 2] {
            game.make_move(cell).expect("legal move");
        }
        let text = board(&game, &plain());

        assert!(text.contains("Winner: Player 1"));
        assert!(text.contains("Last move: Player 1 -> Top-right"));
        assert!(text.contains("Winning line: 0-1-2"));
        assert!(!text.contains("Open cells"));
        assert!(text.contains("reset"));
    }

    #[test]
    fn test_history_marks_current_move() {
        let mut game = Game::new();
        game.make_move(0).expect("free");
        game.make_move(1).expect("free");
        game.jump_to(1).expect("recorded");

        assert_eq!(
            history(&game),
            "  0. Begin the game\n> 1. Go to move 1\n  2. Go to move 2"
        );
    }
}
