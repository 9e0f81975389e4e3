//! Test suite for the position encoding
//! Validates terminal detection, turn derivation and the text format

use tictactoe::tictactoe::{Cell, GameStatus, Mark, Position, index, reachable_positions};

fn state_of(text: &str) -> Position {
    text.parse().expect("fixture should parse")
}

mod text_format {
    use super::*;

    const EMPTY_TEXT: &str = "...\n...\n...";

    #[test]
    fn empty_position_serializes_to_dots() {
        assert_eq!(Position::empty().to_string(), EMPTY_TEXT);
    }

    #[test]
    fn dots_deserialize_to_empty_position() {
        assert_eq!(state_of(EMPTY_TEXT), Position::empty());
    }

    #[test]
    fn cells_are_read_in_order() {
        let position = state_of(".XO\nXO.\nO.X");
        let expected = [
            Cell::Empty,
            Cell::X,
            Cell::O,
            Cell::X,
            Cell::O,
            Cell::Empty,
            Cell::O,
            Cell::Empty,
            Cell::X,
        ];
        for (i, cell) in expected.into_iter().enumerate() {
            assert_eq!(position.cell(i), cell, "cell {i}");
        }
    }

    #[test]
    fn separators_are_ignored() {
        let plain = state_of("XO.XO....");
        assert_eq!(state_of("XO.|XO.|..."), plain);
        assert_eq!(state_of("XO.\nXO.\n..."), plain);
        assert_eq!(state_of(" X O . | X O . | . . . "), plain);
    }

    #[test]
    fn every_reachable_position_round_trips() {
        for position in reachable_positions() {
            let text = position.to_string();
            assert_eq!(text.lines().count(), 3);
            assert!(text.lines().all(|line| line.len() == 3));
            assert_eq!(state_of(&text), position);
        }
    }
}

mod cells {
    use super::*;

    #[test]
    fn set_x_then_get() {
        for i in 0..9 {
            assert_eq!(Position::empty().with_mark(i, Mark::X).cell(i), Cell::X);
        }
    }

    #[test]
    fn set_o_then_get() {
        for i in 0..9 {
            assert_eq!(Position::empty().with_mark(i, Mark::O).cell(i), Cell::O);
        }
    }

    #[test]
    fn with_mark_leaves_original_unchanged() {
        let before = state_of("X........");
        let after = before.with_mark(4, Mark::O);
        assert_eq!(before.cell(4), Cell::Empty);
        assert_eq!(after.cell(4), Cell::O);
    }

    #[test]
    fn coordinates_map_row_major() {
        assert_eq!(index(0, 2), 6);
        assert_eq!(index(1, 2), 7);
        assert_eq!(index(2, 1), 5);
    }
}

mod terminal_detection {
    use super::*;

    #[test]
    fn x_wins() {
        assert!(!Position::empty().has_won(Mark::X));
        assert!(state_of("XXX......").has_won(Mark::X));
        assert!(!state_of(".XXX.....").has_won(Mark::X));
        assert!(state_of("X..X..X..").has_won(Mark::X));
        assert!(state_of("X...X...X").has_won(Mark::X));
    }

    #[test]
    fn o_wins() {
        assert!(!Position::empty().has_won(Mark::O));
        assert!(state_of("OOO......").has_won(Mark::O));
        assert!(!state_of(".OOO.....").has_won(Mark::O));
        assert!(state_of("O..O..O..").has_won(Mark::O));
        assert!(state_of("O...O...O").has_won(Mark::O));
        assert!(state_of("..O.O.O..").has_won(Mark::O));
    }

    #[test]
    fn draws() {
        assert!(!Position::empty().is_draw());
        assert!(!state_of("XXXOOOXX.").is_draw());
        assert!(state_of("XXXOOOXXX").is_draw());
        assert!(state_of("XOXXOOOXX").is_draw());
    }

    #[test]
    fn ninth_move_win_is_full_but_won() {
        // X completes the diagonal with the ninth mark
        let position = state_of("XOX\nOXO\nOXX");
        assert!(position.is_reachable());
        assert!(position.is_draw());
        assert_eq!(position.winner(), Some(Mark::X));
        assert_eq!(GameStatus::of(&position), GameStatus::Won(Mark::X));
        assert!(position.is_terminal());
    }

    #[test]
    fn winner_is_reported() {
        assert_eq!(state_of("XO.XO.X..").winner(), Some(Mark::X));
        assert_eq!(state_of("O.XOXXO..").winner(), Some(Mark::O));
        assert_eq!(state_of("XO.XO....").winner(), None);
    }
}

mod turn_derivation {
    use super::*;

    #[test]
    fn x_moves_first_and_turns_alternate() {
        assert!(Position::empty().is_first_player_to_move());
        assert!(!state_of("X........").is_first_player_to_move());
        assert!(state_of("XO.......").is_first_player_to_move());
    }

    #[test]
    fn to_move_follows_mark_counts() {
        let mut position = Position::empty();
        for (i, expected) in [Mark::X, Mark::O, Mark::X, Mark::O, Mark::X]
            .into_iter()
            .enumerate()
        {
            assert_eq!(position.to_move(), expected);
            position = position.play(i);
        }
    }
}

mod reachability {
    use super::*;

    #[test]
    fn reachable_space_has_known_size() {
        let positions = reachable_positions();
        assert_eq!(positions.len(), 5478);
        assert!(positions.iter().all(Position::is_reachable));
    }

    #[test]
    fn parse_reachable_rejects_impossible_boards() {
        assert!(Position::parse_reachable("XXX......").is_err());
        assert!(Position::parse_reachable("OO.X.....").is_err());
        assert!(Position::parse_reachable("XO.XO....").is_ok());
    }
}
