// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_config, movegen};

// Main word only. Premiums under tiles already on the board do not count
// again. The board is the one the move was generated on.
pub fn compute_score(
    board: &board::Board,
    game_config: &game_config::GameConfig,
    play: &movegen::Move,
) -> i16 {
    let alphabet = game_config.alphabet();
    let dim = board.dim();
    let direction = play.reading_direction();
    let mut word_multiplier = 1i16;
    let mut word_score = 0i16;
    let mut p = Some(play.start);
    for &tile in play.word.iter() {
        let Some(coord) = p else {
            break;
        };
        let square = board.at(coord);
        let tile_multiplier = if square.bonus_consumed {
            1
        } else {
            let premium = square.bonus.premium();
            word_multiplier *= premium.word_multiplier as i16;
            premium.tile_multiplier as i16
        };
        word_score += alphabet.score(tile) as i16 * tile_multiplier;
        p = dim.step(coord, direction);
    }
    word_score * word_multiplier + game_config.num_played_bonus(play.num_played())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::snapshot;
    use crate::matrix::{Coord, Direction};

    fn tiles(s: &str) -> Box<[u8]> {
        s.bytes().map(|b| b & 0x3f).collect()
    }

    fn across(start: Coord, word: &str, played: &str) -> movegen::Move {
        movegen::Move {
            anchor: start,
            direction: Direction::Right,
            start,
            word: tiles(word),
            played: tiles(played),
            reversed: false,
            score: 0,
        }
    }

    #[test]
    fn plain_squares_sum_letter_values() {
        let game_config = game_config::make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let play = across(Coord::new(0, 4), "CAT", "CAT");
        assert_eq!(compute_score(&board, &game_config, &play), 5);
    }

    #[test]
    fn premiums_multiply() {
        let game_config = game_config::make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        // C on a double letter.
        let play = across(Coord::new(0, 3), "CAT", "CAT");
        assert_eq!(compute_score(&board, &game_config, &play), 8);
        // C on a triple word.
        let play = across(Coord::new(0, 0), "CAT", "CAT");
        assert_eq!(compute_score(&board, &game_config, &play), 15);
        // through the center star.
        let play = across(Coord::new(7, 7), "CATS", "CATS");
        assert_eq!(compute_score(&board, &game_config, &play), 12);
    }

    #[test]
    fn reversed_move_scores_in_reading_order() {
        let game_config = game_config::make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let play = movegen::Move {
            anchor: Coord::new(7, 7),
            direction: Direction::Left,
            start: Coord::new(7, 4),
            word: tiles("CATS"),
            played: tiles("STAC"),
            reversed: true,
            score: 0,
        };
        assert_eq!(compute_score(&board, &game_config, &play), 12);
    }

    #[test]
    fn covered_premiums_are_spent() {
        let game_config = game_config::make_common_english_game_config();
        let board =
            board::Board::from_snapshot(&game_config, &snapshot(&[(7, 7, "CAT")])).unwrap();
        // the C sits on the center star, which no longer doubles.
        let play = across(Coord::new(7, 7), "CATS", "S");
        assert_eq!(compute_score(&board, &game_config, &play), 6);
    }

    #[test]
    fn full_rack_earns_bonus() {
        let game_config = game_config::make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        // from the star, with the I on a double letter.
        let play = across(Coord::new(7, 7), "RETAINS", "RETAINS");
        assert_eq!(compute_score(&board, &game_config, &play), 8 * 2 + 50);
        let play = across(Coord::new(7, 7), "RETAIN", "RETAIN");
        assert_eq!(compute_score(&board, &game_config, &play), 7 * 2);
    }
}
