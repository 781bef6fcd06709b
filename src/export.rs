// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, display, error, game_config, movegen};

// One row per move, in the given order. Rows and cols are 0-based.
pub fn write_moves_csv<W: std::io::Write>(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    moves: &[&movegen::Move],
    writer: W,
) -> error::Returns<()> {
    let alphabet = game_config.alphabet();
    let mut csv_out = csv::Writer::from_writer(writer);
    csv_out.serialize((
        "word",
        "played",
        "score",
        "start_row",
        "start_col",
        "anchor_row",
        "anchor_col",
        "direction",
        "reversed",
        "notation",
    ))?;
    for play in moves {
        csv_out.serialize((
            alphabet.fmt_word(&play.word),
            alphabet.fmt_word(&play.played),
            play.score,
            play.start.row,
            play.start.col,
            play.anchor.row,
            play.anchor.col,
            play.direction.name(),
            play.reversed,
            display::fmt_move(alphabet, board, play).to_string(),
        ))?;
    }
    csv_out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexicon, solver};

    #[test]
    fn header_then_one_row_per_move() {
        let game_config = game_config::make_common_english_game_config();
        let trie = lexicon::make_trie(game_config.alphabet(), "CAT AT CATS").unwrap();
        let board = board::Board::new(game_config.board_layout());
        let solution = solver::find_moves(
            &game_config,
            &trie,
            &board,
            "TACS",
            &solver::SearchConfig::default(),
        )
        .unwrap();
        let mut out = Vec::new();
        write_moves_csv(&game_config, &board, &solution.top(usize::MAX), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), solution.moves.len() + 1);
        assert!(lines[0].starts_with("word,played,score,"));
        assert_eq!(lines[1], "CATS,CATS,12,7,7,7,7,right,false,8H CATS");
    }
}
