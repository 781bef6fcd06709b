// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, board_layout, game_config, matrix, movegen};

#[inline(always)]
pub fn empty_label(board: &board::Board, coord: matrix::Coord) -> &'static str {
    if coord == board.star() {
        return "*";
    }
    match board.at(coord).bonus {
        board_layout::Bonus::TripleWord => "=",
        board_layout::Bonus::DoubleWord => "-",
        board_layout::Bonus::TripleLetter => "\"",
        board_layout::Bonus::DoubleLetter => "\'",
        board_layout::Bonus::None => " ",
    }
}

#[inline(always)]
pub fn board_label<'a>(
    alphabet: &alphabet::Alphabet<'a>,
    board: &board::Board,
    coord: matrix::Coord,
) -> &'a str {
    alphabet
        .from_board(board.tile_at(coord))
        .unwrap_or_else(|| empty_label(board, coord))
}

#[inline(always)]
fn col_label(col: i8) -> char {
    ((col as u8) + 0x41) as char
}

fn write_col_labels(s: &mut String, dim: matrix::Dim) {
    s.push_str("  ");
    for c in 0..dim.cols {
        s.push(' ');
        s.push(col_label(c));
    }
    s.push('\n');
}

fn write_border(s: &mut String, dim: matrix::Dim) {
    s.push_str("  +");
    for _ in 1..dim.cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

pub fn render_board(game_config: &game_config::GameConfig, board: &board::Board) -> String {
    let alphabet = game_config.alphabet();
    let dim = board.dim();
    let mut s = String::new();
    write_col_labels(&mut s, dim);
    write_border(&mut s, dim);
    for r in 0..dim.rows {
        s.push_str(&format!("{:2}|", r + 1));
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push_str(board_label(alphabet, board, matrix::Coord::new(r, c)));
        }
        s.push_str(&format!("|{}\n", r + 1));
    }
    write_border(&mut s, dim);
    write_col_labels(&mut s, dim);
    s
}

pub fn print_board(game_config: &game_config::GameConfig, board: &board::Board) {
    print!("{}", render_board(game_config, board));
}

// 8H for across (row first), H8 for down (column first).
pub fn fmt_coord(coord: matrix::Coord, vertical: bool) -> String {
    if vertical {
        format!("{}{}", col_label(coord.col), coord.row + 1)
    } else {
        format!("{}{}", coord.row + 1, col_label(coord.col))
    }
}

pub struct WriteableMove<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board: &'a board::Board,
    play: &'a movegen::Move,
}

// Tiles already on the board are parenthesized: 8G (CAT)S.
impl std::fmt::Display for WriteableMove<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let play = self.play;
        let direction = play.reading_direction();
        let dim = self.board.dim();
        write!(f, "{} ", fmt_coord(play.start, direction.is_vertical()))?;
        let mut inside = false;
        let mut p = Some(play.start);
        for &tile in play.word.iter() {
            let Some(coord) = p else {
                break;
            };
            let existing = !self.board.at(coord).is_empty();
            if existing != inside {
                write!(f, "{}", if existing { "(" } else { ")" })?;
                inside = existing;
            }
            write!(f, "{}", self.alphabet.from_board(tile).unwrap_or("?"))?;
            p = dim.step(coord, direction);
        }
        if inside {
            write!(f, ")")?;
        }
        Ok(())
    }
}

// board must be the one the move was generated on.
pub fn fmt_move<'a>(
    alphabet: &'a alphabet::Alphabet<'a>,
    board: &'a board::Board,
    play: &'a movegen::Move,
) -> WriteableMove<'a> {
    WriteableMove {
        alphabet,
        board,
        play,
    }
}
