// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, error, game_config, matrix, movegen};
use matrix::{Coord, Dim};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square {
    pub tile: u8, // 0 = empty
    pub bonus: board_layout::Bonus,
    pub is_anchor: bool,
    pub bonus_consumed: bool,
}

impl Square {
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tile == 0
    }
}

#[derive(Clone)]
pub struct Board {
    dim: Dim,
    star: Coord,
    squares: Box<[Square]>,
}

impl Board {
    pub fn new(board_layout: &board_layout::BoardLayout) -> Self {
        let dim = board_layout.dim();
        let mut board = Self {
            dim,
            star: board_layout.star(),
            squares: board_layout
                .bonuses()
                .iter()
                .map(|&bonus| Square {
                    bonus,
                    ..Square::default()
                })
                .collect(),
        };
        board.refresh();
        board
    }

    // Exactly dim.rows lines of dim.cols characters, '_' for empty.
    pub fn from_snapshot(game_config: &game_config::GameConfig, text: &str) -> error::Returns<Self> {
        let alphabet = game_config.alphabet();
        let mut board = Self::new(game_config.board_layout());
        let dim = board.dim;
        let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));
        for row in 0..dim.rows {
            let line = match lines.next() {
                Some(line) => line,
                None => {
                    return_error!(format!("board: unexpected end of board at row {}", row));
                }
            };
            let num_chars = line.chars().count();
            if num_chars != dim.cols as usize {
                return_error!(format!(
                    "board row {} (0-based): need {} cols, found {} cols",
                    row, dim.cols, num_chars
                ));
            }
            for (col, c) in (0..).zip(line.chars()) {
                let tile = if c == '_' {
                    0
                } else {
                    match alphabet.tile_of(c) {
                        Some(tile) => tile,
                        None => {
                            return_error!(format!(
                                "board row {} col {} (0-based): invalid tile {:?}",
                                row, col, c
                            ));
                        }
                    }
                };
                board.squares[dim.at_row_col(row, col)].tile = tile;
            }
        }
        if lines.any(|line| !line.trim().is_empty()) {
            return_error!(format!("board: more than {} rows", dim.rows));
        }
        board.refresh();
        Ok(board)
    }

    pub fn load(game_config: &game_config::GameConfig, filename: &str) -> error::Returns<Self> {
        match std::fs::read_to_string(filename) {
            Ok(text) => Self::from_snapshot(game_config, &text),
            Err(err) => {
                return_error!(format!("cannot read board {}: {}", filename, err));
            }
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star(&self) -> Coord {
        self.star
    }

    #[inline(always)]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    // caller guarantees coord is on the board.
    #[inline(always)]
    pub fn at(&self, coord: Coord) -> &Square {
        &self.squares[self.dim.at(coord)]
    }

    #[inline(always)]
    pub fn tile_at(&self, coord: Coord) -> u8 {
        self.at(coord).tile
    }

    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Square::is_empty)
    }

    pub fn num_tiles(&self) -> usize {
        self.squares.iter().filter(|sq| !sq.is_empty()).count()
    }

    // Recomputes anchor and bonus-consumed flags from occupancy.
    pub fn refresh(&mut self) {
        let mut is_anchor = vec![false; self.squares.len()];
        for coord in self.anchors() {
            is_anchor[self.dim.at(coord)] = true;
        }
        for (sq, is_anchor) in self.squares.iter_mut().zip(is_anchor) {
            sq.is_anchor = is_anchor;
            sq.bonus_consumed = !sq.is_empty();
        }
    }

    // Row-major. Empty squares next to a tile, or the star on an empty board.
    pub fn anchors(&self) -> Vec<Coord> {
        if self.is_empty() {
            return vec![self.star];
        }
        let dim = self.dim;
        (0..self.squares.len())
            .filter(|&idx| {
                self.squares[idx].is_empty()
                    && dim
                        .neighbors(dim.coord_of(idx))
                        .any(|neighbor| !self.at(neighbor).is_empty())
            })
            .map(|idx| dim.coord_of(idx))
            .collect()
    }

    pub fn is_connected(&self) -> bool {
        let first = match self.squares.iter().position(|sq| !sq.is_empty()) {
            Some(idx) => idx,
            None => return true,
        };
        let dim = self.dim;
        let mut seen = vec![false; self.squares.len()];
        let mut stack = vec![first];
        seen[first] = true;
        let mut num_reached = 0;
        while let Some(idx) = stack.pop() {
            num_reached += 1;
            for neighbor in dim.neighbors(dim.coord_of(idx)) {
                let neighbor_idx = dim.at(neighbor);
                if !seen[neighbor_idx] && !self.squares[neighbor_idx].is_empty() {
                    seen[neighbor_idx] = true;
                    stack.push(neighbor_idx);
                }
            }
        }
        num_reached == self.num_tiles()
    }

    pub fn validate(&self) -> Result<(), error::Illegality> {
        if self.is_empty() {
            Ok(())
        } else if self.at(self.star).is_empty() {
            Err(error::Illegality::CenterEmpty)
        } else if !self.is_connected() {
            Err(error::Illegality::Disconnected)
        } else {
            Ok(())
        }
    }

    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    // Places the word's new tiles. Squares already holding a tile are kept.
    pub fn apply(&mut self, play: &movegen::Move) {
        let direction = play.reading_direction();
        let mut coord = play.start;
        for (i, &tile) in play.word.iter().enumerate() {
            if i > 0 {
                coord = match self.dim.step(coord, direction) {
                    Some(next) => next,
                    None => break,
                };
            }
            let idx = self.dim.at(coord);
            if self.squares[idx].is_empty() {
                self.squares[idx].tile = tile;
            }
        }
        self.refresh();
    }
}
