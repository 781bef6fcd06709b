// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy)]
pub struct Premium {
    pub word_multiplier: i8,
    pub tile_multiplier: i8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Bonus {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Bonus {
    #[inline(always)]
    pub fn premium(self) -> Premium {
        match self {
            Bonus::None => Premium {
                word_multiplier: 1,
                tile_multiplier: 1,
            },
            Bonus::DoubleLetter => Premium {
                word_multiplier: 1,
                tile_multiplier: 2,
            },
            Bonus::TripleLetter => Premium {
                word_multiplier: 1,
                tile_multiplier: 3,
            },
            Bonus::DoubleWord => Premium {
                word_multiplier: 2,
                tile_multiplier: 1,
            },
            Bonus::TripleWord => Premium {
                word_multiplier: 3,
                tile_multiplier: 1,
            },
        }
    }
}

pub struct StaticBoardLayout {
    bonuses: Box<[Bonus]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout {
    Static(StaticBoardLayout),
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn star(&self) -> matrix::Coord {
        matrix::Coord::new(self.star_row(), self.star_col())
    }

    #[inline(always)]
    pub fn bonuses(&self) -> &[Bonus] {
        match self {
            BoardLayout::Static(x) => &x.bonuses,
        }
    }

    #[inline(always)]
    pub fn bonus_at(&self, row: i8, col: i8) -> Bonus {
        self.bonuses()[self.dim().at_row_col(row, col)]
    }
}

pub fn make_standard_board_layout() -> BoardLayout {
    use Bonus::None as FVS;
    use Bonus::{DoubleLetter as DLS, DoubleWord as DWS, TripleLetter as TLS, TripleWord as TWS};
    BoardLayout::Static(StaticBoardLayout {
        bonuses: Box::new([
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
        ]),
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    })
}
