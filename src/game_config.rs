// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    full_rack_bonus: i16,
    min_word_len: i8, // >= 1
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn min_word_len(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.min_word_len,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: i8) -> i16 {
        match self {
            GameConfig::Static(x) => {
                // branchless
                x.full_rack_bonus & -((num_played >= x.rack_size) as i16)
            }
        }
    }
}

pub fn make_common_english_game_config<'a>() -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        full_rack_bonus: 50,
        min_word_len: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_rack_bonus_only_for_seven() {
        let game_config = make_common_english_game_config();
        for num_played in 0..7 {
            assert_eq!(game_config.num_played_bonus(num_played), 0);
        }
        assert_eq!(game_config.num_played_bonus(7), 50);
        assert_eq!(game_config.rack_size(), 7);
        assert_eq!(game_config.min_word_len(), 1);
    }
}
