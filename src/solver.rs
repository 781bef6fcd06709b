// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, game_config, move_picker, movegen, rack, trie};

#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    // 0 means one per cpu.
    pub num_threads: usize,
    pub time_limit: Option<std::time::Duration>,
}

pub struct Solution {
    // canonical order.
    pub moves: Vec<movegen::Move>,
    // the time limit cut the search short.
    pub truncated: bool,
}

impl Solution {
    #[inline(always)]
    pub fn best(&self) -> Option<&movegen::Move> {
        move_picker::pick_best(&self.moves)
    }

    #[inline(always)]
    pub fn top(&self, n: usize) -> Vec<&movegen::Move> {
        move_picker::top(&self.moves, n)
    }
}

// Every candidate move. The board is checked before anything is searched.
pub fn find_moves(
    game_config: &game_config::GameConfig,
    trie: &trie::Trie,
    board: &board::Board,
    rack: &str,
    search_config: &SearchConfig,
) -> Result<Solution, error::SolveError> {
    board.validate()?;
    let rack = rack::parse_rack(game_config.alphabet(), rack, game_config.rack_size())?;
    let arrangements = rack::arrangements(&rack);
    let deadline = search_config
        .time_limit
        .map(|time_limit| std::time::Instant::now() + time_limit);
    let outcome = movegen::gen_moves(&movegen::GenMovesParams {
        board,
        trie,
        game_config,
        arrangements: &arrangements,
        num_threads: search_config.num_threads,
        deadline,
    });
    if outcome.truncated {
        tracing::warn!(
            moves = outcome.moves.len(),
            "time limit reached, search incomplete"
        );
    }
    Ok(Solution {
        moves: outcome.moves,
        truncated: outcome.truncated,
    })
}

pub fn find_best_move(
    game_config: &game_config::GameConfig,
    trie: &trie::Trie,
    board: &board::Board,
    rack: &str,
) -> Result<Option<movegen::Move>, error::SolveError> {
    let solution = find_moves(game_config, trie, board, rack, &SearchConfig::default())?;
    Ok(solution.best().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::snapshot;
    use crate::lexicon;

    #[test]
    fn illegal_board_is_not_searched() {
        let game_config = game_config::make_common_english_game_config();
        let trie = lexicon::make_trie(game_config.alphabet(), "CAT AT").unwrap();
        let board =
            board::Board::from_snapshot(&game_config, &snapshot(&[(0, 0, "CAT")])).unwrap();
        assert_eq!(
            find_best_move(&game_config, &trie, &board, "S"),
            Err(error::SolveError::IllegalBoard(error::Illegality::CenterEmpty))
        );
    }

    #[test]
    fn bad_rack_is_reported() {
        let game_config = game_config::make_common_english_game_config();
        let trie = lexicon::make_trie(game_config.alphabet(), "CAT").unwrap();
        let board = board::Board::new(game_config.board_layout());
        assert_eq!(
            find_best_move(&game_config, &trie, &board, "C4T"),
            Err(error::SolveError::InvalidRackTile('4'))
        );
    }

    #[test]
    fn empty_rack_finds_nothing() {
        let game_config = game_config::make_common_english_game_config();
        let trie = lexicon::make_trie(game_config.alphabet(), "CAT").unwrap();
        let board = board::Board::new(game_config.board_layout());
        assert_eq!(find_best_move(&game_config, &trie, &board, ""), Ok(None));
    }

    #[test]
    fn generous_time_limit_changes_nothing() {
        let game_config = game_config::make_common_english_game_config();
        let trie = lexicon::make_trie(game_config.alphabet(), "CAT AT CATS ACT TA").unwrap();
        let board = board::Board::new(game_config.board_layout());
        let unlimited =
            find_moves(&game_config, &trie, &board, "TACS", &SearchConfig::default()).unwrap();
        let limited = find_moves(
            &game_config,
            &trie,
            &board,
            "TACS",
            &SearchConfig {
                num_threads: 2,
                time_limit: Some(std::time::Duration::from_secs(3600)),
            },
        )
        .unwrap();
        assert!(!limited.truncated);
        assert_eq!(unlimited.moves, limited.moves);
        assert_eq!(unlimited.best(), limited.best());
        assert_eq!(unlimited.top(2).len(), 2);
    }
}
