// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, fash, game_config, matrix, play_scorer, trie};
use matrix::{Coord, Direction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub anchor: Coord,
    pub direction: Direction,
    // first square of the word in reading order.
    pub start: Coord,
    // in reading order, including tiles already on the board.
    pub word: Box<[u8]>,
    // the arrangement, in the order it was placed from the anchor.
    pub played: Box<[u8]>,
    pub reversed: bool,
    pub score: i16,
}

impl Move {
    #[inline(always)]
    pub fn reading_direction(&self) -> Direction {
        if self.reversed {
            self.direction.opposite()
        } else {
            self.direction
        }
    }

    #[inline(always)]
    pub fn is_vertical(&self) -> bool {
        self.direction.is_vertical()
    }

    #[inline(always)]
    pub fn num_played(&self) -> i8 {
        self.played.len() as i8
    }
}

// An empty square to be filled, followed by the board tiles right after it.
struct Slot {
    run: Box<[u8]>,
    // last square covered by this slot and its run.
    end: Coord,
}

// Everything about one (anchor, direction) pair that does not depend on the
// arrangement being tried.
struct Lane {
    anchor: Coord,
    direction: Direction,
    // board tiles behind the anchor, listed in walk order.
    prefix: Box<[u8]>,
    // trie node after the prefix, for directions that read forward.
    prefix_node: u32,
    slots: Box<[Slot]>,
}

fn make_lane(
    board: &board::Board,
    trie: &trie::Trie,
    anchor: Coord,
    direction: Direction,
    max_slots: usize,
) -> Option<Lane> {
    let dim = board.dim();
    let backward = direction.opposite();

    // the same placement is reachable from the anchor behind this one.
    if let Some(behind) = dim.step(anchor, backward) {
        let square = board.at(behind);
        if square.is_empty() && square.is_anchor {
            return None;
        }
    }

    let mut prefix = Vec::new();
    let mut p = dim.step(anchor, backward);
    while let Some(coord) = p {
        let tile = board.tile_at(coord);
        if tile == 0 {
            break;
        }
        prefix.push(tile);
        p = dim.step(coord, backward);
    }
    prefix.reverse();

    let prefix_node = if direction.is_forward() {
        trie.seek_all(trie::Trie::ROOT, &prefix)?
    } else {
        trie::Trie::ROOT
    };

    let mut slots = Vec::with_capacity(max_slots);
    let mut p = Some(anchor);
    while slots.len() < max_slots {
        let Some(coord) = p else {
            break;
        };
        let mut run = Vec::new();
        let mut end = coord;
        p = dim.step(coord, direction);
        while let Some(next) = p {
            let tile = board.tile_at(next);
            if tile == 0 {
                break;
            }
            run.push(tile);
            end = next;
            p = dim.step(next, direction);
        }
        slots.push(Slot {
            run: run.into_boxed_slice(),
            end,
        });
    }

    Some(Lane {
        anchor,
        direction,
        prefix: prefix.into_boxed_slice(),
        prefix_node,
        slots: slots.into_boxed_slice(),
    })
}

struct Env<'a> {
    board: &'a board::Board,
    trie: &'a trie::Trie,
    game_config: &'a game_config::GameConfig<'a>,
}

// Per-worker scratch space.
#[derive(Default)]
struct WorkingBuffer {
    word_buffer: Vec<u8>,
    reversed_buffer: Vec<u8>,
}

// Places the whole arrangement along the lane and tests the result.
fn explore(
    env: &Env,
    lane: &Lane,
    arrangement: &[u8],
    working_buffer: &mut WorkingBuffer,
) -> Option<Move> {
    let num_played = arrangement.len();
    if num_played == 0 || num_played > lane.slots.len() {
        // ran off the board before using every tile.
        return None;
    }
    let forward = lane.direction.is_forward();
    let trie = env.trie;
    let word_buffer = &mut working_buffer.word_buffer;
    word_buffer.clear();
    word_buffer.extend_from_slice(&lane.prefix);
    let mut p = lane.prefix_node;
    for (slot, &tile) in lane.slots.iter().zip(arrangement) {
        word_buffer.push(tile);
        word_buffer.extend_from_slice(&slot.run);
        if forward {
            p = trie.seek(p, tile)?;
            p = trie.seek_all(p, &slot.run)?;
        }
    }
    let word_len = word_buffer.len();
    if word_len < env.game_config.min_word_len() as usize {
        return None;
    }

    // The buffer follows the walk. Walking Left or Up visits the word back to
    // front, so only its reversal can read correctly on the board.
    let (word, reversed) = if forward {
        if !trie[p].accepts() {
            return None;
        }
        (&working_buffer.word_buffer, false)
    } else {
        let reversed_buffer = &mut working_buffer.reversed_buffer;
        reversed_buffer.clear();
        reversed_buffer.extend(working_buffer.word_buffer.iter().rev());
        if !trie.contains(reversed_buffer) {
            return None;
        }
        (&working_buffer.reversed_buffer, true)
    };

    let last = lane.slots[num_played - 1].end;
    let start = if reversed {
        last
    } else {
        env.board
            .dim()
            .step_by(last, lane.direction.opposite(), (word_len - 1) as i8)?
    };

    let mut play = Move {
        anchor: lane.anchor,
        direction: lane.direction,
        start,
        word: word[..].into(),
        played: arrangement.into(),
        reversed,
        score: 0,
    };
    play.score = play_scorer::compute_score(env.board, env.game_config, &play);
    Some(play)
}

pub struct GenMovesParams<'a> {
    pub board: &'a board::Board,
    pub trie: &'a trie::Trie,
    pub game_config: &'a game_config::GameConfig<'a>,
    pub arrangements: &'a [Box<[u8]>],
    // 0 means one per cpu.
    pub num_threads: usize,
    pub deadline: Option<std::time::Instant>,
}

pub struct GenMovesOutcome {
    // canonical order, one per physical placement.
    pub moves: Vec<Move>,
    pub truncated: bool,
}

// (lane index, arrangement index, move)
type Found = (usize, usize, Move);

fn gen_moves_striped(
    env: &Env,
    lanes: &[Lane],
    arrangements: &[Box<[u8]>],
    first_lane: usize,
    lane_step: usize,
    deadline: Option<std::time::Instant>,
    truncated: &std::sync::atomic::AtomicBool,
) -> Vec<Found> {
    let mut working_buffer = WorkingBuffer::default();
    let mut found = Vec::new();
    for lane_idx in (first_lane..lanes.len()).step_by(lane_step) {
        if deadline.is_some_and(|deadline| std::time::Instant::now() >= deadline) {
            truncated.store(true, std::sync::atomic::Ordering::Relaxed);
            break;
        }
        let lane = &lanes[lane_idx];
        for (arrangement_idx, arrangement) in arrangements.iter().enumerate() {
            if let Some(play) = explore(env, lane, arrangement, &mut working_buffer) {
                found.push((lane_idx, arrangement_idx, play));
            }
        }
    }
    found
}

pub fn gen_moves(params: &GenMovesParams) -> GenMovesOutcome {
    let t0 = std::time::Instant::now();
    let env = Env {
        board: params.board,
        trie: params.trie,
        game_config: params.game_config,
    };
    let max_slots = params
        .arrangements
        .iter()
        .map(|arrangement| arrangement.len())
        .max()
        .unwrap_or(0);

    let mut lanes = Vec::new();
    for anchor in params.board.anchors() {
        for direction in Direction::ALL {
            if let Some(lane) = make_lane(params.board, params.trie, anchor, direction, max_slots)
            {
                lanes.push(lane);
            }
        }
    }

    let num_threads = match params.num_threads {
        0 => num_cpus::get(),
        n => n,
    }
    .clamp(1, lanes.len().max(1));
    let truncated = std::sync::atomic::AtomicBool::new(false);
    let mut found = if num_threads == 1 {
        gen_moves_striped(
            &env,
            &lanes,
            params.arrangements,
            0,
            1,
            params.deadline,
            &truncated,
        )
    } else {
        std::thread::scope(|s| {
            let handles = (0..num_threads)
                .map(|thread_idx| {
                    let env = &env;
                    let lanes = &lanes;
                    let truncated = &truncated;
                    s.spawn(move || {
                        gen_moves_striped(
                            env,
                            lanes,
                            params.arrangements,
                            thread_idx,
                            num_threads,
                            params.deadline,
                            truncated,
                        )
                    })
                })
                .collect::<Vec<_>>();
            let mut found = Vec::new();
            for handle in handles {
                match handle.join() {
                    Ok(v) => found.extend(v),
                    Err(err) => std::panic::resume_unwind(err),
                }
            }
            found
        })
    };

    // discovery order depends on threads, this does not.
    found.sort_unstable_by_key(|&(lane_idx, arrangement_idx, _)| (lane_idx, arrangement_idx));
    let num_candidates = found.len();
    let mut seen = fash::MyHashSet::<(Coord, bool, Box<[u8]>)>::default();
    let moves = found
        .into_iter()
        .filter_map(|(_, _, play)| {
            let key = (
                play.start,
                play.reading_direction().is_vertical(),
                play.word.clone(),
            );
            seen.insert(key).then_some(play)
        })
        .collect::<Vec<_>>();
    let truncated = truncated.into_inner();

    tracing::debug!(
        lanes = lanes.len(),
        arrangements = params.arrangements.len(),
        threads = num_threads,
        candidates = num_candidates,
        moves = moves.len(),
        truncated,
        elapsed_us = t0.elapsed().as_micros() as u64,
        "generated moves"
    );

    GenMovesOutcome { moves, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::tests::snapshot, game_config::make_common_english_game_config, rack};

    fn tiles(s: &str) -> Box<[u8]> {
        s.bytes().map(|b| b & 0x3f).collect()
    }

    fn make_trie(words: &[&str]) -> trie::Trie {
        let machine_words = words.iter().map(|w| tiles(w)).collect::<Vec<_>>();
        trie::Trie::from_machine_words(&machine_words)
    }

    fn generate(
        game_config: &game_config::GameConfig,
        board: &board::Board,
        trie: &trie::Trie,
        rack: &str,
        num_threads: usize,
    ) -> GenMovesOutcome {
        let arrangements = rack::arrangements(&tiles(rack));
        gen_moves(&GenMovesParams {
            board,
            trie,
            game_config,
            arrangements: &arrangements,
            num_threads,
            deadline: None,
        })
    }

    fn words_of(outcome: &GenMovesOutcome) -> Vec<String> {
        let alphabet = crate::alphabet::make_english_alphabet();
        outcome
            .moves
            .iter()
            .map(|play| alphabet.fmt_word(&play.word))
            .collect()
    }

    #[test]
    fn empty_board_plays_through_center() {
        let game_config = make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let trie = make_trie(&["CAT", "AT", "CATS"]);
        let outcome = generate(&game_config, &board, &trie, "TACS", 1);
        assert!(!outcome.truncated);
        let center = Coord::new(7, 7);
        for play in &outcome.moves {
            assert_eq!(play.anchor, center);
            let covered = (0..play.word.len() as i8)
                .filter_map(|i| {
                    board
                        .dim()
                        .step_by(play.start, play.reading_direction(), i)
                })
                .collect::<Vec<_>>();
            assert_eq!(covered.len(), play.word.len());
            assert!(covered.contains(&center));
            assert!(matches!(
                play.reading_direction(),
                Direction::Right | Direction::Down
            ));
        }
        let first = &outcome.moves[0];
        assert_eq!(&*first.word, &*tiles("AT"));
        assert_eq!(first.direction, Direction::Right);
        assert_eq!(first.start, center);
        assert!(words_of(&outcome).contains(&"CATS".to_string()));
    }

    #[test]
    fn left_and_up_find_reversed_words() {
        let game_config = make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let trie = make_trie(&["CATS"]);
        let outcome = generate(&game_config, &board, &trie, "TACS", 1);
        let left = outcome
            .moves
            .iter()
            .find(|play| play.direction == Direction::Left)
            .unwrap();
        assert!(left.reversed);
        assert_eq!(&*left.played, &*tiles("STAC"));
        assert_eq!(left.start, Coord::new(7, 4));
        assert_eq!(left.reading_direction(), Direction::Right);
        let up = outcome
            .moves
            .iter()
            .find(|play| play.direction == Direction::Up)
            .unwrap();
        assert!(up.reversed);
        assert_eq!(up.start, Coord::new(4, 7));
        assert_eq!(up.reading_direction(), Direction::Down);
    }

    #[test]
    fn prefix_letters_join_the_word() {
        let game_config = make_common_english_game_config();
        let board = board::Board::from_snapshot(&game_config, &snapshot(&[(7, 6, "CAT")])).unwrap();
        let trie = make_trie(&["CAT", "CATS", "SCAT"]);
        let outcome = generate(&game_config, &board, &trie, "S", 1);
        let words = words_of(&outcome);
        assert_eq!(words.len(), 2, "{:?}", words);
        let cats = &outcome.moves[words.iter().position(|w| w == "CATS").unwrap()];
        assert_eq!(cats.start, Coord::new(7, 6));
        assert_eq!(cats.anchor, Coord::new(7, 9));
        assert_eq!(cats.direction, Direction::Right);
        assert!(!cats.reversed);
        let scat = &outcome.moves[words.iter().position(|w| w == "SCAT").unwrap()];
        assert_eq!(scat.start, Coord::new(7, 5));
        assert_eq!(scat.anchor, Coord::new(7, 5));
        // also found walking Left from the same anchor, but Right comes first.
        assert_eq!(scat.direction, Direction::Right);
        assert!(!scat.reversed);
    }

    #[test]
    fn tiles_ahead_are_absorbed() {
        let game_config = make_common_english_game_config();
        // the center is empty, so this board would be rejected before a real
        // search. movegen itself only looks at occupancy.
        let board =
            board::Board::from_snapshot(&game_config, &snapshot(&[(7, 6, "C"), (7, 8, "T")]))
                .unwrap();
        let trie = make_trie(&["CAT"]);
        let outcome = generate(&game_config, &board, &trie, "A", 1);
        assert_eq!(words_of(&outcome), ["CAT"]);
        assert_eq!(outcome.moves[0].start, Coord::new(7, 6));
    }

    #[test]
    fn whole_arrangement_must_be_used() {
        let game_config = make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let trie = make_trie(&["AT"]);
        let outcome = generate(&game_config, &board, &trie, "ATZ", 1);
        for play in &outcome.moves {
            assert_eq!(play.played.len(), 2);
            assert!(!play.played.contains(&26));
        }
        assert!(!outcome.moves.is_empty());
    }

    #[test]
    fn board_edge_ends_the_walk() {
        let game_config = make_common_english_game_config();
        let board =
            board::Board::from_snapshot(&game_config, &snapshot(&[(7, 7, "A"), (7, 13, "XY")]))
                .unwrap();
        let trie = make_trie(&["XYZ", "ZXY", "ZXYS", "XY"]);
        let outcome = generate(&game_config, &board, &trie, "SZ", 1);
        let words = words_of(&outcome);
        assert_eq!(words, ["ZXY"]);
        assert_eq!(outcome.moves[0].start, Coord::new(7, 12));
    }

    #[test]
    fn single_letter_words_are_moves() {
        let game_config = make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let trie = make_trie(&["A"]);
        let outcome = generate(&game_config, &board, &trie, "A", 1);
        let first = &outcome.moves[0];
        assert_eq!(&*first.word, &*tiles("A"));
        assert_eq!(first.direction, Direction::Right);
        assert_eq!(first.start, Coord::new(7, 7));
        // the center doubles the word.
        assert_eq!(first.score, 2);
    }

    #[test]
    fn lane_behind_an_empty_anchor_is_skipped() {
        let game_config = make_common_english_game_config();
        let board = board::Board::from_snapshot(&game_config, &snapshot(&[(7, 6, "CAT")])).unwrap();
        let trie = make_trie(&["ZOO"]);
        let outcome = generate(&game_config, &board, &trie, "ZOO", 1);
        // (6, 6) is an empty anchor, so walking Right from (6, 7) is left to it.
        assert!(
            !outcome
                .moves
                .iter()
                .any(|play| play.anchor == Coord::new(6, 7) && play.direction == Direction::Right)
        );
        let across_at = |start: Coord| {
            outcome
                .moves
                .iter()
                .filter(|play| play.start == start && !play.reading_direction().is_vertical())
                .count()
        };
        assert_eq!(across_at(Coord::new(6, 7)), 0);
        assert_eq!(across_at(Coord::new(6, 6)), 1);
        let zoo = outcome
            .moves
            .iter()
            .find(|play| play.start == Coord::new(6, 6) && !play.reading_direction().is_vertical())
            .unwrap();
        assert_eq!(zoo.anchor, Coord::new(6, 6));
        assert_eq!(zoo.direction, Direction::Right);
    }

    #[test]
    fn same_placement_is_reported_once() {
        let game_config = make_common_english_game_config();
        let board = board::Board::from_snapshot(&game_config, &snapshot(&[(7, 6, "AT")])).unwrap();
        let trie = make_trie(&["ATS", "SAT"]);
        let outcome = generate(&game_config, &board, &trie, "S", 1);
        let mut keys = outcome
            .moves
            .iter()
            .map(|play| (play.start, play.reading_direction(), play.word.clone()))
            .collect::<Vec<_>>();
        let num_moves = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), num_moves);
        assert_eq!(num_moves, 2);
    }

    #[test]
    fn thread_count_does_not_change_results() {
        let game_config = make_common_english_game_config();
        let board = board::Board::from_snapshot(
            &game_config,
            &snapshot(&[(7, 4, "QUIET"), (3, -9, "DOTE")]),
        )
        .unwrap();
        let trie = make_trie(&[
            "QUIET", "QUIETS", "DOTE", "DOTES", "TE", "ET", "TEST", "SET", "SEAT", "EAST",
            "EATS", "TEAS", "ETA", "ATE", "EAT", "TEA", "SAT", "AT", "TA", "AS", "QUIETEST",
        ]);
        let single = generate(&game_config, &board, &trie, "SEATEST", 1);
        for num_threads in [2, 3, 8] {
            let multi = generate(&game_config, &board, &trie, "SEATEST", num_threads);
            assert_eq!(single.moves, multi.moves);
        }
        assert!(!single.moves.is_empty());
    }

    #[test]
    fn expired_deadline_truncates() {
        let game_config = make_common_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let trie = make_trie(&["CAT"]);
        let arrangements = rack::arrangements(&tiles("CAT"));
        let outcome = gen_moves(&GenMovesParams {
            board: &board,
            trie: &trie,
            game_config: &game_config,
            arrangements: &arrangements,
            num_threads: 1,
            deadline: Some(std::time::Instant::now()),
        });
        assert!(outcome.truncated);
        assert!(outcome.moves.is_empty());
    }
}
