// Copyright (C) 2020-2026 Andy Kurnia.

use bestplay::{alphabet, board, display, error, game_config, lexicon, solver};
use rand::prelude::*;

// Tiles still unseen, one entry per physical tile.
fn make_bag(alphabet: &alphabet::Alphabet, board: &board::Board) -> Vec<u8> {
    let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
    for tile in 1..alphabet.len() {
        let on_board = board
            .squares()
            .iter()
            .filter(|sq| sq.tile == tile)
            .count();
        for _ in on_board..alphabet.freq(tile) as usize {
            bag.push(tile);
        }
    }
    bag
}

pub fn main() -> error::Returns<()> {
    bestplay::init_logging();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 3 || args.len() > 5 {
        println!(
            "args:
  auto dictionary.txt board.txt [count] [seed]
    solves count (default 100) random racks drawn from the unseen tiles"
        );
        return Ok(());
    }
    let game_config = game_config::make_common_english_game_config();
    let alphabet = game_config.alphabet();
    let trie = lexicon::load_trie(alphabet, &args[1])?;
    let board = board::Board::load(&game_config, &args[2])?;
    let count = match args.get(3) {
        Some(s) => s.parse::<u32>()?,
        None => 100,
    };
    let mut rng = match args.get(4) {
        Some(s) => rand_chacha::ChaCha20Rng::seed_from_u64(s.parse::<u64>()?),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    display::print_board(&game_config, &board);

    let mut bag = make_bag(alphabet, &board);
    let rack_size = game_config.rack_size() as usize;
    let search_config = solver::SearchConfig::default();
    let mut total_moves = 0usize;
    let mut total_score = 0i64;
    let mut num_stuck = 0u32;
    let mut slowest = std::time::Duration::ZERO;
    let t0 = std::time::Instant::now();
    for i in 0..count {
        bag.shuffle(&mut rng);
        let rack = alphabet.fmt_word(&bag[..rack_size.min(bag.len())]);
        let t1 = std::time::Instant::now();
        let solution = solver::find_moves(&game_config, &trie, &board, &rack, &search_config)?;
        let elapsed = t1.elapsed();
        slowest = slowest.max(elapsed);
        total_moves += solution.moves.len();
        match solution.best() {
            Some(play) => {
                total_score += play.score as i64;
                println!(
                    "{:4} {:7} {:5} moves, best {} {} ({:?})",
                    i + 1,
                    rack,
                    solution.moves.len(),
                    display::fmt_move(alphabet, &board, play),
                    play.score,
                    elapsed,
                );
            }
            None => {
                num_stuck += 1;
                println!("{:4} {:7} no move ({:?})", i + 1, rack, elapsed);
            }
        }
    }
    let elapsed = t0.elapsed();
    println!(
        "{} racks in {:?}, slowest {:?}, {} moves, average best score {:.2}, {} without a move",
        count,
        elapsed,
        slowest,
        total_moves,
        total_score as f64 / (count.max(1) as f64),
        num_stuck,
    );
    Ok(())
}
