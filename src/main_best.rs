// Copyright (C) 2020-2026 Andy Kurnia.

use bestplay::{board, display, error, game_config, lexicon, solver};

pub fn main() -> error::Returns<()> {
    bestplay::init_logging();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 4 {
        println!(
            "args:
  best board.txt RACK dictionary.txt
    board.txt: 15 lines of 15 characters, _ for empty
    RACK: 1 to 7 letters, more is an error
    dictionary.txt: whitespace-separated words"
        );
        return Ok(());
    }
    let game_config = game_config::make_common_english_game_config();
    let board = board::Board::load(&game_config, &args[1])?;
    let trie = lexicon::load_trie(game_config.alphabet(), &args[3])?;
    display::print_board(&game_config, &board);

    let t0 = std::time::Instant::now();
    match solver::find_best_move(&game_config, &trie, &board, &args[2]) {
        Ok(Some(play)) => {
            println!(
                "best: {} {} ({} from {})",
                display::fmt_move(game_config.alphabet(), &board, &play),
                play.score,
                play.direction.name(),
                display::fmt_coord(play.anchor, play.is_vertical()),
            );
        }
        Ok(None) => {
            println!("no move found");
        }
        Err(err @ error::SolveError::IllegalBoard(_)) => {
            println!("{}", err);
            std::process::exit(1);
        }
        Err(err) => {
            return Err(err.into());
        }
    }
    tracing::info!(elapsed_ms = t0.elapsed().as_millis() as u64, "solved");
    Ok(())
}
