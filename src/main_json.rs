// Copyright (C) 2020-2026 Andy Kurnia.

use bestplay::{board, display, error, game_config, lexicon, movegen, solver};

// dictionary: path to a whitespace-separated word list.
// rack: letters, case-insensitive.
// board: 15 strings of 15 characters, _ for empty.
// count: maximum number of moves returned, best first.
// threads and time_limit_ms are optional.
#[derive(serde::Deserialize)]
struct Question {
    dictionary: String,
    rack: String,
    board: Vec<String>,
    #[serde(rename = "count")]
    max_gen: usize,
    #[serde(default)]
    threads: usize,
    #[serde(default)]
    time_limit_ms: Option<u64>,
}

fn play_json(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    play: &movegen::Move,
) -> serde_json::Value {
    let alphabet = game_config.alphabet();
    // rows and cols are 0-based here.
    serde_json::json!({
        "word": alphabet.fmt_word(&play.word),
        "played": alphabet.fmt_word(&play.played),
        "score": play.score,
        "start": { "row": play.start.row, "col": play.start.col },
        "anchor": { "row": play.anchor.row, "col": play.anchor.col },
        "direction": play.direction.name(),
        "reversed": play.reversed,
        "notation": display::fmt_move(alphabet, board, play).to_string(),
    })
}

pub fn main() -> error::Returns<()> {
    bestplay::init_logging();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 2 {
        println!(
            "args:
  json question.json
    {{\"dictionary\": \"words.txt\", \"rack\": \"TACS\",
     \"board\": [15 rows of 15 chars], \"count\": 10}}"
        );
        return Ok(());
    }
    let question = serde_json::from_str::<Question>(&std::fs::read_to_string(&args[1])?)?;

    let game_config = game_config::make_common_english_game_config();
    let trie = lexicon::load_trie(game_config.alphabet(), &question.dictionary)?;
    let board = board::Board::from_snapshot(&game_config, &question.board.join("\n"))?;

    let result = solver::find_moves(
        &game_config,
        &trie,
        &board,
        &question.rack,
        &solver::SearchConfig {
            num_threads: question.threads,
            time_limit: question.time_limit_ms.map(std::time::Duration::from_millis),
        },
    );
    let answer = match result {
        Ok(solution) => serde_json::json!({
            "ok": true,
            "truncated": solution.truncated,
            "num_moves": solution.moves.len(),
            "moves": solution
                .top(question.max_gen)
                .into_iter()
                .map(|play| play_json(&game_config, &board, play))
                .collect::<Vec<_>>(),
        }),
        Err(err) => serde_json::json!({
            "ok": false,
            "error": err.to_string(),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
