// Copyright (C) 2020-2026 Andy Kurnia.

use bestplay::{board, display, error, export, game_config, lexicon, return_error, solver, trie};

const HELP: &str = "commands:
  dict FILE        load a word list
  board FILE       load a board snapshot
  board clear      start from an empty board
  rack LETTERS     set the rack
  threads N        worker threads (0 = one per cpu)
  limit MS         search time limit (0 = none)
  show             print board and rack
  best             find the best move
  top [N]          list the N best moves (default 10)
  play [N]         play the Nth move of the last listing (default 1)
  csv FILE         write every move of the last search
  source FILE      run commands from a file
  help, exit";

fn nth_arg(strings: &[String], i: usize) -> error::Returns<&str> {
    match strings.get(i) {
        Some(s) => Ok(s.as_str()),
        None => Err(error::new("need another arg".into()).into()),
    }
}

struct Shell<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    trie: Option<trie::Trie>,
    board: board::Board,
    rack: String,
    search_config: solver::SearchConfig,
    // moves from the last search, valid until the board or rack changes.
    last: Option<solver::Solution>,
}

impl<'a> Shell<'a> {
    fn new(game_config: &'a game_config::GameConfig<'a>) -> Self {
        Self {
            game_config,
            trie: None,
            board: board::Board::new(game_config.board_layout()),
            rack: String::new(),
            search_config: solver::SearchConfig::default(),
            last: None,
        }
    }

    // Runs the search unless the last result still applies.
    fn search(&mut self) -> error::Returns<(&solver::Solution, &board::Board)> {
        let solution = match self.last.take() {
            Some(solution) => solution,
            None => {
                let Some(trie) = &self.trie else {
                    return_error!("no dictionary, use dict FILE".into());
                };
                let solution = solver::find_moves(
                    self.game_config,
                    trie,
                    &self.board,
                    &self.rack,
                    &self.search_config,
                )?;
                if solution.truncated {
                    println!("time limit reached, results are partial");
                }
                solution
            }
        };
        let solution: &solver::Solution = self.last.insert(solution);
        Ok((solution, &self.board))
    }

    fn show(&self) {
        display::print_board(self.game_config, &self.board);
        println!("rack: {}", self.rack);
    }

    fn list(&mut self, n: usize) -> error::Returns<()> {
        let game_config = self.game_config;
        let (solution, board) = self.search()?;
        if solution.moves.is_empty() {
            println!("no move found");
        }
        for (i, play) in solution.top(n).into_iter().enumerate() {
            println!(
                "{:3}: {:4} {}",
                i + 1,
                play.score,
                display::fmt_move(game_config.alphabet(), board, play)
            );
        }
        Ok(())
    }

    // Returns false to exit.
    fn execute(&mut self, strings: &[String]) -> error::Returns<bool> {
        let arg = |i| nth_arg(strings, i);
        match strings[0].as_str() {
            "help" => println!("{}", HELP),
            "exit" => return Ok(false),
            "dict" => {
                self.trie = Some(lexicon::load_trie(self.game_config.alphabet(), arg(1)?)?);
                self.last = None;
            }
            "board" => {
                self.board = match arg(1)? {
                    "clear" => board::Board::new(self.game_config.board_layout()),
                    filename => board::Board::load(self.game_config, filename)?,
                };
                self.last = None;
                if let Err(err) = self.board.validate() {
                    println!("warning: {}", err);
                }
            }
            "rack" => {
                self.rack = arg(1)?.to_ascii_uppercase();
                self.last = None;
            }
            "threads" => {
                self.search_config.num_threads = arg(1)?.parse()?;
            }
            "limit" => {
                self.search_config.time_limit = match arg(1)?.parse::<u64>()? {
                    0 => None,
                    ms => Some(std::time::Duration::from_millis(ms)),
                };
                self.last = None;
            }
            "show" => self.show(),
            "best" => {
                self.list(1)?;
            }
            "top" => {
                let n = match strings.get(1) {
                    Some(s) => s.parse()?,
                    None => 10,
                };
                self.list(n)?;
            }
            "play" => {
                let n = match strings.get(1) {
                    Some(s) => s.parse::<usize>()?,
                    None => 1,
                };
                let play = match self.search()?.0.top(n).get(n.wrapping_sub(1)) {
                    Some(&play) => play.clone(),
                    None => {
                        return_error!(format!("no move {}", n));
                    }
                };
                println!(
                    "playing {}",
                    display::fmt_move(self.game_config.alphabet(), &self.board, &play)
                );
                self.board.apply(&play);
                self.last = None;
                self.show();
            }
            "csv" => {
                let filename = arg(1)?;
                let game_config = self.game_config;
                let (solution, board) = self.search()?;
                let moves = solution.moves.iter().collect::<Vec<_>>();
                export::write_moves_csv(
                    game_config,
                    board,
                    &moves,
                    std::fs::File::create(filename)?,
                )?;
                println!("wrote {} moves to {}", moves.len(), filename);
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(true)
    }
}

pub fn main() -> error::Returns<()> {
    bestplay::init_logging();
    let game_config = game_config::make_common_english_game_config();
    let mut shell = Shell::new(&game_config);
    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    for filename in std::env::args().skip(1) {
        cmd_stack.push((format!("source {}", shell_words::quote(&filename)), None));
    }
    cmd_stack.reverse();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            let strings = match shell_words::split(&line) {
                Ok(strings) => strings,
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                    continue;
                }
            };
            if strings.is_empty() {
                continue;
            }
            if strings[0] == "source" {
                match strings.get(1).map(std::fs::read_to_string) {
                    Some(Ok(whole_file)) => {
                        let v = cmd_stack.len();
                        for (line_num, line) in whole_file.lines().enumerate() {
                            cmd_stack.push((
                                line.to_string(),
                                Some((strings[1].clone(), line_num + 1)),
                            ));
                        }
                        cmd_stack[v..].reverse();
                    }
                    Some(Err(err)) => println!("cannot open file: {}", err),
                    None => println!("need another arg"),
                }
                continue;
            }
            match shell.execute(&strings) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => println!("error: {}", err),
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
