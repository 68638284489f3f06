// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use wordlane::{
    board_layout, dictionary, display, error, game_config, game_state, play, return_error,
    validator,
};

const HELP: &str = "\
commands:
  WORD,f8         play WORD down from f8 (column first)
  WORD,8f         play WORD across from 8f (row first)
  play <move>     same as above
  pass  (or ,)    pass the turn
  board           show the board
  rack            show your rack
  source <file>   run commands from a file
  exit            quit without finishing
uppercase letters use normal tiles, lowercase letters use a wildcard.";

struct Options {
    board_file: Option<String>,
    word_list: String,
    open_game: bool,
    seed: Option<u64>,
}

fn parse_args<II: IntoIterator<Item = String>>(args: II) -> error::Returns<Options> {
    let mut positional = Vec::new();
    let mut open_game = false;
    let mut seed = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--open" => open_game = true,
            "--seed" => {
                let n = args
                    .next()
                    .ok_or_else(|| error::new("--seed needs a number".into()))?;
                seed = Some(n.parse::<u64>()?);
            }
            _ if arg.starts_with("--") => {
                return_error!(format!("unknown option {:?}", arg));
            }
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();
    let (board_file, word_list) = match (positional.next(), positional.next(), positional.next()) {
        (None, None, None) => (None, "wordlist.txt".to_string()),
        (Some(words), None, None) => (None, words),
        (Some(board), Some(words), None) => (Some(board), words),
        _ => {
            return_error!("args: [board_file] [word_list] [--open] [--seed N]".into());
        }
    };
    Ok(Options {
        board_file,
        word_list,
        open_game,
        seed,
    })
}

fn print_status(game_state: &game_state::GameState<'_>) {
    let alphabet = game_state.game_config.alphabet();
    println!();
    for (i, player) in game_state.players.iter().enumerate() {
        print!("{}player {}: {}", if i > 0 { "    " } else { "" }, i + 1, player.score);
    }
    println!("    bag: {}", game_state.bag.len());
    display::print_board(&game_state.grid);
    if game_state.game_config.open_game() {
        for (i, player) in game_state.players.iter().enumerate() {
            if i != game_state.turn as usize {
                println!("player {}'s tiles: {}", i + 1, alphabet.fmt_rack(&player.rack));
            }
        }
    }
    println!(
        "player {} to move, tiles: {}",
        game_state.turn + 1,
        alphabet.fmt_rack(&game_state.current_player().rack)
    );
}

// Returns true when the turn passed to the other player.
fn do_play(
    game_state: &mut game_state::GameState<'_>,
    words: &dictionary::WordList,
    move_text: &str,
) -> error::Returns<bool> {
    let play = match play::Play::parse(move_text, &game_state.grid.dim()) {
        Ok(play) => play,
        Err(err) => {
            println!("{}, help for help", err);
            return Ok(false);
        }
    };
    let validated = match game_state.validate(&play, words) {
        Ok(validated) => validated,
        Err(err) => {
            println!("illegal move: {}", err);
            return Ok(false);
        }
    };
    let score = game_state.commit(&validated)?;
    if validated.is_pass() {
        println!("player {} passes", game_state.turn + 1);
    } else {
        println!(
            "player {} plays {} for {} points",
            game_state.turn + 1,
            validated.main_word,
            score.total
        );
    }
    Ok(true)
}

fn print_final_standing(standing: &game_state::FinalStanding) {
    println!();
    println!("game over");
    for (i, penalty) in standing.penalties.iter().enumerate() {
        println!("player {} penalty: -{}", i + 1, penalty);
    }
    for (i, score) in standing.scores.iter().enumerate() {
        println!("player {}: {}", i + 1, score);
    }
    match standing.winner {
        Some(i) => println!("player {} wins!", i + 1),
        None => println!("draw!"),
    }
}

fn main() -> error::Returns<()> {
    env_logger::init();
    let options = parse_args(std::env::args().skip(1))?;
    let layout = match &options.board_file {
        Some(path) => board_layout::BoardLayout::from_file(path)?,
        None => board_layout::make_standard_board_layout(),
    };
    let words = dictionary::WordList::from_file(&options.word_list)?;
    let game_config = if options.open_game {
        game_config::make_open_english_game_config()
    } else {
        game_config::make_english_game_config()
    };
    let mut rng: Box<dyn RngCore> = match options.seed {
        Some(seed) => Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(seed)),
        None => Box::new(rand_chacha::ChaCha20Rng::from_os_rng()),
    };
    let mut game_state = game_state::GameState::new(&game_config, layout, &mut *rng);

    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    print_status(&game_state);
    while !game_state.is_game_over() {
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
            let turn_passed = match strings[0].as_str() {
                "help" => {
                    println!("{}", HELP);
                    false
                }
                "exit" => {
                    return Ok(());
                }
                "board" => {
                    display::print_board(&game_state.grid);
                    false
                }
                "rack" => {
                    println!(
                        "{}",
                        game_state
                            .game_config
                            .alphabet()
                            .fmt_rack(&game_state.current_player().rack)
                    );
                    false
                }
                "pass" => {
                    game_state.commit(&validator::ValidatedMove::pass())?;
                    println!("player {} passes", game_state.turn + 1);
                    true
                }
                "play" => {
                    if strings.len() > 1 {
                        do_play(&mut game_state, &words, &strings[1..].join(""))?
                    } else {
                        println!("need another arg");
                        false
                    }
                }
                "source" => {
                    if strings.len() > 1 {
                        match std::fs::read_to_string(&strings[1]) {
                            Ok(whole_file) => {
                                let v = cmd_stack.len();
                                for (line_num, line) in whole_file.lines().enumerate() {
                                    cmd_stack.push((
                                        line.to_string(),
                                        Some((strings[1].clone(), line_num + 1)),
                                    ));
                                }
                                cmd_stack[v..].reverse();
                            }
                            Err(err) => {
                                println!("cannot open file: {:?}", err);
                            }
                        }
                    } else {
                        println!("need another arg");
                    }
                    false
                }
                _ => do_play(&mut game_state, &words, line.trim())?,
            };
            if turn_passed && !game_state.is_game_over() {
                game_state.next_turn();
                print_status(&game_state);
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    return Ok(());
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    return Ok(());
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    return Ok(());
                }
            }
        }
    }

    print_status(&game_state);
    let standing = game_state.finish();
    print_final_standing(&standing);

    Ok(())
}
