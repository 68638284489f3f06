// Copyright (C) 2020-2026 Andy Kurnia.

use std::io::Read;
use wordlane::{error, game_config, kibitzer};

// reads one question from the file named on the command line, or from stdin.
// sample:
// {
//   "layout": "standard",
//   "board": [],
//   "rack": "HIS_ERT",
//   "move": "HIS,8h",
//   "words": ["HIS", "HI"]
// }

fn main() -> error::Returns<()> {
    env_logger::init();
    let args = std::env::args().collect::<Vec<_>>();
    let data = match args.get(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let question = serde_json::from_str::<kibitzer::Question>(&data)?;
    log::debug!("question: {:?}", question);

    let game_config = game_config::make_english_game_config();
    let mut kibitzer = kibitzer::Kibitzer::new();
    let answer = kibitzer.answer(&game_config, &question)?;
    println!("{}", serde_json::to_string_pretty(&answer)?);

    Ok(())
}
