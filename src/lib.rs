// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board_layout;
pub mod dictionary;
pub mod display;
pub mod fash;
pub mod game_config;
pub mod game_state;
pub mod grid;
pub mod kibitzer;
pub mod line;
pub mod matrix;
pub mod planner;
pub mod play;
pub mod play_scorer;
pub mod rack;
pub mod square;
pub mod tile;
pub mod validator;
