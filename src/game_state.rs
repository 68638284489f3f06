// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    bag, board_layout, dictionary::Dictionary, error, game_config, grid, play::Play,
    play_scorer, rack::Rack, tile::Tile, validator,
};
use rand::prelude::*;

fn use_tiles<'t, II: IntoIterator<Item = &'t Tile>>(
    rack: &mut Rack,
    tiles_iter: II,
) -> error::Returns<()> {
    for tile in tiles_iter {
        let taken = match tile {
            Tile::Wildcard { .. } => rack.take_wildcard(),
            Tile::Normal { letter, .. } => rack.take_letter(*letter),
        };
        if taken.is_none() {
            return_error!(format!("tile {} is not on the rack", tile.display_char()));
        }
    }
    Ok(())
}

/// Commits a validated move: puts its placements on the grid and removes the
/// matching tiles from the rack. Either everything changes or nothing does.
/// Failure means the move was validated against a different grid or rack.
pub fn apply(
    grid: &mut grid::Grid,
    rack: &mut Rack,
    validated: &validator::ValidatedMove,
) -> error::Returns<()> {
    let mut new_rack = rack.clone();
    use_tiles(&mut new_rack, validated.placements.iter().map(|p| &p.tile))?;
    for (i, p) in validated.placements.iter().enumerate() {
        if !grid.in_bounds(p.square.row, p.square.col) {
            return_error!(format!("square {} is off the board", p.square));
        }
        if !grid.is_empty_at(p.square) {
            return_error!(format!("square {} is already occupied", p.square));
        }
        if validated.placements[..i].iter().any(|q| q.square == p.square) {
            return_error!(format!("square {} is placed twice", p.square));
        }
    }
    for p in &validated.placements {
        grid.place_tile(p.square, p.tile)?;
    }
    *rack = new_rack;
    Ok(())
}

#[derive(Clone, Debug, Default)]
pub struct GamePlayer {
    pub score: i64,
    pub rack: Rack,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalStanding {
    pub scores: Vec<i64>,
    pub penalties: Vec<i64>,
    // None on a draw
    pub winner: Option<usize>,
}

pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Box<[GamePlayer]>,
    pub grid: grid::Grid,
    pub bag: bag::Bag,
    pub turn: u8,
    pub is_first_move: bool,
    pub consecutive_passes: u8,
}

impl<'a> Clone for GameState<'a> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            game_config: self.game_config,
            players: self.players.clone(),
            grid: self.grid.clone(),
            bag: self.bag.clone(),
            turn: self.turn,
            is_first_move: self.is_first_move,
            consecutive_passes: self.consecutive_passes,
        }
    }
}

impl<'a> GameState<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        board_layout: board_layout::BoardLayout,
        rng: &mut dyn RngCore,
    ) -> Self {
        let rack_size = game_config.rack_size() as usize;
        let mut bag = bag::Bag::new(game_config.alphabet());
        bag.shuffle(rng);
        let players: Box<[GamePlayer]> = (0..game_config.num_players())
            .map(|_| {
                let mut rack = Rack(Vec::with_capacity(rack_size));
                bag.replenish(&mut rack, rack_size);
                GamePlayer { score: 0, rack }
            })
            .collect();
        Self {
            game_config,
            players,
            grid: grid::Grid::new(board_layout),
            bag,
            turn: 0,
            is_first_move: true,
            consecutive_passes: 0,
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    pub fn validate<D: Dictionary + ?Sized>(
        &self,
        play: &Play,
        dictionary: &D,
    ) -> Result<validator::ValidatedMove, error::IllegalMove> {
        validator::validate(
            self.game_config,
            &self.grid,
            &self.current_player().rack,
            play,
            self.is_first_move,
            dictionary,
        )
    }

    /// Applies and scores a move for the current player, then refills their
    /// rack. Does not advance the turn.
    pub fn commit(
        &mut self,
        validated: &validator::ValidatedMove,
    ) -> error::Returns<play_scorer::ScoreBreakdown> {
        if validated.is_pass() {
            self.pass();
            return Ok(play_scorer::ScoreBreakdown::pass());
        }
        let score = play_scorer::compute_score(self.game_config, &self.grid, validated);
        let rack_size = self.game_config.rack_size() as usize;
        let current_player = &mut self.players[self.turn as usize];
        if let Err(err) = apply(&mut self.grid, &mut current_player.rack, validated) {
            log::warn!("stale move {}: {}", validated.main_word, err);
            return Err(err);
        }
        current_player.score += score.total;
        self.bag.replenish(&mut current_player.rack, rack_size);
        self.is_first_move = false;
        self.consecutive_passes = 0;
        log::info!(
            "player {} played {} for {} (total {})",
            self.turn + 1,
            validated.main_word,
            score.total,
            current_player.score
        );
        Ok(score)
    }

    pub fn pass(&mut self) {
        self.consecutive_passes += 1;
        log::info!(
            "player {} passed ({} in a row)",
            self.turn + 1,
            self.consecutive_passes
        );
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        if self.turn >= num_players {
            self.turn = 0;
        }
    }

    pub fn is_game_over(&self) -> bool {
        (self.bag.is_empty() && self.players.iter().any(|p| p.rack.is_empty()))
            || self.consecutive_passes >= self.game_config.num_passes_to_end()
    }

    // Deducts what is left on each rack. Call once.
    pub fn finish(&mut self) -> FinalStanding {
        let penalties = self
            .players
            .iter()
            .map(|p| p.rack.total_value())
            .collect::<Vec<_>>();
        for (player, penalty) in self.players.iter_mut().zip(penalties.iter()) {
            player.score -= penalty;
        }
        let scores = self.players.iter().map(|p| p.score).collect::<Vec<_>>();
        let best = scores.iter().copied().max().unwrap_or(0);
        let mut leaders = scores.iter().enumerate().filter(|&(_, &s)| s == best);
        let winner = match (leaders.next(), leaders.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        };
        match winner {
            Some(i) => log::info!("game over, player {} wins {:?}", i + 1, scores),
            None => log::info!("game over, draw {:?}", scores),
        }
        FinalStanding {
            scores,
            penalties,
            winner,
        }
    }
}
