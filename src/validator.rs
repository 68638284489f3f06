// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    dictionary::Dictionary,
    error::IllegalMove,
    game_config,
    grid::{Grid, Overlay, Placement},
    line,
    matrix::Direction,
    planner,
    play::Play,
    rack::Rack,
    square::Square,
};

/// The outcome of a successful validation. `placements` holds only squares
/// that were empty before the move; it is exactly what gets applied, taken
/// from the rack and scored. A pass has no placements.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidatedMove {
    pub main_word: String,
    pub direction: Option<Direction>,
    pub placements: Vec<Placement>,
}

impl ValidatedMove {
    pub fn pass() -> Self {
        Self {
            main_word: String::new(),
            direction: None,
            placements: Vec::new(),
        }
    }

    pub fn new(main_word: &str, direction: Direction, placements: Vec<Placement>) -> Self {
        Self {
            main_word: main_word.to_ascii_uppercase(),
            direction: Some(direction),
            placements,
        }
    }

    // Scoring will infer the direction from the placements.
    pub fn inferred(main_word: &str, placements: Vec<Placement>) -> Self {
        Self {
            main_word: main_word.to_ascii_uppercase(),
            direction: None,
            placements,
        }
    }

    #[inline(always)]
    pub fn is_pass(&self) -> bool {
        self.placements.is_empty()
    }

    // Constant row means across, otherwise down.
    pub fn line_direction(&self) -> Direction {
        self.direction.unwrap_or_else(|| {
            match self.placements.first() {
                Some(first) if self.placements.iter().any(|p| p.square.row != first.square.row) => {
                    Direction::Down
                }
                _ => Direction::Across,
            }
        })
    }
}

// Fails if any newly placed tile sits in a perpendicular run of two or more.
pub fn check_single_word(
    grid: &Grid,
    placements: &[Placement],
    direction: Direction,
) -> Result<(), IllegalMove> {
    let overlay = Overlay::new(grid, placements);
    let dim = grid.dim();
    let perpendicular = direction.perpendicular();
    for p in placements {
        let run = line::run_through(&dim, p.square, perpendicular, |idx| {
            overlay.is_occupied(idx)
        });
        if run.len() >= 2 {
            return Err(IllegalMove::CreatesAdditionalWord(p.square.to_string()));
        }
    }
    Ok(())
}

/// The whole contiguous word through `anchor` along `direction` after the
/// placements, which may reach past the typed word on either end.
pub fn reconstruct_word(
    grid: &Grid,
    placements: &[Placement],
    anchor: Square,
    direction: Direction,
) -> String {
    let overlay = Overlay::new(grid, placements);
    line::run_through(&grid.dim(), anchor, direction, |idx| overlay.is_occupied(idx))
        .cells()
        .filter_map(|idx| overlay.tile_at_idx(idx).and_then(|t| t.letter()))
        .map(|letter| letter as char)
        .collect()
}

/// Decides whether `play` is legal for this rack on this grid. Neither the
/// grid nor the rack is modified; tiles are drawn from a copy of the rack.
pub fn validate<D: Dictionary + ?Sized>(
    game_config: &game_config::GameConfig<'_>,
    grid: &Grid,
    rack: &Rack,
    play: &Play,
    is_first_move: bool,
    dictionary: &D,
) -> Result<ValidatedMove, IllegalMove> {
    let result = validate_place(game_config, grid, rack, play, is_first_move, dictionary);
    match &result {
        Ok(validated) => log::debug!("{} validates as {}", play, validated.main_word),
        Err(err) => log::debug!("{} rejected: {}", play, err),
    }
    result
}

fn validate_place<D: Dictionary + ?Sized>(
    game_config: &game_config::GameConfig<'_>,
    grid: &Grid,
    rack: &Rack,
    play: &Play,
    is_first_move: bool,
    dictionary: &D,
) -> Result<ValidatedMove, IllegalMove> {
    let (word, start, direction) = match play {
        Play::Pass => return Ok(ValidatedMove::pass()),
        Play::Place {
            word,
            start,
            direction,
        } => (word, *start, *direction),
    };

    let len = word.chars().count();
    let min_len = game_config.min_word_len() as usize;
    if len < min_len {
        return Err(IllegalMove::WordTooShort { len, min_len });
    }
    if let Some(c) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(IllegalMove::InvalidCharacter(c));
    }

    let mut rack_copy = rack.clone();
    let planned = planner::plan(grid, &mut rack_copy, word, start, direction)?;

    if planned.placements.is_empty() {
        return Err(IllegalMove::NoTilesPlaced);
    }
    if is_first_move && !planned.path.contains(&grid.start()) {
        return Err(IllegalMove::MustCoverStartSquare(grid.start().to_string()));
    }

    check_single_word(grid, &planned.placements, direction)?;

    let main_word = reconstruct_word(grid, &planned.placements, planned.path[0], direction);
    if !dictionary.contains(&main_word) {
        return Err(IllegalMove::NotInDictionary(main_word));
    }

    Ok(ValidatedMove {
        main_word,
        direction: Some(direction),
        placements: planned.placements,
    })
}
