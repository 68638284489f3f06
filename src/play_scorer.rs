// Copyright (C) 2020-2026 Andy Kurnia.

use super::{game_config, grid, line, validator::ValidatedMove};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScoreBreakdown {
    pub base: i64,
    pub word_multiplier: i64,
    pub bingo_bonus: i64,
    pub total: i64,
}

impl ScoreBreakdown {
    pub fn pass() -> Self {
        Self {
            base: 0,
            word_multiplier: 1,
            bingo_bonus: 0,
            total: 0,
        }
    }
}

// Scores only the main word. Premiums apply to newly placed tiles only, so a
// premium under a tile from an earlier move never counts again. The grid may
// be read before or after the move is applied; both give the same result.
pub fn compute_score(
    game_config: &game_config::GameConfig<'_>,
    grid: &grid::Grid,
    validated: &ValidatedMove,
) -> ScoreBreakdown {
    if validated.is_pass() {
        return ScoreBreakdown::pass();
    }
    let direction = validated.line_direction();
    let anchor = match validated
        .placements
        .iter()
        .map(|p| p.square)
        .min_by_key(|sq| if direction.is_down() { sq.row } else { sq.col })
    {
        Some(anchor) => anchor,
        None => return ScoreBreakdown::pass(),
    };

    let overlay = grid::Overlay::new(grid, &validated.placements);
    let run = line::run_through(&grid.dim(), anchor, direction, |idx| {
        overlay.is_occupied(idx)
    });
    let word_len = match validated.main_word.chars().count() {
        0 => run.len() as usize,
        n => n,
    };

    let premiums = grid.layout().premiums();
    let mut word_multiplier = 1i64;
    let mut word_score = 0i64;
    for idx in run.cells().take(word_len) {
        let tile_multiplier;
        let placed_tile = match overlay.placed_at(idx) {
            Some(placement) => {
                let premium = premiums[idx];
                word_multiplier *= premium.word_multiplier() as i64;
                tile_multiplier = premium.letter_multiplier() as i64;
                &placement.tile
            }
            None => match overlay.tile_at_idx(idx) {
                Some(tile) => {
                    tile_multiplier = 1;
                    tile
                }
                None => continue,
            },
        };
        word_score += placed_tile.value() as i64 * tile_multiplier;
    }

    let bingo_bonus = game_config.num_played_bonus(validated.placements.len());
    ScoreBreakdown {
        base: word_score,
        word_multiplier,
        bingo_bonus,
        total: word_score * word_multiplier + bingo_bonus,
    }
}

// Standard seven-tile rules.
pub fn score(grid: &grid::Grid, validated: &ValidatedMove) -> ScoreBreakdown {
    compute_score(&game_config::make_english_game_config(), grid, validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board_layout::{BoardLayout, Premium},
        game_config::make_english_game_config,
        grid::{Grid, Placement},
        matrix::{Dim, Direction},
        square::Square,
        tile::Tile,
    };

    const DIM: Dim = Dim { rows: 10, cols: 7 };

    fn grid_with(premiums: &[((i8, i8), Premium)]) -> Grid {
        let mut cells = vec![Premium::Normal; DIM.num_cells()];
        for &((r, c), p) in premiums {
            cells[DIM.at_row_col(r, c)] = p;
        }
        Grid::new(BoardLayout::new(DIM, Square::new(0, 0), cells.into_boxed_slice()).unwrap())
    }

    fn t(letter: u8, value: i8) -> Tile {
        Tile::normal(letter, value).unwrap()
    }

    fn at(row: i8, col: i8, tile: Tile) -> Placement {
        Placement {
            square: Square::new(row, col),
            tile,
        }
    }

    #[test]
    fn pass_scores_nothing() {
        let game_config = make_english_game_config();
        let score = compute_score(&game_config, &grid_with(&[]), &ValidatedMove::pass());
        assert_eq!(score, ScoreBreakdown::pass());
    }

    #[test]
    fn plain_word_sums_values() {
        let game_config = make_english_game_config();
        let vm = ValidatedMove::new(
            "HI",
            Direction::Across,
            vec![at(0, 0, t(b'H', 4)), at(0, 1, t(b'I', 1))],
        );
        let score = compute_score(&game_config, &grid_with(&[]), &vm);
        assert_eq!(score.total, 5);
        assert_eq!(score.word_multiplier, 1);
    }

    #[test]
    fn letter_and_word_premiums_combine() {
        let game_config = make_english_game_config();
        let g = grid_with(&[((0, 0), Premium::Letter(2)), ((0, 1), Premium::Word(3))]);
        let vm = ValidatedMove::new(
            "HI",
            Direction::Across,
            vec![at(0, 0, t(b'H', 4)), at(0, 1, t(b'I', 1))],
        );
        let score = compute_score(&game_config, &g, &vm);
        assert_eq!(score.base, 9);
        assert_eq!(score.word_multiplier, 3);
        assert_eq!(score.total, 27);
    }

    #[test]
    fn full_rack_earns_bonus() {
        let game_config = make_english_game_config();
        let placements = b"ABCDEFG"
            .iter()
            .enumerate()
            .map(|(i, &b)| at(0, i as i8, t(b, 1)))
            .collect::<Vec<_>>();
        let vm = ValidatedMove::new("ABCDEFG", Direction::Across, placements);
        let score = compute_score(&game_config, &grid_with(&[]), &vm);
        assert_eq!(score.bingo_bonus, 60);
        assert_eq!(score.total, 67);
    }

    #[test]
    fn negative_and_zero_factors_apply() {
        let game_config = make_english_game_config();
        let g = grid_with(&[((0, 0), Premium::Letter(-2)), ((0, 1), Premium::Letter(0))]);
        let vm = ValidatedMove::new(
            "AT",
            Direction::Across,
            vec![at(0, 0, t(b'A', 1)), at(0, 1, t(b'T', 1))],
        );
        assert_eq!(compute_score(&game_config, &g, &vm).total, -2);

        let g = grid_with(&[((0, 0), Premium::Word(0))]);
        assert_eq!(compute_score(&game_config, &g, &vm).total, 0);
    }

    #[test]
    fn wildcard_is_worth_eight() {
        let game_config = make_english_game_config();
        let mut wild = Tile::wildcard();
        wild.bind(b'h').unwrap();
        let vm = ValidatedMove::new(
            "HI",
            Direction::Down,
            vec![at(0, 0, wild), at(1, 0, t(b'I', 1))],
        );
        assert_eq!(compute_score(&game_config, &grid_with(&[]), &vm).total, 9);
    }

    #[test]
    fn covered_premium_does_not_count_again() {
        let game_config = make_english_game_config();
        let mut g = grid_with(&[((0, 1), Premium::Word(3))]);
        g.place_tile(Square::new(0, 1), t(b'N', 1)).unwrap();
        let vm = ValidatedMove::new("NO", Direction::Across, vec![at(0, 2, t(b'O', 1))]);
        let score = compute_score(&game_config, &g, &vm);
        assert_eq!(score.word_multiplier, 1);
        assert_eq!(score.total, 2);
    }

    #[test]
    fn same_score_before_and_after_apply() {
        let game_config = make_english_game_config();
        let mut g = grid_with(&[((2, 3), Premium::Word(2)), ((3, 3), Premium::Letter(3))]);
        g.place_tile(Square::new(1, 3), t(b'N', 1)).unwrap();
        let vm = ValidatedMove::new(
            "SNOW",
            Direction::Down,
            vec![at(0, 3, t(b'S', 1)), at(2, 3, t(b'O', 1)), at(3, 3, t(b'W', 4))],
        );
        let before = compute_score(&game_config, &g, &vm);
        for p in &vm.placements {
            g.place_tile(p.square, p.tile).unwrap();
        }
        let after = compute_score(&game_config, &g, &vm);
        assert_eq!(before, after);
        assert_eq!(before.total, (1 + 1 + 1 + 12) * 2);
    }

    #[test]
    fn single_tile_follows_stored_direction() {
        let game_config = make_english_game_config();
        let mut g = grid_with(&[]);
        g.place_tile(Square::new(0, 0), t(b'H', 4)).unwrap();
        let placements = vec![at(1, 0, t(b'I', 1))];
        let down = ValidatedMove::new("HI", Direction::Down, placements.clone());
        assert_eq!(compute_score(&game_config, &g, &down).total, 5);
        // without a direction a lone tile reads across and misses the H
        let guessed = ValidatedMove::inferred("HI", placements);
        assert_eq!(compute_score(&game_config, &g, &guessed).total, 1);
    }
}
