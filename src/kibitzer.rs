// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    board_layout, dictionary, error, game_config, grid, play, play_scorer, rack::Rack,
    tile::Tile, validator,
};

// board: one string per row, '.' or ' ' for empty, uppercase for a normal
// tile, lowercase for a wildcard played as that letter. may be omitted for an
// empty board.
// rack: letters, '_' for a wildcard.
// move: move text, e.g. "HI,h8" (down) or "HI,8h" (across) or "," to pass.
// first_move: defaults to whether the board is empty.
// board_file overrides layout, which is "standard" (default) or "plain".
#[derive(serde::Deserialize, Debug)]
pub struct Question {
    #[serde(default)]
    pub board_file: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub board: Vec<String>,
    pub rack: String,
    #[serde(rename = "move")]
    pub play: String,
    #[serde(default)]
    pub first_move: Option<bool>,
    pub words: Vec<String>,
}

#[derive(serde::Serialize, Debug, PartialEq, Eq)]
pub struct JsonPlacement {
    pub square: String,
    pub tile: char,
    pub value: i8,
}

impl From<&grid::Placement> for JsonPlacement {
    #[inline(always)]
    fn from(placement: &grid::Placement) -> Self {
        Self {
            square: placement.square.to_string(),
            tile: placement.tile.display_char(),
            value: placement.tile.value(),
        }
    }
}

#[derive(serde::Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "result")]
pub enum Answer {
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "valid")]
    Valid {
        word: String,
        placements: Vec<JsonPlacement>,
        score: play_scorer::ScoreBreakdown,
    },
    #[serde(rename = "invalid")]
    Invalid { reason: String },
}

pub fn layout_for(question: &Question) -> error::Returns<board_layout::BoardLayout> {
    if let Some(path) = &question.board_file {
        return board_layout::BoardLayout::from_file(path);
    }
    match question.layout.as_deref() {
        None | Some("standard") => Ok(board_layout::make_standard_board_layout()),
        Some("plain") => Ok(board_layout::make_plain_board_layout()),
        Some(name) => {
            return_error!(format!("invalid layout {:?}", name));
        }
    }
}

pub struct Kibitzer {
    pub available_tally: Vec<u8>,
}

impl Kibitzer {
    pub fn new() -> Self {
        Self {
            available_tally: Vec::new(),
        }
    }

    fn use_tally(&mut self, alphabet: &super::alphabet::Alphabet<'_>, idx: u8) -> error::Returns<()> {
        if self.available_tally[idx as usize] > 0 {
            self.available_tally[idx as usize] -= 1;
            Ok(())
        } else {
            return_error!(format!(
                "too many tile {} (bag contains only {})",
                alphabet.label(idx) as char,
                alphabet.freq(idx),
            ));
        }
    }

    /// Builds the grid and rack a question describes, rejecting positions
    /// that use more of any tile than the distribution has.
    pub fn prepare(
        &mut self,
        game_config: &game_config::GameConfig<'_>,
        layout: board_layout::BoardLayout,
        rack_text: &str,
        board_rows: &[String],
    ) -> error::Returns<(grid::Grid, Rack)> {
        let alphabet = game_config.alphabet();
        self.available_tally.clear();
        self.available_tally
            .extend((0..alphabet.len()).map(|idx| alphabet.freq(idx)));

        let mut rack = Rack::new();
        for c in rack_text.bytes().filter(|c| !c.is_ascii_whitespace()) {
            let idx = if c == b'_' {
                0
            } else {
                alphabet
                    .index_of(c)
                    .ok_or_else(|| error::new(format!("rack has invalid tile {:?}", c as char)))?
            };
            self.use_tally(alphabet, idx)?;
            rack.push(alphabet.make_tile(idx));
        }
        if rack.len() > game_config.rack_size() as usize {
            return_error!(format!(
                "rack has {} tiles, at most {} allowed",
                rack.len(),
                game_config.rack_size()
            ));
        }

        let mut grid = grid::Grid::new(layout);
        if board_rows.is_empty() {
            return Ok((grid, rack));
        }
        let expected_dim = grid.dim();
        if board_rows.len() != expected_dim.rows as usize {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                expected_dim.rows,
                board_rows.len()
            ));
        }
        for (row_num, row) in (0..).zip(board_rows.iter()) {
            if row.len() != expected_dim.cols as usize {
                return_error!(format!(
                    "board row {} (0-based): need {} cols, found {} cols",
                    row_num,
                    expected_dim.cols,
                    row.len()
                ));
            }
            for (col_num, c) in (0..).zip(row.bytes()) {
                let tile = match c {
                    b'.' | b' ' => continue,
                    b'A'..=b'Z' => {
                        let idx = alphabet.index_of(c).unwrap_or(0);
                        self.use_tally(alphabet, idx)?;
                        alphabet.make_tile(idx)
                    }
                    b'a'..=b'z' => {
                        self.use_tally(alphabet, 0)?;
                        let mut wildcard = Tile::wildcard();
                        wildcard.bind(c)?;
                        wildcard
                    }
                    _ => {
                        return_error!(format!(
                            "board row {} col {} (0-based): invalid tile {:?}",
                            row_num, col_num, c as char
                        ));
                    }
                };
                grid.place_tile(super::square::Square::new(row_num, col_num), tile)?;
            }
        }
        Ok((grid, rack))
    }

    pub fn answer(
        &mut self,
        game_config: &game_config::GameConfig<'_>,
        question: &Question,
    ) -> error::Returns<Answer> {
        let (grid, rack) = self.prepare(
            game_config,
            layout_for(question)?,
            &question.rack,
            &question.board,
        )?;
        let play = match play::Play::parse(&question.play, &grid.dim()) {
            Ok(play) => play,
            Err(err) => {
                return Ok(Answer::Invalid {
                    reason: err.to_string(),
                });
            }
        };
        let words = dictionary::WordList::new(&question.words);
        let is_first_move = question.first_move.unwrap_or_else(|| grid.is_board_empty());
        match validator::validate(game_config, &grid, &rack, &play, is_first_move, &words) {
            Ok(validated) if validated.is_pass() => Ok(Answer::Pass),
            Ok(validated) => Ok(Answer::Valid {
                score: play_scorer::compute_score(game_config, &grid, &validated),
                placements: validated.placements.iter().map(|p| p.into()).collect(),
                word: validated.main_word,
            }),
            Err(err) => Ok(Answer::Invalid {
                reason: err.to_string(),
            }),
        }
    }
}

impl Default for Kibitzer {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_config::make_english_game_config;

    fn question(json: &str) -> Question {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn first_move_on_empty_board() {
        let game_config = make_english_game_config();
        let q = question(r#"{"rack": "HI_", "move": "HI,8h", "words": ["hi"]}"#);
        let answer = Kibitzer::new().answer(&game_config, &q).unwrap();
        match answer {
            Answer::Valid {
                word,
                placements,
                score,
            } => {
                assert_eq!(word, "HI");
                assert_eq!(placements[0].square, "h8");
                assert_eq!(placements[1].tile, 'I');
                // h8 is a double word square
                assert_eq!(score.total, 10);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejection_reason_is_reported() {
        let game_config = make_english_game_config();
        let q = question(r#"{"rack": "HI", "move": "HI,a1", "words": ["HI"]}"#);
        let answer = Kibitzer::new().answer(&game_config, &q).unwrap();
        assert_eq!(
            answer,
            Answer::Invalid {
                reason: "first move must cover start square h8".into()
            }
        );
        let q = question(r#"{"rack": "HI", "move": "HI", "words": ["HI"]}"#);
        assert!(matches!(
            Kibitzer::new().answer(&game_config, &q).unwrap(),
            Answer::Invalid { .. }
        ));
    }

    #[test]
    fn tally_is_enforced() {
        let game_config = make_english_game_config();
        let mut kibitzer = Kibitzer::new();
        let layout = board_layout::make_plain_board_layout();
        assert!(kibitzer.prepare(&game_config, layout.clone(), "___", &[]).is_err());
        assert!(kibitzer.prepare(&game_config, layout.clone(), "ZZ", &[]).is_err());
        let mut rows = vec![".".repeat(15); 15];
        rows[7] = "......Zz.......".into();
        // the board Z uses up the only Z
        let err = kibitzer
            .prepare(&game_config, layout.clone(), "Z", &rows)
            .unwrap_err();
        assert_eq!(err.to_string(), "too many tile Z (bag contains only 1)");
        let (grid, rack) = kibitzer.prepare(&game_config, layout, "__", &rows[..0]).unwrap();
        assert!(grid.is_board_empty());
        assert_eq!(rack.len(), 2);
    }

    #[test]
    fn board_rows_build_the_grid() {
        let game_config = make_english_game_config();
        let mut rows = vec![".".repeat(15); 15];
        rows[7] = ".......Hi......".into();
        let q = Question {
            board_file: None,
            layout: Some("plain".into()),
            board: rows,
            rack: "S".into(),
            play: "HIS,8h".into(),
            first_move: None,
            words: vec!["HIS".into()],
        };
        match Kibitzer::new().answer(&game_config, &q).unwrap() {
            Answer::Valid { word, score, .. } => {
                assert_eq!(word, "HIS");
                // H 4 + wildcard 8 + S 1
                assert_eq!(score.total, 13);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
