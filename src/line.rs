// Copyright (C) 2020-2026 Andy Kurnia.

// The one line walk shared by the start-square check, the perpendicular-word
// check, main-word reconstruction and scoring, so they all agree on what is
// part of a word.

use super::{
    matrix::{self, Direction},
    square::Square,
};

// Occupied cells [start, end) of one lane.
#[derive(Clone)]
pub struct Run {
    pub strider: matrix::Strider,
    pub start: i8,
    pub end: i8,
}

impl Run {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.end - self.start
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Cell indexes of the run, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (self.start..self.end).map(|i| self.strider.at(i))
    }
}

/// The maximal run of occupied cells through `square` along `direction`:
/// back up while the previous cell is occupied, then count forward from there.
/// If `square` itself is not occupied the run is empty.
pub fn run_through<F: Fn(usize) -> bool>(
    dim: &matrix::Dim,
    square: Square,
    direction: Direction,
    is_occupied: F,
) -> Run {
    let (strider, idx) = dim.lane_through(square, direction);
    if !is_occupied(strider.at(idx)) {
        return Run {
            strider,
            start: idx,
            end: idx,
        };
    }
    let mut start = idx;
    while start > 0 && is_occupied(strider.at(start - 1)) {
        start -= 1;
    }
    let mut end = start;
    let len = strider.len();
    while end < len && is_occupied(strider.at(end)) {
        end += 1;
    }
    Run { strider, start, end }
}
