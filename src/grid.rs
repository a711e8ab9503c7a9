use std::collections::HashMap;

use itertools::Itertools;

use crate::direction::Direction;
use crate::location::{Coord, Location};

/// Every index pair `(ours, theirs)` such that the `ours`-th letter of `word` equals the
/// `theirs`-th letter of `target`.
///
/// The scan is row-major over the index pairs, so a fixed input pair always yields the same
/// candidate order and attempts stay reproducible under a fixed seed.
pub(crate) fn intersections(word: &str, target: &str) -> Vec<(usize, usize)> {
    let ours = word.as_bytes();
    let theirs = target.as_bytes();

    (0..ours.len())
        .cartesian_product(0..theirs.len())
        .filter(|&(i, j)| ours[i] == theirs[j])
        .collect_vec()
}

/// The working grid owned by a single placement attempt.
///
/// Maps occupied locations to their letter. Exactly one exists per attempt and it is discarded
/// unless the attempt wins.
#[derive(Default)]
pub(crate) struct Grid {
    cells: HashMap<Location, char>,
}

impl Grid {
    fn occupied(&self, location: Location) -> bool {
        self.cells.contains_key(&location)
    }

    /// Whether `word` may be committed at `start` running in `direction`.
    ///
    /// For every letter coordinate of the candidate:
    /// 1. an occupied cell must already hold the candidate's letter;
    /// 2. a cell being newly occupied may not touch an occupied cell on either perpendicular
    ///    side, which would create an unintended adjacent letter run;
    /// 3. the cells immediately before the first letter and after the last, along the word's own
    ///    direction, must be empty, so the word does not extend an existing run.
    pub(crate) fn can_place(&self, word: &str, start: Location, direction: Direction) -> bool {
        if self.occupied(direction.advance(start, -1))
            || self.occupied(direction.advance(start, word.len() as Coord))
        {
            return false;
        }

        word.chars().enumerate().all(|(i, letter)| {
            let at = direction.advance(start, i as Coord);
            match self.cells.get(&at) {
                Some(&existing) => existing == letter,
                None => !direction.flanking(at).iter().any(|&n| self.occupied(n)),
            }
        })
    }

    /// Write every letter of `word` into the grid.
    ///
    /// The placement must already have passed [`Self::can_place`].
    pub(crate) fn place(&mut self, word: &str, start: Location, direction: Direction) {
        for (i, letter) in word.chars().enumerate() {
            self.cells.insert(direction.advance(start, i as Coord), letter);
        }
    }
}
