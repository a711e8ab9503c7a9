use std::cmp::Reverse;
use std::num::NonZero;

use itertools::Itertools;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::direction::Direction;
use crate::grid::{intersections, Grid};
use crate::location::{Coord, Location};
use crate::puzzle::{Placement, Puzzle};
use crate::word::WordEntry;

/// Generate a puzzle from `entries` with the default [`Generator`] configuration.
///
/// See [`Generator::generate`].
pub fn generate(entries: &[WordEntry]) -> Option<Puzzle> {
    Generator::default().generate(entries)
}

/// A configured crossword generator.
///
/// ```
/// use std::num::NonZero;
///
/// use crosspatch::{Generator, WordEntry};
///
/// let entries = [
///     WordEntry::new("cat", "feline pet"),
///     WordEntry::new("car", "road vehicle"),
///     WordEntry::new("art", "gallery display"),
/// ];
/// let puzzle = Generator::default()
///     .attempts(NonZero::new(10).unwrap())
///     .seed(42)
///     .generate(&entries)
///     .unwrap();
/// assert!(puzzle.word_count() >= 2);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Generator {
    attempts: NonZero<usize>,
    seed: Option<u64>,
}

impl Default for Generator {
    /// Twenty attempts, entropy-seeded shuffles.
    fn default() -> Self {
        Self {
            attempts: NonZero::new(20).unwrap(),
            seed: None,
        }
    }
}

impl Generator {
    /// Set the number of independent placement attempts to run.
    pub fn attempts(mut self, attempts: NonZero<usize>) -> Self {
        self.attempts = attempts;
        self
    }

    /// Fix the shuffle seed.
    ///
    /// Two runs over the same entries with the same seed produce identical puzzles. Without a
    /// seed, shuffles draw from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Lay out `entries` and return the best puzzle found.
    ///
    /// Entries are normalized first and sorted by descending length, input order breaking ties;
    /// the longest word seeds every attempt at the origin, running across. A word that cannot be
    /// connected to the grid is left out of that attempt, so the returned puzzle may place fewer
    /// words than were supplied. Only an input with no placeable word at all yields `None`.
    pub fn generate(&self, entries: &[WordEntry]) -> Option<Puzzle> {
        let mut words: Vec<WordEntry> = entries.iter().filter_map(WordEntry::normalized).collect();
        if words.is_empty() {
            return None;
        }
        words.sort_by_key(|entry| Reverse(entry.word.len()));

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut best: Vec<Placement> = Vec::new();
        for attempt in 0..self.attempts.get() {
            let placements = place_all(&words, &mut rng);
            debug!(
                "attempt {attempt}: placed {} of {} words",
                placements.len(),
                words.len()
            );

            // later attempts must beat the incumbent outright, so ties keep the earliest
            if placements.len() > best.len() {
                best = placements;
            }
            if best.len() == words.len() {
                break;
            }
        }

        Some(Puzzle::from_placements(best))
    }
}

/// One randomized attempt over a fresh grid.
///
/// Seeds the first word at the origin, then tries to connect each remaining word to the already
/// placed words, visited in shuffled order, through their letter intersections. The first
/// placement to validate is committed; a word with no valid placement is skipped.
fn place_all(words: &[WordEntry], rng: &mut SmallRng) -> Vec<Placement> {
    let mut grid = Grid::default();
    let mut placed: Vec<Placement> = Vec::with_capacity(words.len());

    let Some((first, rest)) = words.split_first() else {
        return placed;
    };
    commit(&mut grid, &mut placed, first, Location(0, 0), Direction::Across);

    for entry in rest {
        let mut targets = (0..placed.len()).collect_vec();
        targets.shuffle(rng);

        'targets: for &target in &targets {
            let (target_start, target_direction) = (placed[target].start, placed[target].direction);

            for (ours, theirs) in intersections(&entry.word, &placed[target].entry.word) {
                // anchor our shared letter on the target's cell, then back up to our first letter
                let direction = target_direction.perpendicular();
                let shared = target_direction.advance(target_start, theirs as Coord);
                let start = direction.advance(shared, -(ours as Coord));

                if grid.can_place(&entry.word, start, direction) {
                    commit(&mut grid, &mut placed, entry, start, direction);
                    break 'targets;
                }
            }
        }
    }

    placed
}

fn commit(
    grid: &mut Grid,
    placed: &mut Vec<Placement>,
    entry: &WordEntry,
    start: Location,
    direction: Direction,
) {
    grid.place(&entry.word, start, direction);
    placed.push(Placement {
        entry: entry.clone(),
        start,
        direction,
    });
}
