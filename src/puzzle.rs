use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::location::{Coord, Location};
use crate::word::WordEntry;

/// A word committed to an attempt's grid, in attempt-local coordinates.
///
/// Never mutated after creation; normalization only translates `start`.
#[derive(Clone, Debug)]
pub(crate) struct Placement {
    pub(crate) entry: WordEntry,
    pub(crate) start: Location,
    pub(crate) direction: Direction,
}

impl Placement {
    fn end(&self) -> Location {
        self.direction
            .advance(self.start, self.entry.word.len() as Coord - 1)
    }
}

/// A word in the final puzzle, frozen for output.
///
/// Coordinates are zero-based after normalization and `number` is the clue number assigned at
/// the word's first letter.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// The answer, normalized to `A..=Z`.
    pub word: String,
    /// The clue for the answer.
    pub clue: String,
    /// Column of the first letter.
    pub x: Coord,
    /// Row of the first letter.
    pub y: Coord,
    /// Which way the word runs.
    pub direction: Direction,
    /// The clue number shown at the word's first letter.
    pub number: u32,
}

/// One occupied cell of the final puzzle.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// The letter occupying the cell, consistent with every word passing through it.
    pub char: char,
    /// Column.
    pub x: Coord,
    /// Row.
    pub y: Coord,
    /// The clue number, present when a word starts here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
}

/// A generated crossword puzzle.
///
/// `width` and `height` are the tight bounding box of the placed words: no fully empty border
/// row or column exists, though interior cells may be empty. Serializes in the shape the
/// surrounding application stores and replays, with the cell map keyed by `"x,y"` strings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Number of columns in the bounding box.
    pub width: Coord,
    /// Number of rows in the bounding box.
    pub height: Coord,
    /// The placed words, in reading order.
    pub words: Vec<PlacedWord>,
    /// Every occupied cell, keyed by its location.
    #[serde(with = "keyed_cells")]
    pub cells: HashMap<Location, Cell>,
}

impl Puzzle {
    /// Normalize and number the winning attempt's placements.
    ///
    /// Translates every placement so the bounding box starts at `(0, 0)`, orders words by
    /// `(y, x)`, assigns clue numbers from 1 in that order reusing the number of a start cell
    /// already seen, and builds the cell map, stamping a number onto each word's first cell.
    pub(crate) fn from_placements(placements: Vec<Placement>) -> Self {
        if placements.is_empty() {
            return Self {
                width: 0,
                height: 0,
                words: Vec::new(),
                cells: HashMap::new(),
            };
        }

        let (min_x, max_x) = placements
            .iter()
            .flat_map(|p| [p.start.0, p.end().0])
            .minmax()
            .into_option()
            .unwrap();
        let (min_y, max_y) = placements
            .iter()
            .flat_map(|p| [p.start.1, p.end().1])
            .minmax()
            .into_option()
            .unwrap();

        let mut ordered = placements;
        for placement in &mut ordered {
            placement.start = placement.start.offset_by((-min_x, -min_y));
        }
        // reading order fixes the numbering
        ordered.sort_by_key(|p| (p.start.1, p.start.0));

        // words sharing a start cell share its number
        let mut numbers: HashMap<Location, u32> = HashMap::new();
        for placement in &ordered {
            let fresh = numbers.len() as u32 + 1;
            numbers.entry(placement.start).or_insert(fresh);
        }

        let words = ordered
            .iter()
            .map(|p| PlacedWord {
                word: p.entry.word.clone(),
                clue: p.entry.clue.clone(),
                x: p.start.0,
                y: p.start.1,
                direction: p.direction,
                number: numbers[&p.start],
            })
            .collect_vec();

        let mut cells: HashMap<Location, Cell> = HashMap::new();
        for placement in &ordered {
            for (i, letter) in placement.entry.word.chars().enumerate() {
                let at = placement.direction.advance(placement.start, i as Coord);
                let cell = cells.entry(at).or_insert(Cell {
                    char: letter,
                    x: at.0,
                    y: at.1,
                    number: None,
                });
                if i == 0 {
                    cell.number = Some(numbers[&placement.start]);
                }
            }
        }

        Self {
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
            words,
            cells,
        }
    }

    /// Number of words placed in the puzzle.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The cell at `location`, if occupied.
    pub fn cell(&self, location: Location) -> Option<&Cell> {
        self.cells.get(&location)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut board: Array2<char> =
            Array2::from_elem((self.height as usize, self.width as usize), '.');
        for (location, cell) in &self.cells {
            board[(location.1 as usize, location.0 as usize)] = cell.char;
        }

        let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));
        for row in board.rows() {
            for col in row {
                out.push(*col);
            }
            out.push('\n');
        }

        write!(f, "{out}")
    }
}

/// Serializes the cell map under `"x,y"` string keys, the format the stored puzzles use.
/// Deserialization rebuilds the locations from each cell's own coordinates.
mod keyed_cells {
    use std::collections::HashMap;

    use itertools::Itertools;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Cell;
    use crate::location::Location;

    pub(super) fn serialize<S: Serializer>(
        cells: &HashMap<Location, Cell>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(cells.len()))?;
        for (location, cell) in cells.iter().sorted_by_key(|(l, _)| (l.1, l.0)) {
            map.serialize_entry(&location.to_string(), cell)?;
        }
        map.end()
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<Location, Cell>, D::Error> {
        let raw = HashMap::<String, Cell>::deserialize(deserializer)?;
        Ok(raw
            .into_values()
            .map(|cell| (Location(cell.x, cell.y), cell))
            .collect())
    }
}
