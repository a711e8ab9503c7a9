#![warn(missing_docs)]

//! # `crosspatch`
//!
//! A crossword layout generator. Feed it a list of words with clues and it arranges as many of
//! them as it can into one connected grid of intersecting entries, then numbers the result the
//! way a newspaper crossword is numbered.
//! Begin with [`WordEntry`] values, configure a [`Generator`] (or call [`generate()`] for the
//! default configuration), and render or serialize the returned [`Puzzle`].
//!
//! # Internals
//! Exact crossword construction, maximizing placed words while minimizing area, is a hard
//! constraint-satisfaction problem, so the generator takes the approximate route: a fixed number
//! of independent randomized attempts, each seeding the longest word at the origin and greedily
//! connecting every remaining word to the words already on the grid through a shared letter.
//!
//! A candidate placement must survive three checks against the attempt's grid: letters may only
//! overlap identically, a newly occupied cell may not sit flush against an occupied perpendicular
//! neighbor, and a word may not extend an existing word end-to-end.
//! The attempt placing the most words wins. Its coordinates are shifted to a zero-based bounding
//! box and clue numbers are assigned in reading order, with words that start on the same cell
//! sharing one number.

pub use direction::Direction;
pub use generator::{generate, Generator};
pub use location::Location;
pub use puzzle::{Cell, PlacedWord, Puzzle};
pub use word::WordEntry;

pub(crate) mod direction;
pub(crate) mod generator;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod puzzle;
mod tests;
pub(crate) mod word;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;
