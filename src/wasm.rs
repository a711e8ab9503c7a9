//! Browser bindings for the generator.
//!
//! Compiled only for `wasm32` targets with the `wasm` feature enabled. Values cross the
//! boundary through [`serde_wasm_bindgen`], so the JavaScript side sees the same JSON shape
//! the stored puzzles use.

use wasm_bindgen::prelude::*;

use crate::word::WordEntry;

/// Generate a puzzle from an array of `{word, clue}` objects.
///
/// Returns the puzzle object, or `null` when no word survives normalization.
#[wasm_bindgen]
pub fn generate_puzzle(entries: JsValue) -> Result<JsValue, JsError> {
    let entries: Vec<WordEntry> = serde_wasm_bindgen::from_value(entries)?;

    match crate::generate(&entries) {
        Some(puzzle) => Ok(serde_wasm_bindgen::to_value(&puzzle)?),
        None => Ok(JsValue::NULL),
    }
}
