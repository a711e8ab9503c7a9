use serde::{Deserialize, Serialize};

/// A raw crossword entry: an answer and the clue shown for it.
///
/// The answer may arrive in any case and carry punctuation or whitespace; the generator works on
/// the normalized form, keeping only the letters `A..=Z`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The answer word.
    pub word: String,
    /// The clue for the answer.
    pub clue: String,
}

impl WordEntry {
    /// Construct an entry from an answer and its clue.
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            clue: clue.into(),
        }
    }

    /// Uppercase the answer and strip every character outside `A..=Z`.
    ///
    /// Returns `None` when nothing placeable remains, so input like `"24/7"` drops out before the
    /// attempt loop ever sees it.
    pub(crate) fn normalized(&self) -> Option<Self> {
        let word: String = self
            .word
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        (!word.is_empty()).then(|| Self {
            word,
            clue: self.clue.clone(),
        })
    }
}
