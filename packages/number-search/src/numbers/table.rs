//! Lookup table from English number words to their scale and increment.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Unit words, indexed by their value.
const UNITS: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens words from twenty upwards; index `i` is worth `(i + 2) * 10`.
const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words with their power of ten (short scale).
const SCALES: [(&str, u32); 5] = [
    ("hundred", 2),
    ("thousand", 3),
    ("million", 6),
    ("billion", 9),
    ("trillion", 12),
];

/// The word that may bridge two runs of number words ("one hundred and one").
pub const JOINER: &str = "and";

static GLOBAL_TABLE: LazyLock<NumberWordTable> = LazyLock::new(NumberWordTable::build);

/// Role a word plays when spelling a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// "zero" through "nineteen".
    Unit,
    /// "twenty" through "ninety".
    Tens,
    /// "hundred", "thousand", ...
    Scale,
    /// "and".
    Joiner,
}

/// Table entry: `current = current * scale + increment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberWord {
    pub scale: u64,
    pub increment: u64,
    pub kind: WordKind,
}

/// Immutable mapping from lowercase number words to [`NumberWord`] entries.
///
/// Callers lowercase their input before looking it up.
#[derive(Debug, Clone)]
pub struct NumberWordTable {
    words: HashMap<&'static str, NumberWord>,
}

impl NumberWordTable {
    /// Build the table.
    ///
    /// Prefer [`NumberWordTable::global`] unless a separately owned table is needed.
    #[must_use]
    pub fn build() -> Self {
        let mut words = HashMap::with_capacity(UNITS.len() + TENS.len() + SCALES.len() + 1);

        for (value, word) in (0u64..).zip(UNITS) {
            words.insert(
                word,
                NumberWord {
                    scale: 1,
                    increment: value,
                    kind: WordKind::Unit,
                },
            );
        }

        for (step, word) in (2u64..).zip(TENS) {
            words.insert(
                word,
                NumberWord {
                    scale: 1,
                    increment: step * 10,
                    kind: WordKind::Tens,
                },
            );
        }

        for (word, exponent) in SCALES {
            words.insert(
                word,
                NumberWord {
                    scale: 10u64.pow(exponent),
                    increment: 0,
                    kind: WordKind::Scale,
                },
            );
        }

        words.insert(
            JOINER,
            NumberWord {
                scale: 1,
                increment: 0,
                kind: WordKind::Joiner,
            },
        );

        debug_assert_eq!(
            words.len(),
            UNITS.len() + TENS.len() + SCALES.len() + 1,
            "number words must be unique"
        );

        Self { words }
    }

    /// Remove words from the table, e.g. to refuse "zero" in conversions.
    ///
    /// Unknown words are ignored.
    #[must_use]
    pub fn without_words(mut self, words: &[&str]) -> Self {
        for word in words {
            self.words.remove(*word);
        }
        self
    }

    /// Process-wide table, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_TABLE
    }

    /// Look up any table word, including the joiner.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<NumberWord> {
        self.words.get(word).copied()
    }

    /// Whether `word` spells part of a number on its own.
    ///
    /// The joiner is excluded: "and" only counts between two number words.
    #[must_use]
    pub fn is_number_word(&self, word: &str) -> bool {
        self.lookup(word)
            .is_some_and(|entry| entry.kind != WordKind::Joiner)
    }

    /// Multiplier of a scale word, or `None` for any other word.
    #[must_use]
    pub fn scale_factor(&self, word: &str) -> Option<u64> {
        self.lookup(word)
            .filter(|entry| entry.kind == WordKind::Scale)
            .map(|entry| entry.scale)
    }

    /// Number of words in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for NumberWordTable {
    fn default() -> Self {
        Self::build()
    }
}
