//! Transliteration passes.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::table::{Alphabet, QUOTE_GLYPHS, SIGN_LETTERS};

/// `E`/`e` at the start of the text or right after whitespace.
static WORD_INITIAL_E: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)([Ee])").expect("Invalid word-initial E regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// How the mapped text is post-processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Name fields: drop signs, map, then correct word-initial `E`.
    #[default]
    Formal,
    /// Free text: drop quotes, map, collapse whitespace, title-case.
    Descriptive,
}

/// A transliteration engine bound to one table and one style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Transliterator {
    alphabet: Alphabet,
    style: Style,
}

impl Transliterator {
    pub fn new(alphabet: Alphabet, style: Style) -> Self {
        Self { alphabet, style }
    }

    /// Transliterate `text`. Total: every input produces an output.
    pub fn transliterate(&self, text: &str) -> String {
        match self.style {
            Style::Formal => self.formal(text),
            Style::Descriptive => self.descriptive(text),
        }
    }

    fn formal(&self, text: &str) -> String {
        let mapped = self.map_chars(text.chars().filter(|ch| !SIGN_LETTERS.contains(ch)));
        correct_word_initial_e(&mapped)
    }

    fn descriptive(&self, text: &str) -> String {
        let mapped = self.map_chars(text.chars().filter(|ch| !QUOTE_GLYPHS.contains(ch)));
        let collapsed = WHITESPACE_RUN.replace_all(&mapped, " ");
        title_case(collapsed.trim())
    }

    fn map_chars(&self, chars: impl Iterator<Item = char>) -> String {
        let mut out = String::new();
        for ch in chars {
            match self.alphabet.lookup(ch) {
                Some(latin) => out.push_str(latin),
                None => out.push(ch),
            }
        }
        out
    }
}

/// Formal transliteration with the given table.
pub fn transliterate(text: &str, alphabet: Alphabet) -> String {
    Transliterator::new(alphabet, Style::Formal).transliterate(text)
}

/// Descriptive transliteration with the given table.
pub fn transliterate_descriptive(text: &str, alphabet: Alphabet) -> String {
    Transliterator::new(alphabet, Style::Descriptive).transliterate(text)
}

/// Single scan over the fully mapped string; case of the trigger is kept.
fn correct_word_initial_e(text: &str) -> String {
    WORD_INITIAL_E
        .replace_all(text, |caps: &Captures<'_>| {
            let soft = if &caps[2] == "E" { "Ye" } else { "ye" };
            format!("{}{}", &caps[1], soft)
        })
        .into_owned()
}

/// Uppercase the first cased letter of every run of cased letters and
/// lowercase the rest. Any uncased character (digit, hyphen, apostrophe)
/// starts a new run.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for ch in text.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && previous_cased {
            out.extend(ch.to_lowercase());
        } else if cased {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }
    out
}
