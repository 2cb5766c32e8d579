//! Cyrillic to Latin transliteration.
//!
//! Converts checkpoint names and free-text descriptions written in Cyrillic
//! into a Latin approximation using a fixed character table.
//!
//! # Tables
//!
//! - [`Alphabet::Russian`]: the 33 letters of the Russian alphabet
//! - [`Alphabet::Kazakh`]: the Russian table plus Kazakh letters
//!   (`Ә`, `Ғ`, `Қ`, `Ң`, `Ө`, `Ұ`, `Ү`, `Һ`, `І`) with approximate equivalents
//!
//! The table is always chosen by the caller; nothing is inferred from input.
//!
//! # Styles
//!
//! - [`Style::Formal`]: for name fields. Hard and soft signs are dropped,
//!   letters are mapped case-preserving, and a word-initial `E`/`e` becomes
//!   `Ye`/`ye`.
//! - [`Style::Descriptive`]: for loosely structured text. Quote glyphs are
//!   stripped, letters are mapped, whitespace is collapsed and trimmed, and
//!   every word is title-cased.
//!
//! Characters outside the table (digits, punctuation, Latin letters, other
//! scripts) are emitted unchanged in both styles.
//!
//! # Example
//!
//! ```
//! use borderpost_translit::{Alphabet, Style, Transliterator};
//!
//! let formal = Transliterator::new(Alphabet::Russian, Style::Formal);
//! assert_eq!(formal.transliterate("Екатеринбург"), "Yekaterinburg");
//!
//! let descriptive = Transliterator::new(Alphabet::Kazakh, Style::Descriptive);
//! assert_eq!(descriptive.transliterate("«Қайрат»   пост"), "Qayrat Post");
//! ```

mod engine;
mod table;

pub use engine::{Style, Transliterator, transliterate, transliterate_descriptive};
pub use table::{Alphabet, QUOTE_GLYPHS, SIGN_LETTERS};
