//! Character substitution tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Hard and soft signs. They have no Latin equivalent and are dropped.
pub const SIGN_LETTERS: &[char] = &['Ъ', 'ъ', 'Ь', 'ь'];

/// Quote glyphs removed from descriptive text before mapping.
pub const QUOTE_GLYPHS: &[char] = &[
    '\u{201C}', // “
    '\u{201D}', // ”
    '\u{00AB}', // «
    '\u{00BB}', // »
    '"',
    '\'',
    '\u{2019}', // ’
    '\u{2018}', // ‘
    '`',
];

/// Which character table a transliteration uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Russian alphabet only.
    #[default]
    Russian,
    /// Russian alphabet plus Kazakh-specific letters.
    Kazakh,
}

impl Alphabet {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Russian => "russian",
            Self::Kazakh => "kazakh",
        }
    }

    /// Latin replacement for `ch`, or `None` when the table has no entry.
    pub fn lookup(self, ch: char) -> Option<&'static str> {
        let table = match self {
            Self::Russian => &*RUSSIAN,
            Self::Kazakh => &*KAZAKH,
        };
        table.get(&ch).copied()
    }
}

/// Upper and lower case are listed independently; nothing is case-folded.
const RUSSIAN_PAIRS: &[(char, &str)] = &[
    ('А', "A"),
    ('Б', "B"),
    ('В', "V"),
    ('Г', "G"),
    ('Д', "D"),
    ('Е', "E"),
    ('Ё', "Yo"),
    ('Ж', "Zh"),
    ('З', "Z"),
    ('И', "I"),
    ('Й', "Y"),
    ('К', "K"),
    ('Л', "L"),
    ('М', "M"),
    ('Н', "N"),
    ('О', "O"),
    ('П', "P"),
    ('Р', "R"),
    ('С', "S"),
    ('Т', "T"),
    ('У', "U"),
    ('Ф', "F"),
    ('Х', "Kh"),
    ('Ц', "Ts"),
    ('Ч', "Ch"),
    ('Ш', "Sh"),
    ('Щ', "Shch"),
    ('Ъ', ""),
    ('Ы', "Y"),
    ('Ь', ""),
    ('Э', "E"),
    ('Ю', "Yu"),
    ('Я', "Ya"),
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
];

/// Kazakh letters with approximate Latin equivalents.
const KAZAKH_PAIRS: &[(char, &str)] = &[
    ('Ә', "A"),
    ('ә', "a"),
    ('Ө', "O"),
    ('ө', "o"),
    ('Ұ', "U"),
    ('ұ', "u"),
    ('Ү', "U"),
    ('ү', "u"),
    ('Қ', "Q"),
    ('қ', "q"),
    ('Ғ', "Gh"),
    ('ғ', "gh"),
    ('Ң', "Ng"),
    ('ң', "ng"),
    ('Һ', "H"),
    ('һ', "h"),
    ('І', "I"),
    ('і', "i"),
];

static RUSSIAN: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| RUSSIAN_PAIRS.iter().copied().collect());

static KAZAKH: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    RUSSIAN_PAIRS
        .iter()
        .chain(KAZAKH_PAIRS.iter())
        .copied()
        .collect()
});
