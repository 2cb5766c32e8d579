//! Per-record normalization.
//!
//! Turns one [`RawCheckpoint`] into a [`NormalizedCheckpoint`] or rejects it.
//! Steps run in a fixed order: type filter, names, status, pass-through
//! fields, country, foreign name and composite name, then the admission gate.

use std::sync::LazyLock;

use borderpost_model::{NormalizeConfig, NormalizedCheckpoint, RawCheckpoint};
use borderpost_translit::{Style, Transliterator};
use regex::Regex;

use crate::status::classify_status;

/// First parenthetical group with the whitespace around it.
static PARENTHETICAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*").expect("Invalid parenthetical regex"));

/// Separator between local and foreign names in the display name.
pub const NAME_SEPARATOR: &str = " / ";

/// Outcome of evaluating one raw record.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    Admitted(Box<NormalizedCheckpoint>),
    /// `checkpoint_type.title.en` differs from the target type.
    WrongType,
    /// The `condition` gate is not literally `true`.
    Closed,
}

impl Admission {
    pub fn into_admitted(self) -> Option<NormalizedCheckpoint> {
        match self {
            Self::Admitted(record) => Some(*record),
            Self::WrongType | Self::Closed => None,
        }
    }
}

/// Record normalizer bound to one target type and one name table.
#[derive(Debug, Clone)]
pub struct Normalizer {
    target_type: String,
    names: Transliterator,
}

impl Normalizer {
    pub fn new(config: &NormalizeConfig) -> Self {
        Self {
            target_type: config.target_type.clone(),
            names: Transliterator::new(config.alphabet, Style::Formal),
        }
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    /// Normalize `raw`, returning `None` for rejected records.
    pub fn normalize(&self, raw: &RawCheckpoint) -> Option<NormalizedCheckpoint> {
        self.evaluate(raw).into_admitted()
    }

    /// Normalize `raw` and report why a record was rejected.
    pub fn evaluate(&self, raw: &RawCheckpoint) -> Admission {
        if raw.checkpoint_type_en() != Some(self.target_type.as_str()) {
            return Admission::WrongType;
        }

        let mut record = NormalizedCheckpoint::default();

        if let Some(title_ru) = raw.title_ru() {
            let full_name = self.names.transliterate(title_ru);
            let name_en = strip_parenthetical(&full_name);
            record.name_ru = Some(title_ru.to_string());
            record.name = Some(name_en.clone());
            record.name_en = Some(name_en);
            record.full_name = Some(full_name);
        }

        record.status = classify_status(raw.status_en());

        record.id = raw.id.clone();
        record.latitude = raw.latitude.clone();
        record.longitude = raw.longitude.clone();

        if raw.has_foreign_country() {
            record.country = raw
                .foreign_iso_code()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string);
        }

        record.foreign_checkpoint_ru = raw.foreign_checkpoint_ru().map(str::to_string);
        if let Some(foreign_ru) = raw
            .foreign_checkpoint_ru()
            .filter(|name| !name.trim().is_empty())
        {
            let foreign_name = self.names.transliterate(foreign_ru);
            if let Some(name) = compose_name(record.name_en.as_deref(), Some(&foreign_name)) {
                record.name = Some(name);
            }
            record.foreign_name = Some(foreign_name);
        }

        // Gate last: derived fields are computed even for records dropped here.
        if !raw.is_open() {
            return Admission::Closed;
        }

        Admission::Admitted(Box::new(record))
    }
}

/// Remove the first parenthetical qualifier and the whitespace around it.
///
/// `"Zabaykalsk (avto)"` becomes `"Zabaykalsk"`. Nothing is inserted in
/// place of the removed group. Without a parenthetical the input is
/// returned unchanged. A name that consists only of a parenthetical is kept
/// whole so the display name is never empty.
pub fn strip_parenthetical(full_name: &str) -> String {
    if !PARENTHETICAL_REGEX.is_match(full_name) {
        return full_name.to_string();
    }
    let stripped = PARENTHETICAL_REGEX.replace(full_name, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        full_name.trim().to_string()
    } else {
        stripped.to_string()
    }
}

/// Compose the bilingual display name `"<local> / <foreign>"`.
///
/// Returns `None` unless both parts are present and non-empty.
pub fn compose_name(name_en: Option<&str>, foreign_name: Option<&str>) -> Option<String> {
    let local = name_en.filter(|s| !s.is_empty())?;
    let foreign = foreign_name.filter(|s| !s.is_empty())?;
    Some(format!("{local}{NAME_SEPARATOR}{foreign}"))
}
