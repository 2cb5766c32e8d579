//! Raw and normalized checkpoint records.
//!
//! # Source shape
//!
//! Each leaf of the source document looks like:
//!
//! ```text
//! {
//!   "id": 17,
//!   "title": {"ru": "Забайкальск (авто)", "en": "Zabaykalsk"},
//!   "checkpoint_type": {"title": {"en": "Automobile checkpoint"}},
//!   "status": {"title": {"en": "Bilateral"}},
//!   "foreign_country": {"iso_code": "CN"},
//!   "foreign_checkpoint": {"title": {"ru": "Маньчжурия"}},
//!   "latitude": "49.6441",
//!   "longitude": "117.3215",
//!   "condition": true
//! }
//! ```
//!
//! Every field is optional. Identifiers, coordinates and the admission gate
//! are kept as untyped JSON values because the source mixes strings, numbers
//! and nulls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::status::StatusCode;

/// A `{"ru": ..., "en": ...}` label pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub ru: Option<String>,
    pub en: Option<String>,
}

/// Wrapper for source objects that carry their label under `title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Titled {
    pub title: Option<Bilingual>,
}

impl Titled {
    pub fn en(&self) -> Option<&str> {
        self.title.as_ref().and_then(|t| t.en.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignCountry {
    pub iso_code: Option<String>,
}

/// Name of the checkpoint on the other side of the border.
///
/// Older exports put the Cyrillic name directly under `ru`; newer ones
/// nest it under `title.ru`. The nested form wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignCheckpoint {
    pub title: Option<Bilingual>,
    pub ru: Option<String>,
}

impl ForeignCheckpoint {
    pub fn name_ru(&self) -> Option<&str> {
        self.title
            .as_ref()
            .and_then(|t| t.ru.as_deref())
            .or(self.ru.as_deref())
    }
}

/// Leaf checkpoint entry as read from the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCheckpoint {
    #[serde(default)]
    pub id: Value,
    pub title: Option<Bilingual>,
    pub checkpoint_type: Option<Titled>,
    pub status: Option<Titled>,
    pub foreign_country: Option<ForeignCountry>,
    pub foreign_checkpoint: Option<ForeignCheckpoint>,
    #[serde(default)]
    pub latitude: Value,
    #[serde(default)]
    pub longitude: Value,
    #[serde(default)]
    pub condition: Value,
}

impl RawCheckpoint {
    /// Local-language (Cyrillic) title, if present and non-blank.
    pub fn title_ru(&self) -> Option<&str> {
        self.title
            .as_ref()
            .and_then(|t| t.ru.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn checkpoint_type_en(&self) -> Option<&str> {
        self.checkpoint_type.as_ref().and_then(Titled::en)
    }

    pub fn status_en(&self) -> Option<&str> {
        self.status.as_ref().and_then(Titled::en)
    }

    pub fn has_foreign_country(&self) -> bool {
        self.foreign_country.is_some()
    }

    pub fn foreign_iso_code(&self) -> Option<&str> {
        self.foreign_country
            .as_ref()
            .and_then(|c| c.iso_code.as_deref())
    }

    /// Foreign checkpoint name in Cyrillic, exactly as found in the source.
    pub fn foreign_checkpoint_ru(&self) -> Option<&str> {
        self.foreign_checkpoint
            .as_ref()
            .and_then(ForeignCheckpoint::name_ru)
    }

    /// Admission gate: only a literal JSON `true` opens it.
    pub fn is_open(&self) -> bool {
        matches!(self.condition, Value::Bool(true))
    }
}

/// A checkpoint after transliteration, classification and admission.
///
/// Field order is the order written to output documents. Name fields that
/// were never derived are omitted rather than written as `null`; `name`,
/// `status` and `foreign_checkpoint_ru` are always written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCheckpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<StatusCode>,
    #[serde(default)]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Value,
    #[serde(default)]
    pub longitude: Value,
    #[serde(default)]
    pub foreign_checkpoint_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_name: Option<String>,
}
