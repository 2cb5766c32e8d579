//! Checkpoint status codes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Numeric status of a crossing point.
///
/// Serialized as the bare integer (`1` or `2`); an unknown status is
/// represented by `Option::None` on the record, which serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusCode {
    /// Usage restricted to citizens of the two bordering countries.
    Bilateral,
    /// Open to citizens of any country.
    Multilateral,
}

impl StatusCode {
    /// Integer code written to output documents.
    pub fn code(self) -> u8 {
        match self {
            Self::Bilateral => 1,
            Self::Multilateral => 2,
        }
    }
}

/// Integer outside the known status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid status code {0} (expected 1 or 2)")]
pub struct InvalidStatusCode(pub u64);

impl TryFrom<u64> for StatusCode {
    type Error = InvalidStatusCode;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Bilateral),
            2 => Ok(Self::Multilateral),
            other => Err(InvalidStatusCode(other)),
        }
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}
