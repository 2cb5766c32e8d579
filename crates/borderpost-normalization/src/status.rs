//! Status classification.
//!
//! Two input shapes are recognised:
//! - the enumerated English label of the source export (`"Bilateral"`,
//!   `"Multilateral"`), matched exactly
//! - a free-text description containing a `Статус: ...` line, as found in
//!   hand-made map layers

use std::sync::LazyLock;

use borderpost_model::StatusCode;
use regex::Regex;
use serde_json::Value;

/// `Статус:` marker followed by the value up to a line break or markup.
static STATUS_FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Статус:\s*([^\n<]+)").expect("Invalid status field regex"));

/// Lowercase Cyrillic term for a bilateral crossing.
pub const BILATERAL_TERM: &str = "двухсторонний";

/// Lowercase Cyrillic term for a multilateral crossing.
pub const MULTILATERAL_TERM: &str = "многосторонний";

/// Classify an enumerated status label. Case-sensitive; anything else is `None`.
pub fn classify_status(label: Option<&str>) -> Option<StatusCode> {
    match label? {
        "Bilateral" => Some(StatusCode::Bilateral),
        "Multilateral" => Some(StatusCode::Multilateral),
        _ => None,
    }
}

/// Extract a status from a free-text description.
///
/// Only the text captured after the first `Статус:` marker is inspected.
/// The bilateral term is tested first.
pub fn extract_status(description: &str) -> Option<StatusCode> {
    let captured = STATUS_FIELD_REGEX.captures(description)?.get(1)?;
    let text = captured.as_str().trim().to_lowercase();
    if text.contains(BILATERAL_TERM) {
        Some(StatusCode::Bilateral)
    } else if text.contains(MULTILATERAL_TERM) {
        Some(StatusCode::Multilateral)
    } else {
        None
    }
}

/// [`extract_status`] over an arbitrary JSON value; non-strings yield `None`.
pub fn extract_status_value(value: &Value) -> Option<StatusCode> {
    value.as_str().and_then(extract_status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_enumerated_labels() {
        assert_eq!(classify_status(None), None);
        assert_eq!(classify_status(Some("Bilateral")), Some(StatusCode::Bilateral));
        assert_eq!(
            classify_status(Some("Multilateral")),
            Some(StatusCode::Multilateral)
        );
        assert_eq!(classify_status(Some("random text")), None);
        assert_eq!(classify_status(Some("bilateral")), None);
        assert_eq!(classify_status(Some("")), None);
    }

    #[test]
    fn test_extract_stops_at_markup() {
        let html = "<b>МАПП Кордай</b><br>Статус: Многосторонний<br>Режим: круглосуточно";
        assert_eq!(extract_status(html), Some(StatusCode::Multilateral));
    }

    #[test]
    fn test_extract_stops_at_line_break() {
        let text = "Статус: уточняется\nПримечание: двухсторонний в прошлом";
        assert_eq!(extract_status(text), None);
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        assert_eq!(
            extract_status("Статус: ДВУХСТОРОННИЙ"),
            Some(StatusCode::Bilateral)
        );
        assert_eq!(
            extract_status("Статус:двухсторонний (пешеходный)"),
            Some(StatusCode::Bilateral)
        );
    }

    #[test]
    fn test_extract_requires_marker() {
        assert_eq!(extract_status("Двухсторонний пункт"), None);
        assert_eq!(extract_status("статус: двухсторонний"), None);
        assert_eq!(extract_status(""), None);
    }

    #[test]
    fn test_extract_from_non_string_values() {
        assert_eq!(extract_status_value(&Value::Null), None);
        assert_eq!(extract_status_value(&json!(12)), None);
        assert_eq!(
            extract_status_value(&json!("Статус: Многосторонний")),
            Some(StatusCode::Multilateral)
        );
    }
}
