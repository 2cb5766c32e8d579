//! End-to-end tests from raw source JSON to output sets.

use borderpost_model::{NormalizeConfig, RawCheckpoint, StatusCode};
use borderpost_normalization::{Normalizer, SetKind, dispatch, execute_normalization};
use serde_json::json;

fn source(value: serde_json::Value) -> Vec<RawCheckpoint> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn zabaykalsk_end_to_end() {
    let raw = source(json!([{
        "id": 17,
        "title": {"ru": "Забайкальск (авто)", "en": "Zabaikalsk"},
        "checkpoint_type": {"title": {"ru": "Автомобильный", "en": "Automobile checkpoint"}},
        "status": {"title": {"en": "Bilateral"}},
        "foreign_country": {"iso_code": "CN"},
        "foreign_checkpoint": {"title": {"ru": "Маньчжурия"}},
        "latitude": "49.6441",
        "longitude": "117.3215",
        "condition": true
    }]));

    let batch = execute_normalization(&raw, &Normalizer::new(&NormalizeConfig::default()));
    assert_eq!(batch.records.len(), 1);
    let record = &batch.records[0];
    assert_eq!(record.status, Some(StatusCode::Bilateral));

    insta::assert_snapshot!(serde_json::to_string_pretty(record).unwrap(), @r#"
    {
      "name_ru": "Забайкальск (авто)",
      "full_name": "Zabaykalsk (avto)",
      "name_en": "Zabaykalsk",
      "name": "Zabaykalsk / Manchzhuriya",
      "status": 1,
      "id": 17,
      "country": "CN",
      "latitude": "49.6441",
      "longitude": "117.3215",
      "foreign_checkpoint_ru": "Маньчжурия",
      "foreign_name": "Manchzhuriya"
    }
    "#);

    let sets = dispatch(&batch.records, "unknown");
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[1].kind, SetKind::Group("CN".to_string()));
    assert_eq!(sets[1].records[0].name.as_deref(), Some("Zabaykalsk / Manchzhuriya"));
}

#[test]
fn filtered_records_never_reach_any_group() {
    let raw = source(json!([
        {
            "id": 1,
            "title": {"ru": "Наушки"},
            "checkpoint_type": {"title": {"en": "Railway checkpoint"}},
            "status": {"title": {"en": "Multilateral"}},
            "foreign_country": {"iso_code": "MN"},
            "condition": true
        },
        {
            "id": 2,
            "title": {"ru": "Кяхта"},
            "checkpoint_type": {"title": {"en": "Automobile checkpoint"}},
            "status": {"title": {"en": "Multilateral"}},
            "foreign_country": {"iso_code": "MN"},
            "condition": false
        },
        {
            "id": 3,
            "title": {"ru": "Монды"},
            "checkpoint_type": {"title": {"en": "Automobile checkpoint"}},
            "status": {"title": {"en": "Bilateral"}},
            "foreign_country": {"iso_code": "MN"},
            "condition": true
        }
    ]));

    let batch = execute_normalization(&raw, &Normalizer::new(&NormalizeConfig::default()));
    for set in dispatch(&batch.records, "unknown") {
        let ids: Vec<_> = set.records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![json!(3)], "set {:?}", set.kind);
    }
}

#[test]
fn record_without_country_lands_in_unknown_bucket() {
    let raw = source(json!([{
        "id": 9,
        "title": {"ru": "Верхний Ларс"},
        "checkpoint_type": {"title": {"en": "Automobile checkpoint"}},
        "condition": true
    }]));

    let batch = execute_normalization(&raw, &Normalizer::new(&NormalizeConfig::default()));
    let sets = dispatch(&batch.records, "unknown");
    assert_eq!(sets[1].kind, SetKind::Group("unknown".to_string()));
    assert_eq!(batch.records[0].country, None);

    let text = serde_json::to_string(&batch.records[0]).unwrap();
    assert!(!text.contains("\"country\""));
}
