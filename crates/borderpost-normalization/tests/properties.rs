//! Property tests for admission, grouping, and name composition.

use std::collections::BTreeSet;

use borderpost_model::{NormalizeConfig, RawCheckpoint};
use borderpost_normalization::{
    Normalizer, SetKind, country_key, dispatch, execute_normalization, group_by,
};
use proptest::prelude::*;
use serde_json::{Value, json};

const TYPES: &[&str] = &["Automobile checkpoint", "Railway checkpoint", "Air checkpoint", ""];
const COUNTRIES: &[Option<&str>] = &[Some("CN"), Some("KZ"), Some("MN"), Some(""), None];

fn arb_checkpoint() -> impl Strategy<Value = (String, bool, Option<String>, Option<String>, Option<String>)> {
    (
        prop::sample::select(TYPES),
        any::<bool>(),
        prop::option::of("[А-Яа-яЁё ()-]{1,24}"),
        prop::sample::select(COUNTRIES),
        prop::option::of("[А-Яа-я]{1,12}"),
    )
        .prop_map(|(kind, open, title, country, foreign)| {
            (
                kind.to_string(),
                open,
                title,
                country.map(str::to_string),
                foreign,
            )
        })
}

fn build_source(
    specs: &[(String, bool, Option<String>, Option<String>, Option<String>)],
) -> Vec<RawCheckpoint> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, (kind, open, title, country, foreign))| {
            let mut value = json!({
                "id": idx,
                "checkpoint_type": {"title": {"en": kind}},
                "condition": open,
                "latitude": "50.0",
                "longitude": "100.0"
            });
            if let Some(title) = title {
                value["title"] = json!({"ru": title});
            }
            if let Some(country) = country {
                value["foreign_country"] = json!({"iso_code": country});
            }
            if let Some(foreign) = foreign {
                value["foreign_checkpoint"] = json!({"title": {"ru": foreign}});
            }
            serde_json::from_value(value).unwrap()
        })
        .collect()
}

fn ids<'a>(records: impl IntoIterator<Item = &'a borderpost_model::NormalizedCheckpoint>) -> Vec<u64> {
    records
        .into_iter()
        .map(|r| r.id.as_u64().unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    #[test]
    fn only_open_target_type_records_are_admitted(specs in prop::collection::vec(arb_checkpoint(), 0..40)) {
        let source = build_source(&specs);
        let batch = execute_normalization(&source, &Normalizer::new(&NormalizeConfig::default()));

        let expected: Vec<u64> = specs
            .iter()
            .enumerate()
            .filter(|(_, (kind, open, ..))| kind == "Automobile checkpoint" && *open)
            .map(|(idx, _)| idx as u64)
            .collect();
        prop_assert_eq!(ids(&batch.records), expected);
        prop_assert_eq!(batch.report.admitted + batch.report.rejected(), specs.len());
    }

    #[test]
    fn groups_partition_the_flat_list(specs in prop::collection::vec(arb_checkpoint(), 0..40)) {
        let source = build_source(&specs);
        let batch = execute_normalization(&source, &Normalizer::new(&NormalizeConfig::default()));
        let sets = dispatch(&batch.records, "unknown");

        prop_assert_eq!(&sets[0].kind, &SetKind::All);
        let flat = ids(sets[0].records.iter().copied());
        prop_assert_eq!(&flat, &ids(&batch.records));

        let mut seen = Vec::new();
        for set in &sets[1..] {
            let bucket = ids(set.records.iter().copied());
            // Within-bucket order follows the flat order.
            let mut sorted = bucket.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&bucket, &sorted);
            seen.extend(bucket);
        }
        let unique: BTreeSet<u64> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), seen.len(), "duplicate record across groups");
        prop_assert_eq!(unique, flat.iter().copied().collect::<BTreeSet<u64>>());
    }

    #[test]
    fn names_are_reproducible(specs in prop::collection::vec(arb_checkpoint(), 0..20)) {
        let source = build_source(&specs);
        let normalizer = Normalizer::new(&NormalizeConfig::default());
        let first = execute_normalization(&source, &normalizer);
        let second = execute_normalization(&source, &normalizer);
        let names = |batch: &borderpost_normalization::NormalizedBatch| -> Vec<Option<String>> {
            batch.records.iter().map(|r| r.name.clone()).collect()
        };
        prop_assert_eq!(names(&first), names(&second));
        for record in &first.records {
            if record.name_ru.is_some() {
                prop_assert!(record.name.as_deref().is_some_and(|n| !n.is_empty()));
            }
        }
    }

    #[test]
    fn group_keys_are_never_blank(specs in prop::collection::vec(arb_checkpoint(), 0..40)) {
        let source = build_source(&specs);
        let batch = execute_normalization(&source, &Normalizer::new(&NormalizeConfig::default()));
        let groups = group_by(&batch.records, "unknown", country_key);
        for key in groups.keys() {
            prop_assert!(!key.trim().is_empty());
        }
        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, batch.records.len());
    }
}

#[test]
fn unknown_fields_are_ignored() {
    let raw: RawCheckpoint = serde_json::from_value(json!({
        "id": 1,
        "checkpoint_type": {"title": {"en": "Automobile checkpoint"}},
        "condition": true,
        "working_hours": "24/7",
        "extra": {"nested": [1, 2, 3]}
    }))
    .unwrap();
    let record = Normalizer::new(&NormalizeConfig::default()).normalize(&raw).unwrap();
    assert_eq!(record.id, Value::from(1));
}
