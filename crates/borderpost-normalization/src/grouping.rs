//! Grouping and dispatch of normalized records into output sets.

use std::collections::BTreeMap;

use borderpost_model::NormalizedCheckpoint;

/// Partition `records` by `key_fn`.
///
/// Records whose key is missing or blank go to `unknown_key`. Buckets are
/// keyed in sorted order; records inside a bucket keep their input order.
pub fn group_by<'a, T, F>(
    records: &'a [T],
    unknown_key: &str,
    key_fn: F,
) -> BTreeMap<String, Vec<&'a T>>
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut groups: BTreeMap<String, Vec<&'a T>> = BTreeMap::new();
    for record in records {
        let key = key_fn(record)
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(unknown_key);
        groups.entry(key.to_string()).or_default().push(record);
    }
    groups
}

/// Grouping key of a normalized record: the foreign country ISO code.
pub fn country_key(record: &NormalizedCheckpoint) -> Option<&str> {
    record.country.as_deref()
}

/// Which slice of the run an output set holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetKind {
    /// Every admitted record.
    All,
    /// Records of one country bucket.
    Group(String),
}

/// One artifact's worth of records.
#[derive(Debug, Clone)]
pub struct OutputSet<'a> {
    pub kind: SetKind,
    pub records: Vec<&'a NormalizedCheckpoint>,
}

/// Build the output sets of a run: the flat list first, then one set per
/// country bucket in key order.
pub fn dispatch<'a>(records: &'a [NormalizedCheckpoint], unknown_key: &str) -> Vec<OutputSet<'a>> {
    let groups = group_by(records, unknown_key, country_key);
    let mut sets = Vec::with_capacity(groups.len() + 1);
    sets.push(OutputSet {
        kind: SetKind::All,
        records: records.iter().collect(),
    });
    for (key, bucket) in groups {
        tracing::debug!(group = %key, records = bucket.len(), "Built output group");
        sets.push(OutputSet {
            kind: SetKind::Group(key),
            records: bucket,
        });
    }
    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: i64, country: Option<&str>) -> NormalizedCheckpoint {
        NormalizedCheckpoint {
            id: json!(id),
            country: country.map(str::to_string),
            ..NormalizedCheckpoint::default()
        }
    }

    #[test]
    fn test_group_by_keeps_insertion_order() {
        let records = vec![
            record(1, Some("CN")),
            record(2, Some("MN")),
            record(3, Some("CN")),
            record(4, None),
            record(5, Some("CN")),
        ];
        let groups = group_by(&records, "unknown", country_key);

        let ids = |key: &str| -> Vec<i64> {
            groups[key]
                .iter()
                .map(|r| r.id.as_i64().unwrap())
                .collect()
        };
        assert_eq!(groups.len(), 3);
        assert_eq!(ids("CN"), vec![1, 3, 5]);
        assert_eq!(ids("MN"), vec![2]);
        assert_eq!(ids("unknown"), vec![4]);
    }

    #[test]
    fn test_blank_key_is_unknown() {
        let records = vec![record(1, Some("  ")), record(2, Some(""))];
        let groups = group_by(&records, "unknown", country_key);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["unknown"]);
        assert_eq!(groups["unknown"].len(), 2);
    }

    #[test]
    fn test_group_by_generic_key() {
        let words = ["apple", "avocado", "banana"];
        let groups = group_by(&words, "?", |w| w.get(..1));
        assert_eq!(groups["a"], vec![&"apple", &"avocado"]);
        assert_eq!(groups["b"], vec![&"banana"]);
    }

    #[test]
    fn test_dispatch_flat_set_first() {
        let records = vec![record(1, Some("KZ")), record(2, Some("CN"))];
        let sets = dispatch(&records, "unknown");

        assert_eq!(sets.len(), 3);
        assert_eq!(sets[0].kind, SetKind::All);
        assert_eq!(sets[0].records.len(), 2);
        assert_eq!(sets[1].kind, SetKind::Group("CN".to_string()));
        assert_eq!(sets[2].kind, SetKind::Group("KZ".to_string()));
    }

    #[test]
    fn test_dispatch_empty_run() {
        let sets = dispatch(&[], "unknown");
        assert_eq!(sets.len(), 1);
        assert!(sets[0].records.is_empty());
    }
}
