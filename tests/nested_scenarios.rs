use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use trove::nested::{self, NestedLookup, NestedMap};
use trove::Error;

type Table = BTreeMap<String, BTreeMap<String, i32>>;

fn key(s: &str) -> Option<String> {
    Some(s.to_owned())
}

#[test]
fn test_two_key_scenario_shapes() -> anyhow::Result<()> {
    let mut table = Table::new();

    assert_eq!(nested::put(Some(&mut table), (key("x"), key("y")), 5)?, None);
    assert_eq!(serde_json::to_value(&table)?, json!({"x": {"y": 5}}));

    assert_eq!(nested::put(Some(&mut table), (key("x"), key("z")), 9)?, None);
    assert_eq!(serde_json::to_value(&table)?, json!({"x": {"y": 5, "z": 9}}));

    assert_eq!(nested::get(Some(&table), (Some("x"), Some("y")))?, Some(&5));
    Ok(())
}

#[test]
fn test_put_then_get_round_trip_three_keys() -> anyhow::Result<()> {
    let mut table: HashMap<u32, BTreeMap<char, HashMap<bool, String>>> = HashMap::new();
    table.put_nested((7, 'q', true), "hit".to_owned());

    assert_eq!(table.get_nested((&7u32, &'q', &true)).map(String::as_str), Some("hit"));
    assert_eq!(nested::get(Some(&table), (Some(&7u32), Some(&'q'), Some(&false)))?, None);
    assert_eq!(table.len(), 1);
    Ok(())
}

#[test]
fn test_missed_reads_do_not_mutate() -> anyhow::Result<()> {
    let mut table = Table::new();
    table.put_nested(("a".to_owned(), "b".to_owned()), 1);
    let before = serde_json::to_value(&table)?;

    for (outer, inner) in [("a", "zz"), ("zz", "b"), ("zz", "zz")] {
        assert_eq!(table.get_nested((outer, inner)), None);
    }

    assert_eq!(serde_json::to_value(&table)?, before);
    Ok(())
}

#[test]
fn test_absent_arguments_are_rejected() {
    let mut table = Table::new();

    let err = nested::put(Some(&mut table), (None, key("y")), 1).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { operation: "put", position: 1 }));

    let err = nested::get(None::<&Table>, (Some("x"), Some("y"))).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { operation: "get", position: 0 }));

    assert!(table.is_empty());
}
