use qsrecord_querystring::{QueryParamMap, percent_decode_lenient};

#[test]
fn parse_splits_pairs_and_lowercases_names() {
    let map = QueryParamMap::parse("Name=Foo&AGE=3");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("name"), Some("Foo"));
    assert_eq!(map.get("age"), Some("3"));
    assert_eq!(map.get("Name"), None);
}

#[test]
fn parse_drops_malformed_pairs() {
    let map = QueryParamMap::parse("a=1&broken&b=2&=orphan&empty=&&");
    let mut names: Vec<&str> = map.iter().map(|(k, _)| k).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn parse_splits_on_first_equals_only() {
    let map = QueryParamMap::parse("expr=a=b");
    assert_eq!(map.get("expr"), Some("a=b"));
}

#[test]
fn parse_keeps_values_raw() {
    let map = QueryParamMap::parse("q=hello%20world");
    assert_eq!(map.get("q"), Some("hello%20world"));
}

#[test]
fn parse_last_duplicate_wins() {
    let map = QueryParamMap::parse("a=1&A=2");
    assert_eq!(map.get("a"), Some("2"));
}

#[test]
fn parse_empty_payload_is_empty() {
    assert!(QueryParamMap::parse("").is_empty());
}

#[test]
fn insert_record_key_overrides_payload_key() {
    let mut map = QueryParamMap::parse("key=payload&x=1");
    map.insert_record_key("K1");
    assert_eq!(map.get("key"), Some("K1"));
    assert_eq!(map.record_key(), Some("K1"));
    assert_eq!(map.len(), 2);
}

#[test]
fn record_key_is_kept_apart_from_payload_values() {
    let mut map = QueryParamMap::parse("x=%41");
    assert_eq!(map.record_key(), None);
    map.insert_record_key("a%20b");
    let mut entries: Vec<(&str, &str)> = map.iter().collect();
    entries.sort_unstable();
    assert_eq!(entries, vec![("key", "a%20b"), ("x", "%41")]);
}

#[test]
fn percent_decode_passes_plain_values_through() {
    assert_eq!(percent_decode_lenient("plain"), "plain");
}

#[test]
fn percent_decode_handles_plus_and_escapes() {
    assert_eq!(percent_decode_lenient("a+b%26c"), "a b&c");
    assert_eq!(percent_decode_lenient("%E2%82%AC"), "€");
}

#[test]
fn percent_decode_falls_back_on_malformed_input() {
    assert_eq!(percent_decode_lenient("50%+off"), "50%+off");
    assert_eq!(percent_decode_lenient("%C3%28"), "%C3%28");
}
