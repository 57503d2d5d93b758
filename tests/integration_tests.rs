use std::collections::HashMap;
use tagcase::{Error, TagMap, TagOptions, TagString};

#[test]
fn test_sort() {
    let mut tag = TagString::from(r#"xyz:"val1" abc:"val2""#);
    tag.sort();
    assert_eq!(tag, r#"abc:"val2" xyz:"val1""#);
}

#[test]
fn test_sort_puts_json_first() {
    let mut tag = TagString::from(r#"xyz:"1" abc:"2" json:"3" col:"4""#);
    tag.sort();
    assert_eq!(tag, r#"json:"3" abc:"2" col:"4" xyz:"1""#);
}

#[test]
fn test_sort_normalizes_spacing() {
    let mut tag = TagString::from("  b:\"2\"\t\ta:\"1\"   ");
    tag.sort();
    assert_eq!(tag, r#"a:"1" b:"2""#);
}

#[test]
fn test_sort_with_custom_leading_key() {
    let mut tag = TagString::from(r#"json:"a" protobuf:"b" col:"c""#);
    tag.sort_with_options(&TagOptions::new().with_leading_key("protobuf"));
    assert_eq!(tag, r#"protobuf:"b" col:"c" json:"a""#);
}

#[test]
fn test_get() {
    let tag = TagString::from(r#"var1:"val1" var2:"val2""#);
    assert_eq!(tag.get("var1"), "val1");
    assert_eq!(tag.get("var2"), "val2");
    assert_eq!(tag.get("var3"), "");
}

#[test]
fn test_get_value_with_spaces_and_commas() {
    let tag = TagString::from(r#"json:"name,omitempty" doc:"the user's name""#);
    assert_eq!(tag.get("json"), "name,omitempty");
    assert_eq!(tag.get("doc"), "the user's name");
}

#[test]
fn test_set() {
    let mut tag = TagString::from(r#"var1:"val1" var2:"val2""#);
    assert!(!tag.set("var", "val"));
    assert_eq!(tag.get("var"), "");

    assert!(tag.set("var2", "val22"));
    assert_eq!(tag.get("var2"), "val22");

    assert_eq!(tag, r#"var1:"val1" var2:"val22""#);
}

#[test]
fn test_set_absent_key_leaves_bytes_unchanged() {
    let original = "a:\"1\"   b:\"2\"\t";
    let mut tag = TagString::from(original);
    assert!(!tag.set("c", "3"));
    assert_eq!(tag, original);
}

#[test]
fn test_set_multi() {
    let mut tag = TagString::from(r#"var1:"val1" var2:"val2""#);
    let set_map = HashMap::from([("var2", "val22"), ("var3", "val3")]);
    assert!(!tag.set_multi(&set_map));
    assert_eq!(tag.get("var2"), "val22");
    assert_eq!(tag.get("var3"), "");
    assert_eq!(tag, r#"var1:"val1" var2:"val22""#);
}

#[test]
fn test_set_multi_all_present() {
    let mut tag = TagString::from(r#"a:"1" b:"2""#);
    assert!(tag.set_multi([("a", "10"), ("b", "20")]));
    assert_eq!(tag, r#"a:"10" b:"20""#);
}

#[test]
fn test_add() {
    let mut tag = TagString::from(r#"var1:"val1" var2:"val2""#);
    tag.add("var2", "val22");
    assert_eq!(tag.get("var2"), "val22");

    tag.add("var3", "val3");
    assert_eq!(tag.get("var3"), "val3");

    assert_eq!(tag, r#"var1:"val1" var2:"val22" var3:"val3""#);
}

#[test]
fn test_add_multi() {
    let mut tag = TagString::from(r#"var1:"val1" var2:"val2""#);
    let add_map = HashMap::from([("var2", "val22"), ("var3", "val3")]);
    tag.add_multi(&add_map);
    assert_eq!(tag.get("var2"), "val22");
    assert_eq!(tag.get("var3"), "val3");
    assert_eq!(tag, r#"var1:"val1" var2:"val22" var3:"val3""#);
}

#[test]
fn test_add_multi_from_tag_map_keeps_order() {
    let mut tag = TagString::new();
    let map: TagMap = [("json", "id"), ("col", "id"), ("db", "users")]
        .into_iter()
        .collect();
    tag.add_multi(&map);
    assert_eq!(tag, r#"json:"id" col:"id" db:"users""#);
}

#[test]
fn test_remove() {
    let mut tag = TagString::from(r#"var1:"val1" var2:"val2""#);
    tag.remove("var2").unwrap();
    assert_eq!(tag.get("var2"), "");
    assert_eq!(tag.get("var1"), "val1");
    assert_eq!(tag, r#"var1:"val1""#);
}

#[test]
fn test_remove_missing_key() {
    let mut tag = TagString::from(r#"var1:"val1""#);
    assert!(tag.remove("var2").is_ok());
    assert_eq!(tag, r#"var1:"val1""#);
}

#[test]
fn test_remove_takes_only_first_duplicate() {
    let mut tag = TagString::from(r#"a:"1" a:"2""#);
    tag.remove("a").unwrap();
    assert_eq!(tag, r#"a:"2""#);
    assert_eq!(tag.get("a"), "2");
}

#[test]
fn test_remove_multi_takes_only_first_duplicate() {
    let mut tag = TagString::from(r#"a:"1" b:"x" a:"2""#);
    tag.remove_multi(["a"]).unwrap();
    assert_eq!(tag, r#"b:"x" a:"2""#);
    assert_eq!(tag.get("a"), "2");

    tag.remove_multi(["a"]).unwrap();
    assert_eq!(tag, r#"b:"x""#);
}

#[test]
fn test_remove_multi() {
    let mut tag = TagString::from(r#"var1:"val1" var2:"val2" var3:"val3""#);
    tag.remove_multi(["var2", "var3", "var4"]).unwrap();
    assert_eq!(tag.get("var2"), "");
    assert_eq!(tag.get("var3"), "");
    assert_eq!(tag, r#"var1:"val1""#);
}

#[test]
fn test_remove_and_remove_multi_disagree_on_invalid_keys() {
    let mut tag = TagString::from(r#"a:"1" b:"2""#);
    assert!(tag.remove("a b").is_ok());

    let err = tag.remove_multi(vec!["a b".to_string(), "b".to_string()]);
    match err {
        Err(Error::UnrecognizedKeys(keys)) => assert_eq!(keys, vec!["a b"]),
        other => panic!("Expected UnrecognizedKeys, got {other:?}"),
    }
    assert_eq!(tag, r#"a:"1""#);
}

#[test]
fn test_lookup_distinguishes_empty_from_missing() {
    let tag = TagString::from(r#"json:"" col:"x""#);
    assert_eq!(tag.get("json"), "");
    assert_eq!(tag.lookup("json"), Some(""));
    assert_eq!(tag.lookup("db"), None);
    assert!(tag.contains("json"));
    assert!(!tag.contains("db"));
}

#[test]
fn test_full_field_tag_round() {
    let mut tag = TagString::from(
        r#"protobuf:"bytes,7,opt,name=user" json:"author,omitempty" col:"users_id" fkey:"id""#,
    );
    tag.remove_multi(["fkey", "col"]).unwrap();
    tag.add("db", "author_id");
    tag.sort();
    assert_eq!(
        tag,
        r#"json:"author,omitempty" db:"author_id" protobuf:"bytes,7,opt,name=user""#
    );
    assert_eq!(tag.protobuf_info().unwrap().name.as_deref(), Some("user"));
}

#[test]
fn test_to_map_and_back() {
    let tag = TagString::from(r#"json:"id"   col:"id""#);
    let map = tag.to_map();
    assert_eq!(TagString::from(map), r#"json:"id" col:"id""#);
}

#[test]
fn test_string_conversions() {
    let tag: TagString = r#"a:"1""#.parse().unwrap();
    assert_eq!(tag.as_str(), r#"a:"1""#);
    assert_eq!(tag.to_string(), r#"a:"1""#);
    let inner: String = tag.clone().into();
    assert_eq!(inner, tag.into_inner());
}
