// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvDocument, EnvMap, EnvValue, LineKind, decode, encode, parse_all};
use proptest::prelude::*;

// =============================================================================
// Codec
// =============================================================================

#[test]
fn test_encode_scalars() {
    let encoded = vec![
        ("null", encode(&EnvValue::Null)),
        ("true", encode(&EnvValue::Bool(true))),
        ("false", encode(&EnvValue::Bool(false))),
        ("number", encode(&EnvValue::from(8080))),
        ("plain", encode(&EnvValue::from("localhost"))),
        ("empty", encode(&EnvValue::from(""))),
    ];
    insta::assert_debug_snapshot!(encoded, @r#"
    [
        (
            "null",
            "",
        ),
        (
            "true",
            "true",
        ),
        (
            "false",
            "false",
        ),
        (
            "number",
            "8080",
        ),
        (
            "plain",
            "localhost",
        ),
        (
            "empty",
            "",
        ),
    ]
    "#);
}

#[test]
fn test_encode_structured_as_compact_json() {
    let value = EnvValue::from(serde_json::json!({"a": 1, "b": 2}));
    assert_eq!(encode(&value), r#"{"a":1,"b":2}"#);

    let list = EnvValue::from(serde_json::json!(["x", "y"]));
    assert_eq!(encode(&list), r#"["x","y"]"#);
}

#[test]
fn test_encode_quotes_special_text() {
    assert_eq!(encode(&"hello world".into()), r#""hello world""#);
    assert_eq!(encode(&"a#b".into()), r#""a#b""#);
    assert_eq!(encode(&"a=b".into()), r#""a=b""#);
    assert_eq!(encode(&"  pad  ".into()), r#""  pad  ""#);
    assert_eq!(encode(&r#"say "hi" now"#.into()), r#""say \"hi\" now""#);
    assert_eq!(encode(&"l1\nl2".into()), r#""l1\nl2""#);
}

#[test]
fn test_json_value_conversion() {
    assert_eq!(EnvValue::from(serde_json::Value::Null), EnvValue::Null);
    assert_eq!(
        EnvValue::from(serde_json::json!(false)),
        EnvValue::Bool(false)
    );
    assert_eq!(
        EnvValue::from(serde_json::json!(3.5)),
        EnvValue::Text("3.5".to_string())
    );
    assert_eq!(EnvValue::from(None::<&str>), EnvValue::Null);
    assert_eq!(
        EnvValue::from(Some("x")),
        EnvValue::Text("x".to_string())
    );
}

#[test]
fn test_decode_variants() {
    assert_eq!(decode(""), "");
    assert_eq!(decode("  plain  "), "plain");
    assert_eq!(decode(r#""quoted value""#), "quoted value");
    assert_eq!(decode("'single quoted'"), "single quoted");
    assert_eq!(decode(r#""say \"hi\"""#), r#"say "hi""#);
    assert_eq!(decode(r"'it\'s'"), "it's");
    assert_eq!(decode(r"one\ntwo"), "one\ntwo");
    assert_eq!(decode(r#""mismatched'"#), r#""mismatched'"#);
    assert_eq!(decode(r#"""#), r#"""#);
}

#[test]
fn test_special_character_round_trip() {
    for text in ["hello world", "a#b", "a=b", "  pad  ", "l1\nl2\nl3", ""] {
        assert_eq!(decode(&encode(&text.into())), text, "round trip of {text:?}");
    }
}

#[test]
fn test_carriage_return_is_escaped() {
    assert_eq!(encode(&EnvValue::from("l1\rl2")), r#""l1\nl2""#);
    assert_eq!(encode(&EnvValue::from("a\r\nb\rc")), r#""a\nb\nc""#);
    assert_eq!(decode(&encode(&EnvValue::from("l1\rl2"))), "l1\nl2");
}

#[test]
fn test_json_does_not_decode_to_structure() {
    let encoded = encode(&EnvValue::from(serde_json::json!({"k": "v"})));
    assert_eq!(decode(&encoded), r#"{"k":"v"}"#);
}

proptest! {
    #[test]
    fn prop_plain_text_round_trips(text in "[A-Za-z0-9_.:/@+-]{0,40}") {
        prop_assert_eq!(decode(&encode(&EnvValue::from(text.as_str()))), text);
    }

    #[test]
    fn prop_spaced_text_round_trips(text in "[A-Za-z0-9 #=\t\n]{0,40}") {
        prop_assert_eq!(decode(&encode(&EnvValue::from(text.as_str()))), text);
    }

    #[test]
    fn prop_line_breaks_stay_on_one_line(text in "[a-z \r\n]{0,40}") {
        let encoded = encode(&EnvValue::from(text.as_str()));
        prop_assert!(!encoded.contains(['\r', '\n']), "{:?}", encoded);

        let doc = EnvDocument::parse(&format!("K={encoded}"));
        prop_assert_eq!(doc.lines().len(), 1);
        prop_assert_eq!(
            doc.value("K"),
            Some(text.replace("\r\n", "\n").replace('\r', "\n"))
        );
    }
}

// =============================================================================
// Document parsing
// =============================================================================

#[test]
fn test_parse_classifies_lines() {
    let doc = EnvDocument::parse("# comment\n\nKEY=value\n  # indented\nnot a pair\n=orphan\n");
    let kinds: Vec<_> = doc.lines().iter().map(|line| line.kind().clone()).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Comment,
            LineKind::Blank,
            LineKind::Assignment {
                key: "KEY".to_string(),
                value_start: 4,
            },
            LineKind::Comment,
            LineKind::Unrecognized,
            LineKind::Unrecognized,
        ]
    );
}

#[test]
fn test_parse_preserves_text_exactly() {
    for text in [
        "",
        "A=1",
        "A=1\n",
        "A=1\r\nB=2\r\n",
        "A=1\rB=2",
        "# header\n\n\nA = spaced \nB='x'\n",
    ] {
        assert_eq!(EnvDocument::parse(text).to_string(), text);
    }
}

#[test]
fn test_parse_all_skips_comments_and_trims_keys() {
    let map = parse_all("#APP=foo\n   # HIDDEN=bar\n  VISIBLE = ok \nQUOTED=\"a b\"\n");
    let entries: Vec<_> = map.iter().collect();
    assert_eq!(entries, vec![("VISIBLE", "ok"), ("QUOTED", "a b")]);
}

#[test]
fn test_parse_all_later_duplicate_wins_in_first_position() {
    let map = parse_all("DUP=first\nOTHER=x\nDUP=second\n");
    let entries: Vec<_> = map.iter().collect();
    assert_eq!(entries, vec![("DUP", "second"), ("OTHER", "x")]);
}

#[test]
fn test_value_split_at_first_equals() {
    let doc = EnvDocument::parse("URL=postgres://h/db?a=b\n");
    assert_eq!(doc.find("URL"), Some("postgres://h/db?a=b"));
}

// =============================================================================
// Mutation
// =============================================================================

#[test]
fn test_find_ignores_commented_keys() {
    let doc = EnvDocument::parse("#APP=foo\n   # HIDDEN=bar\nVISIBLE=ok\n  INDENTED=yes\n");
    assert!(!doc.contains("APP"));
    assert!(!doc.contains("HIDDEN"));
    assert!(doc.contains("VISIBLE"));
    assert!(doc.contains("INDENTED"));
}

#[test]
fn test_find_matches_keys_literally() {
    let doc = EnvDocument::parse("A.B=1\nAXB=2\n");
    assert_eq!(doc.find("A.B"), Some("1"));
    assert_eq!(doc.find("A.*"), None);
    assert_eq!(doc.find("a.b"), None);
}

#[test]
fn test_upsert_replaces_value_only() {
    let mut doc = EnvDocument::parse("# db\n  HOST = old \r\nPORT=1\r\n");
    doc.upsert("HOST", "new");
    assert_eq!(doc.to_string(), "# db\n  HOST =new\r\nPORT=1\r\n");
}

#[test]
fn test_upsert_appends_with_line_break() {
    let mut doc = EnvDocument::parse("A=1");
    doc.upsert("B", "2");
    assert_eq!(doc.to_string(), "A=1\nB=2");

    let mut doc = EnvDocument::parse("A=1\r\n");
    doc.upsert("B", "2");
    assert_eq!(doc.to_string(), "A=1\r\nB=2");

    let mut empty = EnvDocument::default();
    empty.upsert("A", "1");
    assert_eq!(empty.to_string(), "A=1");
}

#[test]
fn test_upsert_touches_first_duplicate_only() {
    let mut doc = EnvDocument::parse("DUP=1\nDUP=2\n");
    doc.upsert_value("DUP", &"3".into());
    assert_eq!(doc.to_string(), "DUP=3\nDUP=2\n");
    assert_eq!(doc.value("DUP").as_deref(), Some("3"));
    assert_eq!(doc.to_map().get("DUP"), Some("2"));
}

#[test]
fn test_remove_drops_every_occurrence() {
    let mut doc = EnvDocument::parse("DUP=1\nKEEP=x\nDUP=2\n# DUP=3\n");
    assert!(doc.remove("DUP"));
    assert_eq!(doc.to_string(), "KEEP=x\n# DUP=3\n");
    assert!(!doc.remove("MISSING"));
}

#[test]
fn test_collapse_blank_runs() {
    let cases = [
        ("A=1\n\n\n\nB=2\n", "A=1\n\nB=2\n"),
        ("A=1\n\nB=2\n", "A=1\n\nB=2\n"),
        ("\n\n\nA=1", "\n\nA=1"),
        ("A=1\n  \n\n\nB=2", "A=1\n  \n\nB=2"),
        ("A=1\r\n\r\n\r\n\r\nB=2", "A=1\r\n\r\nB=2"),
    ];
    for (input, expected) in cases {
        let mut doc = EnvDocument::parse(input);
        doc.collapse_blank_runs();
        assert_eq!(doc.to_string(), expected, "collapsing {input:?}");
    }
}

#[test]
fn test_env_map_insert_replaces_in_place() {
    let mut map: EnvMap = [("A", "1"), ("B", "2")].into_iter().collect();
    assert_eq!(map.insert("A", "3"), Some("1".to_string()));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(map.get("A"), Some("3"));
    assert_eq!(map.len(), 2);
    assert!(!map.is_empty());
}
