//! Tests for index payload parsing

use crate::common::SAMPLE_INDEX;
use unidocs::core::error::ParseError;
use unidocs::core::index::{parse_index, parse_index_str, MemberType};

#[test]
fn test_parse_sample_payload() {
    let index = parse_index(SAMPLE_INDEX.as_bytes()).unwrap();

    assert_eq!(index.page_count(), 6);
    assert_eq!(index.term_count(), 4);
    assert_eq!(index.postings("gameobject"), &[0, 1]);
    assert!(index.postings("missing").is_empty());
    assert!(index.is_stop_word("the"));
    assert!(!index.is_stop_word("transform"));

    let position = index.page(3).unwrap();
    assert_eq!(position.title, "Transform-position");
    assert_eq!(position.member_type, MemberType::Property);
    assert_eq!(
        position.description,
        "The world space position of the Transform."
    );
}

#[test]
fn test_parse_is_deterministic() {
    let first = parse_index_str(SAMPLE_INDEX).unwrap();
    let second = parse_index_str(SAMPLE_INDEX).unwrap();
    assert!(first.same_content(&second));
}

#[test]
fn test_blocks_in_any_order_and_multiline() {
    let payload = r#"
var searchIndex = {
  "vector3": [0]
};
var common = {"the": 1};
var info = [
  ["Representation of 3D vectors and points.", 0]
];
var pages = [
  ["Vector3"]
];
"#;
    let index = parse_index_str(payload).unwrap();
    assert_eq!(index.page_count(), 1);
    assert_eq!(index.pages()[0].title, "Vector3");
    assert_eq!(index.postings("vector3"), &[0]);
}

#[test]
fn test_missing_block_is_rejected() {
    let payload = r#"var pages = [["A"]]; var info = []; var common = {};"#;
    assert_eq!(
        parse_index_str(payload).unwrap_err(),
        ParseError::MissingBlock("searchIndex")
    );
}

#[test]
fn test_out_of_range_posting_is_rejected() {
    let payload =
        r#"var pages = [["A"]]; var info = []; var common = {}; var searchIndex = {"a":[0,3]};"#;
    assert!(matches!(
        parse_index_str(payload),
        Err(ParseError::PageOutOfRange { page: 3, .. })
    ));
}

#[test]
fn test_invalid_utf8_is_rejected() {
    assert_eq!(
        parse_index(&[0xff, 0xfe, 0x00]).unwrap_err(),
        ParseError::InvalidEncoding
    );
}

#[test]
fn test_script_text_is_never_evaluated() {
    let payload = r#"
alert("hi");
var pages = [["A"]]; var info = []; var common = {};
var searchIndex = {"a":[0]};
console.log(pages);
"#;
    let index = parse_index_str(payload).unwrap();
    assert_eq!(index.page_count(), 1);
}

#[test]
fn test_assignment_like_description_is_plain_text() {
    let payload = r#"
var pages = [["Scripting"],["Transform"]];
var info = [["Declare fields with var pages = [] in UnityScript",0],["Holds const info = []",0]];
var common = {};
var searchIndex = {"scripting":[0],"transform":[1]};
"#;
    let index = parse_index_str(payload).unwrap();

    assert_eq!(index.page_count(), 2);
    assert_eq!(index.postings("transform"), &[1]);
    assert_eq!(index.page(1).unwrap().description, "Holds const info = []");
}
