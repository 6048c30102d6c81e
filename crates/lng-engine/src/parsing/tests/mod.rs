//! Fixture tests for the parsing module.
//!
//! Fixtures (.lng) live in `fixtures/`. Each one is split, checked against
//! the splitter invariants and fully resolved.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::{
    error::{LoadError, ParseError},
    parsing::{parse_document, resolve::resolve_blocks, snapshot},
};

fn read_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.lng")).unwrap()
}

fn resolve_fixture(name: &str) -> BTreeMap<String, String> {
    let text = read_fixture(name);
    let rope = Rope::from(text.as_str());

    let doc = parse_document(&rope).unwrap();
    snapshot::invariants(&rope, &doc.blocks);

    resolve_blocks(&doc.blocks)
        .unwrap()
        .into_iter()
        .map(|b| (b.name, b.text))
        .collect()
}

#[test]
fn fixture_changing_separators() {
    let out = resolve_fixture("changing_separators");

    assert_eq!(out["block1"], "Text with Substitution link");
    assert_eq!(out["var1"], "Substitution");
    // final line has no newline; its trailing space is content
    assert_eq!(out["block2"], "Text with Substitution reference ");
}

#[test]
fn fixture_changing_separators_blocks() {
    let text = read_fixture("changing_separators");
    let rope = Rope::from(text.as_str());
    let doc = parse_document(&rope).unwrap();

    insta::assert_debug_snapshot!(snapshot::normalize(&rope, &doc.blocks), @r##"
    Snap {
        blocks: [
            BlockSnap {
                name: "block1",
                line: 2,
                span: (
                    85,
                    260,
                ),
                delimiters: "v0 === $ $ ;",
                comment: Some(
                    "a separator is specified, the name of the block and below is the text of the block in which there is a variable (the name of another block)",
                ),
                source: "=== block1 ; a separator is specified, t...",
            },
            BlockSnap {
                name: "var1",
                line: 5,
                span: (
                    323,
                    345,
                ),
                delimiters: "v1 === « » #",
                comment: None,
                source: "=== var1\nSubstitution\n",
            },
            BlockSnap {
                name: "block2",
                line: 7,
                span: (
                    345,
                    451,
                ),
                delimiters: "v1 === « » #",
                comment: Some(
                    "in this block, the block reference (variable) is set to “ ”",
                ),
                source: "=== block2 # in this block, the block re...",
            },
        ],
    }
    "##);
}

#[test]
fn fixture_volkswagen() {
    let out = resolve_fixture("volkswagen");

    assert_eq!(
        out,
        BTreeMap::from([
            ("company".to_string(), r#""Volkswagen Group""#.to_string()),
            ("text1".to_string(), r#""Volkswagen Group" works"#.to_string()),
            (
                "text2".to_string(),
                r#""Volkswagen Group" works successfully. Contacts: "Volkswagen Group", tel.:12345"#
                    .to_string()
            ),
            (
                "text3".to_string(),
                concat!(
                    r#""Volkswagen Group" works successfully. Contacts: "Volkswagen Group", tel.:12345"#,
                    r#" The financial performance of "Volkswagen Group" is not very good."#,
                    r#" "Volkswagen Group" works has been having some difficulties lately!"#,
                )
                .to_string()
            ),
        ])
    );
}

#[test]
fn fixture_aliases() {
    let out = resolve_fixture("aliases");

    let per2 = "222 and per1=111";
    let per3 = format!("333 111 111 {per2} {per2} ");
    let per4 = format!("444 111 111 --- {per2} {per2} +++ per3: {per3}");

    assert_eq!(out["per1"], "111");
    assert_eq!(out["per1_todo_new"], "111");
    assert_eq!(out["per2"], per2);
    assert_eq!(out["per3"], per3);
    assert_eq!(out["v_1per3"], per3);
    assert_eq!(out["v_1per2"], per3);
    assert_eq!(out["per4"], per4);
    assert!(out["text3"].ends_with(&format!(
        "We output per4:\n{per4}\nAnd once again per4 through an alias:\n{per4}"
    )));
    assert!(!out.contains_key("q2"), "aliases never become blocks");
}

#[test]
fn fixture_aliases_keeps_one_block_per_name() {
    let text = read_fixture("aliases");
    let doc = parse_document(&Rope::from(text.as_str())).unwrap();

    let names: Vec<_> = doc.blocks.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "per1",
            "per1_todo_new",
            "per2",
            "per3",
            "v_1per3",
            "v_1per2",
            "per4",
            "company",
            "text1",
            "text2",
            "text3",
        ]
    );
}

#[test]
fn resolved_text_has_no_reference_syntax_left() {
    for (name, text) in resolve_fixture("volkswagen") {
        assert!(!text.contains('$'), "{name}: {text}");
        assert!(!text.contains('{'), "{name}: {text}");
    }
}

#[test]
fn references_under_old_tokens_are_literal_after_switch() {
    let text = "!!! === $ $ ;\n=== price\n5\n!!! === { } ;\n=== label\ncosts $price$ or {price}\n";
    let doc = parse_document(&Rope::from(text)).unwrap();
    let out = resolve_blocks(&doc.blocks).unwrap();

    assert_eq!(out[1].text, "costs $price$ or 5");
}

#[test]
fn stray_text_after_explicit_end() {
    let text = "!!! === $ $ ;\n=== a\nx\n===\n\nnot in a block\n";
    let err = parse_document(&Rope::from(text)).unwrap_err();

    assert_eq!(
        err,
        LoadError::Parse(ParseError::ContentOutsideBlock {
            line: 6,
            text: "not in a block".into(),
        })
    );
}
