use lng_engine::{
    ConfigError, CycleError, Key, KeyError, LoadError, Localizer, ParseError, Translation, load,
    lookup,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const COMPANY: &str = "\
!!! === $ $ ; setting, block separator, variable start and end, comment start marker
=== company ; company information
Volkswagen Group
=== text1 ; when it works
$company$ works
";

#[test]
fn loads_and_looks_up_resolved_text() {
    let store = load(COMPANY).unwrap();

    assert_eq!(lookup(&store, "company").unwrap(), "Volkswagen Group");
    assert_eq!(lookup(&store, "text1").unwrap(), "Volkswagen Group works");
    assert_eq!(store.comment("company"), Some("company information"));
}

#[test]
fn delimiters_switch_and_switch_back() {
    let text = "\
!!! === $ $ ;
=== company
ACME
!!! *** { } %
*** text2 % curly braces here
{company} rocks
***
!!! === $ $ ;
=== text3
$text2$!
";
    let store = load(text).unwrap();

    assert_eq!(lookup(&store, "text2").unwrap(), "ACME rocks");
    assert_eq!(lookup(&store, "text3").unwrap(), "ACME rocks!");
}

#[test]
fn missing_key_does_not_poison_store() {
    let store = load(COMPANY).unwrap();

    assert_eq!(
        lookup(&store, "nope"),
        Err(KeyError::NotFound { key: "nope".into() })
    );
    assert_eq!(lookup(&store, "company").unwrap(), "Volkswagen Group");
    assert_eq!(store.lookup_or_key("nope"), Translation::Missing("nope"));
}

#[test]
fn cycle_fails_the_whole_load() {
    let err = load("!!! === $ $ ;\n=== ok\nfine\n=== a\n$b$\n=== b\n$a$\n").unwrap_err();

    assert_eq!(
        err,
        LoadError::Cycle(CycleError {
            path: vec!["a".into(), "b".into(), "a".into()],
        })
    );
    insta::assert_snapshot!(err.to_string(), @"reference cycle: a -> b -> a");
}

#[test]
fn duplicate_name_fails_the_whole_load() {
    let err = load("!!! === $ $ ;\n=== a\n1\n=== a\n2\n").unwrap_err();

    assert_eq!(
        err,
        LoadError::Parse(ParseError::DuplicateBlock {
            name: "a".into(),
            line: 4,
            first_line: 2,
        })
    );
    insta::assert_snapshot!(err.to_string(), @"line 4: block `a` is already defined on line 2");
}

#[rstest]
#[case::empty("", LoadError::Config(ConfigError::Empty))]
#[case::no_directive(
    "=== a\nx\n",
    LoadError::Config(ConfigError::MissingDirective { line: 1 })
)]
#[case::short_directive(
    "!!! === $\n=== a\nx\n",
    LoadError::Config(ConfigError::TooFewTokens { line: 1, prefix: "!!!".into(), found: 2 })
)]
#[case::undefined(
    "!!! === $ $ ;\n=== a\n$b$\n",
    LoadError::Parse(ParseError::UndefinedReference { block: "a".into(), name: "b".into(), line: 3 })
)]
#[case::unterminated(
    "!!! === $ $ ;\n=== a\nprice: 5$\n",
    LoadError::Parse(ParseError::UnterminatedReference { block: "a".into(), line: 3 })
)]
#[case::stray_end(
    "!!! === { } ;\n=== a\nprice } here\n",
    LoadError::Parse(ParseError::StrayReferenceEnd { block: "a".into(), token: "}".into(), line: 3 })
)]
#[case::token_in_reference(
    "!!! === { } ;\n=== a\nA\n=== b\n{a {x}\n",
    LoadError::Parse(ParseError::MalformedReference { block: "b".into(), reference: "a {x".into(), line: 5 })
)]
#[case::malformed(
    "!!! === $ $ ;\n=== a\nA\n=== b\n$a b c$\n",
    LoadError::Parse(ParseError::MalformedReference { block: "b".into(), reference: "a b c".into(), line: 5 })
)]
fn load_errors(#[case] text: &str, #[case] expected: LoadError) {
    assert_eq!(load(text).unwrap_err(), expected);
}

#[rstest]
#[case("$ $", "{ }")]
#[case("{ }", "« »")]
#[case("« »", "%% %%")]
fn same_resource_under_any_variable_tokens(#[case] from: &str, #[case] to: &str) {
    let write = |vars: &str| {
        let (start, end) = vars.split_once(' ').unwrap();
        format!("!!! === {vars} ;\n=== company\nACME\n=== text1\n{start}company{end} works\n")
    };

    let a = load(&write(from)).unwrap();
    let b = load(&write(to)).unwrap();

    assert_eq!(a, b);
    assert_eq!(lookup(&b, "text1").unwrap(), "ACME works");
}

#[test]
fn resolved_text_carries_no_unresolved_references() {
    let store = load(COMPANY).unwrap();
    for (name, text) in store.iter() {
        assert!(!text.contains('$'), "{name}: {text}");
    }
}

#[test]
fn distinct_variable_tokens_leave_nothing_behind() {
    let text = "!!! === « » ;\n=== a\nA\n=== b\n«a» and «a x» then «x»\n";
    let store = load(text).unwrap();
    for (name, text) in store.iter() {
        assert!(!text.contains('«') && !text.contains('»'), "{name}: {text}");
    }
    assert_eq!(lookup(&store, "b").unwrap(), "A and A then A");
}

#[test]
fn ten_thousand_block_chain_loads() {
    let mut text = String::from("!!! === $ $ ;\n");
    for i in 0..10_000 {
        text.push_str(&format!("=== b{i}\n$b{}$\n", i + 1));
    }
    text.push_str("=== b10000\nend\n");

    let store = load(&text).unwrap();
    assert_eq!(store.len(), 10_001);
    assert_eq!(lookup(&store, "b0").unwrap(), "end");
}

#[test]
fn byte_order_mark_is_skipped() {
    let text = "\u{feff}!!! === $ $ ;\n=== a\nA\n!!! === { } ;\n=== b\n{a}!\n";
    let store = load(text).unwrap();
    assert_eq!(lookup(&store, "b").unwrap(), "A!");
}

#[test]
fn registered_keys_are_checked_up_front() {
    let store = load(COMPANY).unwrap();
    let keys: Vec<Key> = ["company", "text1", "text2"]
        .into_iter()
        .map(|k| Key::new(k).unwrap())
        .collect();

    assert_eq!(
        store.check_keys(&keys),
        Err(KeyError::Missing {
            keys: vec!["text2".into()],
        })
    );
}

#[test]
fn localizer_reload_is_all_or_nothing() {
    let l10n = Localizer::new();
    l10n.reload_from_str("en", COMPANY).unwrap();

    assert!(l10n.reload_from_str("de", "!!! === $ $ ;\n=== a\n$a$\n").is_err());
    assert_eq!(l10n.tr("text1"), "Volkswagen Group works");
    assert_eq!(l10n.tr("text9"), "text9");
}
