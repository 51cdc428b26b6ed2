//! Integration tests for the licgen parser and renderer

use licgen::parser::split_template;
use licgen::{generate, parse, render, LicenseCatalog, RenderInput, RenderResult};
use pretty_assertions::assert_eq;

const SAMPLE: &str = "ID: mit
Name: MIT License
Description: Short and simple.
Permissions:
- commercial-use
- modify
Conditions:
- include-copyright
Limitations:
- liability
---
MIT License

Copyright (c) {{year}} {{name}}
";

#[test]
fn test_parse_full_template() {
    let record = parse(SAMPLE).expect("Should parse");
    assert_eq!(record.id, "mit");
    assert_eq!(record.name, "MIT License");
    assert_eq!(record.description, "Short and simple.");
    assert_eq!(record.permissions, vec!["commercial-use", "modify"]);
    assert_eq!(record.conditions, vec!["include-copyright"]);
    assert_eq!(record.limitations, vec!["liability"]);
    assert_eq!(record.body, "MIT License\n\nCopyright (c) {{year}} {{name}}");
}

#[test]
fn test_no_separator_yields_no_record() {
    assert!(parse("id: mit\nMIT License text").is_err());
    assert!(parse("").is_err());
    assert!(parse("ID: x\nthe --- is inline\n").is_err());
}

#[test]
fn test_split_reconstructs_content() {
    let (header, rest) = split_template(SAMPLE).expect("Should split");
    let record = parse(SAMPLE).unwrap();
    assert_eq!(format!("{}---{}", header, rest), SAMPLE);
    assert_eq!(rest.trim(), record.body);
}

#[test]
fn test_crlf_template() {
    let raw = SAMPLE.replace('\n', "\r\n");
    let record = parse(&raw).expect("Should parse CRLF");
    assert_eq!(record.id, "mit");
    assert_eq!(record.permissions, vec!["commercial-use", "modify"]);
    assert_eq!(record.body, "MIT License\r\n\r\nCopyright (c) {{year}} {{name}}");
}

#[test]
fn test_arbitrary_input_never_panics() {
    let inputs = [
        "---",
        "\n---\n",
        ":\n---\n",
        "- \n-\n:::\n---\n---\n---",
        "Permissions\n- a\n---\n",
        "ID: ü\nName: 名前\n---\n本文",
    ];
    for raw in inputs {
        let record = parse(raw).expect("Separator present, should parse");
        assert!(record.permissions.is_empty());
    }
}

#[test]
fn test_render_copyright_line() {
    let result = generate(
        "ID: x\n---\nCopyright {{year}} {{name}}",
        &RenderInput::new().with_name("").with_year("2030"),
        2024,
    )
    .unwrap();
    assert_eq!(
        result,
        RenderResult {
            rendered_text: "Copyright 2030 [fullname]".to_string(),
            show_name_field: true,
            show_year_field: true,
        }
    );
}

#[test]
fn test_render_is_idempotent() {
    let record = parse(SAMPLE).unwrap();
    let input = RenderInput::new().with_name("Ada Lovelace").with_year(1843);
    let first = render(&record, &input, 2026);
    let second = render(&record, &input, 2026);
    assert_eq!(first, second);
    assert_eq!(
        first.rendered_text,
        "MIT License\n\nCopyright (c) 1843 Ada Lovelace"
    );
}

#[test]
fn test_fields_hidden_without_placeholders() {
    let record = parse("ID: unlicense\n---\nPublic domain.").unwrap();
    for input in [
        RenderInput::new(),
        RenderInput::new().with_name("Ada").with_year(2000),
    ] {
        let result = render(&record, &input, 2026);
        assert!(!result.show_name_field);
        assert!(!result.show_year_field);
    }
}

#[test]
fn test_duplicate_ids_keep_later_template() {
    let mut catalog = LicenseCatalog::new();
    let report = catalog.load_sources([
        ("first", "ID: mit\nName: First\n---\none"),
        ("second", "ID: mit\nName: Second\n---\ntwo"),
    ]);
    assert_eq!(report.replaced, vec!["mit"]);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("mit").unwrap().name, "Second");
}
