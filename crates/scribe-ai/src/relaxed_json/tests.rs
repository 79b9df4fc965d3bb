use serde_json::json;

use super::*;

#[test]
fn fenced_javascript_chart_payload() {
    let raw = "```javascript\n{value: 10, label: 'A'}\n```";
    assert_eq!(strip_fences(raw), "{value: 10, label: 'A'}");
    assert_eq!(parse_output(raw).unwrap(), json!({"value": 10, "label": "A"}));

    let normalized = normalize(raw).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&normalized).unwrap();
    assert_eq!(reparsed, json!({"value": 10, "label": "A"}));
}

#[test]
fn numeric_keys_are_accepted() {
    let raw = "```javascript\n{2019: 100, 2020: 150, q1_2021: 90}\n```";
    assert_eq!(
        parse_output(raw).unwrap(),
        json!({"2019": 100, "2020": 150, "q1_2021": 90})
    );
    assert_eq!(normalize(raw).unwrap(), r#"{"2019":100,"2020":150,"q1_2021":90}"#);
}

#[test]
fn prose_is_rejected() {
    let err = parse_output("not json at all").unwrap_err();
    assert!(err.message.contains("bare word `not`"), "{err}");
    assert_eq!((err.line, err.column), (1, 4));
}

#[test]
fn fence_with_surrounding_prose() {
    let raw = "Here is your chart:\n```json\n[{\"x\": 1}, {\"x\": 2}]\n```\nEnjoy!";
    assert_eq!(parse_output(raw).unwrap(), json!([{"x": 1}, {"x": 2}]));
}

#[test]
fn single_line_fence() {
    assert_eq!(parse_output("```{a: 1}```").unwrap(), json!({"a": 1}));
}

#[test]
fn unclosed_fence_takes_rest_of_text() {
    assert_eq!(parse_output("```json\n{a: [1, 2]}").unwrap(), json!({"a": [1, 2]}));
}

#[test]
fn stray_inline_backticks_are_trimmed() {
    assert_eq!(strip_fences("  `{\"a\": 1}`  "), "{\"a\": 1}");
}

#[test]
fn strict_json_passes_through() {
    let text = r#"{"labels": ["Q1", "Q2"], "values": [1.5, -2, 3e2], "ok": true, "none": null}"#;
    assert_eq!(parse(text).unwrap(), serde_json::from_str::<serde_json::Value>(text).unwrap());
}

#[test]
fn trailing_commas_and_comments() {
    let text = r#"
        // monthly revenue
        {
            labels: ['Jan', 'Feb',],
            /* in thousands */
            data: [12, 19,],
        }
    "#;
    assert_eq!(
        parse(text).unwrap(),
        json!({"labels": ["Jan", "Feb"], "data": [12, 19]})
    );
}

#[test]
fn relaxed_numbers() {
    assert_eq!(parse("+5").unwrap(), json!(5));
    assert_eq!(parse(".5").unwrap(), json!(0.5));
    assert_eq!(parse("5.").unwrap(), json!(5));
    assert_eq!(parse("0x1F").unwrap(), json!(31));
    assert_eq!(parse("-0x10").unwrap(), json!(-16));
    assert_eq!(parse("1.25e2").unwrap(), json!(125.0));
    assert_eq!(parse("18446744073709551615").unwrap(), json!(u64::MAX));
}

#[test]
fn non_finite_numbers_are_rejected() {
    assert!(parse("Infinity").is_err());
    assert!(parse("-Infinity").is_err());
    assert!(parse("NaN").is_err());
    assert!(parse("1e999").is_err());
}

#[test]
fn string_escapes() {
    assert_eq!(parse(r#"'it\'s'"#).unwrap(), json!("it's"));
    assert_eq!(parse(r#"'say "hi"'"#).unwrap(), json!("say \"hi\""));
    assert_eq!(parse(r#""tab\there""#).unwrap(), json!("tab\there"));
    assert_eq!(parse(r#""é""#).unwrap(), json!("\u{e9}"));
    assert_eq!(parse(r#""😀""#).unwrap(), json!("\u{1F600}"));
}

#[test]
fn malformed_inputs_fail_closed() {
    for bad in [
        "",
        "{",
        "{a: }",
        "{a 1}",
        "[1 2]",
        "{,}",
        "'unterminated",
        "\"line\nbreak\"",
        "{a: 1} extra",
        "/* open comment",
        "[1, 2",
        r#""\ud83d""#,
        "-",
        "1e",
    ] {
        assert!(parse(bad).is_err(), "expected failure for {bad:?}");
    }
}

#[test]
fn deeply_nested_input_is_rejected() {
    let deep = format!("{}{}", "[".repeat(500), "]".repeat(500));
    let err = parse(&deep).unwrap_err();
    assert!(err.message.contains("nesting too deep"));
}

#[test]
fn error_position_is_reported() {
    let err = parse("{\n  a: 1,\n  b: ?\n}").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.column, 6);
    assert!(err.to_string().ends_with("at line 3, column 6"));
}

#[test]
fn strip_fences_is_idempotent() {
    for raw in [
        "```javascript\n{value: 10, label: 'A'}\n```",
        "```{a: 1}```",
        "` `x`",
        "plain text",
        "intro\n```\n[1]\n```\noutro",
        "``````x",
    ] {
        let once = strip_fences(raw);
        assert_eq!(strip_fences(&once), once, "not idempotent for {raw:?}");
    }
}

#[test]
fn normalize_is_idempotent() {
    for raw in [
        "```javascript\n{value: 10, label: 'A'}\n```",
        "{a: 'has ``` inside', b: [1.5, +2, .25,],}",
        "[0x10, 'x', null, true]",
        "{2019: 100, 2020: 150}",
        r#"{"already": "strict"}"#,
    ] {
        let once = normalize(raw).unwrap();
        assert_eq!(normalize(&once).unwrap(), once, "not idempotent for {raw:?}");
    }
}
