/// This file contains a hopefully increasing number of highlight tests to verify the correctness
/// of the scanner and the run encoder.
use hlscan::{HighlightColor, HighlightParser, Language, SourceBuffer};

use HighlightColor::{Comments, Datatypes, Default, Keywords, Numbers, Special, Strings};

/// Test data for the highlight tests.
/// The test data consists of a language, an input string, the expected colored spans, and an
/// optional error message.
#[derive(Debug)]
struct TestData {
    language: Language,
    input: &'static str,
    expected: &'static [(&'static str, HighlightColor)],
    error_msg: Option<&'static str>,
}

// A macros to easily create a TestData struct.

// Valid input and expected spans.
macro_rules! td {
    ($language:expr, $input:expr, $expected:expr) => {
        TestData {
            language: $language,
            input: $input,
            expected: $expected,
            error_msg: None,
        }
    };
}

// Input that fails to scan and the expected error message.
macro_rules! te {
    ($language:expr, $input:expr, $result:expr) => {
        TestData {
            language: $language,
            input: $input,
            expected: &[],
            error_msg: Some($result),
        }
    };
}

const TEST_DATA: &[TestData] = &[
    td!(Language::Java, "", &[]),
    td!(Language::Java, "int x;", &[("int ", Datatypes), ("x;", Default)]),
    td!(
        Language::Java,
        "public static void main",
        &[
            ("public static ", Keywords),
            ("void ", Datatypes),
            ("main", Default)
        ]
    ),
    td!(
        Language::Java,
        "iffy = true;",
        &[("iffy = ", Default), ("true", Numbers), (";", Default)]
    ),
    td!(
        Language::Java,
        "@Override void f()",
        &[("@Override ", Special), ("void ", Datatypes), ("f()", Default)]
    ),
    td!(
        Language::Java,
        "x = MAX_VALUE;",
        &[("x = ", Default), ("MAX_VALUE", Special), (";", Default)]
    ),
    td!(
        Language::Java,
        r#"s = "a\"b"; // done"#,
        &[
            ("s = ", Default),
            (r#""a\"b""#, Strings),
            ("; ", Default),
            ("// done", Comments)
        ]
    ),
    td!(
        Language::Java,
        "  return 0x1A_2B;",
        &[("  return ", Keywords), ("0x1A_2B", Numbers), (";", Default)]
    ),
    td!(
        Language::Java,
        "/* a\nb */ int",
        &[("/* a\nb */ ", Comments), ("int", Datatypes)]
    ),
    td!(Language::Java, "/* open", &[("/* open", Comments)]),
    td!(
        Language::Java,
        "f = 3.14f + 1e-10;",
        &[
            ("f = ", Default),
            ("3.14f ", Numbers),
            ("+ ", Default),
            ("1e-10", Numbers),
            (";", Default)
        ]
    ),
    td!(
        Language::Java,
        "'c' 0b1010",
        &[("'c' ", Strings), ("0b1010", Numbers)]
    ),
    td!(
        Language::Java,
        "a\"unterminated\nint",
        &[
            ("a", Default),
            ("\"unterminated\n", Strings),
            ("int", Datatypes)
        ]
    ),
    td!(
        Language::C,
        "#define SIZE 10",
        &[("#define SIZE ", Special), ("10", Numbers)]
    ),
    td!(
        Language::C,
        "unsigned long n;",
        &[("unsigned long ", Datatypes), ("n;", Default)]
    ),
    td!(
        Language::Glsl,
        "uniform mat4 mvp;",
        &[("uniform ", Keywords), ("mat4 ", Datatypes), ("mvp;", Default)]
    ),
    te!(
        Language::Java,
        "int \u{e9};",
        "Non-ASCII byte 0xc3 at offset 4"
    ),
];

#[test]
fn highlight_test() {
    let _ = env_logger::builder().is_test(true).try_init();
    for (index, test) in TEST_DATA.iter().enumerate() {
        let parser = HighlightParser::new(test.language);
        let result = parser.parse(&SourceBuffer::from(test.input));
        if let Some(error_msg) = test.error_msg {
            let err = result.unwrap_err();
            assert!(
                err.to_string().contains(error_msg),
                "#{} Unexpected error for input '{}': {}",
                index,
                test.input.escape_default(),
                err
            );
            continue;
        }
        let runs = result.unwrap_or_else(|e| {
            panic!(
                "#{} Failed to parse '{}': {}",
                index,
                test.input.escape_default(),
                e
            )
        });
        let spans: Vec<(&str, HighlightColor)> = runs
            .spans(test.input.len())
            .map(|span| (&test.input[span.range], span.color))
            .collect();
        assert_eq!(
            spans,
            test.expected,
            "#{} input: '{}'",
            index,
            test.input.escape_default()
        );
        assert_eq!(
            spans.iter().map(|(text, _)| *text).collect::<String>(),
            test.input,
            "#{} spans do not cover the input",
            index
        );
    }
}
