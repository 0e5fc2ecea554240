//! End-to-end tests for the markup compiler.

use proptest::prelude::*;
use tagstyle::parser::Parser;
use tagstyle::{
    Color, CompileError, Compiler, Decoration, MarkupError, Style, StyleRegistry, Unmatched,
    strip_tags,
};

fn compile(input: &str) -> Result<String, CompileError> {
    Compiler::new().compile(input)
}

fn unmatched_reason(input: &str) -> Unmatched {
    match compile(input) {
        Err(CompileError::CompilationFailed(MarkupError::UnmatchedTag { reason, .. })) => reason,
        other => panic!("expected unmatched tag for {:?}, got {:?}", input, other),
    }
}

// ============================================================================
// Styled Output
// ============================================================================

#[test]
fn error_scenario() {
    assert_eq!(
        compile("<error>bad</error>").unwrap(),
        "\x1b[30;43mbad\x1b[39;49m"
    );
}

#[test]
fn text_around_tags_is_untouched() {
    insta::assert_snapshot!(
        format!("{:?}", compile("Result: <info>ok</info>.").unwrap()),
        @r#""Result: \u{1b}[32mok\u{1b}[39m.""#
    );
}

#[test]
fn nested_children_wrapped_individually() {
    assert_eq!(
        compile("<b>a<u>b</u></b>").unwrap(),
        format!("{}{}", "\x1b[1ma\x1b[22m", "\x1b[1m\x1b[4mb\x1b[24m\x1b[22m")
    );
}

#[test]
fn three_children_three_wraps() {
    let out = compile("<info>a<b>b</b>c</info>").unwrap();
    assert_eq!(out.matches("\x1b[32m").count(), 3);
    insta::assert_snapshot!(
        format!("{:?}", out),
        @r#""\u{1b}[32ma\u{1b}[39m\u{1b}[32m\u{1b}[1mb\u{1b}[22m\u{1b}[39m\u{1b}[32mc\u{1b}[39m""#
    );
}

#[test]
fn fatal_builtin_has_bold() {
    assert_eq!(
        compile("<fatal>boom</fatal>").unwrap(),
        "\x1b[37;41;1mboom\x1b[39;49;22m"
    );
}

#[test]
fn empty_tag_yields_nothing() {
    assert_eq!(compile("<b></b>").unwrap(), "");
    assert_eq!(compile("a<u></u>b").unwrap(), "ab");
}

#[test]
fn escaped_tag_is_literal() {
    assert_eq!(compile("\\<foo>").unwrap(), "<foo>");
}

#[test]
fn escaped_tag_inside_style() {
    assert_eq!(
        compile(r"<comment>use \<b> for bold</comment>").unwrap(),
        "\x1b[33muse <b> for bold\x1b[39m"
    );
}

#[test]
fn bare_close_angle_is_text() {
    assert_eq!(compile("a -> b").unwrap(), "a -> b");
}

#[test]
fn unicode_content() {
    assert_eq!(
        compile("<u>日本語</u>").unwrap(),
        "\x1b[4m日本語\x1b[24m"
    );
}

// ============================================================================
// Custom Registries
// ============================================================================

#[test]
fn custom_style_is_used() {
    let mut compiler = Compiler::new();
    compiler.register("path", Style::new().fg(Color::Cyan).decoration(Decoration::Underline));
    assert_eq!(
        compiler.compile("<path>/tmp</path>").unwrap(),
        "\x1b[36;4m/tmp\x1b[39;24m"
    );
}

#[test]
fn overriding_builtin_affects_later_calls_only() {
    let mut compiler = Compiler::new();
    let before = compiler.compile("<error>x</error>").unwrap();
    compiler.register("error", Style::new().fg(Color::Red));
    let after = compiler.compile("<error>x</error>").unwrap();
    assert_eq!(before, "\x1b[30;43mx\x1b[39;49m");
    assert_eq!(after, "\x1b[31mx\x1b[39m");
}

#[test]
fn attribute_less_style_passes_through() {
    let mut compiler = Compiler::with_registry(StyleRegistry::empty());
    compiler.register("plain", Style::new());
    assert_eq!(compiler.compile("<plain>x</plain>").unwrap(), "x");
}

#[test]
fn registry_spec_strings() {
    let mut compiler = Compiler::new();
    compiler
        .registry_mut()
        .register_spec("warn", "bold yellow")
        .unwrap();
    assert_eq!(
        compiler.compile("<warn>careful</warn>").unwrap(),
        "\x1b[33;1mcareful\x1b[39;22m"
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn unknown_element_fails() {
    assert_eq!(
        compile("<notregistered>x</notregistered>"),
        Err(CompileError::UnknownStyleElement("notregistered".to_string()))
    );
}

#[test]
fn unknown_nested_element_fails() {
    assert_eq!(
        compile("<b>ok <nope>no</nope></b>"),
        Err(CompileError::UnknownStyleElement("nope".to_string()))
    );
}

#[test]
fn empty_name_is_unknown() {
    assert_eq!(
        compile("<>x</>"),
        Err(CompileError::UnknownStyleElement(String::new()))
    );
}

#[test]
fn unclosed_tag_fails() {
    assert_eq!(unmatched_reason("<error>x"), Unmatched::Unclosed);
}

#[test]
fn stray_close_fails() {
    assert_eq!(unmatched_reason("x</error>"), Unmatched::UnexpectedClose);
}

#[test]
fn crossed_tags_fail() {
    assert_eq!(
        unmatched_reason("<a><b></a></b>"),
        Unmatched::Mismatched {
            open: "b".to_string()
        }
    );
}

#[test]
fn malformed_markup_is_compilation_failure() {
    let err = compile("<b<u>x").unwrap_err();
    assert!(matches!(
        err,
        CompileError::CompilationFailed(MarkupError::MalformedMarkup { offset: 2, .. })
    ));
    assert!(err.to_string().starts_with("markup compilation failed"));
}

#[test]
fn structure_checked_before_styles() {
    let err = compile("<nope>x").unwrap_err();
    assert!(err.markup_error().is_some());
}

// ============================================================================
// Unstyled Output
// ============================================================================

#[test]
fn unstyled_error_scenario() {
    let mut compiler = Compiler::new();
    compiler.set_styled(false);
    assert!(!compiler.is_styled());
    assert_eq!(compiler.compile("<error>bad</error>").unwrap(), "bad");
}

#[test]
fn unstyled_keeps_escapes() {
    let compiler = Compiler::unstyled();
    assert_eq!(
        compiler.compile(r"<b>x</b> \<b>y").unwrap(),
        "x <b>y"
    );
}

#[test]
fn toggling_styles_back_on() {
    let mut compiler = Compiler::unstyled();
    compiler.set_styled(true);
    assert_eq!(compiler.compile("<b>x</b>").unwrap(), "\x1b[1mx\x1b[22m");
}

// ============================================================================
// Properties
// ============================================================================

fn markup() -> impl Strategy<Value = String> {
    let leaf = "[a-z .]{0,8}";
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            prop::sample::select(vec!["b", "u", "info", "error", "comment"]),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, children)| format!("<{name}>{}</{name}>", children.concat()))
    })
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(markup(), 0..4).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn plain_text_round_trips(input in "[^<>]*") {
        prop_assert_eq!(Compiler::new().compile(&input).unwrap(), input.clone());
        prop_assert_eq!(Compiler::unstyled().compile(&input).unwrap(), input);
    }

    #[test]
    fn stripping_is_idempotent(input in "(<b>|</b>|<info>|</info>|>|[a-z ]){0,24}") {
        let compiler = Compiler::unstyled();
        let once = compiler.compile(&input).unwrap();
        let twice = compiler.compile(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn well_formed_markup_compiles(input in document()) {
        let styled = Compiler::new().compile(&input);
        prop_assert!(styled.is_ok(), "{:?} failed: {:?}", input, styled);
    }

    #[test]
    fn strip_matches_tree_text(input in document()) {
        let root = Parser::new().parse_str(&input).unwrap();
        prop_assert_eq!(strip_tags(&input), root.plain_text());
    }
}
