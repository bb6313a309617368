/*
 * transpile.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end tests for the transpiler.
 */

use pretty_assertions::assert_eq;
use weft_transpiler::{
    DEFAULT_LANGUAGE, FnLanguage, LanguageRegistry, MiniLocation, MiniNotation, TranspileError,
    TranspileOptions, Transpiler, WidgetDescriptor, WidgetKind, transpile,
};

// ============================================================================
// Helpers
// ============================================================================

fn run(source: &str) -> weft_transpiler::TransformResult {
    transpile(source, &TranspileOptions::default(), &LanguageRegistry::new()).unwrap()
}

fn output(source: &str) -> String {
    run(source).output
}

fn locations(pairs: &[(usize, usize)]) -> Vec<MiniLocation> {
    pairs
        .iter()
        .map(|&(start, end)| MiniLocation::new(start, end))
        .collect()
}

fn with_scope() -> LanguageRegistry {
    let mut registry = LanguageRegistry::new();
    registry.register_widget_method("_scope");
    registry
}

// ============================================================================
// Pattern literals
// ============================================================================

#[test]
fn test_double_quoted_string_becomes_pattern() {
    let result = run("s(\"bd hh\")");
    assert_eq!(result.output, "return s(m(\"bd hh\", 2))");
    assert_eq!(result.mini_locations, Some(locations(&[(3, 5), (6, 8)])));
    assert_eq!(result.widgets, Some(Vec::new()));
}

#[test]
fn test_single_quoted_string_is_untouched() {
    let result = run("s('bd hh')");
    assert_eq!(result.output, "return s('bd hh')");
    assert_eq!(result.mini_locations, Some(Vec::new()));
}

#[test]
fn test_untagged_template_becomes_pattern() {
    let result = run("s(`bd hh`)");
    assert_eq!(result.output, "return s(m(\"bd hh\", 2))");
    assert_eq!(result.mini_locations, Some(locations(&[(3, 5), (6, 8)])));
}

#[test]
fn test_template_uses_first_quasi() {
    let result = run("s(`bd ${x}`)");
    assert_eq!(result.output, "return s(m(\"bd \", 2))");
    assert_eq!(result.mini_locations, Some(locations(&[(3, 5)])));
}

#[test]
fn test_escaped_quote_stays_inside_a_leaf() {
    let result = run("s(\"bd \\\"x sn\")");
    assert_eq!(result.output, "return s(m(\"bd \\\"x sn\", 2))");
    assert_eq!(
        result.mini_locations,
        Some(locations(&[(3, 5), (6, 9), (10, 12)]))
    );
}

#[test]
fn test_offsets_are_characters() {
    let result = run("// ñ\ns(\"bd\")");
    assert_eq!(result.output, "// ñ\nreturn s(m(\"bd\", 7))");
    assert_eq!(result.mini_locations, Some(locations(&[(8, 10)])));
}

#[test]
fn test_url_literals_are_not_patterns() {
    let result = run("s(\"https://example.com/bd.wav\")");
    assert_eq!(result.output, "return s(\"https://example.com/bd.wav\")");
    assert_eq!(result.mini_locations, Some(Vec::new()));

    let result = run("s(`github://user/repo`)");
    assert_eq!(result.output, "return s(`github://user/repo`)");
}

#[test]
fn test_mixed_samples_and_pattern() {
    let source = "samples({url: \"https://host/a.wav\"})\ns(\"bd hh\")";
    let result = run(source);
    assert_eq!(
        result.output,
        "await samples({url: \"https://host/a.wav\"})\nreturn s(m(\"bd hh\", 39))"
    );
    assert_eq!(result.mini_locations, Some(locations(&[(40, 42), (43, 45)])));
}

#[test]
fn test_locations_slice_the_original_source() {
    let source = "note(\"<c e g>*2 [a b]\")";
    let result = run(source);
    let chars: Vec<char> = source.chars().collect();
    let words: Vec<String> = result
        .mini_locations
        .unwrap()
        .iter()
        .map(|loc| chars[loc.start..loc.end].iter().collect())
        .collect();
    assert_eq!(words, vec!["c", "e", "g", "a", "b"]);
}

// ============================================================================
// Sub-languages
// ============================================================================

#[test]
fn test_registered_tag() {
    let mut registry = LanguageRegistry::new();
    registry.register_sub_language("mini", MiniNotation::default());

    let result = transpile("mini`bd [hh sn]`", &TranspileOptions::default(), &registry).unwrap();
    assert_eq!(result.output, "return mini(\"bd [hh sn]\", 5)");
    assert_eq!(
        result.mini_locations,
        Some(locations(&[(5, 7), (9, 11), (12, 14)]))
    );
}

#[test]
fn test_registered_tag_with_call_name() {
    let mut registry = LanguageRegistry::new();
    registry.register_sub_language("p", MiniNotation::named("mini"));

    let result = transpile("p`bd`", &TranspileOptions::default(), &registry).unwrap();
    assert_eq!(result.output, "return mini(\"bd\", 2)");
}

#[test]
fn test_unregistered_tag_is_left_alone() {
    let result = run("foo`bd \"hh\"`");
    assert_eq!(result.output, "return foo`bd \"hh\"`");
    assert_eq!(result.mini_locations, Some(Vec::new()));
}

#[test]
fn test_tidal_literal() {
    let result = run("tidal`d1 $ s \"bd sn\"`");
    assert_eq!(result.output, "return tidal(\"d1 $ s \\\"bd sn\\\"\", 6)");
    assert_eq!(result.mini_locations, Some(locations(&[(14, 16), (17, 19)])));
}

#[test]
fn test_registered_tag_takes_precedence_over_tidal() {
    let mut registry = LanguageRegistry::new();
    registry.register_sub_language("tidal", MiniNotation::named("tidalMini"));

    let result = transpile("tidal`bd sn`", &TranspileOptions::default(), &registry).unwrap();
    assert_eq!(result.output, "return tidalMini(\"bd sn\", 6)");
    assert_eq!(result.mini_locations, Some(locations(&[(6, 8), (9, 11)])));
}

#[test]
fn test_default_language_handles_plain_patterns() {
    let mut registry = LanguageRegistry::new();
    registry.register_sub_language(
        DEFAULT_LANGUAGE,
        FnLanguage::new(|code: &str, offset| {
            vec![MiniLocation::new(offset, offset + code.chars().count())]
        })
        .with_name("mini"),
    );

    let result = transpile("s(\"bd\")", &TranspileOptions::default(), &registry).unwrap();
    assert_eq!(result.output, "return s(mini(\"bd\", 2))");
    // The handler sees the value wrapped as "[bd]"
    assert_eq!(result.mini_locations, Some(locations(&[(2, 6)])));
}

// ============================================================================
// Widgets
// ============================================================================

#[test]
fn test_slider() {
    let result = run("slider(0.5, 0, 1)");
    assert_eq!(result.output, "return sliderWithID('slider_7', 0.5, 0, 1)");
    assert_eq!(
        result.widgets,
        Some(vec![WidgetDescriptor {
            from: 7,
            to: 10,
            kind: WidgetKind::Slider,
            value: Some("0.5".to_string()),
            options: None,
            min: Some(0.0),
            max: Some(1.0),
            step: None,
            id: "slider_7".to_string(),
            index: Some(0),
        }])
    );
}

#[test]
fn test_slider_defaults_and_step() {
    let widgets = run("s(\"bd\").gain(slider(0.5)).lpf(slider(800, 100, 4_000, 10))")
        .widgets
        .unwrap();
    assert_eq!(widgets.len(), 2);

    assert_eq!(widgets[0].from, 20);
    assert_eq!((widgets[0].min, widgets[0].max, widgets[0].step), (Some(0.0), Some(1.0), None));
    assert_eq!(widgets[0].index, Some(0));

    assert_eq!(widgets[1].value.as_deref(), Some("800"));
    assert_eq!(
        (widgets[1].min, widgets[1].max, widgets[1].step),
        (Some(100.0), Some(4000.0), Some(10.0))
    );
    assert_eq!(widgets[1].index, Some(1));
}

#[test]
fn test_widget_arguments_are_not_rewritten() {
    let result = run("s(\"bd\").gain(slider(0.5))");
    assert_eq!(
        result.output,
        "return s(m(\"bd\", 2)).gain(sliderWithID('slider_20', 0.5))"
    );

    let result = run("radio(0, 1, \"two\", 3.5)");
    assert_eq!(
        result.output,
        "return radioWithID('radio_6', 0, 1, \"two\", 3.5)"
    );
    assert_eq!(result.mini_locations, Some(Vec::new()));
    let widget = &result.widgets.unwrap()[0];
    assert_eq!(widget.kind, WidgetKind::Radio);
    assert_eq!(
        widget.options,
        Some(vec![
            serde_json::json!(0),
            serde_json::json!(1),
            serde_json::json!("two"),
            serde_json::json!(3.5)
        ])
    );
}

#[test]
fn test_toggle() {
    let result = run("toggle(true)");
    assert_eq!(result.output, "return toggleWithID('toggle_7', true)");
    let widget = &result.widgets.unwrap()[0];
    assert_eq!(widget.kind, WidgetKind::Toggle);
    assert_eq!(widget.value.as_deref(), Some("true"));
    assert_eq!((widget.min, widget.max), (None, None));
}

#[test]
fn test_widget_call_without_arguments_is_plain() {
    let result = run("slider()");
    assert_eq!(result.output, "return slider()");
    assert_eq!(result.widgets, Some(Vec::new()));
}

fn widget_ids(source: &str) -> Vec<String> {
    run(source)
        .widgets
        .unwrap()
        .into_iter()
        .map(|widget| widget.id)
        .collect()
}

#[test]
fn test_native_widget_ids_ignore_trailing_whitespace() {
    assert_eq!(
        widget_ids("s(\"bd\").gain(slider(0.5))"),
        widget_ids("s(\"bd\").gain(slider(0.5))   \n\n")
    );
}

#[test]
fn test_native_widget_ids_follow_their_literal() {
    // The ID is keyed on the literal's offset, so whitespace before it moves it
    assert_eq!(widget_ids("s(\"bd\").gain(slider(0.5))"), vec!["slider_20"]);
    assert_eq!(widget_ids("s(\"bd\")  .gain(slider(0.5))"), vec!["slider_22"]);
    // Chained-method IDs are positional and do not move
    let method_ids = |source: &str| -> Vec<String> {
        transpile(source, &TranspileOptions::default(), &with_scope())
            .unwrap()
            .widgets
            .unwrap()
            .into_iter()
            .map(|widget| widget.id)
            .collect()
    };
    assert_eq!(
        method_ids("note(\"c\")._scope()"),
        method_ids("note(\"c\")\n  ._scope()")
    );
}

#[test]
fn test_widget_method() {
    let result = transpile(
        "note(\"c\")._scope()",
        &TranspileOptions::default(),
        &with_scope(),
    )
    .unwrap();
    assert_eq!(result.output, "return note(m(\"c\", 5))._scope('_widget__scope_0')");
    assert_eq!(
        result.widgets,
        Some(vec![WidgetDescriptor {
            from: 18,
            to: 18,
            kind: WidgetKind::Method("_scope".to_string()),
            value: None,
            options: None,
            min: None,
            max: None,
            step: None,
            id: "_widget__scope_0".to_string(),
            index: Some(0),
        }])
    );
}

#[test]
fn test_widget_methods_are_namespaced_and_indexed() {
    let options = TranspileOptions {
        caller_id: Some("ed".to_string()),
        ..Default::default()
    };
    let source = "$: note(\"c\")._scope()\n$: s(\"bd\")._scope(1)";
    let result = transpile(source, &options, &with_scope()).unwrap();

    insta::assert_snapshot!(result.output, @r#"
    note(m("c", 8))._scope('ed_widget__scope_0').p("$")
    return s(m("bd", 27))._scope('ed_widget__scope_1', 1).p("$")
    "#);

    let widgets = result.widgets.unwrap();
    assert_eq!(
        widgets
            .iter()
            .map(|w| (w.from, w.id.as_str(), w.index))
            .collect::<Vec<_>>(),
        vec![
            (21, "ed_widget__scope_0", Some(0)),
            (42, "ed_widget__scope_1", Some(1)),
        ]
    );
    assert_eq!(result.mini_locations, Some(locations(&[(9, 10), (28, 30)])));
}

#[test]
fn test_skipped_subtrees_do_not_consume_indices() {
    let result = transpile(
        "slider(x._scope()); y._scope()",
        &TranspileOptions::default(),
        &with_scope(),
    )
    .unwrap();
    assert_eq!(
        result.output,
        "sliderWithID('slider_7', x._scope()); return y._scope('_widget__scope_0')"
    );

    let widgets = result.widgets.unwrap();
    assert_eq!(widgets.len(), 2);
    assert_eq!(widgets[0].kind, WidgetKind::Slider);
    assert_eq!(widgets[0].value.as_deref(), Some("x._scope()"));
    assert_eq!(widgets[1].kind, WidgetKind::Method("_scope".to_string()));
    assert_eq!(widgets[1].id, "_widget__scope_0");
    assert_eq!(widgets[1].index, Some(0));
    assert_eq!((widgets[1].from, widgets[1].to), (30, 30));
}

#[test]
fn test_widget_method_keeps_argument_comments() {
    let result = transpile(
        "note(\"c\")._scope(/* c */)",
        &TranspileOptions::default(),
        &with_scope(),
    )
    .unwrap();
    assert_eq!(
        result.output,
        "return note(m(\"c\", 5))._scope('_widget__scope_0', /* c */)"
    );
}

#[test]
fn test_unregistered_method_is_plain() {
    let result = run("note(\"c\")._scope()");
    assert_eq!(result.output, "return note(m(\"c\", 5))._scope()");
    assert_eq!(result.widgets, Some(Vec::new()));
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_label_sugar() {
    assert_eq!(output("gain: s(\"bd\")"), "return s(m(\"bd\", 8)).p(\"gain\")");
    assert_eq!(output("x: a + \"b\""), "return (a + m(\"b\", 7)).p(\"x\")");
}

#[test]
fn test_label_keeps_semicolon() {
    assert_eq!(output("d1: s(\"bd\");"), "return s(m(\"bd\", 6)).p(\"d1\");");
}

#[test]
fn test_samples_is_awaited() {
    assert_eq!(output("samples('x')"), "return await samples('x')");
    assert_eq!(output("await samples('x')"), "return await samples('x')");
    assert_eq!(output("f(samples('x'))"), "return f(await samples('x'))");
    assert_eq!(output("a: samples('x')"), "return (await samples('x')).p(\"a\")");
    assert_eq!(
        output("samples('x').then(f)"),
        "return (await samples('x')).then(f)"
    );
}

#[test]
fn test_multiline_program() {
    let source = "samples('github:tidalcycles/dirt-samples')\n\n// drums\ns(\"bd*2 [~ sn]\")";
    insta::assert_snapshot!(output(source), @r#"
    await samples('github:tidalcycles/dirt-samples')

    // drums
    return s(m("bd*2 [~ sn]", 55))
    "#);
}

#[test]
fn test_trailing_comment_after_last_statement() {
    assert_eq!(output("s(\"bd\") // kick"), "return s(m(\"bd\", 2)) // kick");
}

// ============================================================================
// Finalizer
// ============================================================================

#[test]
fn test_empty_program_returns_silence() {
    assert_eq!(output(""), "return silence;");
    assert_eq!(output("  \n\t"), "return silence;");
    assert_eq!(output("// nothing yet"), "// nothing yet\nreturn silence;");

    let options = TranspileOptions {
        add_return: false,
        ..Default::default()
    };
    let result = transpile("", &options, &LanguageRegistry::new()).unwrap();
    assert_eq!(result.output, "silence;");
}

#[test]
fn test_wrap_async() {
    let options = TranspileOptions {
        wrap_async: true,
        ..Default::default()
    };
    let result = transpile("s(\"bd\")", &options, &LanguageRegistry::new()).unwrap();
    assert_eq!(result.output, "(async () => {\nreturn s(m(\"bd\", 2))\n})()");
}

#[test]
fn test_no_return() {
    let options = TranspileOptions {
        add_return: false,
        ..Default::default()
    };
    let result = transpile("let x = 1", &options, &LanguageRegistry::new()).unwrap();
    assert_eq!(result.output, "let x = 1");
}

#[test]
fn test_trailing_declaration_is_an_error() {
    let err = transpile(
        "s(\"bd\")\nlet x = 1",
        &TranspileOptions::default(),
        &LanguageRegistry::new(),
    )
    .unwrap_err();
    match err {
        TranspileError::TrailingStatement {
            kind,
            offset,
            line,
            column,
        } => {
            assert_eq!(kind, "lexical_declaration");
            assert_eq!((offset, line, column), (8, 2, 1));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_trailing_labeled_loop_is_an_error() {
    let err = transpile(
        "outer: for (;;) {}",
        &TranspileOptions::default(),
        &LanguageRegistry::new(),
    )
    .unwrap_err();
    assert!(matches!(err, TranspileError::TrailingStatement { .. }));
}

#[test]
fn test_syntax_error() {
    let err = transpile(
        "s(\"bd\"",
        &TranspileOptions::default(),
        &LanguageRegistry::new(),
    )
    .unwrap_err();
    assert!(matches!(err, TranspileError::Parse { .. }));
    assert!(err.offset().is_some());
}

// ============================================================================
// Options and determinism
// ============================================================================

#[test]
fn test_untracked_result_omits_collections() {
    let options = TranspileOptions {
        emit_locations: false,
        emit_widgets: false,
        ..Default::default()
    };
    let result = transpile("s(\"bd\").gain(slider(0.5))", &options, &LanguageRegistry::new())
        .unwrap();
    assert_eq!(
        result.output,
        "return s(m(\"bd\", 2)).gain(sliderWithID('slider_20', 0.5))"
    );
    assert_eq!(result.mini_locations, None);
    assert_eq!(result.widgets, None);
}

#[test]
fn test_method_indices_count_without_widget_tracking() {
    let options = TranspileOptions {
        emit_widgets: false,
        ..Default::default()
    };
    let result = transpile("a._scope(b._scope())", &options, &with_scope()).unwrap();
    assert_eq!(
        result.output,
        "return a._scope('_widget__scope_0', b._scope('_widget__scope_1'))"
    );
}

#[test]
fn test_transpile_is_deterministic() {
    let transpiler = Transpiler::new(with_scope());
    let source = "samples('x')\n$: s(\"bd [hh hh]\").gain(slider(0.3))._scope()";
    let first = transpiler.transpile(source, &TranspileOptions::default()).unwrap();
    let second = transpiler.transpile(source, &TranspileOptions::default()).unwrap();
    assert_eq!(first, second);
}
