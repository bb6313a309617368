/*
 * diagnostics.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Rendering transpile errors against the program source
 */

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use weft_source_map::OffsetIndex;
use weft_transpiler::TranspileError;

/// Render `err` as an annotated source excerpt.
pub fn render_error(name: &str, source: &str, err: &TranspileError, color: bool) -> String {
    let Some(offset) = err.offset() else {
        return format!("Error: {err}\n");
    };
    let char_len = OffsetIndex::new(source).char_len();
    let start = offset.min(char_len.saturating_sub(1));
    let span = start..(start + 1).min(char_len);

    let report = Report::build(ReportKind::Error, name.to_string(), span.start)
        .with_config(Config::default().with_color(color))
        .with_message(err.to_string())
        .with_label(
            Label::new((name.to_string(), span))
                .with_message(err.label())
                .with_color(Color::Red),
        )
        .finish();

    let mut output = Vec::new();
    match report.write((name.to_string(), Source::from(source)), &mut output) {
        Ok(()) => String::from_utf8_lossy(&output).into_owned(),
        Err(_) => format!("Error: {err}\n"),
    }
}
