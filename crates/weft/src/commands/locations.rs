/*
 * locations.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Locations command implementation
 */

use std::process::ExitCode;

use anyhow::Result;
use weft_transpiler::MiniLocation;

use super::{TranspileArgs, run};

/// Execute the locations command
pub fn execute(args: &TranspileArgs) -> Result<ExitCode> {
    let Some((input, result)) = run(args)? else {
        return Ok(ExitCode::FAILURE);
    };

    let locations = result.mini_locations.unwrap_or_default();
    print!("{}", format_locations(&input.text, &locations));
    Ok(ExitCode::SUCCESS)
}

/// One `start..end<TAB>text` line per location.
fn format_locations(source: &str, locations: &[MiniLocation]) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::new();
    for location in locations {
        let text: String = chars
            .get(location.start..location.end)
            .unwrap_or_default()
            .iter()
            .collect();
        out.push_str(&format!("{}..{}\t{}\n", location.start, location.end, text));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_locations() {
        let source = "s(\"bd é\")";
        let locations = vec![MiniLocation::new(3, 5), MiniLocation::new(6, 7)];
        assert_eq!(format_locations(source, &locations), "3..5\tbd\n6..7\té\n");
    }

    #[test]
    fn test_out_of_range_location_prints_empty_text() {
        assert_eq!(format_locations("ab", &[MiniLocation::new(1, 9)]), "1..9\t\n");
    }
}
