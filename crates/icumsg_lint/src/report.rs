//! Report formatting and printing utilities.
//!
//! This module is separate from the checking logic so the library can be
//! used without printing side effects.

use colored::Colorize;
use serde::Serialize;

use crate::diagnostic::CatalogReport;
use crate::severity::Severity;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Count warnings and errors across all reports. A catalog-level failure
/// counts as one error on top of any per-message findings.
fn tally(reports: &[CatalogReport]) -> (usize, usize) {
    let mut warnings = 0;
    let mut errors = 0;
    for report in reports {
        if report.error.is_some() {
            errors += 1;
        }
        for diagnostic in &report.diagnostics {
            match diagnostic.severity {
                Severity::Warning => warnings += 1,
                Severity::Error => errors += 1,
            }
        }
    }
    (warnings, errors)
}

/// Print reports in a cargo-style format: severity and message id, then a
/// clickable `path:line:col` location, then a summary of totals. Clean
/// catalogs print nothing unless `verbose` is set.
pub fn print_report(reports: &[CatalogReport], verbose: bool) {
    for report in reports {
        if let Some(error) = &report.error {
            println!("{}: {}  {}", "error".bold().red(), error, report.file.dimmed());
            continue;
        }
        if report.diagnostics.is_empty() {
            if verbose {
                println!(
                    "{} {} checked {} messages ({} complex)",
                    SUCCESS_MARK.green(),
                    report.file,
                    report.checked,
                    report.complex
                );
            }
            continue;
        }
        for diagnostic in &report.diagnostics {
            let severity_str = match diagnostic.severity {
                Severity::Error => "error".bold().red(),
                Severity::Warning => "warning".bold().yellow(),
            };
            println!(
                "{}: {}: \"{}\"  {}",
                severity_str,
                diagnostic.id,
                diagnostic.description,
                diagnostic.name.to_string().dimmed().cyan()
            );
            println!(
                "  {} {}:{}:{}",
                "-->".blue(),
                report.file,
                diagnostic.line,
                diagnostic.col
            );
        }
    }

    let (warnings, errors) = tally(reports);
    if warnings == 0 && errors == 0 {
        println!("{} No ICU syntax problems found", SUCCESS_MARK.green());
    } else {
        println!(
            "{} {} warning(s), {} error(s)",
            FAILURE_MARK.red(),
            warnings,
            errors
        );
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    catalogs: &'a [CatalogReport],
    warnings: usize,
    errors: usize,
}

/// Render reports as one JSON document for tooling to consume.
pub fn to_json(reports: &[CatalogReport]) -> serde_json::Result<String> {
    let (warnings, errors) = tally(reports);
    serde_json::to_string_pretty(&JsonReport {
        catalogs: reports,
        warnings,
        errors,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::check::check_catalog_source;

    const BROKEN: &str = r#"{"ITEMS": "{COUNT, plural, =1 {one item}}"}"#;

    #[test]
    fn tallies_message_findings_and_catalog_failures_separately() {
        let reports = vec![
            check_catalog_source("en-US.messages.json", BROKEN),
            check_catalog_source("fr.messages.json", "this is not json"),
        ];
        assert_eq!(tally(&reports), (1, 1));

        let clean = vec![check_catalog_source("ja.messages.json", r#"{"OK": "fine"}"#)];
        assert_eq!(tally(&clean), (0, 0));
    }

    #[test]
    fn json_document_carries_reports_and_totals() {
        let reports = vec![
            check_catalog_source("en-US.messages.json", BROKEN),
            check_catalog_source("fr.messages.json", "this is not json"),
        ];
        let rendered = to_json(&reports).expect("reports should serialize");

        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("output should be valid JSON");
        assert_eq!(value["warnings"], 1);
        assert_eq!(value["errors"], 1);
        assert_eq!(value["catalogs"][0]["file"], "en-US.messages.json");
        assert_eq!(value["catalogs"][1]["locale"], "fr");
        assert!(value["catalogs"][1]["error"].is_string());
    }

    #[test]
    fn printing_handles_every_report_shape() {
        let reports = vec![
            check_catalog_source("ja.messages.json", r#"{"OK": "fine"}"#),
            check_catalog_source("en-US.messages.json", BROKEN),
            check_catalog_source("fr.messages.json", "this is not json"),
        ];
        print_report(&reports, true);
        print_report(&[], false);
    }
}
