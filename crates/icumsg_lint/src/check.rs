use std::fs;
use std::path::Path;

use icumsg_catalog::parse_catalog;
use icumsg_syntax::validate_message;

use crate::diagnostic::{CatalogReport, MessageDiagnostic};

/// Check every message in the given catalog `content`, attributing findings
/// to `file`. The file name also determines the locale recorded on the
/// report.
pub fn check_catalog_source(file: &str, content: &str) -> CatalogReport {
    let entries = match parse_catalog(content) {
        Ok(entries) => entries,
        Err(error) => return CatalogReport::failed(file, error),
    };

    let mut report = CatalogReport::new(file);
    report.checked = entries.len();
    for entry in entries {
        let validation = validate_message(&entry.text);
        let is_complex = validation
            .signatures
            .iter()
            .any(|signature| signature.level == 0 && signature.is_complex());
        if is_complex {
            report.complex += 1;
        }
        if let Some(error) = validation.error {
            report.diagnostics.push(MessageDiagnostic::from_syntax_error(
                entry.id,
                entry.position,
                error,
            ));
        }
    }
    report
}

/// Read and check one catalog file. Filesystem problems become a report
/// error rather than failing the whole run.
pub fn check_catalog_file(path: &Path) -> CatalogReport {
    let file = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(content) => check_catalog_source(&file, &content),
        Err(error) => CatalogReport::failed(&file, format!("Could not read catalog: {}", error)),
    }
}
