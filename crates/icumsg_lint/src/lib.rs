pub use crate::check::{check_catalog_file, check_catalog_source};
pub use crate::diagnostic::{CatalogReport, MessageDiagnostic};
pub use crate::runner::check_files;
pub use crate::severity::Severity;
pub use crate::walk::find_catalog_files;

pub mod cli;

mod check;
mod diagnostic;
mod report;
mod runner;
mod severity;
mod walk;
