use std::path::PathBuf;
use std::sync::mpsc::channel;

use threadpool::ThreadPool;

use crate::check::check_catalog_file;
use crate::diagnostic::CatalogReport;

/// Returns a reasonable number of threads to utilize for checking catalogs
/// on the running system. This examines whether logical cpus and physical
/// cpus are different and decides to use a _majority_ of available
/// resources, but without taking over the whole system. Linting usually runs
/// next to other developer tooling (editors, watchers, CI steps), and that
/// shouldn't have the world stopped because of this (albeit fast) process
/// consuming everything.
///
/// An explicit `jobs` request always wins. The `ICUMSG_CONCURRENCY`
/// environment variable covers situations where the computed count is
/// expected to be wrong (e.g., in Docker environments that incorrectly
/// report system resources).
pub(crate) fn thread_count(jobs: Option<usize>) -> usize {
    if let Some(requested_count) = jobs {
        return requested_count.max(1);
    }
    if let Ok(concurrency) = std::env::var("ICUMSG_CONCURRENCY") {
        if let Ok(requested_count) = concurrency.parse::<usize>() {
            return requested_count.max(1);
        }
    }

    let physical = num_cpus::get_physical();
    let logical = num_cpus::get();
    // Use half of the cores on small machines
    if logical < 8 {
        return (logical / 2).max(1);
    }
    // If hyperthreading is enabled on medium machines, use the physical count.
    if logical > physical && physical <= 12 {
        return physical;
    }

    // Otherwise use 2/3 of available resources.
    logical * 2 / 3
}

/// Check every catalog in `files`, one job per file, on a thread pool.
/// Reports come back sorted by file path so output is stable regardless of
/// completion order.
pub fn check_files(files: Vec<PathBuf>, jobs: Option<usize>) -> Vec<CatalogReport> {
    let num_jobs = files.len();
    if num_jobs <= 1 {
        return files.iter().map(|file| check_catalog_file(file)).collect();
    }

    let pool = ThreadPool::new(thread_count(jobs));
    let (tx, rx) = channel();
    for file in files {
        let tx = tx.clone();
        pool.execute(move || {
            let report = check_catalog_file(&file);
            // The receiver stays alive until every job has reported, so a
            // failed send only happens if the main thread is already gone.
            let _ = tx.send(report);
        });
    }

    let mut reports: Vec<CatalogReport> = rx.iter().take(num_jobs).collect();
    reports.sort_by(|a, b| a.file.cmp(&b.file));
    reports
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn explicit_jobs_request_wins() {
        assert_eq!(thread_count(Some(3)), 3);
        assert_eq!(thread_count(Some(0)), 1);
    }

    #[test]
    fn computed_count_is_never_zero() {
        assert!(thread_count(None) >= 1);
    }
}
