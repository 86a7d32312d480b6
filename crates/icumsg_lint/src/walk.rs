use std::path::{Path, PathBuf};

use icumsg_catalog::is_catalog_file;
use ignore::WalkBuilder;
use rustc_hash::FxHashSet;

fn is_catalog_path(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| is_catalog_file(&name.to_string_lossy()))
}

/// Expand the given paths into the catalog files they cover. Paths naming a
/// file are kept when the file follows the catalog naming convention; paths
/// naming a directory are walked recursively, honoring ignore files along
/// the way. The result is deduplicated and sorted so runs are stable.
pub fn find_catalog_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
    let mut found = Vec::new();
    for path in paths {
        if path.is_file() && is_catalog_path(path) && seen.insert(path.clone()) {
            found.push(path.clone());
        }
    }

    let mut directories = paths.iter().filter(|path| path.is_dir());
    if let Some(first_directory) = directories.next() {
        let mut builder = WalkBuilder::new(first_directory);
        for directory in directories {
            builder.add(directory);
        }
        for item in builder.build() {
            let Ok(item) = item else {
                continue;
            };
            if item.file_type().is_some_and(|file_type| file_type.is_dir()) {
                continue;
            }
            let path = item.path();
            if is_catalog_path(path) && seen.insert(path.to_path_buf()) {
                found.push(path.to_path_buf());
            }
        }
    }

    found.sort();
    found
}
