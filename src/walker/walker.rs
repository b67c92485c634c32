use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

/// Extensions checked when none are given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "hxx", "tpp"];

pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => extensions.iter().any(|wanted| wanted.trim_start_matches('.') == ext),
        None => false,
    }
}

/// Gets source files under `root` that match any of `extensions`, sorted by
/// path. A root that is itself a file is returned as-is. Entries that vanish
/// or cannot be read during the walk are skipped with a warning.
pub fn get_files_from_dir(root: &Path, extensions: &[String], recursive: bool) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = vec![];

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    debug!("found {} source files under {}", files.len(), root.display());
    files
}
