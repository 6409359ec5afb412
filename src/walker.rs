// walker.rs — Root enumeration with pruned directory traversal

use std::path::PathBuf;

use colored::Colorize;
use walkdir::WalkDir;

use crate::counter::ScanConfig;
use crate::filter;
use crate::language::Registry;

/// Enumerate every candidate file under the configured roots.
///
/// A root that is a plain file is yielded when the filter accepts it.
/// A directory root is walked with rejected subdirectories pruned
/// before descent, so excluded trees (build outputs and the like) are
/// never entered. A root that does not exist yields nothing.
///
/// Visitation order carries no meaning; the reporter sorts afterwards.
pub fn enumerate(config: &ScanConfig, registry: &Registry) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in &config.files {
        if root.is_file() {
            if filter::is_valid_filename(root, config, registry) {
                files.push(root.clone());
            }
            continue;
        }
        if !root.is_dir() {
            continue;
        }
        if let Some(name) = root.file_name().and_then(|n| n.to_str())
            && !filter::is_valid_dirname(name, config)
        {
            continue;
        }
        let walk = WalkDir::new(root).follow_links(false).into_iter();
        for entry in walk.filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            e.file_name()
                .to_str()
                .is_some_and(|name| filter::is_valid_dirname(name, config))
        }) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    if filter::is_valid_filename(entry.path(), config, registry) {
                        files.push(entry.into_path());
                    }
                }
                Ok(_) => {}
                Err(e) => eprintln!("{} {}", "[WARN]".yellow(), e),
            }
        }
    }
    files
}
