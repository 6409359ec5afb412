// filter.rs — Pure path acceptance predicates

use std::path::{Component, Path};

use crate::counter::ScanConfig;
use crate::language::Registry;

/// Decide whether a discovered file should be counted.
///
/// Rules, in order:
/// 1. a base name listed with `--include` is accepted unconditionally;
/// 2. hidden base names are rejected;
/// 3. any excluded path segment rejects the file;
/// 4. any hidden path segment (longer than one char) rejects the file;
/// 5. files without an extension are rejected;
/// 6. otherwise the extension must belong to a selected language.
pub fn is_valid_filename(path: &Path, config: &ScanConfig, registry: &Registry) -> bool {
    let Some(base) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if config.include.contains(base) {
        return true;
    }
    if base.starts_with('.') {
        return false;
    }
    for component in path.components() {
        if let Component::Normal(name) = component {
            let name = name.to_string_lossy();
            if config.exclude.contains(name.as_ref()) {
                return false;
            }
            if name.len() > 1 && name.starts_with('.') {
                return false;
            }
        }
    }
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let dotted = format!(".{ext}");
    config
        .language
        .iter()
        .any(|id| registry.ext_matches(id, &dotted))
}

/// Decide whether a directory should be descended into. Hidden names
/// longer than one char (so `.` and `..` survive) and excluded names
/// prune the whole subtree.
pub fn is_valid_dirname(name: &str, config: &ScanConfig) -> bool {
    if name.len() > 1 && name.starts_with('.') {
        return false;
    }
    !config.exclude.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(language: &[&str], exclude: &[&str], include: &[&str]) -> ScanConfig {
        ScanConfig {
            language: language.iter().map(|s| s.to_string()).collect(),
            exclude: exclude.iter().map(|s| s.to_string()).collect(),
            include: include.iter().map(|s| s.to_string()).collect(),
            maxwidth: 80,
            sortbylines: false,
            summary: false,
            files: Vec::new(),
        }
    }

    fn all_langs(registry: &Registry) -> Vec<&str> {
        registry.ids()
    }

    #[test]
    fn test_accepts_selected_extension() {
        let registry = Registry::with_builtins();
        let config = config(&all_langs(&registry), &[], &[]);
        assert!(is_valid_filename(
            &PathBuf::from("/src/app.rs"),
            &config,
            &registry
        ));
    }

    #[test]
    fn test_rejects_unselected_language() {
        let registry = Registry::with_builtins();
        let config = config(&["py"], &[], &[]);
        assert!(!is_valid_filename(
            &PathBuf::from("/src/app.rs"),
            &config,
            &registry
        ));
        assert!(is_valid_filename(
            &PathBuf::from("/src/app.py"),
            &config,
            &registry
        ));
    }

    #[test]
    fn test_rejects_hidden_file_and_hidden_segment() {
        let registry = Registry::with_builtins();
        let config = config(&all_langs(&registry), &[], &[]);
        assert!(!is_valid_filename(
            &PathBuf::from("/src/.hidden.rs"),
            &config,
            &registry
        ));
        assert!(!is_valid_filename(
            &PathBuf::from("/src/.git/hook.py"),
            &config,
            &registry
        ));
    }

    #[test]
    fn test_rejects_excluded_segment_anywhere() {
        let registry = Registry::with_builtins();
        let config = config(&all_langs(&registry), &["build"], &[]);
        assert!(!is_valid_filename(
            &PathBuf::from("/root/build/deep/app.cpp"),
            &config,
            &registry
        ));
    }

    #[test]
    fn test_rejects_missing_extension() {
        let registry = Registry::with_builtins();
        let config = config(&all_langs(&registry), &[], &[]);
        assert!(!is_valid_filename(
            &PathBuf::from("/src/Makefile"),
            &config,
            &registry
        ));
    }

    #[test]
    fn test_include_bypasses_everything() {
        let registry = Registry::with_builtins();
        let config = config(&[], &["scripts"], &["Makefile", ".envrc"]);
        // No extension, empty language selection, excluded parent — all bypassed
        assert!(is_valid_filename(
            &PathBuf::from("/src/scripts/Makefile"),
            &config,
            &registry
        ));
        // Even hidden names, when explicitly included
        assert!(is_valid_filename(
            &PathBuf::from("/src/.envrc"),
            &config,
            &registry
        ));
    }

    #[test]
    fn test_dirname_rules() {
        let registry = Registry::with_builtins();
        let config = config(&all_langs(&registry), &["target"], &[]);
        assert!(is_valid_dirname("src", &config));
        assert!(is_valid_dirname(".", &config));
        assert!(is_valid_dirname("..", &config));
        assert!(!is_valid_dirname(".git", &config));
        assert!(!is_valid_dirname("target", &config));
    }
}
