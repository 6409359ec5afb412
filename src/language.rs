// language.rs — Language registry: id → (display name, extensions)

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use colored::Colorize;
use once_cell::sync::Lazy;

/// One language definition: display name plus recognized extensions
/// (each with a leading dot). Extension matching is case-sensitive —
/// Perl deliberately carries both `.pl` and `.PL`.
#[derive(Debug, Clone)]
pub struct LangData {
    pub name: String,
    pub exts: Vec<String>,
}

impl LangData {
    fn new(name: &str, exts: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            exts: exts.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Registry of known languages. Built once at startup from the
/// built-in table, then extended by any `clc.dat` definition files,
/// and passed by reference from then on — never mutated afterwards.
///
/// Insertion order is significant: when two languages claim the same
/// extension, the earliest registered id wins resolution.
#[derive(Debug, Clone)]
pub struct Registry {
    langs: HashMap<String, LangData>,
    order: Vec<String>,
}

/// Shebang interpreter substrings, checked in this fixed order.
const SHEBANG_LANGS: &[(&str, &str)] = &[
    ("julia", "jl"),
    ("perl", "pl"),
    ("python", "py"),
    ("ruby", "rb"),
    ("tcl", "tcl"),
];

/// Names excluded by default wherever they occur in the tree,
/// in addition to anything given with `--exclude`.
pub static DEFAULT_EXCLUDES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "__pycache__",
        "build",
        "build.rs",
        "CVS",
        "dist",
        "setup.py",
        "target",
    ]
    .iter()
    .copied()
    .collect()
});

impl Registry {
    /// Registry with the compiled-in language set.
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            langs: HashMap::new(),
            order: Vec::new(),
        };
        for (id, data) in [
            ("c", LangData::new("C", &[".h", ".c"])),
            ("cpp", LangData::new("C++", &[".hpp", ".hxx", ".cpp", ".cxx"])),
            ("d", LangData::new("D", &[".d"])),
            ("go", LangData::new("Go", &[".go"])),
            ("java", LangData::new("Java", &[".java"])),
            ("jl", LangData::new("Julia", &[".jl"])),
            ("nim", LangData::new("Nim", &[".nim"])),
            ("pl", LangData::new("Perl", &[".pl", ".pm", ".PL"])),
            ("py", LangData::new("Python", &[".pyw", ".py"])),
            ("rb", LangData::new("Ruby", &[".rb"])),
            ("rs", LangData::new("Rust", &[".rs"])),
            ("tcl", LangData::new("Tcl", &[".tcl"])),
            ("vala", LangData::new("Vala", &[".vala"])),
        ] {
            registry.insert(id, data);
        }
        registry
    }

    /// Add or replace a definition by id. Warns when a new extension is
    /// already owned by a different id (resolution stays first-match).
    pub fn insert(&mut self, id: &str, data: LangData) {
        for ext in &data.exts {
            if let Some(owner) = self.lang_for_ext(ext)
                && owner != id
            {
                eprintln!(
                    "{} extension {} already mapped to {}; {} will not win resolution",
                    "[WARN]".yellow(),
                    ext,
                    owner,
                    id
                );
            }
        }
        if !self.langs.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.langs.insert(id.to_string(), data);
    }

    /// Resolve a dotted extension to a language id; first registered
    /// match wins.
    pub fn lang_for_ext(&self, ext: &str) -> Option<&str> {
        self.order
            .iter()
            .find(|id| self.langs[id.as_str()].exts.iter().any(|e| e == ext))
            .map(|id| id.as_str())
    }

    /// Shebang fallback: resolve a language from the first line of a
    /// file when extension lookup failed.
    pub fn lang_for_line(line: &[u8]) -> Option<&'static str> {
        if !line.starts_with(b"#!") {
            return None;
        }
        SHEBANG_LANGS
            .iter()
            .find(|(needle, _)| {
                line.windows(needle.len())
                    .any(|window| window == needle.as_bytes())
            })
            .map(|&(_, id)| id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.langs.contains_key(id)
    }

    /// Whether the given language claims the dotted extension.
    pub fn ext_matches(&self, id: &str, ext: &str) -> bool {
        self.langs
            .get(id)
            .is_some_and(|d| d.exts.iter().any(|e| e == ext))
    }

    /// Display name for an id, falling back to the id itself.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.langs.get(id).map_or(id, |d| d.name.as_str())
    }

    /// Sorted ids, for help text and default selection.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.langs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Widest display name, used to size the summary name column.
    pub fn max_name_width(&self) -> usize {
        self.langs
            .values()
            .map(|d| d.name.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Merge definitions from the ordered `clc.dat` candidates: the
    /// executable's directory, the home directory, the user config
    /// directory, and the current directory. Later files override or
    /// extend earlier entries by id; missing files are skipped.
    pub fn load_definition_files(&mut self) {
        for path in definition_file_candidates() {
            if let Ok(content) = std::fs::read_to_string(&path) {
                self.merge_definitions(&content, &path);
            }
        }
    }

    /// Parse `id | Display Name | ext1 ext2 ...` lines. Blank lines and
    /// `#` comments are skipped; a malformed line is reported to stderr
    /// and skipped, never fatal.
    pub fn merge_definitions(&mut self, content: &str, source: &Path) {
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.splitn(3, '|').collect();
            if parts.len() != 3 {
                eprintln!(
                    "{} ignoring invalid line from {}: {}",
                    "[WARN]".yellow(),
                    source.display(),
                    line
                );
                continue;
            }
            let id = parts[0].trim();
            let name = parts[1].trim();
            let exts: Vec<String> = parts[2]
                .split_whitespace()
                .map(|ext| {
                    if ext.starts_with('.') {
                        ext.to_string()
                    } else {
                        format!(".{ext}")
                    }
                })
                .collect();
            self.insert(
                id,
                LangData {
                    name: name.to_string(),
                    exts,
                },
            );
        }
    }
}

fn definition_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        candidates.push(dir.join("clc.dat"));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join("clc.dat"));
    }
    if let Some(config) = dirs::config_dir() {
        candidates.push(config.join("clc.dat"));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("clc.dat"));
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_extensions() {
        let registry = Registry::with_builtins();
        assert_eq!(registry.lang_for_ext(".rs"), Some("rs"));
        assert_eq!(registry.lang_for_ext(".py"), Some("py"));
        assert_eq!(registry.lang_for_ext(".pyw"), Some("py"));
        assert_eq!(registry.lang_for_ext(".hpp"), Some("cpp"));
        assert_eq!(registry.lang_for_ext(".xyz"), None);
    }

    #[test]
    fn test_extension_matching_is_case_sensitive() {
        let registry = Registry::with_builtins();
        assert_eq!(registry.lang_for_ext(".PL"), Some("pl"));
        assert_eq!(registry.lang_for_ext(".RS"), None);
    }

    #[test]
    fn test_shebang_resolution() {
        assert_eq!(
            Registry::lang_for_line(b"#!/usr/bin/env python3\n"),
            Some("py")
        );
        assert_eq!(Registry::lang_for_line(b"#!/usr/bin/ruby\n"), Some("rb"));
        assert_eq!(Registry::lang_for_line(b"#!/usr/bin/env julia\n"), Some("jl"));
        assert_eq!(Registry::lang_for_line(b"#!/bin/sh\n"), None);
        // Not a shebang at all
        assert_eq!(Registry::lang_for_line(b"import python\n"), None);
        assert_eq!(Registry::lang_for_line(b""), None);
    }

    #[test]
    fn test_merge_definitions_adds_and_overrides() {
        let mut registry = Registry::with_builtins();
        let dat = "\n# comment\npas | Pascal | pas pp .inc\nrb | Ruby+ | rb rbw\n";
        registry.merge_definitions(dat, Path::new("clc.dat"));

        assert_eq!(registry.lang_for_ext(".pas"), Some("pas"));
        assert_eq!(registry.lang_for_ext(".pp"), Some("pas"));
        assert_eq!(registry.lang_for_ext(".inc"), Some("pas"));
        assert_eq!(registry.display_name("pas"), "Pascal");
        // Override by id keeps the id and replaces the definition
        assert_eq!(registry.display_name("rb"), "Ruby+");
        assert_eq!(registry.lang_for_ext(".rbw"), Some("rb"));
    }

    #[test]
    fn test_merge_definitions_skips_malformed_lines() {
        let mut registry = Registry::with_builtins();
        let before = registry.ids().len();
        registry.merge_definitions("not a definition\n", Path::new("clc.dat"));
        assert_eq!(registry.ids().len(), before);
    }

    #[test]
    fn test_first_match_wins_on_duplicate_extension() {
        let mut registry = Registry::with_builtins();
        registry.merge_definitions("hdr | Header | h\n", Path::new("clc.dat"));
        // ".h" was registered to C first, so C still wins
        assert_eq!(registry.lang_for_ext(".h"), Some("c"));
    }

    #[test]
    fn test_ids_sorted_and_name_width() {
        let registry = Registry::with_builtins();
        let ids = registry.ids();
        assert!(ids.contains(&"rs"));
        assert!(ids.is_sorted());
        // "Python" is the longest built-in display name
        assert_eq!(registry.max_name_width(), 6);
    }
}
