// counter.rs — Scan configuration, per-file counting, parallel dispatch

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use rayon::prelude::*;
use terminal_size::{Width, terminal_size};

use crate::cli::Args;
use crate::display::LINE_COUNT_WIDTH;
use crate::language::{DEFAULT_EXCLUDES, Registry};
use crate::walker;

/// Immutable snapshot of the resolved options, derived once from the
/// CLI arguments and shared by reference with every downstream stage.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub language: HashSet<String>,
    pub exclude: HashSet<String>,
    pub include: HashSet<String>,
    pub maxwidth: usize,
    pub sortbylines: bool,
    pub summary: bool,
    pub files: Vec<PathBuf>,
}

impl ScanConfig {
    pub fn from_args(args: &Args, registry: &Registry) -> Result<Self> {
        let mut language: HashSet<String> = match &args.language {
            None => registry.ids().iter().map(|s| s.to_string()).collect(),
            Some(ids) => {
                for id in ids {
                    if !registry.contains(id) {
                        bail!(
                            "unknown language: {id} (known: {})",
                            registry.ids().join(" ")
                        );
                    }
                }
                ids.iter().cloned().collect()
            }
        };
        if let Some(skips) = &args.skiplanguage {
            for id in skips {
                language.remove(id);
            }
        }

        let mut exclude: HashSet<String> =
            DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
        exclude.extend(args.exclude.iter().cloned());
        let include: HashSet<String> = args.include.iter().cloned().collect();

        let term_width = terminal_size().map_or(80, |(Width(w), _)| w as usize);
        // The filename column gets whatever is left after the line
        // count column and its separator.
        let maxwidth = args
            .maxwidth
            .unwrap_or(term_width)
            .saturating_sub(LINE_COUNT_WIDTH + 2);

        let mut files: Vec<PathBuf> = args
            .file
            .iter()
            .map(|f| std::path::absolute(f).unwrap_or_else(|_| PathBuf::from(f)))
            .collect();
        files.sort();
        files.dedup();

        Ok(Self {
            language,
            exclude,
            include,
            maxwidth,
            sortbylines: args.sortbylines,
            summary: args.summary,
            files,
        })
    }
}

/// Result of counting one file.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub lang: String,
    pub path: PathBuf,
    pub lines: usize,
}

/// Collected records plus the wall-clock time of the counting phase.
pub struct ScanOutcome {
    pub records: Vec<FileRecord>,
    pub elapsed: Duration,
}

/// Enumerate the roots, then fan the per-file counting out across all
/// CPU cores. A file that fails to read is logged and dropped — it
/// never aborts the scan, and it is never conflated with an empty
/// file. Collection order is meaningless; the reporter re-sorts.
pub fn run_scan(config: &ScanConfig, registry: &Registry) -> ScanOutcome {
    let files = walker::enumerate(config, registry);
    let start = Instant::now();
    let records = files
        .par_iter()
        .filter_map(|path| match count_file(path, registry) {
            Ok(record) => record,
            Err(e) => {
                eprintln!("{} skipped {}: {e}", "[WARN]".yellow(), path.display());
                None
            }
        })
        .collect();
    ScanOutcome {
        records,
        elapsed: start.elapsed(),
    }
}

/// Classify and count a single file. Returns `Ok(None)` when no
/// language can be determined even via the shebang fallback.
///
/// Zero-length files are answered from metadata alone, without ever
/// opening the content.
pub fn count_file(path: &Path, registry: &Registry) -> Result<Option<FileRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"));
    let mut lang = ext
        .as_deref()
        .and_then(|e| registry.lang_for_ext(e))
        .map(str::to_string);

    let metadata = path
        .metadata()
        .with_context(|| format!("cannot stat {}", path.display()))?;
    if metadata.len() == 0 {
        return Ok(lang.map(|lang| FileRecord {
            lang,
            path: path.to_path_buf(),
            lines: 0,
        }));
    }

    let bytes =
        fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    if lang.is_none() {
        let first_line = bytes.split(|&b| b == b'\n').next().unwrap_or(&bytes);
        lang = Registry::lang_for_line(first_line).map(str::to_string);
    }
    Ok(lang.map(|lang| FileRecord {
        lang,
        path: path.to_path_buf(),
        lines: count_newlines(&bytes),
    }))
}

/// A line is a `\n` byte; an unterminated final line adds nothing.
fn count_newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}
