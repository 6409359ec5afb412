// cli.rs — CLI argument parsing via clap derive

use clap::Parser;

/// clc — count lines of code.
///
/// Counts the lines in the code files for the languages processed
/// (ignoring . folders), in parallel across all CPU cores.
#[derive(Parser, Debug)]
#[command(
    name = "clc",
    version,
    about = "Count lines of code per language — full per-file detail or per-language totals",
    after_help = "\
EXAMPLES:
  clc                          Count code lines under the current directory
  clc src/ tests/              Scan specific roots
  clc -l rs py                 Only count Rust and Python files
  clc -L cpp                   Count everything except C++
  clc -e vendor third_party    Exclude extra directory/file names
  clc -i Makefile configure    Include extension-less files (shebang classified)
  clc -s                       Sort files by line count instead of name
  clc -S                       Per-language totals only
  clc -m 100 > report.txt      Fixed width for redirected output

LANGUAGE DEFINITIONS:
  Extra languages can be defined in clc.dat files, searched for in the
  clc executable's folder, the home folder, the user config folder, and
  the current folder. Each non-blank, non-# line has the form:

    lang|Name|ext1 [ext2 [ext3 ... [extN]]]

  for example:

    pas|Pascal|pas pp inc

  Later files override or extend earlier definitions by language id."
)]
pub struct Args {
    /// The language(s) to count [default: all known]
    #[arg(short = 'l', long = "language", value_name = "LANG", num_args = 0..)]
    pub language: Option<Vec<String>>,

    /// The languages not to count, e.g., "-L d cpp" with no "-l" means
    /// count all languages except D and C++ [default: none]
    #[arg(short = 'L', long = "skiplanguage", value_name = "LANG", num_args = 0..)]
    pub skiplanguage: Option<Vec<String>>,

    /// The file and folder names to exclude, merged with the built-in
    /// set [default: .hidden and __pycache__ build build.rs CVS dist
    /// setup.py target]
    #[arg(short = 'e', long = "exclude", value_name = "NAME", num_args = 0..)]
    pub exclude: Vec<String>,

    /// The files to include (e.g., those without suffixes)
    #[arg(short = 'i', long = "include", value_name = "NAME", num_args = 0..)]
    pub include: Vec<String>,

    /// Max line width to use (e.g., for redirected output)
    /// [default: terminal width or needed width if less]
    #[arg(short = 'm', long = "maxwidth", value_name = "WIDTH")]
    pub maxwidth: Option<usize>,

    /// Sort by lines [default: sort by names]
    #[arg(short = 's', long = "sortbylines")]
    pub sortbylines: bool,

    /// Output per-language totals and total time if > 0.1 sec
    /// [default: output per-language and per-file totals]
    #[arg(short = 'S', long = "summary")]
    pub summary: bool,

    /// The files to count or the folders to recursively search
    #[arg(value_name = "FILE", default_value = ".")]
    pub file: Vec<String>,
}
