// display.rs — Full and summary report rendering

use std::collections::HashMap;
use std::time::Duration;

use crate::counter::FileRecord;
use crate::language::Registry;

pub const FILE_COUNT_WIDTH: usize = 7;
pub const LINE_COUNT_WIDTH: usize = 11;

#[cfg(not(windows))]
const THIN: char = '─';
#[cfg(not(windows))]
const THICK: char = '━';
#[cfg(not(windows))]
const ELLIPSIS: &str = "…";

#[cfg(windows)]
const THIN: char = '-';
#[cfg(windows)]
const THICK: char = '=';
#[cfg(windows)]
const ELLIPSIS: &str = "...";

/// Per-language aggregation: file count and summed line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub lang: String,
    pub files: usize,
    pub lines: usize,
}

/// Per-language totals, one row each, plus the counting-phase elapsed
/// time when it was long enough to be worth reporting.
pub fn display_summary(
    records: &[FileRecord],
    registry: &Registry,
    sortbylines: bool,
    elapsed: Duration,
) {
    let rows = summarize(records, registry, sortbylines);
    let lang_width = registry.max_name_width();
    for row in rows {
        let name = registry.display_name(&row.lang);
        println!(
            "{:<lang_width$} {:>FILE_COUNT_WIDTH$} {} {:>LINE_COUNT_WIDTH$} lines",
            name,
            fmt_num(row.files),
            plural(row.files),
            fmt_num(row.lines),
        );
    }
    let secs = elapsed.as_secs_f64();
    if secs > 0.1 {
        println!("{secs:.3} sec");
    }
}

/// Group the records by language and order the groups. Pure and
/// order-independent: shuffling the input never changes the rows.
pub fn summarize(
    records: &[FileRecord],
    registry: &Registry,
    sortbylines: bool,
) -> Vec<SummaryRow> {
    let mut totals: HashMap<&str, (usize, usize)> = HashMap::new();
    for record in records {
        let entry = totals.entry(&record.lang).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += record.lines;
    }
    let mut rows: Vec<SummaryRow> = totals
        .into_iter()
        .map(|(lang, (files, lines))| SummaryRow {
            lang: lang.to_string(),
            files,
            lines,
        })
        .collect();
    rows.sort_by(|a, b| {
        let a_name = registry.display_name(&a.lang).to_lowercase();
        let b_name = registry.display_name(&b.lang).to_lowercase();
        if sortbylines {
            a.lines.cmp(&b.lines).then(a_name.cmp(&b_name))
        } else {
            a_name.cmp(&b_name)
        }
    });
    rows
}

/// Per-file rows grouped under centered language headers, each group
/// closed by a subtotal, with a heavy rule after the final group.
pub fn display_full(
    records: &[FileRecord],
    registry: &Registry,
    sortbylines: bool,
    maxwidth: usize,
) {
    let mut records = records.to_vec();
    sort_records(&mut records, sortbylines);

    let filename_width = filename_column_width(&records, maxwidth);
    let row_width = filename_width + 1 + LINE_COUNT_WIDTH;

    let mut lang: Option<&str> = None;
    let mut count = 0;
    let mut subtotal = 0;
    for record in &records {
        if lang != Some(record.lang.as_str()) {
            if let Some(prev) = lang {
                display_subtotal(registry.display_name(prev), count, subtotal, row_width);
                count = 0;
                subtotal = 0;
            }
            lang = Some(record.lang.as_str());
            let header = format!(" {} ", registry.display_name(&record.lang));
            println!("{}", centered(&header, THICK, row_width));
        }
        let filename = elide_middle(&record.path.display().to_string(), filename_width);
        println!(
            "{:<filename_width$} {:>LINE_COUNT_WIDTH$}",
            filename,
            fmt_num(record.lines),
        );
        count += 1;
        subtotal += record.lines;
    }
    if let Some(prev) = lang {
        display_subtotal(registry.display_name(prev), count, subtotal, row_width);
        println!("{}", THICK.to_string().repeat(row_width));
    }
}

/// Sort for the full report: language groups first, then the chosen
/// secondary key (lowercased name, or line count under `-s`).
pub fn sort_records(records: &mut [FileRecord], sortbylines: bool) {
    records.sort_by(|a, b| {
        let group = a.lang.cmp(&b.lang);
        let a_name = a.path.display().to_string().to_lowercase();
        let b_name = b.path.display().to_string().to_lowercase();
        if sortbylines {
            group.then(a.lines.cmp(&b.lines)).then(a_name.cmp(&b_name))
        } else {
            group.then(a_name.cmp(&b_name)).then(a.lines.cmp(&b.lines))
        }
    });
}

fn display_subtotal(name: &str, count: usize, subtotal: usize, row_width: usize) {
    println!("{}", THIN.to_string().repeat(row_width));
    let numbers = format!(
        "{:>FILE_COUNT_WIDTH$} {} {:>LINE_COUNT_WIDTH$} lines",
        fmt_num(count),
        plural(count),
        fmt_num(subtotal),
    );
    let name_width = row_width.saturating_sub(numbers.chars().count());
    println!("{name:<name_width$}{numbers}");
}

/// Widest filename, capped at the configured maximum width.
fn filename_column_width(records: &[FileRecord], maxwidth: usize) -> usize {
    let mut width = 0;
    for record in records {
        let size = record.path.display().to_string().chars().count();
        if size > width {
            width = size;
            if width > maxwidth {
                return maxwidth;
            }
        }
    }
    width
}

/// Replace the middle of an over-long name with an ellipsis, keeping
/// roughly the first third and the last two thirds of the width.
fn elide_middle(name: &str, width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= width {
        return name.to_string();
    }
    let third = (width / 3).saturating_sub(1);
    let two_thirds = third * 2 + 1;
    let head: String = chars[..third].iter().collect();
    let tail: String = chars[chars.len() - two_thirds..].iter().collect();
    format!("{head}{ELLIPSIS}{tail}")
}

fn centered(text: &str, fill: char, width: usize) -> String {
    let size = text.chars().count();
    if size >= width {
        return text.to_string();
    }
    let pad = width - size;
    let left = pad / 2;
    let right = pad - left;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        text,
        fill.to_string().repeat(right),
    )
}

/// Thousands-separator formatting.
fn fmt_num(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Singular keeps the column aligned with a trailing space.
fn plural(count: usize) -> &'static str {
    if count == 1 { "file " } else { "files" }
}
