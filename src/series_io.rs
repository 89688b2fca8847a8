//! Plain-text series input and output.
//!
//! Input holds one observation per line. Blank lines and the tokens `NA`,
//! `NaN`, `null` and `-` (any case) are absent observations; lines starting
//! with `#` are comments and take no position. Output writes one row per
//! position with columns separated by tabs and absent values as `NA`.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use lagstat_series::Series;
use tracing::info;

const ABSENT_TOKENS: &[&str] = &["na", "nan", "null", "-"];

/// Parses series text.
pub fn parse_series(text: &str) -> Result<Series> {
    let mut values = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.starts_with('#') {
            continue;
        }
        if token.is_empty() || ABSENT_TOKENS.contains(&token.to_ascii_lowercase().as_str()) {
            values.push(None);
            continue;
        }
        match token.parse::<f64>() {
            Ok(x) => values.push(Some(x)),
            Err(_) => bail!("line {}: invalid observation {token:?}", lineno + 1),
        }
    }
    Ok(Series::new(values))
}

/// Reads and parses the series file at `path`.
pub fn read_series(path: &Path) -> Result<Series> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series: {}", path.display()))?;
    let series =
        parse_series(&text).with_context(|| format!("failed to parse series: {}", path.display()))?;
    info!(
        path = %path.display(),
        n = series.len(),
        valid = series.valid_count(),
        "series loaded"
    );
    Ok(series)
}

/// Formats series side by side, one row per position.
///
/// Shorter columns are padded with `NA`.
pub fn format_columns(columns: &[&Series]) -> String {
    let rows = columns.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = String::new();
    for i in 0..rows {
        for (j, column) in columns.iter().enumerate() {
            if j > 0 {
                out.push('\t');
            }
            match column.get(i) {
                Some(x) => {
                    let _ = write!(out, "{x}");
                }
                None => out.push_str("NA"),
            }
        }
        out.push('\n');
    }
    out
}

/// Writes `contents` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_input() {
        let text = "# header\n1.5\n\nNA\n-2\nnan\nNULL\n-\n  3e2  \n";
        let s = parse_series(text).unwrap();
        assert_eq!(
            s.values(),
            &[
                Some(1.5),
                None,
                None,
                Some(-2.0),
                None,
                None,
                None,
                Some(300.0)
            ]
        );
    }

    #[test]
    fn infinite_values_are_absent() {
        let s = parse_series("inf\n1\n").unwrap();
        assert_eq!(s.values(), &[None, Some(1.0)]);
    }

    #[test]
    fn invalid_token_reports_line() {
        let err = parse_series("1\n2\nabc\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: invalid observation \"abc\"");
    }

    #[test]
    fn empty_input_is_empty_series() {
        assert!(parse_series("").unwrap().is_empty());
        assert!(parse_series("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn format_single_column() {
        let s = Series::new(vec![Some(1.0), None, Some(2.5)]);
        assert_eq!(format_columns(&[&s]), "1\nNA\n2.5\n");
    }

    #[test]
    fn format_pads_short_columns() {
        let a = Series::from(vec![1.0, 2.0]);
        let b = Series::from(vec![3.0]);
        assert_eq!(format_columns(&[&a, &b]), "1\t3\n2\tNA\n");
    }

    #[test]
    fn output_round_trips_through_parse() {
        let s = Series::new(vec![Some(0.1), None, Some(-7.25)]);
        assert_eq!(parse_series(&format_columns(&[&s])).unwrap(), s);
    }

    #[test]
    fn read_and_write_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "4\nNA\n6\n").unwrap();
        let s = read_series(&input).unwrap();
        assert_eq!(s.valid_count(), 2);

        let output = dir.path().join("out.txt");
        write_output(Some(&output), &format_columns(&[&s])).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "4\nNA\n6\n");
    }

    #[test]
    fn read_missing_file_names_path() {
        let err = read_series(Path::new("/nonexistent/series.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/series.txt"));
    }
}
