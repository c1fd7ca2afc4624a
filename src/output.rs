//! Output formatting for walk results.
//!
//! Renders a list of matched paths as newline-separated lines, NUL-separated
//! records (for `xargs -0`), or a JSON array of strings.

use crate::FinderError;
use std::fs;
use std::path::{Path, PathBuf};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Lines,
    Null,
    Json,
}

/// Formats the matched paths into a string.
pub fn format_paths(paths: &[PathBuf], format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Lines => format_separated(paths, '\n'),
        OutputFormat::Null => format_separated(paths, '\0'),
        OutputFormat::Json => format_json(paths, pretty),
    }
}

/// Writes the formatted paths to a file.
pub fn write_paths_to_file(
    paths: &[PathBuf],
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), FinderError> {
    let content = format_paths(paths, format, pretty);
    fs::write(&path, content).map_err(|e| FinderError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_separated(paths: &[PathBuf], separator: char) -> String {
    let mut out = String::with_capacity(paths.len() * 32);
    for path in paths {
        out.push_str(&path.to_string_lossy());
        out.push(separator);
    }
    out
}

fn format_json(paths: &[PathBuf], pretty: bool) -> String {
    let strings: Vec<String> = paths
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let mut out = if pretty {
        serde_json::to_string_pretty(&strings).expect("JSON serialization failed")
    } else {
        serde_json::to_string(&strings).expect("JSON serialization failed")
    };
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PathBuf> {
        vec![PathBuf::from("data/dir2"), PathBuf::from("data/file2.dat")]
    }

    #[test]
    fn lines_end_each_path_with_newline() {
        assert_eq!(
            format_paths(&sample(), OutputFormat::Lines, false),
            "data/dir2\ndata/file2.dat\n"
        );
    }

    #[test]
    fn null_separates_records() {
        assert_eq!(
            format_paths(&sample(), OutputFormat::Null, false),
            "data/dir2\0data/file2.dat\0"
        );
    }

    #[test]
    fn json_is_an_array_of_strings() {
        let out = format_paths(&sample(), OutputFormat::Json, false);
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec!["data/dir2", "data/file2.dat"]);
    }

    #[test]
    fn empty_result_formats_to_empty_lines() {
        assert_eq!(format_paths(&[], OutputFormat::Lines, false), "");
        assert_eq!(format_paths(&[], OutputFormat::Json, false), "[]\n");
    }
}
