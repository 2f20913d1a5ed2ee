use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::error::CaptureError;
use super::model::{Capture, Sample, Traces};

/// Header lines written by the capture tool before the data rows.
pub const PREAMBLE_LINES: usize = 3;
/// Separator between the fields of a data row.
pub const FIELD_SEPARATOR: &str = ", ";
/// `time, chanA, chanB, chanC, chanD`; anything after these is ignored.
pub const FIELD_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a capture file from disk.
///
/// The path is made absolute before opening. The first [`PREAMBLE_LINES`]
/// lines are skipped without inspection; every line after that must be a
/// data row or the whole load fails.
pub fn load_capture(path: &Path) -> Result<Capture, CaptureError> {
    let source = std::path::absolute(path).map_err(|source| CaptureError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Reading capture from {}", source.display());

    let file = File::open(&source).map_err(|e| CaptureError::Open {
        path: source.clone(),
        source: e,
    })?;
    let capture = read_capture(BufReader::new(file), source)?;

    log::info!(
        "Read {} samples from {}",
        capture.traces.len(),
        capture.source.display()
    );
    Ok(capture)
}

/// Parse capture text from any buffered reader.
pub fn read_capture<R: BufRead>(reader: R, source: PathBuf) -> Result<Capture, CaptureError> {
    let mut preamble = Vec::with_capacity(PREAMBLE_LINES);
    let mut traces = Traces::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| CaptureError::Read {
            line: line_no,
            source,
        })?;

        if idx < PREAMBLE_LINES {
            preamble.push(line);
            continue;
        }
        traces.push(parse_row(&line, line_no)?);
    }

    if preamble.len() < PREAMBLE_LINES {
        log::warn!(
            "{} has only {} line(s), no data after the preamble",
            source.display(),
            preamble.len()
        );
    }

    Ok(Capture {
        source,
        preamble,
        traces,
    })
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Parse one data row into a [`Sample`].
pub fn parse_row(line: &str, line_no: usize) -> Result<Sample, CaptureError> {
    let tokens: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if tokens.len() < FIELD_COUNT {
        return Err(CaptureError::FieldCount {
            line: line_no,
            expected: FIELD_COUNT,
            found: tokens.len(),
        });
    }

    let mut fields = [0.0; FIELD_COUNT];
    for (column, (slot, tok)) in fields.iter_mut().zip(&tokens).enumerate() {
        *slot = tok
            .trim()
            .parse::<f64>()
            .map_err(|_| CaptureError::NotNumeric {
                line: line_no,
                column,
                value: tok.to_string(),
            })?;
    }

    Ok(Sample::from_fields(fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn read_str(text: &str) -> Result<Capture, CaptureError> {
        read_capture(Cursor::new(text), PathBuf::from("/captures/test.txt"))
    }

    #[test]
    fn test_reads_rows_after_preamble() {
        let capture = read_str(
            "meta1\nmeta2\nmeta3\n0.0, 1.0, 0.5, 2.0, 0.2\n0.1, 1.1, 0.5, 2.1, 0.2\n",
        )
        .unwrap();

        assert_eq!(capture.preamble, vec!["meta1", "meta2", "meta3"]);
        assert_eq!(capture.traces.time(), &[0.0, 0.1]);
        assert_eq!(capture.traces.v1(), &[1.0 - 0.5, 1.1 - 0.5]);
        assert_eq!(capture.traces.v2(), &[2.0 - 0.2, 2.1 - 0.2]);
        assert!((capture.traces.v1()[1] - 0.6).abs() < 1e-12);
        assert!((capture.traces.v2()[1] - 1.9).abs() < 1e-12);
    }

    #[test]
    fn test_length_is_lines_minus_preamble() {
        let mut text = String::from("a\nb\nc\n");
        for i in 0..50 {
            text.push_str(&format!("{}, 1, 2, 3, 4\n", i as f64 * 0.01));
        }
        let traces = read_str(&text).unwrap().traces;
        assert_eq!(traces.len(), 50);
        assert_eq!(traces.v1().len(), 50);
        assert_eq!(traces.v2().len(), 50);
        assert!(traces.v1().iter().all(|&v| v == -1.0));
    }

    #[test]
    fn test_preamble_content_is_not_examined() {
        let capture = read_str("0.0, 1.0, 0.5, 2.0, 0.2\n, , ,\nnot a row\n5, 4, 3, 2, 1\n").unwrap();
        assert_eq!(capture.traces.len(), 1);
        assert_eq!(capture.traces.time(), &[5.0]);
    }

    #[test]
    fn test_short_file_gives_empty_capture() {
        let capture = read_str("only\ntwo\n").unwrap();
        assert!(capture.traces.is_empty());
        assert_eq!(capture.preamble.len(), 2);
    }

    #[test]
    fn test_four_fields_is_fatal() {
        let err = read_str("h\nh\nh\n0.0, 1.0, 0.5, 2.0, 0.2\n0.1, 1.1, 0.5, 2.1\n0.2, 1, 1, 1, 1\n")
            .unwrap_err();
        match err {
            CaptureError::FieldCount { line, found, .. } => {
                assert_eq!(line, 5);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let capture = read_str("a\nb\nc\n0.0, 1.0, 0.5, 2.0, 0.2, 9.9\n1.0, 3.0, 1.0, 4.0, 1.0, junk, 7\n").unwrap();
        assert_eq!(capture.traces.time(), &[0.0, 1.0]);
        assert_eq!(capture.traces.v1(), &[0.5, 2.0]);
        assert_eq!(capture.traces.v2(), &[2.0 - 0.2, 3.0]);
    }

    #[test]
    fn test_comma_without_space_is_one_field() {
        let err = parse_row("0,1,2,3,4", 4).unwrap_err();
        assert!(matches!(err, CaptureError::FieldCount { found: 1, .. }));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse_row("0.0, 1.0, abc, 2.0, 0.2", 9).unwrap_err();
        match err {
            CaptureError::NotNumeric { line, column, value } => {
                assert_eq!(line, 9);
                assert_eq!(column, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_data_line_is_fatal() {
        assert!(read_str("h\nh\nh\n\n").is_err());
    }

    #[test]
    fn test_crlf_line_endings() {
        let capture = read_str("h\r\nh\r\nh\r\n1.5, 3.0, 1.0, 0.0, 0.5\r\n").unwrap();
        assert_eq!(
            capture.traces.iter().collect::<Vec<_>>(),
            vec![Sample {
                time: 1.5,
                v1: 2.0,
                v2: -0.5
            }]
        );
    }

    #[test]
    fn test_load_capture_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "meta1\nmeta2\nmeta3\n0.0, 1.0, 0.5, 2.0, 0.2\n").unwrap();

        let capture = load_capture(file.path()).unwrap();
        assert!(capture.source.is_absolute());
        assert_eq!(capture.traces.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = load_capture(&missing).unwrap_err();
        assert!(matches!(err, CaptureError::Open { .. }));
    }
}
