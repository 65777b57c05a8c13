//! Equation and result files.
//!
//! Equation files are plain text:
//! - One infix equation per line
//! - Blank lines are ignored
//! - Surrounding whitespace is trimmed
//!
//! Result files hold one formatted result per line, newline-terminated.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;
use crate::calc::ExperimentConfig;

/// Load equations from a text file.
pub fn load_equations<P: AsRef<Path>>(path: P) -> Result<Vec<String>, IoError> {
    let file = std::fs::File::open(path.as_ref())
        .map_err(|e| IoError::Io(e.to_string()))?;
    read_equations(BufReader::new(file))
}

/// Read equations from any buffered reader.
pub fn read_equations<R: BufRead>(reader: R) -> Result<Vec<String>, IoError> {
    let mut equations = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| IoError::Io(e.to_string()))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            equations.push(trimmed.to_string());
        }
    }
    Ok(equations)
}

/// Write each line followed by a newline.
pub fn save_lines<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<(), IoError> {
    let file = std::fs::File::create(path.as_ref())
        .map_err(|e| IoError::Io(e.to_string()))?;
    write_lines(std::io::BufWriter::new(file), lines)
}

/// Write lines to any writer.
pub fn write_lines<W: Write, S: AsRef<str>>(mut writer: W, lines: &[S]) -> Result<(), IoError> {
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(|e| IoError::Io(e.to_string()))?;
    }
    writer.flush().map_err(|e| IoError::Io(e.to_string()))
}

/// Load an experiment configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig, IoError> {
    let text = std::fs::read_to_string(path.as_ref())
        .map_err(|e| IoError::Io(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| IoError::Json(e.to_string()))
}

/// Errors that can occur while reading or writing files.
#[derive(Debug, Clone, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid JSON: {0}")]
    Json(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_skips_blank_lines() {
        let text = "1,0,0 + 2,0,0\n\n   \n  3,0,0 / 0,0,0  \n";
        let equations = read_equations(text.as_bytes()).unwrap();
        assert_eq!(equations, vec!["1,0,0 + 2,0,0", "3,0,0 / 0,0,0"]);
    }

    #[test]
    fn test_write_lines() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &["1,0,0", "ERR"]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1,0,0\nERR\n");
    }

    #[test]
    fn test_file_roundtrip() {
        let path = std::env::temp_dir().join(format!("sscn-io-{}.txt", std::process::id()));
        save_lines(&path, &["1,1,1 * 0,0,1", "2,0,0 - 1,0,0"]).unwrap();
        let back = load_equations(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(back, vec!["1,1,1 * 0,0,1", "2,0,0 - 1,0,0"]);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_equations("/nonexistent/sscn/equations.txt"),
            Err(IoError::Io(_))
        ));
    }
}
