//! Parser for directory data files.
//!
//! Two JSON files make up a data directory:
//! - professionals.json: array of `Professional`
//! - reviews.json: array of `Review`, each tagged with its `professionalId`
//!
//! The same JSON is embedded in the binary as fixtures (see `fixtures`), so
//! both paths share `parse_professionals_str` and `parse_reviews_str`.

use crate::error::{DataLoadError, Result};
use crate::types::{Professional, Review};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a whole data file, mapping a missing file to `FileNotFound`
fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Deserialize a JSON array, keeping the file name and line in the error
fn parse_json_array<T: DeserializeOwned>(content: &str, file: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: e.line(),
        reason: e.to_string(),
    })
}

/// Parse professionals from a JSON string
pub fn parse_professionals_str(content: &str, file: &str) -> Result<Vec<Professional>> {
    parse_json_array(content, file)
}

/// Parse reviews from a JSON string
pub fn parse_reviews_str(content: &str, file: &str) -> Result<Vec<Review>> {
    parse_json_array(content, file)
}

/// Parse the professionals.json file
pub fn parse_professionals(path: &Path) -> Result<Vec<Professional>> {
    let content = read_file(path)?;
    parse_professionals_str(&content, &file_name(path))
}

/// Parse the reviews.json file
pub fn parse_reviews(path: &Path) -> Result<Vec<Review>> {
    let content = read_file(path)?;
    parse_reviews_str(&content, &file_name(path))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_professionals_str() {
        let json = r#"[
            {"id": "a", "name": "A", "title": "Psychiatrist", "specialty": "Sleep",
             "rating": 4.2, "reviews": 3, "price": 900}
        ]"#;

        let pros = parse_professionals_str(json, "professionals.json").unwrap();
        assert_eq!(pros.len(), 1);
        assert_eq!(pros[0].id, "a");
        assert_eq!(pros[0].price, 900);
    }

    #[test]
    fn test_parse_error_reports_file_and_line() {
        let json = "[\n  {\"id\": \"a\",\n  \"name\": }\n]";

        match parse_professionals_str(json, "professionals.json") {
            Err(DataLoadError::ParseError { file, line, .. }) => {
                assert_eq!(file, "professionals.json");
                assert_eq!(line, 3);
            }
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let json = r#"[{"id": "a", "name": "A"}]"#;
        assert!(matches!(
            parse_professionals_str(json, "professionals.json"),
            Err(DataLoadError::ParseError { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_reviews(Path::new("/definitely/not/here/reviews.json"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
