//! Corpus loading.
//!
//! A corpus is a JSON array of `{ "title": ..., "lines": [...] }` objects. The
//! bundled corpus is compiled into the binary so the tool works without any
//! data files on disk.

use std::{fs, path::Path};

use tracing::debug;

use crate::{Document, DocumentError};

/// The corpus shipped with the tool.
const BUNDLED_CORPUS: &str = include_str!("../data/sonnets.json");

/// Loads a corpus from a JSON file on disk.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>, DocumentError> {
    let contents = fs::read_to_string(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let documents = parse_corpus_str(&contents, path)?;
    debug!(path = %path.display(), count = documents.len(), "loaded corpus");
    Ok(documents)
}

/// Parses a corpus from a JSON string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_corpus_str(contents: &str, path: &Path) -> Result<Vec<Document>, DocumentError> {
    serde_json::from_str(contents).map_err(|source| DocumentError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the corpus bundled with the tool.
pub fn bundled_corpus() -> Vec<Document> {
    serde_json::from_str(BUNDLED_CORPUS).expect("bundled corpus should parse")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn bundled_corpus_has_three_sonnets() {
        let corpus = bundled_corpus();
        assert_eq!(corpus.len(), 3);
        assert!(corpus.iter().all(|doc| doc.lines.len() == 14));
        assert!(corpus[0].title.starts_with("Sonnet 18"));
    }

    #[test]
    fn parses_documents_in_order() {
        let json = r#"[
            {"title": "First", "lines": ["a", "b"]},
            {"title": "Second", "lines": []}
        ]"#;
        let docs = parse_corpus_str(json, Path::new("corpus.json")).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].title, "First");
        assert_eq!(docs[0].lines, vec!["a", "b"]);
        assert!(docs[1].lines.is_empty());
    }

    #[test]
    fn missing_lines_is_a_parse_error() {
        let err = parse_corpus_str(r#"[{"title": "x"}]"#, Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, DocumentError::ParseJson { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("nope.json");
        let err = load_corpus(&path).unwrap_err();
        assert!(matches!(err, DocumentError::ReadFile { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.json");
        fs::write(&path, r#"[{"title": "Only", "lines": ["one line"]}]"#).unwrap();

        let docs = load_corpus(&path).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].lines.len(), 1);
    }
}
