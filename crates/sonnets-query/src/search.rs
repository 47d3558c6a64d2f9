//! Single-word search over one document.

use sonnets_document::Document;

use crate::{DocumentSearchResult, LineMatch, find_spans, fold_case};

/// Searches `document` for every case-insensitive occurrence of `word`.
pub fn search_document(document: &Document, word: &str) -> DocumentSearchResult {
    let pattern = fold_case(word);
    let title_spans = find_spans(&fold_case(&document.title), &pattern);

    let line_matches: Vec<LineMatch> = document
        .numbered_lines()
        .filter_map(|(line_no, text)| {
            let spans = find_spans(&fold_case(text), &pattern);
            (!spans.is_empty()).then(|| LineMatch {
                line_no,
                text: text.to_string(),
                spans,
            })
        })
        .collect();

    let line_total: usize = line_matches.iter().map(|lm| lm.spans.len()).sum();
    let matches = title_spans.len() + line_total;

    DocumentSearchResult {
        title: document.title.clone(),
        title_spans,
        line_matches,
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;

    #[test]
    fn finds_title_and_line_matches() {
        let doc = Document::new(
            "Summer Song",
            ["Shall I compare thee to a summer's day?", "no match", "SUMMER"],
        );
        let result = search_document(&doc, "summer");

        assert_eq!(result.title, "Summer Song");
        assert_eq!(result.title_spans, vec![Span::new(0, 6)]);
        assert_eq!(result.line_matches.len(), 2);
        assert_eq!(result.line_matches[0].line_no, 1);
        assert_eq!(result.line_matches[0].spans, vec![Span::new(26, 32)]);
        assert_eq!(result.line_matches[1].line_no, 3);
        assert_eq!(result.line_matches[1].text, "SUMMER");
        assert_eq!(result.matches, 3);
    }

    #[test]
    fn query_word_is_case_folded() {
        let doc = Document::new("t", ["love"]);
        assert_eq!(search_document(&doc, "LoVe").matches, 1);
    }

    #[test]
    fn counts_overlapping_occurrences() {
        let doc = Document::new("aaa", ["aaaa"]);
        let result = search_document(&doc, "aa");
        assert_eq!(result.title_spans.len(), 2);
        assert_eq!(result.line_matches[0].spans.len(), 3);
        assert_eq!(result.matches, 5);
    }

    #[test]
    fn document_without_lines_searches_title() {
        let doc = Document::new("Love Untitled", Vec::<String>::new());
        let result = search_document(&doc, "love");
        assert_eq!(result.matches, 1);
        assert!(result.line_matches.is_empty());
    }

    #[test]
    fn no_match_is_a_normal_result() {
        let doc = Document::new("t", ["a line"]);
        let result = search_document(&doc, "zebra");
        assert_eq!(result.matches, 0);
        assert!(result.title_spans.is_empty());
        assert!(result.line_matches.is_empty());
    }
}
