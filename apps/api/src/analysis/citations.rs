//! Citation heuristics — pattern-based detection of in-text citations and URLs.
//!
//! These are literal shape checks, not semantic citation parsing. False
//! positives and false negatives are accepted behavior: a page number that
//! looks like a year counts as a year, and a parenthetical that happens to
//! match a citation shape counts as a citation. Each pattern scans the text
//! independently, so a token matching more than one shape is counted once
//! per shape.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// APA in-text shape: one or more comma-separated author-name segments,
/// then a comma and a four-digit year. `(Smith, 2020)`, `(Smith, Jones, 2020)`.
static APA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\([A-Za-z]+(?:\s*,\s*[A-Za-z]+)*\s*,\s*\d{4}\)").expect("valid APA pattern")
});

/// MLA in-text shape: one surname-like segment then a page number. `(Smith 45)`.
static MLA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([A-Za-z]+\s+\d+\)").expect("valid MLA pattern"));

/// URL-like token: scheme through the next whitespace.
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid URL pattern"));

/// Marker for sources tagged with a year in the current decade.
/// A plain substring check — see `has_recent_sources` on [`CitationReport`].
const RECENT_DECADE_MARKER: &str = "202";

/// Heuristic citation statistics for one draft. Derived, immutable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationReport {
    pub apa_count: usize,
    pub mla_count: usize,
    pub url_count: usize,
    /// True when any APA match contains the substring "202". Deliberately
    /// loose: it also fires on e.g. `(Chaucer, 1202)`. Accepted limitation.
    pub has_recent_sources: bool,
    /// Always `apa_count + mla_count`. URLs are reported separately and
    /// never folded into the total.
    pub total_citations: usize,
    /// Citations per 1000 words, whitespace-split, zero for empty text.
    pub density_per_1000_words: f64,
}

/// Scans a draft and produces its [`CitationReport`].
/// Deterministic, no side effects, no external calls.
pub fn analyze_citations(text: &str) -> CitationReport {
    let apa_matches: Vec<&str> = APA_PATTERN.find_iter(text).map(|m| m.as_str()).collect();

    let apa_count = apa_matches.len();
    let mla_count = MLA_PATTERN.find_iter(text).count();
    let url_count = URL_PATTERN.find_iter(text).count();

    let has_recent_sources = apa_matches
        .iter()
        .any(|citation| citation.contains(RECENT_DECADE_MARKER));

    let total_citations = apa_count + mla_count;

    let word_count = text.split_whitespace().count().max(1);
    let density_per_1000_words = total_citations as f64 / word_count as f64 * 1000.0;

    CitationReport {
        apa_count,
        mla_count,
        url_count,
        has_recent_sources,
        total_citations,
        density_per_1000_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_yields_zero_report() {
        let report = analyze_citations("This draft cites nothing and links nowhere.");
        assert_eq!(report, CitationReport::default());
    }

    #[test]
    fn test_empty_text_yields_zero_report_and_zero_density() {
        let report = analyze_citations("");
        assert_eq!(report.total_citations, 0);
        assert_eq!(report.density_per_1000_words, 0.0);
        assert!(!report.has_recent_sources);
    }

    #[test]
    fn test_mixed_citation_styles_counted_separately() {
        let report = analyze_citations("(Smith, 2020) and (Jones 45) see https://example.com");
        assert_eq!(report.apa_count, 1);
        assert_eq!(report.mla_count, 1);
        assert_eq!(report.url_count, 1);
        assert_eq!(report.total_citations, 2);
        assert!(report.has_recent_sources);
    }

    #[test]
    fn test_urls_never_counted_into_total() {
        let report = analyze_citations("See https://a.example and http://b.example for details.");
        assert_eq!(report.url_count, 2);
        assert_eq!(report.total_citations, 0);
    }

    #[test]
    fn test_multi_author_apa_citation_matches() {
        let report = analyze_citations("As shown previously (Smith, Jones, 2020).");
        assert_eq!(report.apa_count, 1);
        assert_eq!(report.mla_count, 0);
    }

    #[test]
    fn test_old_apa_year_is_not_recent() {
        let report = analyze_citations("An early result (Smith, 1999) holds up.");
        assert_eq!(report.apa_count, 1);
        assert!(!report.has_recent_sources);
    }

    #[test]
    fn test_recent_flag_is_a_loose_substring_check() {
        // The decade check matches any "202" in the APA text, medieval years included.
        let report = analyze_citations("A very old source (Chaucer, 1202).");
        assert!(report.has_recent_sources);
    }

    #[test]
    fn test_recent_flag_ignores_mla_page_numbers() {
        // "202" appearing as an MLA page number does not trip the APA-only flag.
        let report = analyze_citations("Quoted at length (Smith 202).");
        assert_eq!(report.mla_count, 1);
        assert!(!report.has_recent_sources);
    }

    #[test]
    fn test_year_without_comma_reads_as_mla_page() {
        // `(Smith 2020)` lacks the comma the APA shape requires, so the page
        // pattern claims it. Accepted heuristic behavior.
        let report = analyze_citations("As argued before (Smith 2020).");
        assert_eq!(report.apa_count, 0);
        assert_eq!(report.mla_count, 1);
        assert!(!report.has_recent_sources);
    }

    #[test]
    fn test_density_scales_per_thousand_words() {
        let text = "(Smith, 2020) and (Jones 45) see https://example.com";
        let report = analyze_citations(text);
        // 2 citations over 7 whitespace-split words
        let expected = 2.0 / 7.0 * 1000.0;
        assert!((report.density_per_1000_words - expected).abs() < 1e-9);
    }

    #[test]
    fn test_analyzer_is_deterministic() {
        let text = "Results (Lee, 2023) echo earlier work (Nguyen 12).";
        assert_eq!(analyze_citations(text), analyze_citations(text));
    }
}
