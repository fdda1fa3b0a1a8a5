//! Pagination link parsing
//!
//! Pure functions for following the tracker's continuation references.
//! Every page of a collection response carries an HTTP `Link` header such as
//!
//! ```text
//! <https://api.github.com/...&page=2>; rel="next", <https://api.github.com/...&page=5>; rel="last"
//! ```
//!
//! and the collection is exhausted once a page arrives without a `next` link.

use std::collections::HashMap;

/// Relation name of the continuation link
pub const NEXT_REL: &str = "next";

/// Parse a `Link` header into a map of relation name to target URL
///
/// Malformed parts are skipped; a part with several space-separated
/// relations (`rel="next last"`) registers the URL under each of them.
pub fn parse_link_header(header: &str) -> HashMap<String, String> {
    let mut links = HashMap::new();

    for part in header.split(',') {
        let mut segments = part.split(';');

        let Some(target) = segments.next().map(str::trim) else {
            continue;
        };
        let Some(url) = target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .filter(|u| !u.is_empty())
        else {
            continue;
        };

        for param in segments {
            let Some((name, value)) = param.split_once('=') else {
                continue;
            };
            if !name.trim().eq_ignore_ascii_case("rel") {
                continue;
            }
            let value = value.trim().trim_matches('"');
            for rel in value.split_whitespace() {
                links.insert(rel.to_ascii_lowercase(), url.to_string());
            }
        }
    }

    links
}

/// Continuation URL of a page, if the collection has more pages
pub fn next_page_url(link_header: Option<&str>) -> Option<String> {
    link_header.and_then(|h| parse_link_header(h).remove(NEXT_REL))
}

/// Number of requests needed to drain `total` records at `page_size` per page
///
/// A non-empty collection needs `⌈total / page_size⌉` requests. An empty
/// collection is still one request returning nothing, which callers handle
/// themselves; this returns 0 for it.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GITHUB_LINK: &str = concat!(
        "<https://api.github.com/repositories/1/issues?per_page=2&page=2>; rel=\"next\", ",
        "<https://api.github.com/repositories/1/issues?per_page=2&page=4>; rel=\"last\""
    );

    #[test]
    fn test_parse_link_header_github_format() {
        let links = parse_link_header(GITHUB_LINK);
        assert_eq!(links.len(), 2);
        assert_eq!(
            links.get("next").map(String::as_str),
            Some("https://api.github.com/repositories/1/issues?per_page=2&page=2")
        );
        assert_eq!(
            links.get("last").map(String::as_str),
            Some("https://api.github.com/repositories/1/issues?per_page=2&page=4")
        );
    }

    #[test]
    fn test_parse_link_header_last_page_has_no_next() {
        let header =
            "<https://x/issues?page=1>; rel=\"first\", <https://x/issues?page=3>; rel=\"prev\"";
        let links = parse_link_header(header);
        assert!(!links.contains_key("next"));
        assert_eq!(links.get("prev").map(String::as_str), Some("https://x/issues?page=3"));
    }

    #[test]
    fn test_parse_link_header_multiple_relations() {
        let links = parse_link_header("<https://x/p2>; rel=\"next last\"");
        assert_eq!(links.get("next").map(String::as_str), Some("https://x/p2"));
        assert_eq!(links.get("last").map(String::as_str), Some("https://x/p2"));
    }

    #[test]
    fn test_parse_link_header_skips_malformed_parts() {
        let header = "garbage, <>; rel=\"prev\", <https://x/p2>; title=\"n\"; REL=next";
        let links = parse_link_header(header);
        assert_eq!(links.len(), 1);
        assert_eq!(links.get("next").map(String::as_str), Some("https://x/p2"));
    }

    #[test]
    fn test_parse_link_header_empty() {
        assert!(parse_link_header("").is_empty());
    }

    #[test]
    fn test_next_page_url() {
        assert_eq!(
            next_page_url(Some(GITHUB_LINK)).as_deref(),
            Some("https://api.github.com/repositories/1/issues?per_page=2&page=2")
        );
        assert_eq!(next_page_url(None), None);
        assert_eq!(next_page_url(Some("<https://x/p1>; rel=\"prev\"")), None);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(7, 1), 7);
        assert_eq!(page_count(5, 0), 0);
    }
}
